//! Bidirectional transcoding between ASCII digits and Arabic-Indic glyphs.
//!
//! The mapping is a closed bijection over the ten decimal digits. Characters
//! outside the digit set pass through unchanged in both directions, so both
//! functions are total and never fail.

use std::fmt::Display;

/// The ten (ASCII digit, Arabic-Indic glyph) pairs, in digit order.
const DIGIT_GLYPHS: [(char, char); 10] = [
    ('0', '٠'),
    ('1', '١'),
    ('2', '٢'),
    ('3', '٣'),
    ('4', '٤'),
    ('5', '٥'),
    ('6', '٦'),
    ('7', '٧'),
    ('8', '٨'),
    ('9', '٩'),
];

/// Render a value and replace every ASCII digit with its Arabic-Indic glyph.
///
/// Accepts anything with a `Display` rendering (numbers, strings). Sign,
/// decimal point, whitespace, and all other characters are copied unchanged.
pub fn to_arabic_numerals<T: Display>(value: T) -> String {
    value
        .to_string()
        .chars()
        .map(|c| match c.to_digit(10) {
            Some(d) => DIGIT_GLYPHS[d as usize].1,
            None => c,
        })
        .collect()
}

/// Replace every Arabic-Indic digit glyph with its ASCII counterpart.
///
/// All other characters pass through unchanged.
pub fn from_arabic_numerals(value: &str) -> String {
    value
        .chars()
        .map(|c| match DIGIT_GLYPHS.iter().find(|(_, glyph)| *glyph == c) {
            Some((ascii, _)) => *ascii,
            None => c,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_to_arabic() {
        assert_eq!(to_arabic_numerals(12345), "١٢٣٤٥");
        assert_eq!(to_arabic_numerals(0), "٠");
    }

    #[test]
    fn test_arabic_to_ascii() {
        assert_eq!(from_arabic_numerals("١٢٣٤٥"), "12345");
        assert_eq!(from_arabic_numerals("٠"), "0");
    }

    #[test]
    fn test_non_digits_pass_through() {
        assert_eq!(to_arabic_numerals("A-1"), "A-١");
        assert_eq!(to_arabic_numerals(-3.5), "-٣.٥");
        assert_eq!(from_arabic_numerals("صلاة ٥:٣٠"), "صلاة 5:30");
    }

    #[test]
    fn test_round_trip_digit_strings() {
        for s in ["0", "42", "0123456789", "9999999999"] {
            assert_eq!(from_arabic_numerals(&to_arabic_numerals(s)), s);
        }
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(to_arabic_numerals(""), "");
        assert_eq!(from_arabic_numerals(""), "");
    }

    #[test]
    fn test_text_without_digits_unchanged() {
        assert_eq!(to_arabic_numerals("no digits here"), "no digits here");
        assert_eq!(from_arabic_numerals("no digits here"), "no digits here");
    }
}
