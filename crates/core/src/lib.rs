//! Minaret domain core: shared types, error taxonomy, validators, and the
//! numeral transcoder. This crate performs no I/O.

pub mod error;
pub mod mosque;
pub mod notification;
pub mod numerals;
pub mod types;
