//! Mosque domain validation: GeoJSON point location and record field checks.
//!
//! Validators run before any row is constructed (no reliance on storage-layer
//! hooks). Geospatial and full-text indexing themselves are a storage
//! capability declared in the `minaret-db` migrations, not logic here.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// The only accepted GeoJSON geometry type for a mosque location.
pub const LOCATION_TYPE_POINT: &str = "Point";

/// Maximum length for a mosque name.
pub const MAX_NAME_LEN: usize = 200;

/// Maximum length for a mosque address.
pub const MAX_ADDRESS_LEN: usize = 500;

/// A GeoJSON point as submitted by clients: `{ "type": "Point",
/// "coordinates": [longitude, latitude] }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeoPoint {
    #[serde(rename = "type")]
    pub kind: String,
    pub coordinates: Vec<f64>,
}

impl GeoPoint {
    /// Validate the geometry type tag, coordinate arity, and coordinate ranges.
    ///
    /// The coordinates array must be exactly `[longitude, latitude]` with
    /// longitude in [-180, 180] and latitude in [-90, 90].
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.kind != LOCATION_TYPE_POINT {
            return Err(CoreError::Validation(format!(
                "Location type must be '{LOCATION_TYPE_POINT}', got '{}'",
                self.kind
            )));
        }
        if self.coordinates.len() != 2 {
            return Err(CoreError::Validation(format!(
                "Coordinates must contain exactly 2 values [longitude, latitude], got {}",
                self.coordinates.len()
            )));
        }
        let (lon, lat) = (self.coordinates[0], self.coordinates[1]);
        if !lon.is_finite() || !(-180.0..=180.0).contains(&lon) {
            return Err(CoreError::Validation(format!(
                "Longitude must be between -180 and 180, got {lon}"
            )));
        }
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(CoreError::Validation(format!(
                "Latitude must be between -90 and 90, got {lat}"
            )));
        }
        Ok(())
    }

    /// Longitude (first coordinate). Only meaningful after [`validate`](Self::validate).
    pub fn longitude(&self) -> f64 {
        self.coordinates[0]
    }

    /// Latitude (second coordinate). Only meaningful after [`validate`](Self::validate).
    pub fn latitude(&self) -> f64 {
        self.coordinates[1]
    }
}

/// Validate that a mosque name is non-empty after trimming and within limits.
pub fn validate_name(name: &str) -> Result<(), CoreError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(
            "Mosque name must not be empty".to_string(),
        ));
    }
    if trimmed.len() > MAX_NAME_LEN {
        return Err(CoreError::Validation(format!(
            "Mosque name exceeds maximum length of {MAX_NAME_LEN} characters"
        )));
    }
    Ok(())
}

/// Validate that a mosque address is non-empty after trimming and within limits.
pub fn validate_address(address: &str) -> Result<(), CoreError> {
    let trimmed = address.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(
            "Mosque address must not be empty".to_string(),
        ));
    }
    if trimmed.len() > MAX_ADDRESS_LEN {
        return Err(CoreError::Validation(format!(
            "Mosque address exceeds maximum length of {MAX_ADDRESS_LEN} characters"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(kind: &str, coordinates: Vec<f64>) -> GeoPoint {
        GeoPoint {
            kind: kind.to_string(),
            coordinates,
        }
    }

    #[test]
    fn test_valid_point() {
        let p = point("Point", vec![46.6753, 24.7136]);
        assert!(p.validate().is_ok());
        assert_eq!(p.longitude(), 46.6753);
        assert_eq!(p.latitude(), 24.7136);
    }

    #[test]
    fn test_wrong_type_tag_rejected() {
        let p = point("Polygon", vec![0.0, 0.0]);
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_coordinate_arity_enforced() {
        assert!(point("Point", vec![1.0]).validate().is_err());
        assert!(point("Point", vec![1.0, 2.0, 3.0]).validate().is_err());
        assert!(point("Point", vec![]).validate().is_err());
        assert!(point("Point", vec![1.0, 2.0]).validate().is_ok());
    }

    #[test]
    fn test_coordinate_ranges() {
        assert!(point("Point", vec![181.0, 0.0]).validate().is_err());
        assert!(point("Point", vec![0.0, -91.0]).validate().is_err());
        assert!(point("Point", vec![f64::NAN, 0.0]).validate().is_err());
        assert!(point("Point", vec![-180.0, 90.0]).validate().is_ok());
    }

    #[test]
    fn test_name_and_address_trimming() {
        assert!(validate_name("  ").is_err());
        assert!(validate_name("Al-Noor Mosque").is_ok());
        assert!(validate_address("\t\n").is_err());
        assert!(validate_address("12 King Fahd Rd, Riyadh").is_ok());
    }

    #[test]
    fn test_name_length_limit() {
        let long = "m".repeat(MAX_NAME_LEN + 1);
        assert!(validate_name(&long).is_err());
    }
}
