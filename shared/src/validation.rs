//! Validation utilities for the Farm Advisor service

use crate::types::Coordinates;

// ============================================================================
// Location Validations
// ============================================================================

/// Validate that coordinates fall within WGS84 bounds
pub fn validate_coordinates(coords: &Coordinates) -> Result<(), &'static str> {
    if !coords.lat.is_finite() || !coords.lng.is_finite() {
        return Err("Coordinates must be finite numbers");
    }
    if !(-90.0..=90.0).contains(&coords.lat) {
        return Err("Latitude must be between -90 and 90");
    }
    if !(-180.0..=180.0).contains(&coords.lng) {
        return Err("Longitude must be between -180 and 180");
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
