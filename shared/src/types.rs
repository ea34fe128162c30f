//! Common types used across the service

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// GPS coordinates in decimal degrees
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    /// Null Island, used when a location cannot be resolved
    pub const ORIGIN: Coordinates = Coordinates { lat: 0.0, lng: 0.0 };

    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl Default for Coordinates {
    fn default() -> Self {
        Self::ORIGIN
    }
}

/// A numeric reading that an upstream service may not have reported.
///
/// Serialized as a bare JSON number, or as the string `"Unknown"`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Measurement {
    Value(f64),
    Unknown,
}

impl Measurement {
    pub const UNKNOWN_LABEL: &'static str = "Unknown";
}

impl From<Option<f64>> for Measurement {
    fn from(value: Option<f64>) -> Self {
        value.map(Measurement::Value).unwrap_or(Measurement::Unknown)
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Measurement::Value(v) => write!(f, "{}", v),
            Measurement::Unknown => f.write_str(Self::UNKNOWN_LABEL),
        }
    }
}

impl Serialize for Measurement {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Measurement::Value(v) => serializer.serialize_f64(*v),
            Measurement::Unknown => serializer.serialize_str(Self::UNKNOWN_LABEL),
        }
    }
}

impl<'de> Deserialize<'de> for Measurement {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(f64),
            Text(String),
        }

        Ok(match Option::<Raw>::deserialize(deserializer)? {
            Some(Raw::Number(v)) => Measurement::Value(v),
            Some(Raw::Text(_)) | None => Measurement::Unknown,
        })
    }
}
