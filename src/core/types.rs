//! Core data types for the triangulation system

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::constants::{
    CONFIDENCE_RATIO_HIGH, CONFIDENCE_RATIO_MEDIUM, CONFIDENCE_RATIO_VERY_HIGH,
};

/// A position on the Earth's surface in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in decimal degrees, [-90, 90]
    pub latitude: f64,
    /// Longitude in decimal degrees, [-180, 180]
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.latitude, self.longitude)
    }
}

/// A single direction-finding measurement taken at a known position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Observer position
    pub position: GeoPoint,
    /// Bearing to the emitter, degrees clockwise from true north, [0, 360)
    pub bearing: f64,
    /// Received frequency (informational, carried through to reports)
    pub frequency: f64,
    /// Received signal strength (informational, carried through to reports)
    pub signal: f64,
}

/// The subset of an observation used by the geodesic core
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BearingLine {
    /// Observer position the line is projected from
    pub origin: GeoPoint,
    /// Bearing, degrees clockwise from true north
    pub bearing: f64,
}

impl From<&Observation> for BearingLine {
    fn from(observation: &Observation) -> Self {
        Self {
            origin: observation.position,
            bearing: observation.bearing,
        }
    }
}

/// Best-estimate emitter location fused from all pairwise intersections
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FusedEstimate {
    pub position: GeoPoint,
}

/// Qualitative rating of triangulation self-consistency
///
/// Derived from the dispersion of observer-to-estimate distances. Ordered
/// from best to worst so labels can be compared directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ConfidenceLabel {
    /// Dispersion ratio below 0.1
    VeryHigh,
    /// Dispersion ratio below 0.2
    High,
    /// Dispersion ratio below 0.3
    Medium,
    /// Dispersion ratio of 0.3 or worse
    Low,
}

impl ConfidenceLabel {
    /// Band a spread/average dispersion ratio using the default thresholds
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio < CONFIDENCE_RATIO_VERY_HIGH {
            ConfidenceLabel::VeryHigh
        } else if ratio < CONFIDENCE_RATIO_HIGH {
            ConfidenceLabel::High
        } else if ratio < CONFIDENCE_RATIO_MEDIUM {
            ConfidenceLabel::Medium
        } else {
            ConfidenceLabel::Low
        }
    }

    pub fn is_usable(&self) -> bool {
        matches!(
            self,
            ConfidenceLabel::VeryHigh | ConfidenceLabel::High | ConfidenceLabel::Medium
        )
    }
}

impl fmt::Display for ConfidenceLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ConfidenceLabel::VeryHigh => "very high",
            ConfidenceLabel::High => "high",
            ConfidenceLabel::Medium => "medium",
            ConfidenceLabel::Low => "low",
        };
        write!(f, "{}", label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_banding() {
        assert_eq!(ConfidenceLabel::from_ratio(0.0), ConfidenceLabel::VeryHigh);
        assert_eq!(ConfidenceLabel::from_ratio(0.09), ConfidenceLabel::VeryHigh);
        assert_eq!(ConfidenceLabel::from_ratio(0.1), ConfidenceLabel::High);
        assert_eq!(ConfidenceLabel::from_ratio(0.19), ConfidenceLabel::High);
        assert_eq!(ConfidenceLabel::from_ratio(0.2), ConfidenceLabel::Medium);
        assert_eq!(ConfidenceLabel::from_ratio(0.3), ConfidenceLabel::Low);
        assert_eq!(ConfidenceLabel::from_ratio(5.0), ConfidenceLabel::Low);
    }

    #[test]
    fn test_confidence_ordering() {
        assert!(ConfidenceLabel::VeryHigh < ConfidenceLabel::High);
        assert!(ConfidenceLabel::High < ConfidenceLabel::Medium);
        assert!(ConfidenceLabel::Medium < ConfidenceLabel::Low);
        assert!(ConfidenceLabel::VeryHigh.is_usable());
        assert!(!ConfidenceLabel::Low.is_usable());
    }

    #[test]
    fn test_bearing_line_drops_metadata() {
        let observation = Observation {
            position: GeoPoint::new(47.05, 8.2),
            bearing: 42.5,
            frequency: 145.8,
            signal: -71.0,
        };

        let line = BearingLine::from(&observation);
        assert_eq!(line.origin, observation.position);
        assert_eq!(line.bearing, observation.bearing);
    }
}
