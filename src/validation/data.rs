//! Domain validation for observation records
//!
//! The ingestion layer parses raw text into typed floats before records get
//! here; this validator defends the math core against out-of-domain values
//! that would otherwise surface as NaN positions.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::types::Observation;

/// Reason a single observation record was rejected
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ObservationFault {
    NonFiniteLatitude,
    NonFiniteLongitude,
    NonFiniteBearing,
    LatitudeOutOfRange { value: f64 },
    LongitudeOutOfRange { value: f64 },
    BearingOutOfRange { value: f64 },
}

impl fmt::Display for ObservationFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ObservationFault::NonFiniteLatitude => write!(f, "latitude is not finite"),
            ObservationFault::NonFiniteLongitude => write!(f, "longitude is not finite"),
            ObservationFault::NonFiniteBearing => write!(f, "bearing is not finite"),
            ObservationFault::LatitudeOutOfRange { value } => {
                write!(f, "latitude {} outside [-90, 90]", value)
            }
            ObservationFault::LongitudeOutOfRange { value } => {
                write!(f, "longitude {} outside [-180, 180]", value)
            }
            ObservationFault::BearingOutOfRange { value } => {
                write!(f, "bearing {} outside [0, 360)", value)
            }
        }
    }
}

impl std::error::Error for ObservationFault {}

/// Validator for batches of observation records
///
/// Checks the declared domain of every positional field; frequency and
/// signal strength are informational and pass through unchecked. The first
/// offending record stops the scan, so the reported index is always the
/// lowest one.
#[derive(Debug, Clone, Default)]
pub struct ObservationValidator;

impl ObservationValidator {
    pub fn new() -> Self {
        Self
    }

    /// Validate a batch, reporting the first offender with its 0-based index
    pub fn validate(&self, observations: &[Observation]) -> Result<(), (usize, ObservationFault)> {
        for (index, observation) in observations.iter().enumerate() {
            if let Err(fault) = self.validate_record(observation) {
                return Err((index, fault));
            }
        }
        Ok(())
    }

    fn validate_record(&self, observation: &Observation) -> Result<(), ObservationFault> {
        let latitude = observation.position.latitude;
        let longitude = observation.position.longitude;
        let bearing = observation.bearing;

        if !latitude.is_finite() {
            return Err(ObservationFault::NonFiniteLatitude);
        }
        if !longitude.is_finite() {
            return Err(ObservationFault::NonFiniteLongitude);
        }
        if !bearing.is_finite() {
            return Err(ObservationFault::NonFiniteBearing);
        }
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(ObservationFault::LatitudeOutOfRange { value: latitude });
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(ObservationFault::LongitudeOutOfRange { value: longitude });
        }
        if !(0.0..360.0).contains(&bearing) {
            return Err(ObservationFault::BearingOutOfRange { value: bearing });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::GeoPoint;

    fn observation(lat: f64, lon: f64, bearing: f64) -> Observation {
        Observation {
            position: GeoPoint::new(lat, lon),
            bearing,
            frequency: 145.8,
            signal: -70.0,
        }
    }

    #[test]
    fn test_valid_batch_passes() {
        let validator = ObservationValidator::new();
        let batch = vec![
            observation(47.05, 8.2, 42.0),
            observation(-90.0, -180.0, 0.0),
            observation(90.0, 180.0, 359.999),
        ];
        assert!(validator.validate(&batch).is_ok());
    }

    #[test]
    fn test_first_offender_reported() {
        let validator = ObservationValidator::new();
        let batch = vec![
            observation(47.05, 8.2, 42.0),
            observation(91.0, 8.2, 42.0),
            observation(47.05, 200.0, 42.0),
        ];

        let (index, fault) = validator.validate(&batch).unwrap_err();
        assert_eq!(index, 1);
        assert_eq!(fault, ObservationFault::LatitudeOutOfRange { value: 91.0 });
    }

    #[test]
    fn test_bearing_domain_is_half_open() {
        let validator = ObservationValidator::new();
        assert!(validator.validate(&[observation(0.0, 0.0, 0.0)]).is_ok());
        assert_eq!(
            validator.validate(&[observation(0.0, 0.0, 360.0)]),
            Err((0, ObservationFault::BearingOutOfRange { value: 360.0 }))
        );
        assert_eq!(
            validator.validate(&[observation(0.0, 0.0, -0.1)]),
            Err((0, ObservationFault::BearingOutOfRange { value: -0.1 }))
        );
    }

    #[test]
    fn test_non_finite_fields_rejected() {
        let validator = ObservationValidator::new();
        assert_eq!(
            validator.validate(&[observation(f64::NAN, 0.0, 0.0)]),
            Err((0, ObservationFault::NonFiniteLatitude))
        );
        assert_eq!(
            validator.validate(&[observation(0.0, f64::INFINITY, 0.0)]),
            Err((0, ObservationFault::NonFiniteLongitude))
        );
        assert_eq!(
            validator.validate(&[observation(0.0, 0.0, f64::NAN)]),
            Err((0, ObservationFault::NonFiniteBearing))
        );
    }

    #[test]
    fn test_metadata_not_validated() {
        // Frequency and signal are informational only
        let validator = ObservationValidator::new();
        let mut record = observation(47.0, 8.0, 90.0);
        record.frequency = f64::NAN;
        record.signal = f64::INFINITY;
        assert!(validator.validate(&[record]).is_ok());
    }
}
