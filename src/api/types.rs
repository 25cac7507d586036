//! Common API types for the triangulation service

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::types::{BearingLine, ConfidenceLabel, FusedEstimate};
use crate::validation::data::ObservationFault;

/// Result type for service operations
pub type ApiResult<T> = Result<T, TriangulationError>;

/// Errors surfaced by the triangulation service
///
/// Every failure is user-correctable and deterministic: the same input
/// always fails the same way, so there is nothing to retry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TriangulationError {
    /// Fewer than two observations supplied
    InsufficientObservations { available: usize, required: usize },
    /// A record's positional fields are outside their declared domain;
    /// `index` is the 0-based position of the first offender
    InvalidObservation {
        index: usize,
        reason: ObservationFault,
    },
    /// A rendered report could not be serialized; never raised by
    /// `triangulate` itself, only by the report conveniences
    ReportFailure { reason: String },
}

impl TriangulationError {
    pub(crate) fn invalid_observation(offender: (usize, ObservationFault)) -> Self {
        TriangulationError::InvalidObservation {
            index: offender.0,
            reason: offender.1,
        }
    }
}

impl fmt::Display for TriangulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TriangulationError::InsufficientObservations { available, required } => {
                write!(
                    f,
                    "insufficient observations: {} available, {} required",
                    available, required
                )
            }
            TriangulationError::InvalidObservation { index, reason } => {
                write!(f, "invalid observation at index {}: {}", index, reason)
            }
            TriangulationError::ReportFailure { reason } => {
                write!(f, "report rendering failed: {}", reason)
            }
        }
    }
}

impl std::error::Error for TriangulationError {}

/// Outcome of a successful triangulation call
///
/// `estimate` and `confidence` are present together or absent together:
/// well-formed but geometrically non-convergent input (parallel or
/// diverging bearings) is a successful call with no answer, not an error.
/// `lines` always carries the bearing lines actually used, in input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriangulationResult {
    pub estimate: Option<FusedEstimate>,
    pub confidence: Option<ConfidenceLabel>,
    pub lines: Vec<BearingLine>,
}

impl TriangulationResult {
    /// Whether the geometry converged on an answer
    pub fn has_estimate(&self) -> bool {
        self.estimate.is_some()
    }
}
