//! Radio Direction-Finding Triangulation
//!
//! Estimates the location of a signal emitter from bearing-line
//! observations taken at known geographic positions. The core projects
//! each bearing as a great circle on a spherical Earth, intersects every
//! pair of lines, fuses the intersections into a single estimate, and
//! scores how consistently the observers agree on it.

pub mod api;
pub mod confidence;
pub mod core;
pub mod fusion;
pub mod geodesic;
pub mod utils;
pub mod validation;

// Re-export commonly used types
pub use crate::api::{
    ApiResult, CsvFormatter, JsonFormatter, LineReport, ReportFormatter, TextFormatter,
    TriangulationError, TriangulationReport, TriangulationResult, TriangulationService,
};
pub use crate::confidence::{ConfidenceScorer, ConfidenceThresholds};
pub use crate::core::constants::EARTH_RADIUS_KM;
pub use crate::core::types::{BearingLine, ConfidenceLabel, FusedEstimate, GeoPoint, Observation};
pub use crate::fusion::IntersectionFuser;
pub use crate::geodesic::{destination_point, distance_km, intersect};
pub use crate::utils::config::{ConfigError, TriangulationConfig};
pub use crate::validation::data::{ObservationFault, ObservationValidator};
