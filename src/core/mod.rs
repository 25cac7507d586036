//! Core types and constants for the triangulation system

pub mod constants;
pub mod types;

pub use constants::{EARTH_RADIUS_KM, MIN_OBSERVATIONS, MIN_ORIGIN_SEPARATION_RAD};
pub use types::{BearingLine, ConfidenceLabel, FusedEstimate, GeoPoint, Observation};
