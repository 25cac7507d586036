//! Physical constants and system parameters

/// Mean Earth radius for the spherical model (km)
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Angular separation below which two observer origins are treated as
/// coincident (radians)
pub const MIN_ORIGIN_SEPARATION_RAD: f64 = 1e-10;

/// Minimum number of observations required for triangulation
pub const MIN_OBSERVATIONS: usize = 2;

/// Dispersion ratio (spread / average) below which confidence is VeryHigh
pub const CONFIDENCE_RATIO_VERY_HIGH: f64 = 0.1;

/// Dispersion ratio below which confidence is High
pub const CONFIDENCE_RATIO_HIGH: f64 = 0.2;

/// Dispersion ratio below which confidence is Medium
pub const CONFIDENCE_RATIO_MEDIUM: f64 = 0.3;

/// Default distance bearing lines are projected to for reporting (km)
pub const DEFAULT_LINE_PROJECTION_KM: f64 = 100.0;
