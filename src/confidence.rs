//! Confidence scoring from observer-to-estimate dispersion

use crate::core::constants::{
    CONFIDENCE_RATIO_HIGH, CONFIDENCE_RATIO_MEDIUM, CONFIDENCE_RATIO_VERY_HIGH,
};
use crate::core::types::{BearingLine, ConfidenceLabel, GeoPoint};
use crate::geodesic;

/// Dispersion thresholds that band a fused estimate into a confidence label
///
/// Each field is an upper bound on spread/average of observer distances.
/// The defaults are heuristic constants inherited from the original system
/// and are kept as configuration rather than re-derived.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ConfidenceThresholds {
    pub very_high: f64,
    pub high: f64,
    pub medium: f64,
}

impl Default for ConfidenceThresholds {
    fn default() -> Self {
        Self {
            very_high: CONFIDENCE_RATIO_VERY_HIGH,
            high: CONFIDENCE_RATIO_HIGH,
            medium: CONFIDENCE_RATIO_MEDIUM,
        }
    }
}

/// Scores the internal consistency of a fused estimate
///
/// For every line, the great-circle distance from its origin to the
/// estimate is computed; the label comes from how wide those distances
/// spread relative to their mean. Pure and side-effect free: identical
/// inputs always produce the same single label.
#[derive(Debug, Clone, Default)]
pub struct ConfidenceScorer {
    thresholds: ConfidenceThresholds,
}

impl ConfidenceScorer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_thresholds(thresholds: ConfidenceThresholds) -> Self {
        Self { thresholds }
    }

    /// Band the dispersion of origin-to-estimate distances into a label
    pub fn score(&self, lines: &[BearingLine], estimate: GeoPoint) -> ConfidenceLabel {
        let distances: Vec<f64> = lines
            .iter()
            .map(|line| geodesic::distance_km(line.origin, estimate))
            .collect();

        let avg = distances.iter().sum::<f64>() / distances.len() as f64;
        let max = distances.iter().cloned().fold(f64::MIN, f64::max);
        let min = distances.iter().cloned().fold(f64::MAX, f64::min);
        let spread = max - min;

        // All observers sitting on the estimate leaves the ratio undefined;
        // a zero spread is perfect agreement, anything else cannot be rated
        if avg == 0.0 {
            return if spread == 0.0 {
                ConfidenceLabel::VeryHigh
            } else {
                ConfidenceLabel::Low
            };
        }

        let ratio = spread / avg;
        if ratio < self.thresholds.very_high {
            ConfidenceLabel::VeryHigh
        } else if ratio < self.thresholds.high {
            ConfidenceLabel::High
        } else if ratio < self.thresholds.medium {
            ConfidenceLabel::Medium
        } else {
            ConfidenceLabel::Low
        }
    }
}
