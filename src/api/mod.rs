//! Service entry point for the triangulation core
//!
//! [`TriangulationService`] is the one call surface the surrounding
//! ingestion/presentation layers use: it validates observation records,
//! fuses the pairwise geodesic intersections, scores the result, and hands
//! back a structured outcome or a structured failure.

pub mod formatting;
pub mod types;

use crate::confidence::ConfidenceScorer;
use crate::core::constants::MIN_OBSERVATIONS;
use crate::core::types::{BearingLine, Observation};
use crate::fusion::IntersectionFuser;
use crate::utils::config::TriangulationConfig;
use crate::validation::data::ObservationValidator;

pub use formatting::{
    CsvFormatter, JsonFormatter, LineReport, ReportFormatter, TextFormatter, TriangulationReport,
};
pub use types::{ApiResult, TriangulationError, TriangulationResult};

/// Direction-finding triangulation service
///
/// Stateless between calls: every invocation reads only its arguments, so
/// one instance can serve any number of callers without locking.
pub struct TriangulationService {
    validator: ObservationValidator,
    fuser: IntersectionFuser,
    scorer: ConfidenceScorer,
    config: TriangulationConfig,
}

impl TriangulationService {
    /// Create a service with default configuration
    pub fn new() -> Self {
        Self::with_config(TriangulationConfig::default())
    }

    /// Create a service with custom configuration
    pub fn with_config(config: TriangulationConfig) -> Self {
        Self {
            validator: ObservationValidator::new(),
            fuser: IntersectionFuser::new(),
            scorer: ConfidenceScorer::with_thresholds(config.confidence_thresholds),
            config,
        }
    }

    pub fn config(&self) -> &TriangulationConfig {
        &self.config
    }

    /// Estimate the emitter location from a batch of observations
    ///
    /// Validation is fail-fast and happens before any geometry: too few
    /// records or the first out-of-domain record produce an error. With
    /// well-formed input the call always succeeds; non-convergent geometry
    /// comes back as a result whose `estimate`/`confidence` are absent,
    /// with `lines` still populated.
    pub fn triangulate(&self, observations: &[Observation]) -> ApiResult<TriangulationResult> {
        if observations.len() < MIN_OBSERVATIONS {
            return Err(TriangulationError::InsufficientObservations {
                available: observations.len(),
                required: MIN_OBSERVATIONS,
            });
        }

        self.validator
            .validate(observations)
            .map_err(TriangulationError::invalid_observation)?;

        let lines: Vec<BearingLine> = observations.iter().map(BearingLine::from).collect();

        match self.fuser.fuse(&lines) {
            Some(estimate) => {
                let confidence = self.scorer.score(&lines, estimate.position);
                Ok(TriangulationResult {
                    estimate: Some(estimate),
                    confidence: Some(confidence),
                    lines,
                })
            }
            None => Ok(TriangulationResult {
                estimate: None,
                confidence: None,
                lines,
            }),
        }
    }

    /// Triangulate and render the outcome as human-readable text
    pub fn report_text(&self, observations: &[Observation], compact: bool) -> ApiResult<String> {
        let result = self.triangulate(observations)?;
        let report = self.build_report(observations, &result);
        Ok(TextFormatter { compact }.format_text(&report))
    }

    /// Triangulate and render the outcome as JSON
    pub fn report_json(&self, observations: &[Observation], pretty: bool) -> ApiResult<String> {
        let result = self.triangulate(observations)?;
        let report = self.build_report(observations, &result);
        let formatter = if pretty {
            JsonFormatter::pretty()
        } else {
            JsonFormatter::new()
        };
        formatter
            .format_json(&report)
            .map_err(|e| TriangulationError::ReportFailure {
                reason: e.to_string(),
            })
    }

    /// Triangulate and render the outcome as CSV
    pub fn report_csv(&self, observations: &[Observation], include_header: bool) -> ApiResult<String> {
        let result = self.triangulate(observations)?;
        let report = self.build_report(observations, &result);
        Ok(CsvFormatter { include_header }.format_csv(&report))
    }

    fn build_report(
        &self,
        observations: &[Observation],
        result: &TriangulationResult,
    ) -> TriangulationReport {
        ReportFormatter::new()
            .with_projection_km(self.config.line_projection_km)
            .format(observations, result)
    }
}

impl Default for TriangulationService {
    fn default() -> Self {
        Self::new()
    }
}
