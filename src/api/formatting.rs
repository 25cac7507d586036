//! Report formatting for triangulation results
//!
//! Builds a serializable report from a triangulation outcome and renders it
//! as human-readable text, JSON or CSV. The report carries everything the
//! presentation layer needs — estimate coordinates, confidence, and one
//! renderable segment per bearing line — without any rendering concerns.

use serde::{Deserialize, Serialize};

use crate::api::types::TriangulationResult;
use crate::core::constants::DEFAULT_LINE_PROJECTION_KM;
use crate::core::types::{ConfidenceLabel, GeoPoint, Observation};
use crate::geodesic;

/// Serializable summary of a triangulation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriangulationReport {
    /// Estimated emitter position, absent when the geometry did not converge
    pub estimate: Option<GeoPoint>,
    /// Confidence label, present exactly when `estimate` is
    pub confidence: Option<ConfidenceLabel>,
    /// One entry per observation, in input order
    pub lines: Vec<LineReport>,
}

/// Renderable summary of a single bearing line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineReport {
    /// 1-based display index, matching how operators label their rows
    pub index: usize,
    pub origin: GeoPoint,
    pub bearing: f64,
    /// Endpoint of the projected line segment
    pub endpoint: GeoPoint,
    pub frequency: f64,
    pub signal: f64,
}

/// Builds a [`TriangulationReport`] from a result and its observations
pub struct ReportFormatter {
    /// Distance each bearing line is projected to (km)
    pub projection_km: f64,
}

impl Default for ReportFormatter {
    fn default() -> Self {
        Self {
            projection_km: DEFAULT_LINE_PROJECTION_KM,
        }
    }
}

impl ReportFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_projection_km(mut self, projection_km: f64) -> Self {
        self.projection_km = projection_km;
        self
    }

    /// Assemble the report
    ///
    /// `observations` must be the same records the result was computed
    /// from; the informational frequency/signal fields come from them,
    /// since the core drops both before doing any geometry.
    pub fn format(
        &self,
        observations: &[Observation],
        result: &TriangulationResult,
    ) -> TriangulationReport {
        let lines = observations
            .iter()
            .enumerate()
            .map(|(i, observation)| LineReport {
                index: i + 1,
                origin: observation.position,
                bearing: observation.bearing,
                endpoint: geodesic::destination_point(
                    observation.position,
                    observation.bearing,
                    self.projection_km,
                ),
                frequency: observation.frequency,
                signal: observation.signal,
            })
            .collect();

        TriangulationReport {
            estimate: result.estimate.map(|e| e.position),
            confidence: result.confidence,
            lines,
        }
    }
}

/// Human-readable text formatter
pub struct TextFormatter {
    /// Single-line output instead of the full block
    pub compact: bool,
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self { compact: false }
    }
}

impl TextFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the report as text
    pub fn format_text(&self, report: &TriangulationReport) -> String {
        let mut output = String::new();

        match (&report.estimate, &report.confidence) {
            (Some(position), Some(confidence)) => {
                if self.compact {
                    output.push_str(&format!(
                        "Coordinates: {:.6}, {:.6} ({} confidence)",
                        position.latitude, position.longitude, confidence
                    ));
                } else {
                    output.push_str(&format!(
                        "Coordinates: {:.6}, {:.6}\n",
                        position.latitude, position.longitude
                    ));
                    output.push_str(&format!("Confidence: {}\n", confidence));
                }
            }
            _ => {
                output.push_str("Coordinates: N/A");
                if !self.compact {
                    output.push('\n');
                }
            }
        }

        if !self.compact {
            output.push_str("Bearing lines:\n");
            for line in &report.lines {
                output.push_str(&format!(
                    "  {}. {} @ {:.1}° -> {} ({:.3} MHz, {:.1} dB)\n",
                    line.index,
                    line.origin,
                    line.bearing,
                    line.endpoint,
                    line.frequency,
                    line.signal
                ));
            }
        }

        output
    }
}

/// JSON formatter for structured output
pub struct JsonFormatter {
    pub pretty: bool,
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self { pretty: false }
    }
}

impl JsonFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pretty() -> Self {
        Self { pretty: true }
    }

    pub fn format_json(&self, report: &TriangulationReport) -> Result<String, serde_json::Error> {
        if self.pretty {
            serde_json::to_string_pretty(report)
        } else {
            serde_json::to_string(report)
        }
    }
}

/// CSV formatter, one row per bearing line
pub struct CsvFormatter {
    pub include_header: bool,
}

impl Default for CsvFormatter {
    fn default() -> Self {
        Self {
            include_header: true,
        }
    }
}

impl CsvFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header(&self) -> String {
        "index,origin_lat,origin_lon,bearing_deg,endpoint_lat,endpoint_lon,frequency,signal,\
         estimate_lat,estimate_lon,confidence"
            .to_string()
    }

    /// Render the report as CSV
    ///
    /// The estimate columns repeat on every row so each line is
    /// self-contained; they are empty when there is no estimate.
    pub fn format_csv(&self, report: &TriangulationReport) -> String {
        let mut output = String::new();
        if self.include_header {
            output.push_str(&self.header());
            output.push('\n');
        }

        let (est_lat, est_lon) = match &report.estimate {
            Some(p) => (format!("{:.6}", p.latitude), format!("{:.6}", p.longitude)),
            None => (String::new(), String::new()),
        };
        let confidence = report
            .confidence
            .map(|c| c.to_string())
            .unwrap_or_default();

        for line in &report.lines {
            output.push_str(&format!(
                "{},{:.6},{:.6},{:.2},{:.6},{:.6},{},{},{},{},{}\n",
                line.index,
                line.origin.latitude,
                line.origin.longitude,
                line.bearing,
                line.endpoint.latitude,
                line.endpoint.longitude,
                line.frequency,
                line.signal,
                est_lat,
                est_lon,
                confidence
            ));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::TriangulationResult;
    use crate::core::types::{BearingLine, FusedEstimate};

    fn sample_observations() -> Vec<Observation> {
        vec![
            Observation {
                position: GeoPoint::new(47.05, 8.2),
                bearing: 42.0,
                frequency: 145.8,
                signal: -71.0,
            },
            Observation {
                position: GeoPoint::new(47.05, 8.6),
                bearing: 318.0,
                frequency: 145.8,
                signal: -68.5,
            },
        ]
    }

    fn sample_result(with_estimate: bool) -> TriangulationResult {
        let observations = sample_observations();
        TriangulationResult {
            estimate: with_estimate.then(|| FusedEstimate {
                position: GeoPoint::new(47.2, 8.4),
            }),
            confidence: with_estimate.then_some(ConfidenceLabel::VeryHigh),
            lines: observations.iter().map(BearingLine::from).collect(),
        }
    }

    #[test]
    fn test_report_projects_endpoints() {
        let observations = sample_observations();
        let report = ReportFormatter::new().format(&observations, &sample_result(true));

        assert_eq!(report.lines.len(), 2);
        assert_eq!(report.lines[0].index, 1);
        assert_eq!(report.lines[1].index, 2);
        for (line, observation) in report.lines.iter().zip(&observations) {
            let d = geodesic::distance_km(observation.position, line.endpoint);
            assert!((d - 100.0).abs() < 0.1);
        }
    }

    #[test]
    fn test_custom_projection_distance() {
        let observations = sample_observations();
        let report = ReportFormatter::new()
            .with_projection_km(25.0)
            .format(&observations, &sample_result(true));

        let d = geodesic::distance_km(observations[0].position, report.lines[0].endpoint);
        assert!((d - 25.0).abs() < 0.05);
    }

    #[test]
    fn test_text_output_with_estimate() {
        let report = ReportFormatter::new().format(&sample_observations(), &sample_result(true));
        let text = TextFormatter::new().format_text(&report);

        assert!(text.contains("Coordinates: 47.200000, 8.400000"));
        assert!(text.contains("Confidence: very high"));
        assert!(text.contains("1. (47.050000, 8.200000)"));
    }

    #[test]
    fn test_text_output_without_estimate() {
        let report = ReportFormatter::new().format(&sample_observations(), &sample_result(false));
        let text = TextFormatter::new().format_text(&report);
        assert!(text.contains("Coordinates: N/A"));
    }

    #[test]
    fn test_compact_text_is_single_line() {
        let report = ReportFormatter::new().format(&sample_observations(), &sample_result(true));
        let text = TextFormatter { compact: true }.format_text(&report);
        assert!(!text.contains('\n'));
        assert!(text.contains("47.200000"));
    }

    #[test]
    fn test_json_round_trip() {
        let report = ReportFormatter::new().format(&sample_observations(), &sample_result(true));
        let json = JsonFormatter::new().format_json(&report).unwrap();
        let parsed: TriangulationReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, report);
    }

    #[test]
    fn test_csv_shape() {
        let report = ReportFormatter::new().format(&sample_observations(), &sample_result(true));
        let csv = CsvFormatter::new().format_csv(&report);

        let rows: Vec<&str> = csv.trim_end().lines().collect();
        assert_eq!(rows.len(), 3); // header + 2 lines
        assert!(rows[0].starts_with("index,origin_lat"));
        assert!(rows[1].contains("47.200000"));

        let headless = CsvFormatter {
            include_header: false,
        }
        .format_csv(&report);
        assert_eq!(headless.trim_end().lines().count(), 2);
    }

    #[test]
    fn test_csv_empty_estimate_columns() {
        let report = ReportFormatter::new().format(&sample_observations(), &sample_result(false));
        let csv = CsvFormatter {
            include_header: false,
        }
        .format_csv(&report);
        assert!(csv.lines().all(|row| row.ends_with(",,,")));
    }
}
