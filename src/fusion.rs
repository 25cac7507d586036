//! Fusion of pairwise bearing-line intersections into one estimate

use nalgebra::Vector2;

use crate::core::types::{BearingLine, FusedEstimate, GeoPoint};
use crate::geodesic;

/// Fuses all pairwise great-circle intersections into a single position
///
/// Every unordered pair of lines is intersected; candidates that exist are
/// averaged component-wise. The average is a plain arithmetic mean of
/// latitude and longitude, not a spherical centroid — adequate for the
/// tens-of-kilometre line lengths this system works with, and kept so the
/// output matches the established numbers. Input is never mutated.
#[derive(Debug, Clone, Default)]
pub struct IntersectionFuser;

impl IntersectionFuser {
    pub fn new() -> Self {
        Self
    }

    /// Fuse `lines` into a best-estimate position
    ///
    /// Callers supply at least two lines; the orchestrator enforces that
    /// before reaching this point. Returns `None` when no pair of lines
    /// produced an intersection — a well-formed "no answer", not an error.
    pub fn fuse(&self, lines: &[BearingLine]) -> Option<FusedEstimate> {
        let candidates = self.pairwise_intersections(lines);
        if candidates.is_empty() {
            return None;
        }

        let centroid = candidates
            .iter()
            .fold(Vector2::zeros(), |acc, c| acc + c)
            / candidates.len() as f64;

        Some(FusedEstimate {
            position: GeoPoint::new(centroid.x, centroid.y),
        })
    }

    /// All intersections over unordered pairs (i, j), i < j
    fn pairwise_intersections(&self, lines: &[BearingLine]) -> Vec<Vector2<f64>> {
        let mut candidates = Vec::new();
        for i in 0..lines.len() {
            for j in (i + 1)..lines.len() {
                if let Some(point) = geodesic::intersect(&lines[i], &lines[j]) {
                    candidates.push(Vector2::new(point.latitude, point.longitude));
                }
            }
        }
        candidates
    }
}
