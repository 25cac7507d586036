//! Direct geodesic problems: destination point and great-circle distance

use crate::core::constants::EARTH_RADIUS_KM;
use crate::core::types::GeoPoint;

/// Destination point given a start, an initial bearing and a distance
///
/// Standard spherical forward-azimuth solution. The longitude term is
/// atan2-based, so poles and the antimeridian need no special casing;
/// results just past the +/-180 degree seam are left unwrapped, matching
/// how callers treat coordinates as continuous.
pub fn destination_point(origin: GeoPoint, bearing_deg: f64, distance_km: f64) -> GeoPoint {
    let bearing = bearing_deg.to_radians();
    let lat = origin.latitude.to_radians();
    let lon = origin.longitude.to_radians();
    let angular = distance_km / EARTH_RADIUS_KM;

    let lat2 = (lat.sin() * angular.cos() + lat.cos() * angular.sin() * bearing.cos()).asin();
    let lon2 = lon
        + (bearing.sin() * angular.sin() * lat.cos())
            .atan2(angular.cos() - lat.sin() * lat2.sin());

    GeoPoint::new(lat2.to_degrees(), lon2.to_degrees())
}

/// Haversine great-circle distance between two points (km)
///
/// Non-negative, symmetric, and zero for identical inputs.
pub fn distance_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);

    // Rounding can nudge the radicand past 1 for near-antipodal points
    2.0 * EARTH_RADIUS_KM * h.sqrt().min(1.0).asin()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destination_known_point() {
        // Fixed baseline: 100 km at 60 degrees from (47, 8)
        let dest = destination_point(GeoPoint::new(47.0, 8.0), 60.0, 100.0);
        assert!((dest.latitude - 47.44392241235474).abs() < 1e-9);
        assert!((dest.longitude - 9.15162293546996).abs() < 1e-9);
    }

    #[test]
    fn test_destination_round_trip() {
        // distance_km(p, destination_point(p, b, d)) must recover d within
        // 0.1% across the supported projection range
        let origin = GeoPoint::new(47.0, 8.0);
        for bearing in [0.0, 45.0, 90.0, 135.0, 180.0, 225.0, 270.0, 315.0] {
            for d in [1.0, 10.0, 50.0, 100.0, 250.0, 500.0] {
                let dest = destination_point(origin, bearing, d);
                let back = distance_km(origin, dest);
                assert!(
                    (back - d).abs() < d * 0.001,
                    "bearing {} distance {} came back as {}",
                    bearing,
                    d,
                    back
                );
            }
        }
    }

    #[test]
    fn test_destination_near_pole() {
        let dest = destination_point(GeoPoint::new(89.9, 0.0), 10.0, 50.0);
        assert!(dest.latitude.is_finite() && dest.longitude.is_finite());
        assert!((distance_km(GeoPoint::new(89.9, 0.0), dest) - 50.0).abs() < 0.05);
    }

    #[test]
    fn test_destination_across_antimeridian() {
        // Eastward projection across the seam stays continuous (no wrap)
        let dest = destination_point(GeoPoint::new(0.0, 179.9), 90.0, 100.0);
        assert!(dest.latitude.abs() < 1e-9);
        assert!((dest.longitude - 180.79932160591872).abs() < 1e-9);
    }

    #[test]
    fn test_distance_symmetry() {
        let a = GeoPoint::new(47.05, 8.2);
        let b = GeoPoint::new(46.7, 9.1);
        assert_eq!(distance_km(a, b), distance_km(b, a));
        assert_eq!(distance_km(a, a), 0.0);
        assert!(distance_km(a, b) > 0.0);
    }

    #[test]
    fn test_distance_equator_degree() {
        // One degree of longitude on the equator is R * pi / 180
        let d = distance_km(GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 1.0));
        assert!((d - EARTH_RADIUS_KM * std::f64::consts::PI / 180.0).abs() < 1e-9);
    }
}
