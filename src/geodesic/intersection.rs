//! Great-circle intersection of two bearing lines
//!
//! Solves the "two courses" problem: given two observers and the bearings
//! they each report, find where the projected great-circle paths meet.

use std::f64::consts::{PI, TAU};

use crate::core::constants::MIN_ORIGIN_SEPARATION_RAD;
use crate::core::types::{BearingLine, GeoPoint};

/// Intersection of two great-circle bearing lines
///
/// Returns `None` when no forward intersection exists:
/// - the origins coincide (angular separation below
///   [`MIN_ORIGIN_SEPARATION_RAD`]),
/// - both course deviations are zero (the lines run along the connecting
///   great circle and never single out a crossing point),
/// - the deviations have opposite signs (the lines open away from each
///   other and would only meet behind at least one origin).
///
/// The solve is sign-sensitive: initial and final courses between the
/// origins come from `acos`, with the sign of `sin(delta_lon)` picking the
/// hemisphere, and course deviations are normalized with the truncated
/// remainder `(x + PI) % TAU - PI`.
pub fn intersect(line_a: &BearingLine, line_b: &BearingLine) -> Option<GeoPoint> {
    let lat1 = line_a.origin.latitude.to_radians();
    let lon1 = line_a.origin.longitude.to_radians();
    let lat2 = line_b.origin.latitude.to_radians();
    let lon2 = line_b.origin.longitude.to_radians();
    let course13 = line_a.bearing.to_radians();
    let course23 = line_b.bearing.to_radians();
    let d_lat = lat2 - lat1;
    let d_lon = lon2 - lon1;

    // Angular separation of the two origins (haversine form)
    let delta12 = 2.0
        * ((d_lat / 2.0).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2))
        .sqrt()
        .min(1.0)
        .asin();
    if delta12.abs() < MIN_ORIGIN_SEPARATION_RAD {
        return None;
    }

    // Initial and final courses along the great circle connecting the origins
    let course_a = clamped_acos(
        (lat2.sin() - lat1.sin() * delta12.cos()) / (delta12.sin() * lat1.cos()),
    );
    let course_b = clamped_acos(
        (lat1.sin() - lat2.sin() * delta12.cos()) / (delta12.sin() * lat2.cos()),
    );
    let (course12, course21) = if d_lon.sin() > 0.0 {
        (course_a, TAU - course_b)
    } else {
        (TAU - course_a, course_b)
    };

    // Deviations of the reported bearings from the connecting circle
    let alpha1 = (course13 - course12 + PI) % TAU - PI;
    let alpha2 = (course21 - course23 + PI) % TAU - PI;

    if alpha1.sin() == 0.0 && alpha2.sin() == 0.0 {
        return None;
    }
    if alpha1.sin() * alpha2.sin() < 0.0 {
        return None;
    }

    let delta13 = if alpha1.sin() == 0.0 {
        // Line A aims straight at origin B; the atan2 solve degenerates
        // (0 over ~0) there, so take the crossing at origin B directly.
        delta12
    } else {
        let alpha3 = clamped_acos(
            -alpha1.cos() * alpha2.cos() + alpha1.sin() * alpha2.sin() * delta12.cos(),
        );
        (delta12.sin() * alpha1.sin() * alpha2.sin())
            .atan2(alpha2.cos() + alpha1.cos() * alpha3.cos())
    };

    // Destination from origin A along its bearing for the solved distance
    let lat3 =
        clamped_asin(lat1.sin() * delta13.cos() + lat1.cos() * delta13.sin() * course13.cos());
    let d_lon13 = (course13.sin() * delta13.sin() * lat1.cos())
        .atan2(delta13.cos() - lat1.sin() * lat3.sin());
    let lon3 = lon1 + d_lon13;

    Some(GeoPoint::new(lat3.to_degrees(), lon3.to_degrees()))
}

// Rounding can push trigonometric arguments a few ulps past [-1, 1];
// clamping keeps the solve total instead of letting NaN through.
fn clamped_acos(x: f64) -> f64 {
    x.clamp(-1.0, 1.0).acos()
}

fn clamped_asin(x: f64) -> f64 {
    x.clamp(-1.0, 1.0).asin()
}
