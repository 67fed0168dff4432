#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Pure polygon math for concession field auto-calculation.
//!
//! Operates on rings of `[lon, lat]` pairs in decimal degrees. Two
//! deliberate approximations are preserved from the original cadastre
//! system and must not be "fixed" without changing downstream behavior:
//!
//! * Area uses the shoelace formula in square degrees, scaled to meters
//!   with a single factor of `111000 * cos(mean latitude)`. There is no
//!   real map projection; this holds up only for small, roughly square
//!   polygons near the equator, which describes Ghanaian concessions.
//! * The centroid is the arithmetic mean of the ring vertices, not the
//!   area-weighted centroid. It feeds a coarse bounding-box gazetteer
//!   lookup, which was tuned against this same approximation.
//!
//! All functions are total: malformed input degrades to `0.0` area and a
//! `[0.0, 0.0]` centroid sentinel rather than an error.

/// Meters per degree of longitude at the equator.
pub const METERS_PER_DEGREE_AT_EQUATOR: f64 = 111_000.0;

/// Square meters per acre. The original system used 4047 rather than the
/// more precise 4046.86; kept for numeric parity.
pub const SQUARE_METERS_PER_ACRE: f64 = 4047.0;

/// Filters a raw coordinate ring down to the vertices the math operates on.
///
/// Drops any vertex that is non-finite or outside the valid lon/lat range,
/// then drops a trailing duplicate of the first vertex so that explicitly
/// closed and implicitly closed rings normalize to the same form. Equal
/// weighting of every distinct vertex is what the gazetteer expects from
/// the centroid.
#[must_use]
pub fn sanitize_ring(polygon: &[[f64; 2]]) -> Vec<[f64; 2]> {
    let mut ring: Vec<[f64; 2]> = polygon
        .iter()
        .copied()
        .filter(|&[lon, lat]| {
            lon.is_finite() && lat.is_finite() && lon.abs() <= 180.0 && lat.abs() <= 90.0
        })
        .collect();

    if ring.len() > 1 && ring.first() == ring.last() {
        ring.pop();
    }

    ring
}

/// Computes the area of a polygon ring in acres.
///
/// Shoelace formula over the cyclic ring (the last vertex connects back to
/// the first whether or not the input repeats it), converted from square
/// degrees using the mean latitude of the sanitized vertices. Rounded
/// half-up to 2 decimal places.
///
/// Fewer than 3 valid vertices, or a degenerate (collinear) ring, returns
/// `0.0`; that is a legitimate result, not an error.
#[must_use]
pub fn area_acres(polygon: &[[f64; 2]]) -> f64 {
    let ring = sanitize_ring(polygon);
    if ring.len() < 3 {
        return 0.0;
    }

    let mut sum = 0.0;
    for (i, &[x1, y1]) in ring.iter().enumerate() {
        let [x2, y2] = ring[(i + 1) % ring.len()];
        sum += x1 * y2 - x2 * y1;
    }
    let area_deg2 = sum.abs() / 2.0;

    #[allow(clippy::cast_precision_loss)]
    let mean_lat = ring.iter().map(|v| v[1]).sum::<f64>() / ring.len() as f64;
    let meters_per_degree = METERS_PER_DEGREE_AT_EQUATOR * mean_lat.to_radians().cos();

    let area_m2 = area_deg2 * meters_per_degree * meters_per_degree;
    round_half_up(area_m2 / SQUARE_METERS_PER_ACRE, 2)
}

/// Computes the vertex-average centroid of a polygon ring.
///
/// Returns `[0.0, 0.0]` when no valid vertices remain; callers must treat
/// that as "no data" rather than a real location. Coordinates are rounded
/// half-up to 4 decimal places.
#[must_use]
pub fn centroid(polygon: &[[f64; 2]]) -> [f64; 2] {
    let ring = sanitize_ring(polygon);
    if ring.is_empty() {
        return [0.0, 0.0];
    }

    #[allow(clippy::cast_precision_loss)]
    let n = ring.len() as f64;
    let lon = ring.iter().map(|v| v[0]).sum::<f64>() / n;
    let lat = ring.iter().map(|v| v[1]).sum::<f64>() / n;

    [round_half_up(lon, 4), round_half_up(lat, 4)]
}

/// Rounds half-up to `places` decimal places.
///
/// Half-up means ties go toward positive infinity, so `-0.125` at 2 places
/// becomes `-0.12`. This matches `Math.round`-style rounding, which the
/// pinned regression values were derived against.
#[must_use]
pub fn round_half_up(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor + 0.5).floor() / factor
}
