//! Great-circle distance on a spherical Earth.

/// Mean Earth radius in kilometres.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance in kilometres between two coordinates given in signed
/// degrees.
///
/// Total over valid latitude/longitude ranges: symmetric, non-negative, and
/// zero when both points coincide. Out-of-range coordinates are passed
/// through uncorrected and NaN input is undefined; validation belongs to the
/// ingestion layer.
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);

    // Rounding can push `a` just past 1.0 for near-antipodal points, which
    // would take sqrt(1 - a) out of its domain.
    let a = a.clamp(0.0, 1.0);

    2.0 * EARTH_RADIUS_KM * a.sqrt().atan2((1.0 - a).sqrt())
}
