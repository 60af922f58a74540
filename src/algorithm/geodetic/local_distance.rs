use crate::algorithm::geodetic::EARTH_MEAN_RADIUS;
use crate::geo_traits::CoordTrait;

/// Scale factor applied to a longitude difference at the mean of two latitudes (radians).
#[inline]
pub(crate) fn scale_lon_rad(lat1: f64, lat2: f64) -> f64 {
    ((lat1 + lat2) * 0.5).cos()
}

/// Convert an angular distance in radians to meters on the mean Earth sphere.
#[inline]
pub fn distance_to_meters(dist_rad: f64) -> f64 {
    dist_rad * EARTH_MEAN_RADIUS
}

/// Approximate distance between two nearby lon/lat points, in meters.
///
/// Uses the equirectangular approximation: the longitude difference is scaled by the cosine of
/// the mean latitude and the result is treated as a planar vector. This is not a great-circle
/// distance. The error grows with the span between the points and with latitude, so only use
/// it for short distances.
///
/// # Units
///
/// - `lon1`, `lat1`, `lon2`, `lat2`: degrees
/// - return value: meters
///
/// # Examples
///
/// ```
/// use geokernel::algorithm::geodetic::{local_lon_lat_distance, EARTH_MEAN_RADIUS};
///
/// let d = local_lon_lat_distance(0., 0., 1., 0.);
/// assert!((d - EARTH_MEAN_RADIUS * 1f64.to_radians()).abs() < 1e-6);
/// ```
pub fn local_lon_lat_distance(lon1: f64, lat1: f64, lon2: f64, lat2: f64) -> f64 {
    let distance_rad = local_lon_lat_distance_rad(
        lon1.to_radians(),
        lat1.to_radians(),
        lon2.to_radians(),
        lat2.to_radians(),
    );
    distance_to_meters(distance_rad)
}

/// [`local_lon_lat_distance`] on radian inputs, returning an angular distance in radians.
pub fn local_lon_lat_distance_rad(lon1: f64, lat1: f64, lon2: f64, lat2: f64) -> f64 {
    let delta_lon = (lon2 - lon1) * scale_lon_rad(lat1, lat2);
    let delta_lat = lat2 - lat1;
    (delta_lon * delta_lon + delta_lat * delta_lat).sqrt()
}

/// [`local_lon_lat_distance`] between two coordinates holding `(lon, lat)` in degrees.
pub fn local_distance_between(a: &impl CoordTrait<T = f64>, b: &impl CoordTrait<T = f64>) -> f64 {
    local_lon_lat_distance(a.x(), a.y(), b.x(), b.y())
}
