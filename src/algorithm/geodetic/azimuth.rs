use std::f64::consts::PI;

use crate::algorithm::geodetic::local_distance::scale_lon_rad;
use crate::algorithm::geodetic::{NO_AZIMUTH, PI_OVER_2, PI_TIMES_2, PI_TIMES_3_OVER_2};
use crate::geo_traits::CoordTrait;

/// Bearing from one lon/lat point toward another, clockwise from north, in degrees.
///
/// Returns [`NO_AZIMUTH`] when the two points are exactly equal.
///
/// This is a local planar approximation: the longitude difference is scaled by the cosine of the
/// mean latitude and the bearing is read off that flat vector. It is not a great-circle initial
/// bearing and is only meaningful for points close together.
///
/// # Units
///
/// - `lon1`, `lat1`, `lon2`, `lat2`: degrees
/// - return value: degrees in `[0, 360)`, or [`NO_AZIMUTH`]
///
/// # Examples
///
/// ```
/// use geokernel::algorithm::geodetic::{azimuth, NO_AZIMUTH};
///
/// assert_eq!(azimuth(0., 0., 0., 0.), NO_AZIMUTH);
/// assert_eq!(azimuth(0., 0., 0., 1.), 0.);
/// assert!((azimuth(0., 0., 1., 0.) - 90.).abs() < 1e-12);
/// ```
pub fn azimuth(lon1: f64, lat1: f64, lon2: f64, lat2: f64) -> f64 {
    if lon1 == lon2 && lat1 == lat2 {
        return NO_AZIMUTH;
    }

    azimuth_rad(
        lon1.to_radians(),
        lat1.to_radians(),
        lon2.to_radians(),
        lat2.to_radians(),
    )
    .to_degrees()
}

/// [`azimuth`] on radian inputs, returning radians in `[0, 2π)` or [`NO_AZIMUTH`].
pub fn azimuth_rad(lon1: f64, lat1: f64, lon2: f64, lat2: f64) -> f64 {
    if lat1 == lat2 {
        if lon1 == lon2 {
            return NO_AZIMUTH;
        } else if lon1 > lon2 {
            return PI_TIMES_3_OVER_2;
        } else {
            return PI_OVER_2;
        }
    }

    let delta_lat = lat2 - lat1;
    let delta_lon = (lon2 - lon1) * scale_lon_rad(lat1, lat2);
    let angle = (delta_lon / delta_lat).atan();
    if delta_lat > 0.0 {
        // due north lands here with angle 0, not in the 2π branch
        if delta_lon >= 0.0 {
            angle
        } else {
            PI_TIMES_2 + angle
        }
    } else {
        PI + angle
    }
}

/// [`azimuth`] between two coordinates holding `(lon, lat)` in degrees.
pub fn azimuth_between(a: &impl CoordTrait<T = f64>, b: &impl CoordTrait<T = f64>) -> f64 {
    azimuth(a.x(), a.y(), b.x(), b.y())
}
