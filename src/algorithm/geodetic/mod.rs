//! Short-span approximations on lon/lat coordinates over a spherical Earth.
//!
//! Everything here is a pure function of plain `f64` angles. The degree variants convert their
//! inputs to radians and delegate to a `_rad` variant.

use std::f64::consts::PI;

pub use azimuth::{azimuth, azimuth_between, azimuth_rad};
pub use line_projector::{project, project_coord, project_rad, LinePosition, LineProjection};
pub use local_distance::{
    distance_to_meters, local_distance_between, local_lon_lat_distance,
    local_lon_lat_distance_rad,
};

mod azimuth;
mod line_projector;
mod local_distance;

/// Mean radius of the Earth in meters.
///
/// This is the IUGG mean radius `(2a + b) / 3` of the WGS84 ellipsoid.
pub const EARTH_MEAN_RADIUS: f64 = 6_371_008.7714;

/// Returned by [`azimuth`] when the two points coincide.
pub const NO_AZIMUTH: f64 = -1.0;

pub const PI_TIMES_2: f64 = 2.0 * PI;
pub const PI_TIMES_3_OVER_2: f64 = 3.0 * PI / 2.0;
pub const PI_OVER_2: f64 = PI / 2.0;
pub const PI_OVER_4: f64 = PI / 4.0;
