use serde::{Deserialize, Serialize};

use crate::geo_traits::CoordTrait;
use crate::scalar::Coordinate;

/// Where the foot of the perpendicular fell relative to the segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinePosition {
    /// Before the first endpoint. The projection is clamped to it.
    OutsideStart,
    /// Past the second endpoint. The projection is clamped to it.
    OutsideEnd,
    /// Between the endpoints.
    Inside,
}

/// The result of projecting a lon/lat point onto a segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineProjection {
    pub position: LinePosition,
    pub lon: f64,
    pub lat: f64,
}

impl LineProjection {
    fn new(position: LinePosition, lon: f64, lat: f64) -> Self {
        Self { position, lon, lat }
    }

    fn to_degrees(self) -> Self {
        Self::new(self.position, self.lon.to_degrees(), self.lat.to_degrees())
    }

    /// The projected point as an xy [`Coordinate`], `x` being the longitude.
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.lon, self.lat)
    }

    pub fn is_inside(&self) -> bool {
        self.position == LinePosition::Inside
    }
}

/// Project `(lon, lat)` onto the great-circle arc from `(lon1, lat1)` to `(lon2, lat2)`.
///
/// A foot of perpendicular falling before the start or past the end of the arc is clamped to that
/// endpoint and reported as [`LinePosition::OutsideStart`] or [`LinePosition::OutsideEnd`].
/// Whether the foot lies past an endpoint is judged by longitude alone, so the arc is expected to
/// run eastward (`lon1 < lon2`) unless it follows a meridian.
///
/// The result is undefined near the poles and for antipodal endpoints, where the spherical
/// solution divides by values close to zero. Trigonometric inputs are clamped to their domain so
/// rounding alone never produces NaN, but that does not make those cases meaningful. The solved
/// latitude comes out of an arccosine and so is never negative.
///
/// # Units
///
/// - all inputs: degrees
/// - returned `lon`, `lat`: degrees
///
/// # Examples
///
/// ```
/// use geokernel::algorithm::geodetic::{project, LinePosition};
///
/// let p = project(0., 5., 0., 0., 0., 10.);
/// assert_eq!(p.position, LinePosition::Inside);
/// assert_eq!((p.lon, p.lat), (0., 5.));
///
/// let p = project(0., 12., 0., 0., 0., 10.);
/// assert_eq!(p.position, LinePosition::OutsideEnd);
/// assert_eq!((p.lon, p.lat), (0., 10.));
/// ```
pub fn project(lon: f64, lat: f64, lon1: f64, lat1: f64, lon2: f64, lat2: f64) -> LineProjection {
    project_rad(
        lon.to_radians(),
        lat.to_radians(),
        lon1.to_radians(),
        lat1.to_radians(),
        lon2.to_radians(),
        lat2.to_radians(),
    )
    .to_degrees()
}

/// [`project`] on radian inputs, returning radians.
pub fn project_rad(
    lon: f64,
    lat: f64,
    lon1: f64,
    lat1: f64,
    lon2: f64,
    lat2: f64,
) -> LineProjection {
    use LinePosition::*;

    // Along a meridian this is a clamp on latitude
    if lon1 == lon2 {
        let (position, lat) = if lat1 > lat2 {
            if lat > lat1 {
                (OutsideStart, lat1)
            } else if lat < lat2 {
                (OutsideEnd, lat2)
            } else {
                (Inside, lat)
            }
        } else if lat < lat1 {
            (OutsideStart, lat1)
        } else if lat > lat2 {
            (OutsideEnd, lat2)
        } else {
            (Inside, lat)
        };
        return LineProjection::new(position, lon1, lat);
    }

    let sin_lat = lat.sin();
    let sin_lat1 = lat1.sin();
    let sin_lat2 = lat2.sin();
    let cos_lat = unit_complement(sin_lat);
    let cos_lat1 = unit_complement(sin_lat1);
    let cos_lat2 = unit_complement(sin_lat2);

    let delta_lon_p_p1 = lon - lon1;
    let delta_lon_p2_p = lon2 - lon;
    let delta_lon_p2_p1 = lon2 - lon1;
    let cos_lon_p_p1 = delta_lon_p_p1.cos();
    let cos_lon_p2_p = delta_lon_p2_p.cos();
    let cos_lon_p2_p1 = delta_lon_p2_p1.cos();

    // cosines of the arcs between the query point and each endpoint, and between the endpoints
    let cos_dist_p_p1 = sin_lat * sin_lat1 + cos_lat * cos_lat1 * cos_lon_p_p1;
    let cos_dist_p_p2 = sin_lat * sin_lat2 + cos_lat * cos_lat2 * cos_lon_p2_p;
    let cos_dist_p1_p2 = sin_lat1 * sin_lat2 + cos_lat1 * cos_lat2 * cos_lon_p2_p1;
    let sin_dist_p1_p2 = unit_complement(cos_dist_p1_p2);

    // arc from p1 to the foot of the perpendicular
    let tan_dist_f_p1 = (cos_dist_p_p2 / cos_dist_p_p1 - cos_dist_p1_p2) / sin_dist_p1_p2;
    let dist_f_p1 = tan_dist_f_p1.atan();

    let sin_lon_p2_p1 = unit_complement(cos_lon_p2_p1);
    let tan_lon_f_p1 = sin_lon_p2_p1
        / (cos_lat1 / cos_lat2 * (sin_dist_p1_p2 / tan_dist_f_p1 - cos_dist_p1_p2)
            + cos_lon_p2_p1);
    let delta_lon_f_p1 = tan_lon_f_p1.atan();

    let cos_lat_f = sin_lon_p2_p1 / delta_lon_f_p1.sin() * dist_f_p1.sin() / sin_dist_p1_p2
        * cos_lat2;
    let lat_f = cos_lat_f.clamp(-1.0, 1.0).acos();

    if delta_lon_f_p1 < 0.0 {
        LineProjection::new(OutsideStart, lon1, lat1)
    } else if delta_lon_f_p1 > delta_lon_p2_p1 {
        LineProjection::new(OutsideEnd, lon2, lat2)
    } else {
        LineProjection::new(Inside, lon1 + delta_lon_f_p1, lat_f)
    }
}

/// [`project`] with the point and segment endpoints given as `(lon, lat)` coordinates in degrees.
pub fn project_coord(
    point: &impl CoordTrait<T = f64>,
    start: &impl CoordTrait<T = f64>,
    end: &impl CoordTrait<T = f64>,
) -> LineProjection {
    project(
        point.x(),
        point.y(),
        start.x(),
        start.y(),
        end.x(),
        end.y(),
    )
}

/// `sqrt(1 - v²)`, zero where rounding pushed `|v|` past one.
#[inline]
fn unit_complement(v: f64) -> f64 {
    (1.0 - v * v).max(0.0).sqrt()
}
