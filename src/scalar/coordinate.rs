use std::cmp::Ordering;
use std::fmt::Display;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::datatypes::Dimension;
use crate::geo_traits::CoordTrait;

/// An owned point value with optional Z and M ordinates.
///
/// Equality, hashing and ordering only look at `x` and `y`; the Z and M ordinates are carried
/// along but never compared.
#[derive(Debug, Default, Clone, Copy, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub m: Option<f64>,
}

impl Coordinate {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            z: None,
            m: None,
        }
    }

    pub fn new_xyz(x: f64, y: f64, z: f64) -> Self {
        Self {
            x,
            y,
            z: Some(z),
            m: None,
        }
    }

    pub fn new_xym(x: f64, y: f64, m: f64) -> Self {
        Self {
            x,
            y,
            z: None,
            m: Some(m),
        }
    }

    pub fn new_xyzm(x: f64, y: f64, z: f64, m: f64) -> Self {
        Self {
            x,
            y,
            z: Some(z),
            m: Some(m),
        }
    }

    /// The layout implied by which optional ordinates are present.
    pub fn dimension(&self) -> Dimension {
        match (self.z.is_some(), self.m.is_some()) {
            (false, false) => Dimension::XY,
            (true, false) => Dimension::XYZ,
            (false, true) => Dimension::XYM,
            (true, true) => Dimension::XYZM,
        }
    }

    /// Read the ordinate at `n` in the order x, y, z, m, skipping absent ordinates.
    pub fn ordinate(&self, n: usize) -> Option<f64> {
        match n {
            0 => Some(self.x),
            1 => Some(self.y),
            2 => self.z.or(self.m),
            3 => self.z.and(self.m),
            _ => None,
        }
    }

    /// Euclidean distance in the XY plane.
    pub fn distance(&self, other: &Coordinate) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

// Fold -0.0 onto 0.0 so that values equal under `==` hash identically.
fn hash_bits(v: f64) -> u64 {
    if v == 0.0 {
        0.0f64.to_bits()
    } else {
        v.to_bits()
    }
}

impl PartialEq for Coordinate {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

/// Lets a `Coordinate` key a `HashSet` or `HashMap`. A coordinate with a NaN `x` or `y` is not
/// equal to itself, so it can be inserted but never found again.
impl Eq for Coordinate {}

impl Hash for Coordinate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_bits(self.x).hash(state);
        hash_bits(self.y).hash(state);
    }
}

impl PartialOrd for Coordinate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.x.partial_cmp(&other.x)? {
            Ordering::Equal => self.y.partial_cmp(&other.y),
            ord => Some(ord),
        }
    }
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}", self.x, self.y)?;
        if let Some(z) = self.z {
            write!(f, ", {z}")?;
        }
        if let Some(m) = self.m {
            write!(f, ", {m}")?;
        }
        write!(f, ")")
    }
}

impl CoordTrait for Coordinate {
    type T = f64;

    fn nth_unchecked(&self, n: usize) -> Self::T {
        self.ordinate(n).unwrap_or(f64::NAN)
    }

    fn dim(&self) -> usize {
        Coordinate::dimension(self).size()
    }

    fn dimension(&self) -> Option<Dimension> {
        Some(Coordinate::dimension(self))
    }

    fn x(&self) -> Self::T {
        self.x
    }

    fn y(&self) -> Self::T {
        self.y
    }
}

impl From<geo::Coord> for Coordinate {
    fn from(value: geo::Coord) -> Self {
        Coordinate::new(value.x, value.y)
    }
}

impl From<geo::Point> for Coordinate {
    fn from(value: geo::Point) -> Self {
        value.0.into()
    }
}

impl From<Coordinate> for geo::Coord {
    fn from(value: Coordinate) -> Self {
        geo::coord! { x: value.x, y: value.y }
    }
}

impl From<Coordinate> for geo::Point {
    fn from(value: Coordinate) -> Self {
        let coord: geo::Coord = value.into();
        coord.into()
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from(value: (f64, f64)) -> Self {
        Coordinate::new(value.0, value.1)
    }
}
