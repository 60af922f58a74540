//! Dimension of the coordinates stored in a packed sequence.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::error::{GeoKernelError, Result};

/// The ordinate layout of every coordinate in a sequence.
///
/// The stride of a packed buffer is [`Dimension::size`]. X and Y always come first; Z precedes M
/// when both are present.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimension {
    /// Two-dimensional.
    #[default]
    XY,

    /// Three-dimensional.
    XYZ,

    /// XYM (2D with measure).
    XYM,

    /// XYZM (3D with measure).
    XYZM,
}

impl Dimension {
    /// Returns the number of ordinates per coordinate.
    pub fn size(&self) -> usize {
        match self {
            Dimension::XY => 2,
            Dimension::XYZ => 3,
            Dimension::XYM => 3,
            Dimension::XYZM => 4,
        }
    }

    /// Returns the number of measure ordinates per coordinate.
    pub fn measures(&self) -> usize {
        match self {
            Dimension::XY | Dimension::XYZ => 0,
            Dimension::XYM | Dimension::XYZM => 1,
        }
    }

    /// Whether coordinates carry a Z ordinate.
    pub fn has_z(&self) -> bool {
        matches!(self, Dimension::XYZ | Dimension::XYZM)
    }

    /// Whether coordinates carry an M ordinate.
    pub fn has_m(&self) -> bool {
        self.measures() > 0
    }

    /// Position of the Z ordinate within a coordinate, if any.
    pub fn z_index(&self) -> Option<usize> {
        self.has_z().then_some(2)
    }

    /// Position of the M ordinate within a coordinate, if any.
    pub fn m_index(&self) -> Option<usize> {
        match self {
            Dimension::XY | Dimension::XYZ => None,
            Dimension::XYM => Some(2),
            Dimension::XYZM => Some(3),
        }
    }

    /// Build a dimension from the total ordinate count and the number of measures.
    ///
    /// Mirrors the `(dimension, measures)` pair used by coordinate sequence consumers.
    pub fn from_parts(size: usize, measures: usize) -> Result<Self> {
        match (size, measures) {
            (2, 0) => Ok(Dimension::XY),
            (3, 0) => Ok(Dimension::XYZ),
            (3, 1) => Ok(Dimension::XYM),
            (4, 1) => Ok(Dimension::XYZM),
            _ => Err(GeoKernelError::General(format!(
                "Unsupported dimension {size} with {measures} measures"
            ))),
        }
    }
}

impl Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dimension::XY => write!(f, "XY"),
            Dimension::XYZ => write!(f, "XYZ"),
            Dimension::XYM => write!(f, "XYM"),
            Dimension::XYZM => write!(f, "XYZM"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn ordinate_positions() {
        assert_eq!(Dimension::XY.z_index(), None);
        assert_eq!(Dimension::XYM.m_index(), Some(2));
        assert_eq!(Dimension::XYZM.z_index(), Some(2));
        assert_eq!(Dimension::XYZM.m_index(), Some(3));
    }

    #[test]
    fn from_parts() {
        assert_eq!(Dimension::from_parts(3, 1).unwrap(), Dimension::XYM);
        assert_eq!(Dimension::from_parts(4, 1).unwrap(), Dimension::XYZM);
        assert!(Dimension::from_parts(5, 0).is_err());
    }
}
