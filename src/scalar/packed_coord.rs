use crate::array::coord::Ordinate;
use crate::datatypes::Dimension;
use crate::geo_traits::CoordTrait;
use crate::scalar::Coordinate;

/// A borrowed view of one coordinate inside a packed buffer.
///
/// This implements [CoordTrait], which you can use to extract data without materializing a
/// [Coordinate].
#[derive(Debug, Clone, Copy)]
pub struct PackedCoord<'a, T: Ordinate = f64> {
    pub(crate) coords: &'a [T],
    pub(crate) i: usize,
    pub(crate) dim: Dimension,
}

impl<'a, T: Ordinate> PackedCoord<'a, T> {
    #[inline]
    fn ordinate(&self, n: usize) -> f64 {
        debug_assert!(n < self.dim.size());
        self.coords[self.i * self.dim.size() + n].to_f64()
    }

    /// Position of this coordinate within its sequence.
    pub fn index(&self) -> usize {
        self.i
    }

    /// Copy the ordinates out into an owned [Coordinate].
    pub fn to_coordinate(&self) -> Coordinate {
        Coordinate {
            x: self.ordinate(0),
            y: self.ordinate(1),
            z: self.dim.z_index().map(|n| self.ordinate(n)),
            m: self.dim.m_index().map(|n| self.ordinate(n)),
        }
    }
}

impl<T: Ordinate> CoordTrait for PackedCoord<'_, T> {
    type T = f64;

    fn nth_unchecked(&self, n: usize) -> Self::T {
        self.ordinate(n)
    }

    fn dim(&self) -> usize {
        self.dim.size()
    }

    fn dimension(&self) -> Option<Dimension> {
        Some(self.dim)
    }

    fn x(&self) -> Self::T {
        self.ordinate(0)
    }

    fn y(&self) -> Self::T {
        self.ordinate(1)
    }
}

impl<T: Ordinate> From<PackedCoord<'_, T>> for Coordinate {
    fn from(value: PackedCoord<'_, T>) -> Self {
        value.to_coordinate()
    }
}

impl<T: Ordinate> From<PackedCoord<'_, T>> for geo::Coord {
    fn from(value: PackedCoord<'_, T>) -> Self {
        geo::coord! { x: value.x(), y: value.y() }
    }
}

impl<T: Ordinate> PartialEq for PackedCoord<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.x() == other.x() && self.y() == other.y()
    }
}

#[cfg(test)]
mod test {
    use crate::array::PackedCoordBuffer;
    use crate::datatypes::Dimension;
    use crate::geo_traits::CoordTrait;

    /// Equality only looks at the coordinate at the current index
    #[test]
    fn test_eq_other_index_false() {
        let buf1 = PackedCoordBuffer::<f64>::new(vec![0., 3., 1., 4., 2., 5.], Dimension::XY.into());
        let buf2 =
            PackedCoordBuffer::<f64>::new(vec![0., 3., 100., 400., 200., 500.], Dimension::XY.into());
        assert_eq!(buf1.value(0), buf2.value(0));
        assert_ne!(buf1.value(1), buf2.value(1));
    }

    #[test]
    fn xyzm_view() {
        let buf = PackedCoordBuffer::<f32>::new(vec![1., 2., 3., 4.], Dimension::XYZM.into());
        let c = buf.value(0);
        assert_eq!(c.dim(), 4);
        assert_eq!(c.nth(3), Some(4.));
        let owned = c.to_coordinate();
        assert_eq!(owned.z, Some(3.));
        assert_eq!(owned.m, Some(4.));
    }
}
