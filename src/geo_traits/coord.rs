use geo::{Coord, CoordNum, Point};

use crate::datatypes::Dimension;

/// A trait for accessing data from a generic Coord.
pub trait CoordTrait {
    type T: CoordNum;

    /// Access the n'th (0-based) element of the CoordinateTuple.
    /// May panic if n >= DIMENSION.
    /// See also [`nth()`](Self::nth).
    fn nth_unchecked(&self, n: usize) -> Self::T;

    /// Native dimension of the coordinate tuple
    fn dim(&self) -> usize;

    /// The ordinate layout, when the coordinate knows it.
    ///
    /// A three-ordinate coordinate may be XYZ or XYM. Types that cannot tell the two apart return
    /// `None` and are only checked by [`dim()`](Self::dim).
    fn dimension(&self) -> Option<Dimension> {
        None
    }

    /// Access the n'th (0-based) element of the CoordinateTuple.
    /// Returns `None` if `n >= DIMENSION`.
    /// See also [`nth_unchecked()`](Self::nth_unchecked).
    fn nth(&self, n: usize) -> Option<Self::T> {
        if n < self.dim() {
            Some(self.nth_unchecked(n))
        } else {
            None
        }
    }

    /// x component of this coord
    fn x(&self) -> Self::T;

    /// y component of this coord
    fn y(&self) -> Self::T;

    /// Returns a tuple that contains the x/horizontal & y/vertical component of the coord.
    fn x_y(&self) -> (Self::T, Self::T) {
        (self.x(), self.y())
    }
}

impl<C: CoordTrait> CoordTrait for &C {
    type T = C::T;

    fn nth_unchecked(&self, n: usize) -> Self::T {
        (*self).nth_unchecked(n)
    }

    fn dim(&self) -> usize {
        (*self).dim()
    }

    fn dimension(&self) -> Option<Dimension> {
        (*self).dimension()
    }

    fn x(&self) -> Self::T {
        (*self).x()
    }

    fn y(&self) -> Self::T {
        (*self).y()
    }
}

impl<T: CoordNum> CoordTrait for Point<T> {
    type T = T;

    fn nth_unchecked(&self, n: usize) -> Self::T {
        match n {
            0 => self.0.x,
            1 => self.0.y,
            _ => panic!("Point only has two ordinates; got index {n}"),
        }
    }

    fn dim(&self) -> usize {
        2
    }

    fn x(&self) -> Self::T {
        self.0.x
    }

    fn y(&self) -> Self::T {
        self.0.y
    }
}

impl<T: CoordNum> CoordTrait for Coord<T> {
    type T = T;

    fn nth_unchecked(&self, n: usize) -> Self::T {
        match n {
            0 => self.x,
            1 => self.y,
            _ => panic!("Coord only has two ordinates; got index {n}"),
        }
    }

    fn dim(&self) -> usize {
        2
    }

    fn x(&self) -> Self::T {
        self.x
    }

    fn y(&self) -> Self::T {
        self.y
    }
}

impl<T: CoordNum> CoordTrait for (T, T) {
    type T = T;

    fn nth_unchecked(&self, n: usize) -> Self::T {
        match n {
            0 => self.0,
            1 => self.1,
            _ => panic!("tuple only has two ordinates; got index {n}"),
        }
    }

    fn dim(&self) -> usize {
        2
    }

    fn x(&self) -> Self::T {
        self.0
    }

    fn y(&self) -> Self::T {
        self.1
    }
}

impl<T: CoordNum, const D: usize> CoordTrait for [T; D] {
    type T = T;

    fn nth_unchecked(&self, n: usize) -> Self::T {
        self[n]
    }

    fn dim(&self) -> usize {
        D
    }

    fn x(&self) -> Self::T {
        self[0]
    }

    fn y(&self) -> Self::T {
        self[1]
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn nth_is_bounded_by_dim() {
        let c = [1.0, 2.0, 3.0];
        assert_eq!(c.nth(2), Some(3.0));
        assert_eq!(c.nth(3), None);

        let t = (1.0, 2.0);
        assert_eq!(t.nth(2), None);
        assert_eq!((&t).x_y(), (1.0, 2.0));
    }
}
