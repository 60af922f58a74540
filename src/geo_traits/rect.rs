use geo::Rect;

use crate::geo_traits::EnvelopeTrait;

/// A [`Rect`] is always a valid, non-null box.
impl EnvelopeTrait for Rect<f64> {
    fn is_null(&self) -> bool {
        false
    }

    fn min_x(&self) -> f64 {
        self.min().x
    }

    fn max_x(&self) -> f64 {
        self.max().x
    }

    fn min_y(&self) -> f64 {
        self.min().y
    }

    fn max_y(&self) -> f64 {
        self.max().y
    }
}

impl<E: EnvelopeTrait> EnvelopeTrait for &E {
    fn is_null(&self) -> bool {
        (*self).is_null()
    }

    fn min_x(&self) -> f64 {
        (*self).min_x()
    }

    fn max_x(&self) -> f64 {
        (*self).max_x()
    }

    fn min_y(&self) -> f64 {
        (*self).min_y()
    }

    fn max_y(&self) -> f64 {
        (*self).max_y()
    }
}
