use std::fmt::Debug;

use half::f16;

/// A numeric type a packed buffer can store its ordinates as.
///
/// Values always enter and leave the buffer as `f64`. Narrower storage types round on the way in;
/// that loss is accepted, not reported.
pub trait Ordinate: Copy + Debug + Default + PartialEq + PartialOrd + Send + Sync + 'static {
    /// Convert from `f64`, rounding to the nearest representable value.
    fn from_f64(value: f64) -> Self;

    /// Widen to `f64`.
    fn to_f64(self) -> f64;
}

impl Ordinate for f64 {
    #[inline]
    fn from_f64(value: f64) -> Self {
        value
    }

    #[inline]
    fn to_f64(self) -> f64 {
        self
    }
}

impl Ordinate for f32 {
    #[inline]
    fn from_f64(value: f64) -> Self {
        value as f32
    }

    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }
}

impl Ordinate for f16 {
    #[inline]
    fn from_f64(value: f64) -> Self {
        f16::from_f64(value)
    }

    #[inline]
    fn to_f64(self) -> f64 {
        f16::to_f64(self)
    }
}
