use std::cmp::Ordering;

use crate::envelope::Envelope;
use crate::geo_traits::CoordTrait;
use crate::scalar::Coordinate;

/// Read access to an axis-aligned bounding box with a distinguished null (empty) state.
///
/// Implementors only provide the null test and the four bounds; every predicate is derived from
/// those. The bound accessors are unspecified when [`is_null`](Self::is_null) is `true`, so every
/// provided method checks nullness before reading a bound.
///
/// `covers` and `contains` are boundary inclusive: a box contains a point lying on its edge. This
/// is not the OGC interior-only `contains`.
pub trait EnvelopeTrait {
    /// Whether this is the null envelope.
    fn is_null(&self) -> bool;

    fn min_x(&self) -> f64;

    fn max_x(&self) -> f64;

    fn min_y(&self) -> f64;

    fn max_y(&self) -> f64;

    /// Difference between the maximum and minimum x values, 0 if null.
    fn width(&self) -> f64 {
        if self.is_null() {
            return 0.0;
        }
        self.max_x() - self.min_x()
    }

    /// Difference between the maximum and minimum y values, 0 if null.
    fn height(&self) -> f64 {
        if self.is_null() {
            return 0.0;
        }
        self.max_y() - self.min_y()
    }

    /// Length of the diagonal, 0 if null.
    fn diameter(&self) -> f64 {
        if self.is_null() {
            return 0.0;
        }
        self.width().hypot(self.height())
    }

    fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// The smaller of width and height, 0 if null.
    fn min_extent(&self) -> f64 {
        if self.is_null() {
            return 0.0;
        }
        let w = self.width();
        let h = self.height();
        if w < h {
            w
        } else {
            h
        }
    }

    /// The larger of width and height, 0 if null.
    fn max_extent(&self) -> f64 {
        if self.is_null() {
            return 0.0;
        }
        let w = self.width();
        let h = self.height();
        if w > h {
            w
        } else {
            h
        }
    }

    /// Center of the box, `None` if null.
    fn centre(&self) -> Option<Coordinate> {
        if self.is_null() {
            return None;
        }
        Some(Coordinate::new(
            (self.min_x() + self.max_x()) / 2.0,
            (self.min_y() + self.max_y()) / 2.0,
        ))
    }

    /// Whether the two boxes share at least one point. Always `false` if either is null.
    fn intersects(&self, other: &impl EnvelopeTrait) -> bool {
        if self.is_null() || other.is_null() {
            return false;
        }
        !(other.min_x() > self.max_x()
            || other.max_x() < self.min_x()
            || other.min_y() > self.max_y()
            || other.max_y() < self.min_y())
    }

    /// Whether the point `(x, y)` lies in or on this box.
    fn intersects_point(&self, x: f64, y: f64) -> bool {
        if self.is_null() {
            return false;
        }
        !(x > self.max_x() || x < self.min_x() || y > self.max_y() || y < self.min_y())
    }

    fn intersects_coord(&self, p: &impl CoordTrait<T = f64>) -> bool {
        self.intersects_point(p.x(), p.y())
    }

    /// Whether the box spanned by the segment `a`-`b` intersects this box.
    fn intersects_segment(&self, a: &impl CoordTrait<T = f64>, b: &impl CoordTrait<T = f64>) -> bool {
        if self.is_null() {
            return false;
        }

        let env_min_x = if a.x() < b.x() { a.x() } else { b.x() };
        if env_min_x > self.max_x() {
            return false;
        }
        let env_max_x = if a.x() > b.x() { a.x() } else { b.x() };
        if env_max_x < self.min_x() {
            return false;
        }
        let env_min_y = if a.y() < b.y() { a.y() } else { b.y() };
        if env_min_y > self.max_y() {
            return false;
        }
        let env_max_y = if a.y() > b.y() { a.y() } else { b.y() };
        if env_max_y < self.min_y() {
            return false;
        }
        true
    }

    fn disjoint(&self, other: &impl EnvelopeTrait) -> bool {
        !self.intersects(other)
    }

    /// Alias of [`intersects`](Self::intersects).
    fn overlaps(&self, other: &impl EnvelopeTrait) -> bool {
        self.intersects(other)
    }

    /// Whether `other` lies entirely in or on this box. `false` if either is null.
    fn covers(&self, other: &impl EnvelopeTrait) -> bool {
        if self.is_null() || other.is_null() {
            return false;
        }
        other.min_x() >= self.min_x()
            && other.max_x() <= self.max_x()
            && other.min_y() >= self.min_y()
            && other.max_y() <= self.max_y()
    }

    fn covers_point(&self, x: f64, y: f64) -> bool {
        if self.is_null() {
            return false;
        }
        x >= self.min_x() && x <= self.max_x() && y >= self.min_y() && y <= self.max_y()
    }

    fn covers_coord(&self, p: &impl CoordTrait<T = f64>) -> bool {
        self.covers_point(p.x(), p.y())
    }

    /// Same as [`covers`](Self::covers): the boundary counts as inside.
    fn contains(&self, other: &impl EnvelopeTrait) -> bool {
        self.covers(other)
    }

    fn contains_point(&self, x: f64, y: f64) -> bool {
        self.covers_point(x, y)
    }

    fn contains_coord(&self, p: &impl CoordTrait<T = f64>) -> bool {
        self.covers_coord(p)
    }

    /// Covers `other` without being equal to it.
    fn contains_properly(&self, other: &impl EnvelopeTrait) -> bool {
        if self.bounds_eq(other) {
            return false;
        }
        self.covers(other)
    }

    /// Distance between the closest edges or corners of the two boxes, 0 when they intersect.
    ///
    /// The gap on each axis is measured independently. When one axis already overlaps the result
    /// is the gap on the other axis alone. Distance to a null envelope is infinite.
    fn distance(&self, other: &impl EnvelopeTrait) -> f64 {
        if self.intersects(other) {
            return 0.0;
        }
        if self.is_null() || other.is_null() {
            return f64::INFINITY;
        }

        let mut dx = 0.0;
        if self.max_x() < other.min_x() {
            dx = other.min_x() - self.max_x();
        } else if self.min_x() > other.max_x() {
            dx = self.min_x() - other.max_x();
        }

        let mut dy = 0.0;
        if self.max_y() < other.min_y() {
            dy = other.min_y() - self.max_y();
        } else if self.min_y() > other.max_y() {
            dy = self.min_y() - other.max_y();
        }

        // one axis overlapping reduces to a single-axis gap
        if dx == 0.0 {
            return dy;
        }
        if dy == 0.0 {
            return dx;
        }
        dx.hypot(dy)
    }

    /// Overlapping region of the two boxes, null when disjoint or when either is null.
    fn intersection(&self, other: &impl EnvelopeTrait) -> Envelope {
        if self.is_null() || other.is_null() || !self.intersects(other) {
            return Envelope::null();
        }

        let x1 = if self.min_x() > other.min_x() { self.min_x() } else { other.min_x() };
        let y1 = if self.min_y() > other.min_y() { self.min_y() } else { other.min_y() };
        let x2 = if self.max_x() < other.max_x() { self.max_x() } else { other.max_x() };
        let y2 = if self.max_y() < other.max_y() { self.max_y() } else { other.max_y() };
        Envelope::new(x1, x2, y1, y2)
    }

    /// Null envelopes equal each other and nothing else; otherwise all four bounds must match.
    fn bounds_eq(&self, other: &impl EnvelopeTrait) -> bool {
        if self.is_null() {
            return other.is_null();
        }
        if other.is_null() {
            return false;
        }
        self.max_x() == other.max_x()
            && self.max_y() == other.max_y()
            && self.min_x() == other.min_x()
            && self.min_y() == other.min_y()
    }

    /// Lexicographic order on `(min_x, min_y, max_x, max_y)`, null before every non-null box.
    ///
    /// Incomparable (NaN) bounds are skipped over as if equal.
    fn compare(&self, other: &impl EnvelopeTrait) -> Ordering {
        match (self.is_null(), other.is_null()) {
            (true, true) => return Ordering::Equal,
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            (false, false) => {}
        }

        let pairs = [
            (self.min_x(), other.min_x()),
            (self.min_y(), other.min_y()),
            (self.max_x(), other.max_x()),
            (self.max_y(), other.max_y()),
        ];
        for (a, b) in pairs {
            if a < b {
                return Ordering::Less;
            }
            if a > b {
                return Ordering::Greater;
            }
        }
        Ordering::Equal
    }

    /// Copy the current bounds into an owned [`Envelope`].
    fn to_envelope(&self) -> Envelope {
        if self.is_null() {
            return Envelope::null();
        }
        Envelope::new(self.min_x(), self.max_x(), self.min_y(), self.max_y())
    }
}
