//! A mutable axis-aligned bounding box with a distinguished null state.

use std::cmp::Ordering;
use std::fmt::Display;
use std::hash::{Hash, Hasher};

use geo::{coord, Rect};
use serde::{Deserialize, Serialize};

use crate::geo_traits::{CoordTrait, EnvelopeTrait};

/// The rectangular region of the plane spanned by `[min_x, max_x] × [min_y, max_y]`.
///
/// An envelope may be null, meaning it contains no points at all; this is the state of a freshly
/// created envelope and of the bounding box of an empty geometry. The null state is encoded as
/// `max_x < min_x`. A non-null envelope always has `min_x <= max_x` and `min_y <= max_y`.
///
/// Read-only predicates (`intersects`, `covers`, `distance`, ...) come from [`EnvelopeTrait`].
///
/// ```
/// use geokernel::{Envelope, EnvelopeTrait};
///
/// let mut env = Envelope::null();
/// env.expand_to_include(1.0, 5.0);
/// env.expand_to_include(3.0, 2.0);
/// assert!(env.covers_point(2.0, 3.0));
/// assert_eq!(env.width(), 2.0);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope {
    min_x: f64,
    max_x: f64,
    min_y: f64,
    max_y: f64,
}

impl Envelope {
    /// An envelope spanning the two x values and the two y values, in either order.
    pub fn new(x1: f64, x2: f64, y1: f64, y2: f64) -> Self {
        let mut env = Self::null();
        env.init(x1, x2, y1, y2);
        env
    }

    /// The null envelope.
    pub fn null() -> Self {
        Self {
            min_x: 0.0,
            max_x: -1.0,
            min_y: 0.0,
            max_y: -1.0,
        }
    }

    /// The envelope spanned by two points.
    pub fn from_coords(p1: &impl CoordTrait<T = f64>, p2: &impl CoordTrait<T = f64>) -> Self {
        Self::new(p1.x(), p2.x(), p1.y(), p2.y())
    }

    /// The singleton envelope of one point.
    pub fn from_coord(p: &impl CoordTrait<T = f64>) -> Self {
        Self::new(p.x(), p.x(), p.y(), p.y())
    }

    /// Re-initialize to the region spanned by the given values, in either order.
    pub fn init(&mut self, x1: f64, x2: f64, y1: f64, y2: f64) {
        if x1 < x2 {
            self.min_x = x1;
            self.max_x = x2;
        } else {
            self.min_x = x2;
            self.max_x = x1;
        }
        if y1 < y2 {
            self.min_y = y1;
            self.max_y = y2;
        } else {
            self.min_y = y2;
            self.max_y = y1;
        }
    }

    pub fn init_from_coords(&mut self, p1: &impl CoordTrait<T = f64>, p2: &impl CoordTrait<T = f64>) {
        self.init(p1.x(), p2.x(), p1.y(), p2.y());
    }

    pub fn init_from_envelope(&mut self, other: &Envelope) {
        self.min_x = other.min_x;
        self.max_x = other.max_x;
        self.min_y = other.min_y;
        self.max_y = other.max_y;
    }

    pub fn set_to_null(&mut self) {
        *self = Self::null();
    }

    /// Enlarge so that the point `(x, y)` is covered. A null envelope becomes `[x, x, y, y]`.
    pub fn expand_to_include(&mut self, x: f64, y: f64) {
        if self.is_null() {
            self.min_x = x;
            self.max_x = x;
            self.min_y = y;
            self.max_y = y;
        } else {
            if x < self.min_x {
                self.min_x = x;
            }
            if x > self.max_x {
                self.max_x = x;
            }
            if y < self.min_y {
                self.min_y = y;
            }
            if y > self.max_y {
                self.max_y = y;
            }
        }
    }

    pub fn expand_to_include_coord(&mut self, p: &impl CoordTrait<T = f64>) {
        self.expand_to_include(p.x(), p.y());
    }

    /// Enlarge so that `other` is covered. Expanding by a null envelope is a no-op.
    pub fn expand_to_include_envelope(&mut self, other: &impl EnvelopeTrait) {
        if other.is_null() {
            return;
        }
        if self.is_null() {
            self.min_x = other.min_x();
            self.max_x = other.max_x();
            self.min_y = other.min_y();
            self.max_y = other.max_y();
        } else {
            if other.min_x() < self.min_x {
                self.min_x = other.min_x();
            }
            if other.max_x() > self.max_x {
                self.max_x = other.max_x();
            }
            if other.min_y() < self.min_y {
                self.min_y = other.min_y();
            }
            if other.max_y() > self.max_y {
                self.max_y = other.max_y();
            }
        }
    }

    /// Grow (or with negative deltas, shrink) each side.
    ///
    /// A null envelope stays null. Shrinking past zero width or height makes the envelope null.
    pub fn expand_by(&mut self, delta_x: f64, delta_y: f64) {
        if self.is_null() {
            return;
        }

        self.min_x -= delta_x;
        self.max_x += delta_x;
        self.min_y -= delta_y;
        self.max_y += delta_y;

        // inverted box
        if self.min_x > self.max_x || self.min_y > self.max_y {
            self.set_to_null();
        }
    }

    pub fn expand_by_distance(&mut self, distance: f64) {
        self.expand_by(distance, distance);
    }

    /// Shift by the given offsets. A null envelope stays null.
    pub fn translate(&mut self, trans_x: f64, trans_y: f64) {
        if self.is_null() {
            return;
        }
        self.init(
            self.min_x + trans_x,
            self.max_x + trans_x,
            self.min_y + trans_y,
            self.max_y + trans_y,
        );
    }

    /// Whether the point `q` lies in the box spanned by `p1` and `p2`.
    pub fn segment_intersects_point(
        p1: &impl CoordTrait<T = f64>,
        p2: &impl CoordTrait<T = f64>,
        q: &impl CoordTrait<T = f64>,
    ) -> bool {
        (q.x() >= (if p1.x() < p2.x() { p1.x() } else { p2.x() }))
            && (q.x() <= (if p1.x() > p2.x() { p1.x() } else { p2.x() }))
            && (q.y() >= (if p1.y() < p2.y() { p1.y() } else { p2.y() }))
            && (q.y() <= (if p1.y() > p2.y() { p1.y() } else { p2.y() }))
    }

    /// Whether the box spanned by `p1`-`p2` intersects the box spanned by `q1`-`q2`.
    pub fn segments_envelopes_intersect(
        p1: &impl CoordTrait<T = f64>,
        p2: &impl CoordTrait<T = f64>,
        q1: &impl CoordTrait<T = f64>,
        q2: &impl CoordTrait<T = f64>,
    ) -> bool {
        let mut min_q = if q1.x() < q2.x() { q1.x() } else { q2.x() };
        let mut max_q = if q1.x() > q2.x() { q1.x() } else { q2.x() };
        let mut min_p = if p1.x() < p2.x() { p1.x() } else { p2.x() };
        let mut max_p = if p1.x() > p2.x() { p1.x() } else { p2.x() };

        if min_p > max_q || max_p < min_q {
            return false;
        }

        min_q = if q1.y() < q2.y() { q1.y() } else { q2.y() };
        max_q = if q1.y() > q2.y() { q1.y() } else { q2.y() };
        min_p = if p1.y() < p2.y() { p1.y() } else { p2.y() };
        max_p = if p1.y() > p2.y() { p1.y() } else { p2.y() };

        !(min_p > max_q || max_p < min_q)
    }
}

impl Default for Envelope {
    fn default() -> Self {
        Self::null()
    }
}

impl EnvelopeTrait for Envelope {
    #[inline]
    fn is_null(&self) -> bool {
        self.max_x < self.min_x
    }

    #[inline]
    fn min_x(&self) -> f64 {
        self.min_x
    }

    #[inline]
    fn max_x(&self) -> f64 {
        self.max_x
    }

    #[inline]
    fn min_y(&self) -> f64 {
        self.min_y
    }

    #[inline]
    fn max_y(&self) -> f64 {
        self.max_y
    }
}

impl PartialEq for Envelope {
    fn eq(&self, other: &Self) -> bool {
        self.bounds_eq(other)
    }
}

impl PartialOrd for Envelope {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.compare(other))
    }
}

/// Hash the bounds of any envelope so that values equal under
/// [`bounds_eq`](EnvelopeTrait::bounds_eq) hash alike, whatever their concrete type.
pub(crate) fn hash_bounds<H: Hasher>(env: &impl EnvelopeTrait, state: &mut H) {
    if env.is_null() {
        state.write_u8(0);
        return;
    }
    state.write_u8(1);
    for v in [env.min_x(), env.max_x(), env.min_y(), env.max_y()] {
        // -0.0 == 0.0, so they must hash alike
        let v = if v == 0.0 { 0.0f64 } else { v };
        v.to_bits().hash(state);
    }
}

impl Hash for Envelope {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_bounds(self, state);
    }
}

impl Display for Envelope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Env[{} : {}, {} : {}]",
            self.min_x, self.max_x, self.min_y, self.max_y
        )
    }
}

impl From<Rect> for Envelope {
    fn from(value: Rect) -> Self {
        Envelope::from_coords(&value.min(), &value.max())
    }
}

impl From<&Envelope> for Option<Rect> {
    fn from(value: &Envelope) -> Self {
        if value.is_null() {
            return None;
        }
        Some(Rect::new(
            coord! { x: value.min_x, y: value.min_y },
            coord! { x: value.max_x, y: value.max_y },
        ))
    }
}

impl<C: CoordTrait<T = f64>> FromIterator<C> for Envelope {
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        let mut env = Envelope::null();
        for c in iter {
            env.expand_to_include_coord(&c);
        }
        env
    }
}

#[cfg(test)]
mod test {
    use std::collections::hash_map::DefaultHasher;

    use approx::assert_relative_eq;

    use super::*;
    use crate::scalar::Coordinate;

    #[test]
    fn null_by_default() {
        let env = Envelope::default();
        assert!(env.is_null());
        assert_eq!(env.width(), 0.0);
        assert_eq!(env.height(), 0.0);
        assert_eq!(env.area(), 0.0);
        assert_eq!(env.diameter(), 0.0);
        assert_eq!(env.centre(), None);
        assert!(!env.covers_point(0.0, 0.0));
        assert!(!env.intersects_point(0.0, 0.0));
    }

    #[test]
    fn new_orders_bounds() {
        let env = Envelope::new(10., 0., 5., -5.);
        assert_eq!(env.min_x(), 0.);
        assert_eq!(env.max_x(), 10.);
        assert_eq!(env.min_y(), -5.);
        assert_eq!(env.max_y(), 5.);
        assert!(!env.is_null());
    }

    #[test]
    fn expand_null_to_singleton() {
        let mut env = Envelope::null();
        env.expand_to_include(3., 4.);
        assert_eq!(env, Envelope::new(3., 3., 4., 4.));
        assert!(!env.is_null());
        assert_eq!(env.area(), 0.0);
    }

    #[test]
    fn expand_by_covered_point_is_noop() {
        let mut env = Envelope::new(0., 10., 0., 10.);
        let before = env.clone();
        env.expand_to_include(10., 0.);
        env.expand_to_include(5., 5.);
        assert_eq!(env, before);
    }

    #[test]
    fn expand_to_include_envelope() {
        let mut env = Envelope::null();
        env.expand_to_include_envelope(&Envelope::null());
        assert!(env.is_null());

        env.expand_to_include_envelope(&Envelope::new(0., 1., 0., 1.));
        env.expand_to_include_envelope(&Envelope::new(-1., 0.5, 2., 3.));
        assert_eq!(env, Envelope::new(-1., 1., 0., 3.));
    }

    #[test]
    fn expand_by_can_invert_to_null() {
        let mut env = Envelope::new(0., 2., 0., 10.);
        env.expand_by(-0.5, 0.);
        assert_eq!(env, Envelope::new(0.5, 1.5, 0., 10.));

        env.expand_by(-1.0, 0.);
        assert!(env.is_null());

        // null stays null
        env.expand_by_distance(100.);
        assert!(env.is_null());
    }

    #[test]
    fn translate() {
        let mut env = Envelope::new(0., 1., 0., 1.);
        env.translate(2., -3.);
        assert_eq!(env, Envelope::new(2., 3., -3., -2.));

        let mut null = Envelope::null();
        null.translate(2., 2.);
        assert!(null.is_null());
    }

    #[test]
    fn intersects_is_symmetric() {
        let envs = [
            Envelope::null(),
            Envelope::new(0., 10., 0., 10.),
            Envelope::new(10., 20., 10., 20.),
            Envelope::new(5., 6., -5., 20.),
            Envelope::new(11., 12., 0., 1.),
            Envelope::new(3., 3., 3., 3.),
        ];
        for a in &envs {
            for b in &envs {
                assert_eq!(a.intersects(b), b.intersects(a), "{a} vs {b}");
                assert_eq!(a.distance(b) == 0.0, a.intersects(b), "{a} vs {b}");
            }
        }
    }

    #[test]
    fn covers_is_boundary_inclusive() {
        let env = Envelope::new(0., 10., 0., 10.);
        assert!(env.covers_point(0., 10.));
        assert!(env.contains_point(10., 10.));
        assert!(env.covers(&Envelope::new(0., 10., 0., 10.)));
        assert!(env.contains(&Envelope::new(0., 5., 5., 10.)));
        assert!(!env.covers(&Envelope::new(-1., 5., 5., 10.)));
        assert!(!env.covers(&Envelope::null()));
        assert!(!Envelope::null().covers(&env));

        assert!(!env.contains_properly(&env.clone()));
        assert!(env.contains_properly(&Envelope::new(1., 2., 1., 2.)));
    }

    #[test]
    fn intersection() {
        let a = Envelope::new(0., 10., 0., 10.);
        let b = Envelope::new(5., 15., -5., 5.);
        assert_eq!(a.intersection(&b), Envelope::new(5., 10., 0., 5.));
        assert!(a.intersection(&Envelope::new(20., 30., 0., 1.)).is_null());
        assert!(a.intersection(&Envelope::null()).is_null());
        assert!(Envelope::null().intersection(&a).is_null());
    }

    #[test]
    fn distance() {
        let a = Envelope::new(0., 1., 0., 1.);
        // horizontal gap only
        assert_eq!(a.distance(&Envelope::new(3., 4., 0., 1.)), 2.0);
        // vertical gap only
        assert_eq!(a.distance(&Envelope::new(0.5, 0.7, -4., -3.)), 3.0);
        // corner to corner
        assert_relative_eq!(a.distance(&Envelope::new(4., 5., 5., 6.)), 5.0);
        assert_eq!(a.distance(&Envelope::new(1., 2., 1., 2.)), 0.0);
        assert_eq!(a.distance(&Envelope::null()), f64::INFINITY);
    }

    #[test]
    fn compare_nulls_first() {
        let null = Envelope::null();
        let a = Envelope::new(0., 1., 0., 1.);
        let b = Envelope::new(0., 2., 0., 1.);
        let c = Envelope::new(0., 1., 1., 1.);

        assert_eq!(null.compare(&Envelope::null()), Ordering::Equal);
        assert_eq!(null.compare(&a), Ordering::Less);
        assert_eq!(a.compare(&null), Ordering::Greater);
        // min_x, min_y, max_x, max_y
        assert_eq!(a.compare(&b), Ordering::Less);
        assert_eq!(b.compare(&c), Ordering::Less);
        assert_eq!(a.compare(&a.clone()), Ordering::Equal);

        let mut sorted = vec![c.clone(), null.clone(), b.clone(), a.clone()];
        sorted.sort_by(|x, y| x.compare(y));
        assert_eq!(sorted, vec![null, a, b, c]);
    }

    #[test]
    fn null_envelopes_are_equal() {
        let mut inverted = Envelope::new(0., 1., 0., 1.);
        inverted.expand_by(-1., -1.);
        assert_eq!(inverted, Envelope::null());
        assert_ne!(Envelope::null(), Envelope::new(0., 0., 0., 0.));

        assert_eq!(hash(&inverted), hash(&Envelope::null()));
        assert_eq!(
            hash(&Envelope::new(0., -0., 1., 1.)),
            hash(&Envelope::new(-0., 0., 1., 1.))
        );
        assert_ne!(hash(&Envelope::null()), hash(&Envelope::new(0., 0., 0., 0.)));
    }

    fn hash(env: &Envelope) -> u64 {
        let mut hasher = DefaultHasher::new();
        env.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn measures() {
        let env = Envelope::new(0., 3., 0., 4.);
        assert_eq!(env.width(), 3.);
        assert_eq!(env.height(), 4.);
        assert_eq!(env.area(), 12.);
        assert_eq!(env.diameter(), 5.);
        assert_eq!(env.min_extent(), 3.);
        assert_eq!(env.max_extent(), 4.);
        assert_eq!(env.centre(), Some(Coordinate::new(1.5, 2.)));
    }

    #[test]
    fn segment_predicates() {
        let p1 = Coordinate::new(0., 10.);
        let p2 = Coordinate::new(10., 0.);
        assert!(Envelope::segment_intersects_point(&p1, &p2, &Coordinate::new(5., 5.)));
        assert!(Envelope::segment_intersects_point(&p2, &p1, &(10., 10.)));
        assert!(!Envelope::segment_intersects_point(&p1, &p2, &(11., 5.)));

        assert!(Envelope::segments_envelopes_intersect(&p1, &p2, &(10., 10.), &(20., 20.)));
        assert!(!Envelope::segments_envelopes_intersect(&p1, &p2, &(11., 0.), &(20., 20.)));
        assert!(!Envelope::segments_envelopes_intersect(&p1, &p2, &(0., 11.), &(5., 20.)));

        let env = Envelope::new(0., 1., 0., 1.);
        assert!(env.intersects_segment(&(2., 0.5), &(0.5, 2.)));
        assert!(!env.intersects_segment(&(2., 0.5), &(3., 2.)));
        assert!(!Envelope::null().intersects_segment(&(0., 0.), &(1., 1.)));
    }

    #[test]
    fn collect_from_coords() {
        let env: Envelope = [(1., 5.), (3., 2.), (0., 9.)].into_iter().collect();
        assert_eq!(env, Envelope::new(0., 3., 2., 9.));
    }

    #[test]
    fn rect_round_trip() {
        let env = Envelope::new(1., 2., 3., 4.);
        let rect: Option<Rect> = (&env).into();
        assert_eq!(Envelope::from(rect.unwrap()), env);
        assert_eq!(Option::<Rect>::from(&Envelope::null()), None);
    }

    #[test]
    fn display() {
        assert_eq!(Envelope::new(0., 1.5, 2., 3.).to_string(), "Env[0 : 1.5, 2 : 3]");
    }
}
