use std::sync::Arc;

use crate::datatypes::Dimension;
use crate::envelope::Envelope;
use crate::scalar::Coordinate;

/// The capability set geometry types expect from their coordinate storage.
///
/// Ordinate indices follow the order x, y, then z, then m. Index and ordinate arguments are
/// preconditions: an out of range index is a caller bug and panics rather than returning a
/// default.
pub trait CoordinateSequence {
    /// Number of coordinates in the sequence.
    fn size(&self) -> usize;

    /// Ordinate layout of every coordinate.
    fn dimension(&self) -> Dimension;

    /// Number of ordinates per coordinate.
    fn ordinate_count(&self) -> usize {
        self.dimension().size()
    }

    /// Number of measure ordinates per coordinate.
    fn measures(&self) -> usize {
        self.dimension().measures()
    }

    fn has_z(&self) -> bool {
        self.dimension().has_z()
    }

    fn has_m(&self) -> bool {
        self.dimension().has_m()
    }

    /// Ordinate `ordinate` of coordinate `index`.
    fn get_ordinate(&self, index: usize, ordinate: usize) -> f64;

    /// Overwrite ordinate `ordinate` of coordinate `index`.
    fn set_ordinate(&mut self, index: usize, ordinate: usize, value: f64);

    fn get_x(&self, index: usize) -> f64 {
        self.get_ordinate(index, 0)
    }

    fn get_y(&self, index: usize) -> f64 {
        self.get_ordinate(index, 1)
    }

    /// The coordinate at `index`, possibly read from a shared cache.
    fn get_point(&self, index: usize) -> Coordinate;

    /// The coordinate at `index`, always freshly read from storage.
    fn get_point_copy(&self, index: usize) -> Coordinate;

    /// Every coordinate in the sequence as one shared array.
    fn to_point_array(&self) -> Arc<[Coordinate]>;

    /// Enlarge `env` to cover every coordinate, returning it for chaining.
    fn expand_envelope<'e>(&self, env: &'e mut Envelope) -> &'e mut Envelope {
        for i in 0..self.size() {
            env.expand_to_include(self.get_x(i), self.get_y(i));
        }
        env
    }

    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}

/// Convert GeoKernel storage into the equivalent Arrow array.
pub trait IntoArrow {
    type ArrowArray;

    fn into_arrow(self) -> Self::ArrowArray;
}
