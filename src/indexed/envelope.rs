use std::cmp::Ordering;
use std::fmt::Display;
use std::hash::{Hash, Hasher};

use crate::envelope::{hash_bounds, Envelope};
use crate::geo_traits::EnvelopeTrait;
use crate::trait_::CoordinateSequence;

/// Positions, within one sequence, of the coordinates realizing each bound of its envelope.
///
/// These are plain indices: nothing ties them to the sequence they were computed from. Once the
/// sequence is mutated they may no longer point at the true extrema, and a sequence that shrank
/// may not contain them at all. Recompute with [`ExtremaIndices::scan`] after every mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExtremaIndices {
    pub min_x: usize,
    pub min_y: usize,
    pub max_x: usize,
    pub max_y: usize,
}

impl ExtremaIndices {
    /// Find the extrema with one pass over the sequence, `None` if it is empty.
    ///
    /// A later coordinate only replaces the current extremum on a strict comparison, so when
    /// several coordinates share an extreme value the first one wins.
    pub fn scan<S: CoordinateSequence + ?Sized>(seq: &S) -> Option<Self> {
        if seq.is_empty() {
            return None;
        }

        let mut indices = ExtremaIndices {
            min_x: 0,
            min_y: 0,
            max_x: 0,
            max_y: 0,
        };
        let mut min_x = seq.get_x(0);
        let mut max_x = min_x;
        let mut min_y = seq.get_y(0);
        let mut max_y = min_y;

        for i in 1..seq.size() {
            let x = seq.get_x(i);
            if x < min_x {
                indices.min_x = i;
                min_x = x;
            }
            if x > max_x {
                indices.max_x = i;
                max_x = x;
            }
            let y = seq.get_y(i);
            if y < min_y {
                indices.min_y = i;
                min_y = y;
            }
            if y > max_y {
                indices.max_y = i;
                max_y = y;
            }
        }
        Some(indices)
    }

    /// Read these indices through `seq`.
    ///
    /// The caller is responsible for `seq` being unchanged since the indices were scanned.
    /// Otherwise the bounds reported are the ordinates now stored at the old positions, and an
    /// index past the end of `seq` panics on first read.
    pub fn attach<S: CoordinateSequence + ?Sized>(self, seq: &S) -> IndexedEnvelope<'_, S> {
        IndexedEnvelope {
            seq,
            indices: Some(self),
        }
    }
}

/// An envelope over a coordinate sequence that stores where its bounds are, not what they are.
///
/// Construction scans the sequence once and records the index of the coordinate realizing each
/// of min x, min y, max x and max y. Every bound access then reads the sequence through that
/// index, so each predicate costs one sequence read per bound it uses.
///
/// While this value exists it borrows the sequence, so the sequence cannot change under it. The
/// indices can outlive the borrow through [`into_indices`](Self::into_indices); keeping them
/// valid across mutations is then up to the caller (see [`ExtremaIndices`]).
///
/// ```
/// use geokernel::array::{PackedCoordBuffer, SequenceOptions};
/// use geokernel::indexed::IndexedEnvelope;
/// use geokernel::EnvelopeTrait;
///
/// let seq = PackedCoordBuffer::<f64>::new(vec![1., 5., 3., 2., 0., 9.], SequenceOptions::default());
/// let env = IndexedEnvelope::new(&seq);
/// assert_eq!((env.min_x(), env.max_x(), env.min_y(), env.max_y()), (0., 3., 2., 9.));
/// ```
pub struct IndexedEnvelope<'a, S: ?Sized> {
    seq: &'a S,
    indices: Option<ExtremaIndices>,
}

impl<'a, S: CoordinateSequence + ?Sized> IndexedEnvelope<'a, S> {
    /// Scan `seq` for its extrema. An empty sequence gives the null envelope.
    pub fn new(seq: &'a S) -> Self {
        Self {
            seq,
            indices: ExtremaIndices::scan(seq),
        }
    }

    /// The recorded extrema positions, `None` when null.
    pub fn indices(&self) -> Option<ExtremaIndices> {
        self.indices
    }

    /// Release the borrow on the sequence, keeping only the recorded positions.
    pub fn into_indices(self) -> Option<ExtremaIndices> {
        self.indices
    }

    /// The sequence the bounds are read through.
    pub fn sequence(&self) -> &'a S {
        self.seq
    }
}

impl<S: ?Sized> Clone for IndexedEnvelope<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: ?Sized> Copy for IndexedEnvelope<'_, S> {}

impl<S: ?Sized> std::fmt::Debug for IndexedEnvelope<'_, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IndexedEnvelope")
            .field("indices", &self.indices)
            .finish()
    }
}

impl<S: CoordinateSequence + ?Sized> EnvelopeTrait for IndexedEnvelope<'_, S> {
    #[inline]
    fn is_null(&self) -> bool {
        self.indices.is_none()
    }

    #[inline]
    fn min_x(&self) -> f64 {
        self.indices
            .map_or(f64::NAN, |ix| self.seq.get_x(ix.min_x))
    }

    #[inline]
    fn max_x(&self) -> f64 {
        self.indices
            .map_or(f64::NAN, |ix| self.seq.get_x(ix.max_x))
    }

    #[inline]
    fn min_y(&self) -> f64 {
        self.indices
            .map_or(f64::NAN, |ix| self.seq.get_y(ix.min_y))
    }

    #[inline]
    fn max_y(&self) -> f64 {
        self.indices
            .map_or(f64::NAN, |ix| self.seq.get_y(ix.max_y))
    }
}

impl<S: CoordinateSequence + ?Sized, T: CoordinateSequence + ?Sized>
    PartialEq<IndexedEnvelope<'_, T>> for IndexedEnvelope<'_, S>
{
    fn eq(&self, other: &IndexedEnvelope<'_, T>) -> bool {
        self.bounds_eq(other)
    }
}

impl<S: CoordinateSequence + ?Sized> PartialEq<Envelope> for IndexedEnvelope<'_, S> {
    fn eq(&self, other: &Envelope) -> bool {
        self.bounds_eq(other)
    }
}

impl<S: CoordinateSequence + ?Sized> PartialEq<IndexedEnvelope<'_, S>> for Envelope {
    fn eq(&self, other: &IndexedEnvelope<'_, S>) -> bool {
        self.bounds_eq(other)
    }
}

impl<S: CoordinateSequence + ?Sized> PartialOrd<Envelope> for IndexedEnvelope<'_, S> {
    fn partial_cmp(&self, other: &Envelope) -> Option<Ordering> {
        Some(self.compare(other))
    }
}

/// Hashes the bounds read through the sequence, matching the [`Envelope`] with the same bounds.
impl<S: CoordinateSequence + ?Sized> Hash for IndexedEnvelope<'_, S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_bounds(self, state);
    }
}

impl<S: CoordinateSequence + ?Sized> Display for IndexedEnvelope<'_, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.to_envelope().fmt(f)
    }
}
