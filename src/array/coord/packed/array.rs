use std::fmt::Display;
use std::sync::Arc;

use crate::array::coord::cache::PointCache;
use crate::array::coord::{Ordinate, PackedCoordBufferBuilder, SequenceOptions};
use crate::datatypes::Dimension;
use crate::envelope::Envelope;
use crate::error::{GeoKernelError, Result};
use crate::geo_traits::CoordTrait;
use crate::scalar::{Coordinate, PackedCoord};
use crate::trait_::CoordinateSequence;

/// A sequence of coordinates stored interleaved (`xyxyxy`, `xyzxyz`, ...) in a single buffer.
///
/// Storing every ordinate in one flat `Vec<T>` avoids a heap object per point. Point values are
/// still available through [`CoordinateSequence`]: single points are built on demand and the
/// full array from [`to_point_array`](CoordinateSequence::to_point_array) is cached according to
/// the [`CachePolicy`](crate::array::CachePolicy) the buffer was built with. Every mutator drops
/// that cache before it returns, so a read never observes ordinates older than the last write.
///
/// The buffer takes no locks. It can move between threads but is not `Sync`; wrap it in a lock of
/// your own to share it.
///
/// `T` selects the storage precision. With `f32` or [`half::f16`] every written value is rounded
/// to the storage type.
///
/// ```
/// use geokernel::array::{PackedCoordBuffer, SequenceOptions};
/// use geokernel::CoordinateSequence;
///
/// let mut seq = PackedCoordBuffer::<f64>::new(vec![1., 5., 3., 2., 0., 9.], SequenceOptions::default());
/// assert_eq!(seq.size(), 3);
/// seq.set_ordinate(1, 0, 4.);
/// assert_eq!(seq.get_point(1).x, 4.);
/// ```
#[derive(Debug, Clone)]
pub struct PackedCoordBuffer<T: Ordinate = f64> {
    pub(crate) coords: Vec<T>,
    pub(crate) dim: Dimension,
    cache: PointCache,
}

fn check<T>(coords: &[T], dim: Dimension) -> Result<()> {
    if coords.len() % dim.size() != 0 {
        tracing::debug!(len = coords.len(), %dim, "rejected packed coordinate buffer");
        return Err(GeoKernelError::InvalidBufferLength {
            len: coords.len(),
            dim,
        });
    }

    Ok(())
}

impl<T: Ordinate> PackedCoordBuffer<T> {
    /// Construct a new PackedCoordBuffer
    ///
    /// # Panics
    ///
    /// - if the buffer length is not a multiple of the dimension size
    pub fn new(coords: Vec<T>, options: SequenceOptions) -> Self {
        Self::try_new(coords, options).unwrap()
    }

    /// Construct a new PackedCoordBuffer
    ///
    /// # Errors
    ///
    /// - if the buffer length is not a multiple of the dimension size
    pub fn try_new(coords: Vec<T>, options: SequenceOptions) -> Result<Self> {
        check(&coords, options.dim)?;
        Ok(Self {
            coords,
            dim: options.dim,
            cache: PointCache::new(options.cache),
        })
    }

    /// A buffer of `size` coordinates with every ordinate set to zero.
    pub fn with_size(size: usize, options: SequenceOptions) -> Self {
        PackedCoordBufferBuilder::initialize(size, options).finish()
    }

    /// Pack a slice of coordinates. Each must have the dimension in `options`.
    pub fn from_coords(coords: &[impl CoordTrait<T = f64>], options: SequenceOptions) -> Result<Self> {
        Ok(PackedCoordBufferBuilder::from_coords(coords.iter(), options)?.finish())
    }

    /// Copy already-interleaved `f64` ordinates, rounding to `T`.
    pub fn from_f64_slice(values: &[f64], options: SequenceOptions) -> Result<Self> {
        check(values, options.dim)?;
        let coords = values.iter().map(|v| T::from_f64(*v)).collect();
        Self::try_new(coords, options)
    }

    /// Copy already-interleaved `f32` ordinates, rounding to `T`.
    pub fn from_f32_slice(values: &[f32], options: SequenceOptions) -> Result<Self> {
        check(values, options.dim)?;
        let coords = values.iter().map(|v| T::from_f64(*v as f64)).collect();
        Self::try_new(coords, options)
    }

    /// The options this buffer was constructed with.
    pub fn options(&self) -> SequenceOptions {
        SequenceOptions::new(self.dim, self.cache.policy())
    }

    /// Number of coordinates.
    pub fn len(&self) -> usize {
        self.coords.len() / self.dim.size()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    pub fn dim(&self) -> Dimension {
        self.dim
    }

    /// The raw interleaved ordinates.
    pub fn coords(&self) -> &[T] {
        &self.coords
    }

    /// Mutable access to the raw interleaved ordinates.
    ///
    /// The point cache is dropped before the slice is handed out.
    pub fn coords_mut(&mut self) -> &mut [T] {
        self.cache.invalidate();
        &mut self.coords
    }

    pub fn into_inner(self) -> Vec<T> {
        self.coords
    }

    /// A borrowed view of coordinate `i`.
    ///
    /// # Panics
    ///
    /// - if `i >= self.len()`
    pub fn value(&self, i: usize) -> PackedCoord<'_, T> {
        assert!(i < self.len(), "index {i} out of bounds for length {}", self.len());
        PackedCoord {
            coords: &self.coords,
            i,
            dim: self.dim,
        }
    }

    /// Borrowed views of every coordinate, in order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = PackedCoord<'_, T>> + '_ {
        (0..self.len()).map(|i| PackedCoord {
            coords: &self.coords,
            i,
            dim: self.dim,
        })
    }

    /// Read the flat buffer at `idx`, ignoring coordinate boundaries.
    ///
    /// `idx` is `coordinate index * dimension size + ordinate`.
    #[inline]
    pub fn get_raw(&self, idx: usize) -> f64 {
        self.coords[idx].to_f64()
    }

    /// Ordinate `ordinate` of coordinate `index` without any bounds check.
    ///
    /// # Safety
    ///
    /// `index * self.dim().size() + ordinate` must be less than `self.coords().len()`.
    #[inline]
    pub unsafe fn get_ordinate_unchecked(&self, index: usize, ordinate: usize) -> f64 {
        self.coords
            .get_unchecked(index * self.dim.size() + ordinate)
            .to_f64()
    }

    pub fn get_z(&self, index: usize) -> Option<f64> {
        self.dim.z_index().map(|n| self.get_ordinate(index, n))
    }

    pub fn get_m(&self, index: usize) -> Option<f64> {
        self.dim.m_index().map(|n| self.get_ordinate(index, n))
    }

    pub fn set_x(&mut self, index: usize, value: f64) {
        self.set_ordinate(index, 0, value);
    }

    pub fn set_y(&mut self, index: usize, value: f64) {
        self.set_ordinate(index, 1, value);
    }

    /// Overwrite `coord` in place with coordinate `index`.
    ///
    /// Ordinates this buffer does not store are left untouched on `coord`.
    pub fn get_point_into(&self, index: usize, coord: &mut Coordinate) {
        coord.x = self.get_ordinate(index, 0);
        coord.y = self.get_ordinate(index, 1);
        if let Some(z) = self.get_z(index) {
            coord.z = Some(z);
        }
        if let Some(m) = self.get_m(index) {
            coord.m = Some(m);
        }
    }

    /// Drop the cached point array without mutating anything; the next read rebuilds it.
    pub fn release_cache(&self) {
        self.cache.release();
    }

    /// Whether a materialized point array is currently cached.
    pub fn is_cached(&self) -> bool {
        self.cache.is_cached()
    }

    /// A deep copy with its own buffer and an empty cache.
    pub fn copy(&self) -> Self {
        self.clone()
    }

    fn build_point(&self, index: usize) -> Coordinate {
        self.value(index).to_coordinate()
    }

    fn build_points(&self) -> Vec<Coordinate> {
        self.iter().map(|c| c.to_coordinate()).collect()
    }
}

impl<T: Ordinate> CoordinateSequence for PackedCoordBuffer<T> {
    fn size(&self) -> usize {
        self.len()
    }

    fn dimension(&self) -> Dimension {
        self.dim
    }

    /// # Panics
    ///
    /// - if the coordinate index is out of bounds
    #[inline]
    fn get_ordinate(&self, index: usize, ordinate: usize) -> f64 {
        debug_assert!(ordinate < self.dim.size());
        self.coords[index * self.dim.size() + ordinate].to_f64()
    }

    /// # Panics
    ///
    /// - if the coordinate index is out of bounds
    #[inline]
    fn set_ordinate(&mut self, index: usize, ordinate: usize, value: f64) {
        debug_assert!(ordinate < self.dim.size());
        self.cache.invalidate();
        self.coords[index * self.dim.size() + ordinate] = T::from_f64(value);
    }

    fn get_point(&self, index: usize) -> Coordinate {
        match self.cache.get() {
            Some(coords) => coords[index],
            None => self.build_point(index),
        }
    }

    fn get_point_copy(&self, index: usize) -> Coordinate {
        self.build_point(index)
    }

    fn to_point_array(&self) -> Arc<[Coordinate]> {
        self.cache.get_or_build(|| self.build_points())
    }

    fn expand_envelope<'e>(&self, env: &'e mut Envelope) -> &'e mut Envelope {
        for coord in self.coords.chunks_exact(self.dim.size()) {
            env.expand_to_include(coord[0].to_f64(), coord[1].to_f64());
        }
        env
    }
}

impl<T: Ordinate> PartialEq for PackedCoordBuffer<T> {
    fn eq(&self, other: &Self) -> bool {
        self.dim == other.dim && self.coords == other.coords
    }
}

impl<T: Ordinate> Display for PackedCoordBuffer<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PackedCoordBuffer({})[", self.dim)?;
        for (i, coord) in self.coords.chunks_exact(self.dim.size()).enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "(")?;
            for (n, v) in coord.iter().enumerate() {
                if n > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", v.to_f64())?;
            }
            write!(f, ")")?;
        }
        write!(f, "]")
    }
}

impl<T: Ordinate> TryFrom<Vec<T>> for PackedCoordBuffer<T> {
    type Error = GeoKernelError;

    fn try_from(value: Vec<T>) -> std::result::Result<Self, Self::Error> {
        Self::try_new(value, SequenceOptions::default())
    }
}
