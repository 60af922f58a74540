use crate::array::coord::{Ordinate, PackedCoordBuffer, SequenceOptions};
use crate::error::{GeoKernelError, Result};
use crate::geo_traits::CoordTrait;

/// Appends coordinates to a growing buffer of `T` ordinates, then hands the buffer over to a
/// [`PackedCoordBuffer`] without copying.
///
/// Ordinates are laid out the same way as in the finished sequence: `xyxyxy` for XY, `xyzxyz` for
/// XYZ and so on.
#[derive(Debug, Clone)]
pub struct PackedCoordBufferBuilder<T: Ordinate = f64> {
    pub(crate) coords: Vec<T>,
    options: SequenceOptions,
}

impl<T: Ordinate> PackedCoordBufferBuilder<T> {
    /// An empty builder for coordinates of `options.dim`.
    pub fn new(options: SequenceOptions) -> Self {
        Self::with_capacity(0, options)
    }

    /// An empty builder whose buffer already holds `capacity` coordinates' worth of ordinates.
    pub fn with_capacity(capacity: usize, options: SequenceOptions) -> Self {
        Self {
            coords: Vec::with_capacity(capacity * options.dim.size()),
            options,
        }
    }

    /// A builder already holding `len` coordinates, every ordinate `T::default()`.
    pub fn initialize(len: usize, options: SequenceOptions) -> Self {
        Self {
            coords: vec![T::default(); len * options.dim.size()],
            options,
        }
    }

    /// Grow the ordinate buffer so `additional` more coordinates fit, possibly with slack.
    pub fn reserve(&mut self, additional: usize) {
        self.coords.reserve(additional * self.options.dim.size());
    }

    /// Like [`reserve`](Self::reserve), asking the allocator for no slack.
    pub fn reserve_exact(&mut self, additional: usize) {
        self.coords.reserve_exact(additional * self.options.dim.size());
    }

    /// Whole coordinates that fit in the ordinate buffer before it reallocates.
    pub fn capacity(&self) -> usize {
        self.coords.capacity() / self.options.dim.size()
    }

    /// Coordinates pushed so far.
    pub fn len(&self) -> usize {
        self.coords.len() / self.options.dim.size()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Append `coord`, narrowing each ordinate to `T`.
    ///
    /// ## Panics
    ///
    /// - If `coord` does not match the builder's dimension. See
    ///   [`try_push_coord`](Self::try_push_coord).
    pub fn push_coord(&mut self, coord: &impl CoordTrait<T = f64>) {
        self.try_push_coord(coord).unwrap()
    }

    /// Append `coord`, narrowing each ordinate to `T`.
    ///
    /// ## Errors
    ///
    /// - [`DimensionMismatch`](GeoKernelError::DimensionMismatch) if `coord` has a different
    ///   number of ordinates.
    /// - [`IncompatibleDimension`](GeoKernelError::IncompatibleDimension) if `coord` reports a
    ///   layout with the same count but different ordinates, e.g. XYZ into an XYM builder.
    pub fn try_push_coord(&mut self, coord: &impl CoordTrait<T = f64>) -> Result<()> {
        let size = self.options.dim.size();
        if coord.dim() != size {
            return Err(GeoKernelError::DimensionMismatch {
                expected: self.options.dim,
                found: coord.dim(),
            });
        }
        if let Some(dim) = coord.dimension() {
            if dim != self.options.dim {
                return Err(GeoKernelError::IncompatibleDimension {
                    expected: self.options.dim,
                    found: dim,
                });
            }
        }

        self.coords.push(T::from_f64(coord.x()));
        self.coords.push(T::from_f64(coord.y()));
        for n in 2..size {
            self.coords.push(T::from_f64(coord.nth_unchecked(n)));
        }
        Ok(())
    }

    /// Append a coordinate whose ordinates are all NaN.
    pub fn push_nan_coord(&mut self) {
        for _ in 0..self.options.dim.size() {
            self.coords.push(T::from_f64(f64::NAN));
        }
    }

    /// A builder holding every coordinate of `coords`, failing on the first that does not fit.
    pub fn from_coords<'a>(
        coords: impl ExactSizeIterator<Item = &'a (impl CoordTrait<T = f64> + 'a)>,
        options: SequenceOptions,
    ) -> Result<Self> {
        let mut buffer = PackedCoordBufferBuilder::with_capacity(coords.len(), options);
        for coord in coords {
            buffer.try_push_coord(coord)?;
        }
        Ok(buffer)
    }

    pub fn finish(self) -> PackedCoordBuffer<T> {
        self.into()
    }
}

impl<T: Ordinate> From<PackedCoordBufferBuilder<T>> for PackedCoordBuffer<T> {
    fn from(value: PackedCoordBufferBuilder<T>) -> Self {
        // the builder only ever grows by whole coordinates
        PackedCoordBuffer::new(value.coords, value.options)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::datatypes::Dimension;
    use crate::scalar::Coordinate;
    use crate::trait_::CoordinateSequence;

    #[test]
    fn push_coords() {
        let mut builder = PackedCoordBufferBuilder::<f64>::new(Dimension::XYZ.into());
        builder.push_coord(&Coordinate::new_xyz(1., 2., 3.));
        builder.push_coord(&[4., 5., 6.]);
        builder.push_nan_coord();
        assert_eq!(builder.len(), 3);

        let seq = builder.finish();
        assert_eq!(seq.get_z(1), Some(6.));
        assert!(seq.get_x(2).is_nan());
    }

    #[test]
    fn rejects_other_dimension() {
        let mut builder = PackedCoordBufferBuilder::<f64>::new(Dimension::XY.into());
        let err = builder
            .try_push_coord(&Coordinate::new_xyz(1., 2., 3.))
            .unwrap_err();
        assert!(matches!(
            err,
            GeoKernelError::DimensionMismatch { expected: Dimension::XY, found: 3 }
        ));
        assert!(builder.is_empty());
    }

    #[test]
    fn rejects_z_for_m() {
        let mut xym = PackedCoordBufferBuilder::<f64>::new(Dimension::XYM.into());
        let err = xym
            .try_push_coord(&Coordinate::new_xyz(1., 2., 3.))
            .unwrap_err();
        assert!(matches!(
            err,
            GeoKernelError::IncompatibleDimension {
                expected: Dimension::XYM,
                found: Dimension::XYZ
            }
        ));
        assert!(xym.is_empty());

        let mut xyz = PackedCoordBufferBuilder::<f64>::new(Dimension::XYZ.into());
        assert!(xyz.try_push_coord(&Coordinate::new_xym(1., 2., 3.)).is_err());

        // a view into an XYZ buffer carries its layout too
        let source = PackedCoordBuffer::<f64>::new(vec![1., 2., 3.], Dimension::XYZ.into());
        assert!(xym.try_push_coord(&source.value(0)).is_err());
        assert!(xyz.try_push_coord(&source.value(0)).is_ok());

        // arrays have no layout, only a count
        xym.push_coord(&[1., 2., 3.]);
        assert_eq!(xym.finish().get_m(0), Some(3.));
    }

    #[test]
    fn from_geo_coords() {
        let coords = [geo::coord! { x: 1., y: 5. }, geo::coord! { x: 3., y: 2. }];
        let seq = PackedCoordBuffer::<f32>::from_coords(&coords, Dimension::XY.into()).unwrap();
        assert_eq!(seq.size(), 2);
        assert_eq!(seq.get_point(1), Coordinate::new(3., 2.));
    }

    #[test]
    fn capacity() {
        let mut builder = PackedCoordBufferBuilder::<f64>::with_capacity(4, Dimension::XYZM.into());
        assert!(builder.capacity() >= 4);
        builder.reserve_exact(10);
        assert!(builder.capacity() >= 10);
        assert_eq!(PackedCoordBufferBuilder::<f64>::initialize(3, Dimension::XY.into()).len(), 3);
    }
}
