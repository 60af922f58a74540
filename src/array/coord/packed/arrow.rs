use std::sync::Arc;

use arrow_array::{Array, FixedSizeListArray, Float64Array};
use arrow_buffer::ScalarBuffer;
use arrow_schema::{DataType, Field};

use crate::array::coord::{PackedCoordBuffer, SequenceOptions};
use crate::datatypes::Dimension;
use crate::error::{GeoKernelError, Result};
use crate::trait_::IntoArrow;

fn values_field(dim: Dimension) -> Field {
    let name = match dim {
        Dimension::XY => "xy",
        Dimension::XYZ => "xyz",
        Dimension::XYM => "xym",
        Dimension::XYZM => "xyzm",
    };
    Field::new(name, DataType::Float64, false)
}

fn dim_from_field(field: &Field) -> Result<Dimension> {
    let dim = match field.name().as_str() {
        "xy" => Dimension::XY,
        "xyz" => Dimension::XYZ,
        "xym" => Dimension::XYM,
        "xyzm" => Dimension::XYZM,
        name => {
            return Err(GeoKernelError::IncorrectType(
                format!("Invalid interleaved field name: {name}").into(),
            ))
        }
    };
    Ok(dim)
}

impl PackedCoordBuffer<f64> {
    /// The ordinates as a flat Arrow array, copying the buffer.
    pub fn values_array(&self) -> Float64Array {
        Float64Array::new(ScalarBuffer::from(self.coords.clone()), None)
    }

    /// Import from an Arrow interleaved coordinate array with the given options.
    ///
    /// The dimension is taken from the array's child field name, overriding `options.dim`.
    pub fn try_from_arrow(value: &FixedSizeListArray, options: SequenceOptions) -> Result<Self> {
        let DataType::FixedSizeList(field, size) = value.data_type() else {
            return Err(GeoKernelError::IncorrectType(
                "Expected a FixedSizeList coordinate array".into(),
            ));
        };
        let dim = dim_from_field(field)?;
        if *size as usize != dim.size() {
            return Err(GeoKernelError::IncorrectType(
                format!("Expected list size {} for {dim} coordinates, got {size}", dim.size())
                    .into(),
            ));
        }
        if value.null_count() > 0 {
            return Err(GeoKernelError::IncorrectType(
                "Packed coordinate arrays cannot hold null coordinates".into(),
            ));
        }

        let offset = value.offset() * dim.size();
        let len = value.len() * dim.size();
        let coords = value
            .values()
            .as_any()
            .downcast_ref::<Float64Array>()
            .ok_or(GeoKernelError::IncorrectType(
                "Expected Float64 coordinate values".into(),
            ))?
            .values()
            .slice(offset, len);

        Self::try_new(coords.to_vec(), options.with_dim(dim))
    }
}

impl IntoArrow for PackedCoordBuffer<f64> {
    type ArrowArray = FixedSizeListArray;

    fn into_arrow(self) -> Self::ArrowArray {
        let dim = self.dim;
        let values = Float64Array::new(ScalarBuffer::from(self.into_inner()), None);
        FixedSizeListArray::new(
            Arc::new(values_field(dim)),
            dim.size() as i32,
            Arc::new(values),
            None,
        )
    }
}

impl From<PackedCoordBuffer<f64>> for FixedSizeListArray {
    fn from(value: PackedCoordBuffer<f64>) -> Self {
        value.into_arrow()
    }
}

impl TryFrom<&FixedSizeListArray> for PackedCoordBuffer<f64> {
    type Error = GeoKernelError;

    fn try_from(value: &FixedSizeListArray) -> std::result::Result<Self, Self::Error> {
        Self::try_from_arrow(value, SequenceOptions::default())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::packed;
    use crate::trait_::CoordinateSequence;

    #[test]
    fn arrow_round_trip_keeps_dimension() {
        let seq = packed::xyzm_sequence();
        let arr: FixedSizeListArray = seq.clone().into();
        assert_eq!(arr.len(), 2);
        assert_eq!(arr.value_length(), 4);

        let back = PackedCoordBuffer::<f64>::try_from(&arr).unwrap();
        assert_eq!(back, seq);
        assert_eq!(back.dimension(), Dimension::XYZM);
    }

    #[test]
    fn sliced_array_imports_only_the_slice() {
        let arr = packed::xy_sequence().into_arrow().slice(1, 1);
        let back = PackedCoordBuffer::<f64>::try_from(&arr).unwrap();
        assert_eq!(back.coords(), &[3., 2.]);
    }

    #[test]
    fn values_array() {
        let values = packed::xy_sequence().values_array();
        assert_eq!(values.len(), 6);
        assert_eq!(values.value(5), 9.);
    }
}
