use crate::array::PackedCoordBuffer;
use crate::datatypes::Dimension;

/// `[(1, 5), (3, 2), (0, 9)]`
pub(crate) fn xy_sequence() -> PackedCoordBuffer {
    PackedCoordBuffer::new(vec![1., 5., 3., 2., 0., 9.], Dimension::XY.into())
}

/// `[(1, 2, 3, 4), (5, 6, 7, 8)]`
pub(crate) fn xyzm_sequence() -> PackedCoordBuffer {
    PackedCoordBuffer::new(
        vec![1., 2., 3., 4., 5., 6., 7., 8.],
        Dimension::XYZM.into(),
    )
}
