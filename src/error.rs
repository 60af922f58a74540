//! Defines [`GeoKernelError`], representing all errors returned by this crate.

use std::borrow::Cow;
use std::fmt::Debug;

use arrow_schema::ArrowError;
use thiserror::Error;

use crate::datatypes::Dimension;

/// Enum with all errors in this crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum GeoKernelError {
    /// A packed buffer whose length is not a multiple of the coordinate stride.
    #[error("Packed array of length {len} does not contain an integral number of {dim} coordinates")]
    InvalidBufferLength {
        /// Length of the rejected buffer.
        len: usize,
        /// Dimension the buffer was supposed to hold.
        dim: Dimension,
    },

    /// A coordinate did not have the dimension of the container it was pushed into.
    #[error("Coordinate dimension must be {expected} for this buffer; got {found}")]
    DimensionMismatch {
        /// Dimension of the container.
        expected: Dimension,
        /// Number of ordinates of the rejected coordinate.
        found: usize,
    },

    /// A coordinate had the right number of ordinates but a different layout, such as XYZ
    /// pushed into an XYM container.
    #[error("Coordinate dimension must be {expected} for this buffer; got {found}")]
    IncompatibleDimension {
        /// Dimension of the container.
        expected: Dimension,
        /// Dimension of the rejected coordinate.
        found: Dimension,
    },

    /// Incorrect type was passed to an operation.
    #[error("Incorrect type passed to operation: {0}")]
    IncorrectType(Cow<'static, str>),

    /// General error.
    #[error("General error: {0}")]
    General(String),

    /// [ArrowError]
    #[error(transparent)]
    Arrow(#[from] ArrowError),
}

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, GeoKernelError>;

impl From<GeoKernelError> for ArrowError {
    fn from(err: GeoKernelError) -> Self {
        match err {
            GeoKernelError::Arrow(err) => err,
            _ => ArrowError::ExternalError(Box::new(err)),
        }
    }
}
