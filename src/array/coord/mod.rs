//! Packed storage for coordinate sequences.
//!
//! Coordinates are stored _interleaved_ in one flat buffer whose stride is the
//! [`Dimension`](crate::datatypes::Dimension) size, with the storage precision chosen by the
//! [`Ordinate`] type parameter.

pub(crate) mod cache;
mod options;
mod ordinate;
pub mod packed;

pub use options::{CachePolicy, SequenceOptions};
pub use ordinate::Ordinate;
pub use packed::{PackedCoordBuffer, PackedCoordBufferBuilder};
