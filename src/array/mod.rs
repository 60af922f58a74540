//! Contains the packed coordinate storage backing point-based geometries.

pub use coord::{
    CachePolicy, Ordinate, PackedCoordBuffer, PackedCoordBufferBuilder, SequenceOptions,
};

pub mod coord;
