//! Geometric primitives for working with coordinates: bounding envelopes, packed coordinate
//! sequences and local lon/lat approximations.
//!
//! - [`Envelope`] is an axis-aligned bounding box with an explicit null (empty) state.
//! - [`PackedCoordBuffer`](array::PackedCoordBuffer) stores a list of coordinates in one flat
//!   buffer and materializes points from it on demand.
//! - [`IndexedEnvelope`](indexed::IndexedEnvelope) is an envelope over a sequence that records the
//!   positions of its extrema instead of their values.
//! - [`algorithm::geodetic`] has short-span azimuth, distance and projection functions on lon/lat.

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(not(test), deny(unused_crate_dependencies))]

pub use envelope::Envelope;
pub use geo_traits::{CoordTrait, EnvelopeTrait};
pub use scalar::Coordinate;
pub use trait_::{CoordinateSequence, IntoArrow};

pub mod algorithm;
pub mod array;
pub mod datatypes;
pub mod envelope;
pub mod error;
pub mod geo_traits;
pub mod indexed;
pub mod scalar;
#[cfg(test)]
pub(crate) mod test;
pub mod trait_;
