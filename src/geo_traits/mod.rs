//! Traits for reading coordinates and bounding boxes independently of their storage.

pub use coord::CoordTrait;
pub use envelope::EnvelopeTrait;

mod coord;
mod envelope;
mod rect;
