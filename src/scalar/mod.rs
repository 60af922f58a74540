//! Point values, owned or viewed in place inside a packed buffer.

pub use coordinate::Coordinate;
pub use packed_coord::PackedCoord;

mod coordinate;
mod packed_coord;
