mod array;
mod arrow;
mod builder;

pub use array::PackedCoordBuffer;
pub use builder::PackedCoordBufferBuilder;
