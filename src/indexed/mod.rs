//! Envelopes that track the positions of their bounds inside a coordinate sequence rather than
//! copying the bound values.

pub use envelope::{ExtremaIndices, IndexedEnvelope};

mod envelope;
