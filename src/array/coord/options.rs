//! Construction context for packed coordinate sequences.
//!
//! Every sequence is built from an explicit [`SequenceOptions`]; there is no process-wide default
//! factory to configure.

use serde::{Deserialize, Serialize};

use crate::datatypes::Dimension;

/// How a packed sequence keeps the point array produced by `to_point_array`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CachePolicy {
    /// Hold the materialized array until a mutator invalidates it.
    #[default]
    Retained,

    /// Hold the materialized array only weakly: once every caller has dropped its handle the
    /// array is reclaimed and the next read rebuilds it.
    Reclaimable,

    /// Never cache; every read materializes a new array.
    Disabled,
}

/// Options passed to every packed sequence constructor.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SequenceOptions {
    /// Ordinate layout, which fixes the stride of the buffer.
    pub dim: Dimension,
    /// Point array caching behavior.
    pub cache: CachePolicy,
}

impl SequenceOptions {
    pub fn new(dim: Dimension, cache: CachePolicy) -> Self {
        Self { dim, cache }
    }

    pub fn with_dim(self, dim: Dimension) -> Self {
        Self { dim, ..self }
    }

    pub fn with_cache(self, cache: CachePolicy) -> Self {
        Self { cache, ..self }
    }
}

impl From<Dimension> for SequenceOptions {
    fn from(dim: Dimension) -> Self {
        Self {
            dim,
            ..Default::default()
        }
    }
}
