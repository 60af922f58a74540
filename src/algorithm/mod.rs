//! Algorithms on coordinates that live outside the envelope and sequence types.

pub mod geodetic;
