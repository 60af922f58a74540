pub(crate) mod packed;
