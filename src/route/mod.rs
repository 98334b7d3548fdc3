pub(crate) mod geometry;
pub(crate) mod source;
pub(crate) mod synth;
