//! The pixel stages of a pressure-map render, in pipeline order.

pub(crate) mod blur;
pub(crate) mod colorize;
pub(crate) mod dilate;
pub(crate) mod normalize;
pub(crate) mod segment;
