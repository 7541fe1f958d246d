pub(crate) mod legend;
pub(crate) mod ramp;
