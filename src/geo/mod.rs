pub(crate) mod area;
pub(crate) mod mercator;
pub(crate) mod point;
pub(crate) mod zoom;
