pub(crate) mod markers;
pub(crate) mod scheduler;
