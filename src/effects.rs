pub(crate) mod effect;
pub(crate) mod jitter;
pub(crate) mod registry;
