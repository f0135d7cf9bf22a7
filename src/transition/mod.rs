pub(crate) mod controller;
pub(crate) mod navigation;
pub(crate) mod phase;
