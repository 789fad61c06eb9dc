//! The private fill engine: width seam, unchecked primitives, and the
//! validation/dispatch core.

pub(crate) mod raw;
pub(crate) mod validate;
pub(crate) mod word;
