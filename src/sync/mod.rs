//! Synchronization primitives.
//!
//! Selects between std and parking_lot mutexes for the handlers that
//! need interior mutability.

pub(crate) mod mutex;
