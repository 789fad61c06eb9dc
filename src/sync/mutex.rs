//! Mutex selection - parking_lot if available, std otherwise.
//!
//! Only the surface the violation handlers need: construct and lock.

#[cfg(feature = "parking_lot")]
pub(crate) use parking_lot::Mutex;

/// std-backed mutex with parking_lot's lock signature.
#[cfg(not(feature = "parking_lot"))]
pub(crate) struct Mutex<T>(std::sync::Mutex<T>);

#[cfg(not(feature = "parking_lot"))]
impl<T> Mutex<T> {
    /// Create a new mutex.
    pub(crate) const fn new(value: T) -> Self {
        Self(std::sync::Mutex::new(value))
    }

    /// Lock the mutex, recovering from poisoning.
    ///
    /// A panicking handler elsewhere must not wedge later captures, so a
    /// poisoned lock hands back its data instead of propagating the panic.
    pub(crate) fn lock(&self) -> std::sync::MutexGuard<'_, T> {
        self.0.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
