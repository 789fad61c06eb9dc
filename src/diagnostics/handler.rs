//! The constraint-violation handler hook.
//!
//! Every contract violation is reported to a [`ViolationHandler`] exactly once
//! before the fill entry point returns. The handler decides policy (log,
//! panic, ignore, collect); the fill itself only ever communicates failure
//! through its return value.

use crate::sync::mutex::Mutex;

use super::emit;
use super::kind::{FillError, Violation};

/// Process-wide swappable behavior for constraint violations.
///
/// Handlers are injected into a [`BoundedFiller`] and invoked synchronously,
/// at most once per call, only on a violation path. Implementations must not
/// assume the reported pointer is dereferenceable.
///
/// [`BoundedFiller`]: crate::api::fill::BoundedFiller
pub trait ViolationHandler: Send + Sync {
    /// Handle a reported violation.
    fn report(&self, violation: &Violation);
}

/// The default handler: formats the violation through the diagnostics
/// emission backend (stderr in debug builds, `log` with the `log` feature).
#[derive(Debug, Default)]
pub struct StderrHandler;

impl ViolationHandler for StderrHandler {
    fn report(&self, violation: &Violation) {
        emit::emit_violation(violation);
    }
}

/// A handler that discards violations.
///
/// The return code still carries the error; this only silences reporting.
#[derive(Debug, Default)]
pub struct SilentHandler;

impl ViolationHandler for SilentHandler {
    fn report(&self, _violation: &Violation) {}
}

/// A handler that panics on any violation (useful for CI and debug runs,
/// analogous to safeclib's abort handler).
///
/// The panic happens inside the handler, never inside the fill itself, so
/// swapping this handler out restores the pure return-code contract.
#[derive(Debug, Default)]
pub struct AbortHandler;

impl ViolationHandler for AbortHandler {
    fn report(&self, violation: &Violation) {
        emit::emit_violation(violation);
        panic!(
            "[boundfill][{}] {}: {}",
            violation.error.code(),
            violation.op,
            violation.error.message()
        );
    }
}

/// A violation captured by [`CollectingHandler`].
///
/// The destination is recorded as an address so captures can cross threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapturedViolation {
    /// Entry point that reported the violation.
    pub op: &'static str,
    /// Address of the offending destination, or `None` for a null destination.
    pub dest_addr: Option<usize>,
    /// Which contract was broken.
    pub error: FillError,
}

/// A handler that records violations for later inspection.
///
/// Intended for tests asserting exactly which violations were reported.
pub struct CollectingHandler {
    records: Mutex<Vec<CapturedViolation>>,
}

impl Default for CollectingHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl CollectingHandler {
    /// Create a new collecting handler.
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
        }
    }

    /// Get all captured violations.
    pub fn captured(&self) -> Vec<CapturedViolation> {
        self.records.lock().clone()
    }

    /// Number of captured violations.
    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    /// Whether nothing has been captured yet.
    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    /// Clear captured violations.
    pub fn clear(&self) {
        self.records.lock().clear();
    }
}

impl ViolationHandler for CollectingHandler {
    fn report(&self, violation: &Violation) {
        self.records.lock().push(CapturedViolation {
            op: violation.op,
            dest_addr: violation.dest_addr(),
            error: violation.error,
        });
    }
}
