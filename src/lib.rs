//! # boundfill
//!
//! Bounds-checked bulk word-fill primitives with a swappable violation
//! handler.
//!
//! A fill call validates its contracts before touching memory - destination
//! non-null, declared capacity sane, requested word count within bounds -
//! reports exactly which contract was violated, and returns a typed outcome.
//! The family covers word widths of 1, 2 and 4 bytes (`fill8`, `fill16`,
//! `fill32`), all sharing one validation core.
//!
//! ## Features
//!
//! - Raw-pointer entry points with a caller-declared capacity (`unsafe`)
//! - Safe slice entry points where the destination's true size governs
//! - Degraded writes: a too-large count is clamped to capacity, reported,
//!   and still performed, so the buffer never ends up half-defined
//! - Injectable violation handlers (stderr, panic, silent, collecting)
//! - rustc-style diagnostics with stable `BFxxx` codes
//!
//! ## Quick Start
//!
//! ```rust
//! use boundfill::{BoundedFiller, FillConfig, FillError};
//!
//! let filler = BoundedFiller::new(FillConfig::default());
//!
//! let mut buf = [0u32; 4];
//!
//! // Fits: two words written.
//! assert_eq!(filler.fill32_slice(&mut buf, 16, 0xAA, 2), Ok(2));
//! assert_eq!(buf, [0xAA, 0xAA, 0, 0]);
//!
//! // Does not fit: reported, clamped to the 4 words that do, still written.
//! boundfill::suppress_diagnostics(true);
//! assert_eq!(
//!     filler.fill32_slice(&mut buf, 16, 0xBB, 10),
//!     Err(FillError::CapacityInsufficient)
//! );
//! assert_eq!(buf, [0xBB; 4]);
//! ```
//!
//! ## Violation handling
//!
//! Violations go through a [`ViolationHandler`] before the error code is
//! returned - never silently, and never as a panic from the fill itself.
//! Swap in [`AbortHandler`] for fail-fast CI runs or [`CollectingHandler`]
//! in tests.

pub mod api;
pub mod diagnostics;

mod core;
mod sync;
mod util;

// Re-export public API at crate root for convenience
pub use api::config::{CapacityPolicy, FillConfig};
pub use api::fill::BoundedFiller;
pub use api::fill::{fill16, fill16_slice, fill32, fill32_slice, fill8, fill8_slice};

// Violation reporting
pub use diagnostics::{
    AbortHandler, CapturedViolation, CollectingHandler, SilentHandler, StderrHandler,
    ViolationHandler,
};
pub use diagnostics::{Diagnostic, DiagnosticKind, FillError, FillResult, Violation};
pub use diagnostics::{is_suppressed, suppress_diagnostics};
