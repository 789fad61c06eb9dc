//! Violation reporting and diagnostics.
//!
//! This module provides:
//! - **Violation records**: what went wrong, where, and which code
//! - **Constraint handlers**: swappable policy for violations (log, panic,
//!   ignore, collect)
//! - **Emission backend**: rustc-style stderr diagnostics and optional `log`
//!   integration
//!
//! ## Diagnostic Codes
//!
//! | Code  | Meaning                                   |
//! |-------|-------------------------------------------|
//! | BF0xx | Fill contract violations                  |
//! | BF1xx | Capacity policy warnings                  |

pub mod emit;
pub mod handler;
pub mod kind;

// Re-export core types
pub use emit::{is_suppressed, suppress_diagnostics};
pub use handler::{
    AbortHandler, CapturedViolation, CollectingHandler, SilentHandler, StderrHandler,
    ViolationHandler,
};
pub use kind::{Diagnostic, DiagnosticKind, FillError, FillResult, Violation};

// Re-export predefined diagnostics
pub use kind::{BF001, BF002, BF003, BF004, BF005, BF006, BF101};
