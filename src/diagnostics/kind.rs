//! Violation kinds and core diagnostic types.
//!
//! Mirrors rustc's diagnostic levels for familiar UX.

use std::ptr::NonNull;

/// A runtime-constraint violation detected by one of the fill entry points.
///
/// Every violation is handed to the configured [`ViolationHandler`] exactly
/// once before the entry point returns its error code.
///
/// [`ViolationHandler`]: crate::diagnostics::ViolationHandler
#[derive(Debug, Clone, Copy)]
pub struct Violation {
    /// Entry point that detected the violation (e.g. `"fill32"`).
    pub op: &'static str,
    /// The offending destination pointer, or `None` when the destination
    /// itself was null.
    pub dest: Option<NonNull<u8>>,
    /// Which contract was broken.
    pub error: FillError,
}

impl Violation {
    /// The static diagnostic message for this violation, suitable for
    /// logging and telemetry.
    pub const fn message(&self) -> &'static str {
        self.error.message()
    }

    /// The predefined diagnostic for this violation's error kind.
    pub fn diagnostic(&self) -> &'static Diagnostic {
        self.error.diagnostic()
    }

    /// The destination address, for logging.
    pub fn dest_addr(&self) -> Option<usize> {
        self.dest.map(|p| p.as_ptr() as usize)
    }
}

/// The closed set of fill contract violations.
///
/// Codes map onto safeclib's errno values: `NullDestination` is `ESNULLP`,
/// the capacity and count limit violations are `ESLEMAX`,
/// `DeclaredCapacityMismatch` is `ESLEWRNG` and `CapacityInsufficient`
/// is `ESNOSPC`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FillError {
    /// The destination pointer is null. Nothing was written.
    NullDestination,
    /// The declared capacity exceeds the absolute region limit and no
    /// trustworthy static capacity was available. Nothing was written.
    CapacityTooLarge,
    /// The declared capacity exceeds the destination's known true size.
    /// Nothing was written.
    CapacityExceedsStatic,
    /// The declared capacity differs from the destination's known true size
    /// and the strict capacity policy is in effect. Nothing was written.
    DeclaredCapacityMismatch,
    /// The requested word count exceeds the absolute per-width limit.
    /// The write was clamped to what the (valid) capacity allows.
    CountTooLarge,
    /// The requested word count does not fit the declared capacity.
    /// The write was clamped to `dmax / width` words.
    CapacityInsufficient,
}

impl FillError {
    /// The diagnostic code for this error (e.g. `"BF001"`).
    pub const fn code(self) -> &'static str {
        self.diagnostic().code
    }

    /// The static diagnostic message for this error.
    pub const fn message(self) -> &'static str {
        self.diagnostic().message
    }

    /// The predefined diagnostic for this error.
    pub const fn diagnostic(self) -> &'static Diagnostic {
        match self {
            FillError::NullDestination => &BF001,
            FillError::CapacityTooLarge => &BF002,
            FillError::CapacityExceedsStatic => &BF003,
            FillError::DeclaredCapacityMismatch => &BF004,
            FillError::CountTooLarge => &BF005,
            FillError::CapacityInsufficient => &BF006,
        }
    }

    /// Whether this violation still performs a clamped write.
    ///
    /// Count violations leave the buffer maximally filled up to its trusted
    /// capacity; every other violation writes nothing.
    pub const fn is_degraded_write(self) -> bool {
        matches!(
            self,
            FillError::CountTooLarge | FillError::CapacityInsufficient
        )
    }
}

impl std::fmt::Display for FillError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code(), self.message())
    }
}

impl std::error::Error for FillError {}

/// Result of a fill operation.
///
/// `Ok` carries the number of words written. On `Err`, whether a clamped
/// write happened is determined by [`FillError::is_degraded_write`].
pub type FillResult = Result<usize, FillError>;

/// The severity level of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// A hard error - a fill contract was definitely violated.
    Error,
    /// A warning - something is probably wrong but the call proceeded.
    Warning,
}

impl DiagnosticKind {
    /// Get the display prefix for this kind.
    pub fn prefix(&self) -> &'static str {
        match self {
            DiagnosticKind::Error => "error",
            DiagnosticKind::Warning => "warning",
        }
    }
}

/// A diagnostic message with code, message, and optional context.
///
/// Diagnostic codes follow the pattern:
/// - `BF0xx` - fill contract violations (one per [`FillError`] variant)
/// - `BF1xx` - capacity policy warnings
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// Severity level.
    pub kind: DiagnosticKind,
    /// Diagnostic code (e.g., "BF001").
    pub code: &'static str,
    /// Primary message.
    pub message: &'static str,
    /// Optional additional context.
    pub note: Option<&'static str>,
    /// Optional fix suggestion.
    pub help: Option<&'static str>,
}

impl Diagnostic {
    /// Create a new error diagnostic.
    pub const fn error(code: &'static str, message: &'static str) -> Self {
        Self {
            kind: DiagnosticKind::Error,
            code,
            message,
            note: None,
            help: None,
        }
    }

    /// Create a new warning diagnostic.
    pub const fn warning(code: &'static str, message: &'static str) -> Self {
        Self {
            kind: DiagnosticKind::Warning,
            code,
            message,
            note: None,
            help: None,
        }
    }

    /// Add a note to this diagnostic.
    pub const fn with_note(mut self, note: &'static str) -> Self {
        self.note = Some(note);
        self
    }

    /// Add a help message to this diagnostic.
    pub const fn with_help(mut self, help: &'static str) -> Self {
        self.help = Some(help);
        self
    }
}

// =============================================================================
// Predefined diagnostics (BF0xx - fill contract violations)
// =============================================================================

/// BF001: destination pointer is null.
pub const BF001: Diagnostic = Diagnostic::error(
    "BF001",
    "destination pointer is null"
).with_note("a null destination is rejected before any other check, including n == 0")
 .with_help("pass a valid pointer, or use the slice entry points which cannot be null");

/// BF002: declared capacity exceeds the absolute region limit.
pub const BF002: Diagnostic = Diagnostic::error(
    "BF002",
    "declared capacity exceeds the absolute region limit"
).with_note("without a static capacity the declared dmax cannot be trusted past the limit")
 .with_help("check dmax for corruption, or raise max_region_bytes in FillConfig");

/// BF003: declared capacity exceeds the destination's true size.
pub const BF003: Diagnostic = Diagnostic::error(
    "BF003",
    "declared capacity exceeds the destination's true size"
).with_note("dmax claims more room than the destination actually has")
 .with_help("pass dmax equal to the destination size in bytes");

/// BF004: declared capacity does not match the destination's true size.
pub const BF004: Diagnostic = Diagnostic::error(
    "BF004",
    "declared capacity does not match the destination's true size"
).with_note("the strict capacity policy requires dmax to equal the destination size exactly")
 .with_help("fix the dmax argument, or use CapacityPolicy::Lenient to let the true size govern");

/// BF005: requested word count exceeds the per-width limit.
pub const BF005: Diagnostic = Diagnostic::error(
    "BF005",
    "requested word count exceeds the per-width limit"
).with_note("n is larger than max_region_bytes divided by the word width")
 .with_help("check n for corruption; the buffer was still filled up to its capacity");

/// BF006: requested words do not fit the declared capacity.
pub const BF006: Diagnostic = Diagnostic::error(
    "BF006",
    "requested words do not fit the declared capacity"
).with_note("n words at this width would overrun dmax bytes")
 .with_help("the buffer was filled up to dmax; reduce n or grow the destination");

// =============================================================================
// Predefined diagnostics (BF1xx - capacity policy warnings)
// =============================================================================

/// BF101: declared capacity differs from the known true size (lenient policy).
pub const BF101: Diagnostic = Diagnostic::warning(
    "BF101",
    "declared capacity differs from the destination's true size"
).with_note("the true size was used instead of dmax")
 .with_help("pass dmax equal to the destination size, or enable CapacityPolicy::Strict to make this an error");
