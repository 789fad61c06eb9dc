//! Diagnostic emission backend.
//!
//! Handles outputting violation reports and policy warnings to stderr or the
//! `log` crate. This is the path behind the default [`StderrHandler`]; custom
//! handlers are free to bypass it entirely.
//!
//! [`StderrHandler`]: crate::diagnostics::StderrHandler

use std::sync::atomic::{AtomicBool, Ordering};

use super::kind::{Diagnostic, Violation};

/// Global flag to suppress diagnostic output (for testing).
static DIAGNOSTICS_SUPPRESSED: AtomicBool = AtomicBool::new(false);

/// Suppress all diagnostic output.
pub fn suppress_diagnostics(suppress: bool) {
    DIAGNOSTICS_SUPPRESSED.store(suppress, Ordering::Relaxed);
}

/// Check if diagnostics are suppressed.
pub fn is_suppressed() -> bool {
    DIAGNOSTICS_SUPPRESSED.load(Ordering::Relaxed)
}

/// Emit a violation report.
///
/// In release builds without the `diagnostics` feature, stderr output is a
/// no-op. In debug builds, this always emits. The `log` feature additionally
/// routes the report through `log::error!`.
pub fn emit_violation(violation: &Violation) {
    if is_suppressed() {
        return;
    }

    #[cfg(any(debug_assertions, feature = "diagnostics"))]
    {
        emit_to_stderr(violation);
    }

    #[cfg(feature = "log")]
    {
        let diag = violation.diagnostic();
        match violation.dest_addr() {
            Some(addr) => log::error!(
                "[{}] {}: {} (dest: {:#x})",
                diag.code, violation.op, diag.message, addr
            ),
            None => log::error!(
                "[{}] {}: {} (dest: null)",
                diag.code, violation.op, diag.message
            ),
        }
    }
}

/// Emit a policy warning with additional runtime context.
///
/// Used for non-fatal diagnostics such as BF101 (lenient capacity mismatch),
/// which warn without going through the violation handler.
pub fn emit_warning(diag: &Diagnostic, context: &str) {
    if is_suppressed() {
        return;
    }

    #[cfg(any(debug_assertions, feature = "diagnostics"))]
    {
        emit_to_stderr_with_context(diag, context);
    }

    #[cfg(feature = "log")]
    log::warn!("[{}] {}: {}", diag.code, diag.message, context);
}

/// Internal: emit a violation to stderr.
#[cfg(any(debug_assertions, feature = "diagnostics"))]
fn emit_to_stderr(violation: &Violation) {
    use std::io::Write;

    let diag = violation.diagnostic();
    let mut stderr = std::io::stderr();

    let _ = writeln!(
        stderr,
        "[boundfill][{}] {}: {}: {}",
        diag.code,
        diag.kind.prefix(),
        violation.op,
        diag.message
    );
    match violation.dest_addr() {
        Some(addr) => {
            let _ = writeln!(stderr, "  dest: {:#x}", addr);
        }
        None => {
            let _ = writeln!(stderr, "  dest: null");
        }
    }

    if let Some(note) = diag.note {
        let _ = writeln!(stderr, "  note: {}", note);
    }

    if let Some(help) = diag.help {
        let _ = writeln!(stderr, "  help: {}", help);
    }

    let _ = writeln!(stderr);
}

/// Internal: emit to stderr with context.
#[cfg(any(debug_assertions, feature = "diagnostics"))]
fn emit_to_stderr_with_context(diag: &Diagnostic, context: &str) {
    use std::io::Write;

    let mut stderr = std::io::stderr();

    let _ = writeln!(
        stderr,
        "[boundfill][{}] {}: {}",
        diag.code,
        diag.kind.prefix(),
        diag.message
    );
    let _ = writeln!(stderr, "  context: {}", context);

    if let Some(note) = diag.note {
        let _ = writeln!(stderr, "  note: {}", note);
    }

    if let Some(help) = diag.help {
        let _ = writeln!(stderr, "  help: {}", help);
    }

    let _ = writeln!(stderr);
}
