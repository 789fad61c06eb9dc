//! The validation and dispatch core.
//!
//! One generic routine serves every word width: it runs the ordered contract
//! checks, resolves which capacity to trust, reports at most one violation to
//! the injected handler, and delegates at most once to the unchecked fill.
//!
//! Check order (each violation short-circuits the rest):
//!
//! 1. null destination
//! 2. `n == 0` succeeds with zero writes (C11 allows zero-length operations)
//! 3. capacity-source resolution: declared `dmax` against the absolute region
//!    limit, or against the destination's known true size when one exists
//! 4. word count against the per-width absolute limit, then against what the
//!    resolved capacity holds
//!
//! Count violations (step 4) degrade rather than abort: the capacity is still
//! trustworthy at that point, so the write is clamped to it and performed,
//! and the violation is reported alongside. Every earlier violation means no
//! safe write length can be derived at all, so nothing is written.

use std::ptr::NonNull;

use crate::api::config::{CapacityPolicy, FillConfig};
use crate::diagnostics::kind::{FillError, FillResult, Violation, BF101};
use crate::diagnostics::{emit, ViolationHandler};
use crate::util::size::format_bytes;

use super::word::Word;

/// Validate a fill request and perform the write if a safe count exists.
///
/// `static_capacity` is the destination's true byte size when known
/// independently of the caller's claim (the slice entry points); `None` means
/// `dmax` is all we have.
///
/// # Safety
///
/// If `dest` is non-null it must be aligned for `W` and valid for writes of
/// `min(dmax, static_capacity)` bytes. `static_capacity`, when present, must
/// be the destination's true size.
pub(crate) unsafe fn validate_and_fill<W: Word>(
    dest: *mut W,
    mut dmax: usize,
    value: W,
    n: usize,
    static_capacity: Option<usize>,
    config: &FillConfig,
    handler: &dyn ViolationHandler,
) -> FillResult {
    if dest.is_null() {
        return refuse(handler, W::OP, None, FillError::NullDestination);
    }

    // A write of nothing cannot violate bounds; dmax is never inspected.
    if n == 0 {
        return Ok(0);
    }

    match static_capacity {
        None => {
            if dmax > config.max_region_bytes {
                return refuse(
                    handler,
                    W::OP,
                    NonNull::new(dest.cast()),
                    FillError::CapacityTooLarge,
                );
            }
        }
        Some(true_size) => {
            if dmax > true_size {
                return refuse(
                    handler,
                    W::OP,
                    NonNull::new(dest.cast()),
                    FillError::CapacityExceedsStatic,
                );
            }
            if dmax != true_size {
                match config.capacity_policy {
                    CapacityPolicy::Strict => {
                        return refuse(
                            handler,
                            W::OP,
                            NonNull::new(dest.cast()),
                            FillError::DeclaredCapacityMismatch,
                        );
                    }
                    CapacityPolicy::Lenient => {
                        emit::emit_warning(
                            &BF101,
                            &format!(
                                "{}: declared {}, destination is {}",
                                W::OP,
                                format_bytes(dmax),
                                format_bytes(true_size)
                            ),
                        );
                    }
                }
            }
            // The destination's own size is authoritative from here on.
            dmax = true_size;
        }
    }

    let fit = dmax / W::WIDTH;
    let max_count = config.max_region_bytes / W::WIDTH;

    if n > fit || n > max_count {
        // The absolute-bound classification wins when both are violated.
        let error = if n > max_count {
            FillError::CountTooLarge
        } else {
            FillError::CapacityInsufficient
        };
        handler.report(&Violation {
            op: W::OP,
            dest: NonNull::new(dest.cast()),
            error,
        });

        // Degraded write: the capacity itself passed validation, so fill up
        // to it rather than leaving the buffer in an undefined state.
        let clamped = n.min(fit).min(max_count);
        W::raw_fill(dest, clamped, value);
        return Err(error);
    }

    W::raw_fill(dest, n, value);
    Ok(n)
}

/// Report a violation and refuse without writing.
fn refuse(
    handler: &dyn ViolationHandler,
    op: &'static str,
    dest: Option<NonNull<u8>>,
    error: FillError,
) -> FillResult {
    handler.report(&Violation { op, dest, error });
    Err(error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::CollectingHandler;

    fn config() -> FillConfig {
        FillConfig::default()
    }

    #[test]
    fn test_null_dest_precedes_zero_count() {
        let handler = CollectingHandler::new();
        let result = unsafe {
            validate_and_fill::<u32>(std::ptr::null_mut(), 16, 0, 0, None, &config(), &handler)
        };
        assert_eq!(result, Err(FillError::NullDestination));
        let captured = handler.captured();
        assert_eq!(captured.len(), 1);
        assert_eq!(captured[0].dest_addr, None);
    }

    #[test]
    fn test_zero_count_skips_capacity_checks() {
        let mut buf = [0u32; 4];
        let handler = CollectingHandler::new();
        // dmax is far past the absolute limit, but n == 0 wins.
        let result = unsafe {
            validate_and_fill::<u32>(
                buf.as_mut_ptr(),
                usize::MAX,
                7,
                0,
                None,
                &config(),
                &handler,
            )
        };
        assert_eq!(result, Ok(0));
        assert!(handler.is_empty());
        assert_eq!(buf, [0; 4]);
    }

    #[test]
    fn test_valid_fill_writes_exactly_n_words() {
        let mut buf = [0u32; 4];
        let handler = CollectingHandler::new();
        let result = unsafe {
            validate_and_fill::<u32>(buf.as_mut_ptr(), 16, 0xAA, 2, None, &config(), &handler)
        };
        assert_eq!(result, Ok(2));
        assert_eq!(buf, [0xAA, 0xAA, 0, 0]);
        assert!(handler.is_empty());
    }

    #[test]
    fn test_capacity_too_large_refuses() {
        let mut buf = [0u32; 4];
        let handler = CollectingHandler::new();
        let dmax = config().max_region_bytes + 1;
        let result = unsafe {
            validate_and_fill::<u32>(buf.as_mut_ptr(), dmax, 0xAA, 2, None, &config(), &handler)
        };
        assert_eq!(result, Err(FillError::CapacityTooLarge));
        assert_eq!(buf, [0; 4]);
        assert_eq!(handler.len(), 1);
        assert_eq!(
            handler.captured()[0].dest_addr,
            Some(buf.as_ptr() as usize)
        );
    }

    #[test]
    fn test_insufficient_capacity_clamps_and_writes() {
        let mut buf = [0u32; 4];
        let handler = CollectingHandler::new();
        let result = unsafe {
            validate_and_fill::<u32>(buf.as_mut_ptr(), 16, 0xAA, 10, None, &config(), &handler)
        };
        assert_eq!(result, Err(FillError::CapacityInsufficient));
        // Exactly dmax / 4 words were written despite the violation.
        assert_eq!(buf, [0xAA; 4]);
        assert_eq!(handler.len(), 1);
        assert_eq!(handler.captured()[0].error, FillError::CapacityInsufficient);
    }

    #[test]
    fn test_count_over_absolute_limit_takes_priority() {
        let mut buf = [0u32; 4];
        let handler = CollectingHandler::new();
        let n = config().max_region_bytes / 4 + 1;
        let result = unsafe {
            validate_and_fill::<u32>(buf.as_mut_ptr(), 16, 0xAA, n, None, &config(), &handler)
        };
        assert_eq!(result, Err(FillError::CountTooLarge));
        assert_eq!(buf, [0xAA; 4]);
        assert_eq!(handler.captured()[0].error, FillError::CountTooLarge);
    }

    #[test]
    fn test_static_capacity_rejects_oversized_dmax() {
        let mut buf = [0u32; 4];
        let handler = CollectingHandler::new();
        let result = unsafe {
            validate_and_fill::<u32>(
                buf.as_mut_ptr(),
                64,
                0xAA,
                2,
                Some(std::mem::size_of_val(&buf)),
                &config(),
                &handler,
            )
        };
        assert_eq!(result, Err(FillError::CapacityExceedsStatic));
        assert_eq!(buf, [0; 4]);
    }

    #[test]
    fn test_lenient_mismatch_uses_true_size() {
        let mut buf = [0u32; 4];
        let handler = CollectingHandler::new();
        let lenient = FillConfig::default().with_capacity_policy(CapacityPolicy::Lenient);
        // Declares only 8 bytes; the true size (16) governs, so 3 words fit.
        let result = unsafe {
            validate_and_fill::<u32>(
                buf.as_mut_ptr(),
                8,
                0xAA,
                3,
                Some(std::mem::size_of_val(&buf)),
                &lenient,
                &handler,
            )
        };
        assert_eq!(result, Ok(3));
        assert_eq!(buf, [0xAA, 0xAA, 0xAA, 0]);
        // The mismatch is a warning, not a handler-reported violation.
        assert!(handler.is_empty());
    }

    #[test]
    fn test_strict_mismatch_refuses() {
        let mut buf = [0u32; 4];
        let handler = CollectingHandler::new();
        let strict = FillConfig::default().with_capacity_policy(CapacityPolicy::Strict);
        let result = unsafe {
            validate_and_fill::<u32>(
                buf.as_mut_ptr(),
                8,
                0xAA,
                1,
                Some(std::mem::size_of_val(&buf)),
                &strict,
                &handler,
            )
        };
        assert_eq!(result, Err(FillError::DeclaredCapacityMismatch));
        assert_eq!(buf, [0; 4]);
        assert_eq!(handler.len(), 1);
    }

    #[test]
    fn test_count_too_large_with_big_static_buffer_clamps_to_limit() {
        // A tiny region limit makes the absolute bound reachable with a
        // buffer that would otherwise fit the request.
        let small = FillConfig::default().with_max_region_bytes(8);
        let mut buf = [0u32; 8];
        let handler = CollectingHandler::new();
        let size = std::mem::size_of_val(&buf);
        let result = unsafe {
            validate_and_fill::<u32>(
                buf.as_mut_ptr(),
                size,
                0xAA,
                4,
                Some(size),
                &small,
                &handler,
            )
        };
        assert_eq!(result, Err(FillError::CountTooLarge));
        // Clamped to max_region_bytes / 4 = 2 words, not the requested 4.
        assert_eq!(buf, [0xAA, 0xAA, 0, 0, 0, 0, 0, 0]);
    }
}
