//! The bounded filler: the public entry points.
//!
//! One entry point per word width (1, 2, 4 bytes), each in two flavors:
//!
//! - raw-pointer (`fill8`/`fill16`/`fill32`): the destination size is only
//!   the caller's `dmax` claim, so these are `unsafe`;
//! - slice (`fill8_slice`/...): the destination's true size is known from the
//!   slice itself, takes precedence over `dmax`, and the call is safe.
//!
//! Both flavors funnel into the same validation core.

use std::mem;
use std::sync::Arc;

use crate::api::config::FillConfig;
use crate::core::validate::validate_and_fill;
use crate::diagnostics::{FillResult, StderrHandler, ViolationHandler};

/// Handler used by the module-level convenience functions.
static DEFAULT_HANDLER: StderrHandler = StderrHandler;

/// A configured bounded filler.
///
/// Holds the capacity policy and the injected violation handler. It is cheap
/// to clone (the handler is behind an `Arc`) and thread-safe; the fill
/// operations themselves hold no internal state, so concurrency safety for
/// the destination buffer stays with the caller.
///
/// # Example
///
/// ```rust
/// use boundfill::{BoundedFiller, FillConfig};
///
/// let filler = BoundedFiller::new(FillConfig::default());
///
/// let mut buf = [0u32; 4];
/// let written = filler.fill32_slice(&mut buf, 16, 0xAA, 2).unwrap();
/// assert_eq!(written, 2);
/// assert_eq!(buf, [0xAA, 0xAA, 0, 0]);
/// ```
#[derive(Clone)]
pub struct BoundedFiller {
    config: FillConfig,
    handler: Arc<dyn ViolationHandler>,
}

impl BoundedFiller {
    /// Create a filler with the given configuration and the default
    /// stderr-reporting handler.
    pub fn new(config: FillConfig) -> Self {
        Self {
            config,
            handler: Arc::new(StderrHandler),
        }
    }

    /// Create a filler with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(FillConfig::default())
    }

    /// Create a filler with an explicit violation handler.
    ///
    /// Tests typically install a
    /// [`CollectingHandler`](crate::diagnostics::CollectingHandler) here.
    pub fn with_handler(config: FillConfig, handler: Arc<dyn ViolationHandler>) -> Self {
        Self { config, handler }
    }

    /// This filler's configuration.
    pub fn config(&self) -> &FillConfig {
        &self.config
    }

    /// This filler's violation handler.
    pub fn handler(&self) -> &Arc<dyn ViolationHandler> {
        &self.handler
    }

    /// Fill `n` bytes of `value` at `dest`, bounded by `dmax` bytes.
    ///
    /// On a count violation the write is clamped to `dmax` and still
    /// performed; see [`FillError::is_degraded_write`]. All other violations
    /// write nothing.
    ///
    /// # Safety
    ///
    /// If `dest` is non-null it must be valid for writes of `dmax` bytes.
    ///
    /// [`FillError::is_degraded_write`]: crate::FillError::is_degraded_write
    pub unsafe fn fill8(&self, dest: *mut u8, dmax: usize, value: u8, n: usize) -> FillResult {
        validate_and_fill(dest, dmax, value, n, None, &self.config, &*self.handler)
    }

    /// Fill `n` 16-bit words of `value` at `dest`, bounded by `dmax` bytes.
    ///
    /// # Safety
    ///
    /// If `dest` is non-null it must be aligned for `u16` and valid for
    /// writes of `dmax` bytes.
    pub unsafe fn fill16(&self, dest: *mut u16, dmax: usize, value: u16, n: usize) -> FillResult {
        validate_and_fill(dest, dmax, value, n, None, &self.config, &*self.handler)
    }

    /// Fill `n` 32-bit words of `value` at `dest`, bounded by `dmax` bytes.
    ///
    /// # Safety
    ///
    /// If `dest` is non-null it must be aligned for `u32` and valid for
    /// writes of `dmax` bytes.
    pub unsafe fn fill32(&self, dest: *mut u32, dmax: usize, value: u32, n: usize) -> FillResult {
        validate_and_fill(dest, dmax, value, n, None, &self.config, &*self.handler)
    }

    /// Fill `n` bytes of `value` into `dest`, bounded by `dmax` bytes and by
    /// the slice's own size.
    ///
    /// The slice length is the destination's true capacity: a `dmax` larger
    /// than it is a violation, a smaller one is handled per the configured
    /// [`CapacityPolicy`](crate::api::config::CapacityPolicy).
    pub fn fill8_slice(&self, dest: &mut [u8], dmax: usize, value: u8, n: usize) -> FillResult {
        let true_size = mem::size_of_val(dest);
        // SAFETY: the slice guarantees validity for true_size bytes, and the
        // core never writes past min(dmax, true_size).
        unsafe {
            validate_and_fill(
                dest.as_mut_ptr(),
                dmax,
                value,
                n,
                Some(true_size),
                &self.config,
                &*self.handler,
            )
        }
    }

    /// Fill `n` 16-bit words of `value` into `dest`, bounded by `dmax` bytes
    /// and by the slice's own size.
    pub fn fill16_slice(&self, dest: &mut [u16], dmax: usize, value: u16, n: usize) -> FillResult {
        let true_size = mem::size_of_val(dest);
        // SAFETY: as for fill8_slice.
        unsafe {
            validate_and_fill(
                dest.as_mut_ptr(),
                dmax,
                value,
                n,
                Some(true_size),
                &self.config,
                &*self.handler,
            )
        }
    }

    /// Fill `n` 32-bit words of `value` into `dest`, bounded by `dmax` bytes
    /// and by the slice's own size.
    pub fn fill32_slice(&self, dest: &mut [u32], dmax: usize, value: u32, n: usize) -> FillResult {
        let true_size = mem::size_of_val(dest);
        // SAFETY: as for fill8_slice.
        unsafe {
            validate_and_fill(
                dest.as_mut_ptr(),
                dmax,
                value,
                n,
                Some(true_size),
                &self.config,
                &*self.handler,
            )
        }
    }
}

impl Default for BoundedFiller {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl std::fmt::Debug for BoundedFiller {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoundedFiller")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Module-level convenience functions (default config, stderr handler)
// =============================================================================

/// Fill `n` bytes of `value` at `dest` with default configuration.
///
/// # Safety
///
/// See [`BoundedFiller::fill8`].
pub unsafe fn fill8(dest: *mut u8, dmax: usize, value: u8, n: usize) -> FillResult {
    validate_and_fill(dest, dmax, value, n, None, &FillConfig::default(), &DEFAULT_HANDLER)
}

/// Fill `n` 16-bit words of `value` at `dest` with default configuration.
///
/// # Safety
///
/// See [`BoundedFiller::fill16`].
pub unsafe fn fill16(dest: *mut u16, dmax: usize, value: u16, n: usize) -> FillResult {
    validate_and_fill(dest, dmax, value, n, None, &FillConfig::default(), &DEFAULT_HANDLER)
}

/// Fill `n` 32-bit words of `value` at `dest` with default configuration.
///
/// # Safety
///
/// See [`BoundedFiller::fill32`].
pub unsafe fn fill32(dest: *mut u32, dmax: usize, value: u32, n: usize) -> FillResult {
    validate_and_fill(dest, dmax, value, n, None, &FillConfig::default(), &DEFAULT_HANDLER)
}

/// Fill `n` bytes of `value` into `dest` with default configuration.
pub fn fill8_slice(dest: &mut [u8], dmax: usize, value: u8, n: usize) -> FillResult {
    let true_size = mem::size_of_val(dest);
    // SAFETY: the slice guarantees validity for true_size bytes, and the
    // core never writes past min(dmax, true_size).
    unsafe {
        validate_and_fill(
            dest.as_mut_ptr(),
            dmax,
            value,
            n,
            Some(true_size),
            &FillConfig::default(),
            &DEFAULT_HANDLER,
        )
    }
}

/// Fill `n` 16-bit words of `value` into `dest` with default configuration.
pub fn fill16_slice(dest: &mut [u16], dmax: usize, value: u16, n: usize) -> FillResult {
    let true_size = mem::size_of_val(dest);
    // SAFETY: as for fill8_slice.
    unsafe {
        validate_and_fill(
            dest.as_mut_ptr(),
            dmax,
            value,
            n,
            Some(true_size),
            &FillConfig::default(),
            &DEFAULT_HANDLER,
        )
    }
}

/// Fill `n` 32-bit words of `value` into `dest` with default configuration.
pub fn fill32_slice(dest: &mut [u32], dmax: usize, value: u32, n: usize) -> FillResult {
    let true_size = mem::size_of_val(dest);
    // SAFETY: as for fill8_slice.
    unsafe {
        validate_and_fill(
            dest.as_mut_ptr(),
            dmax,
            value,
            n,
            Some(true_size),
            &FillConfig::default(),
            &DEFAULT_HANDLER,
        )
    }
}
