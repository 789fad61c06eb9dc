//! Word widths for the fill family.

use super::raw;

/// A fixed-width unit that the bounded filler can replicate.
///
/// Implemented for `u8`, `u16` and `u32` - the classic one, two and
/// four byte `memset` family. One generic validation core serves all
/// three widths; this trait is the seam between them.
pub(crate) trait Word: Copy {
    /// Width of one word, in bytes.
    const WIDTH: usize;

    /// Name of the public entry point, used in violation reports.
    const OP: &'static str;

    /// Delegate to the unchecked fill primitive for this width.
    ///
    /// # Safety
    ///
    /// `dest` must be non-null, aligned for `Self`, and valid for writes of
    /// `count` words.
    unsafe fn raw_fill(dest: *mut Self, count: usize, value: Self);
}

impl Word for u8 {
    const WIDTH: usize = 1;
    const OP: &'static str = "fill8";

    unsafe fn raw_fill(dest: *mut Self, count: usize, value: Self) {
        raw::fill8(dest, count, value);
    }
}

impl Word for u16 {
    const WIDTH: usize = 2;
    const OP: &'static str = "fill16";

    unsafe fn raw_fill(dest: *mut Self, count: usize, value: Self) {
        raw::fill16(dest, count, value);
    }
}

impl Word for u32 {
    const WIDTH: usize = 4;
    const OP: &'static str = "fill32";

    unsafe fn raw_fill(dest: *mut Self, count: usize, value: Self) {
        raw::fill32(dest, count, value);
    }
}
