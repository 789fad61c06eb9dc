//! Unchecked fill primitives.
//!
//! These write exactly `count` words with no bounds checking; correctness
//! depends entirely on the validation core having already established a safe
//! count. Kept separate so the checked layer reads as validation followed by
//! a single delegation.

/// Fill `count` bytes starting at `dest` with `value`.
///
/// # Safety
///
/// `dest` must be non-null and valid for writes of `count` bytes.
#[inline]
pub unsafe fn fill8(dest: *mut u8, count: usize, value: u8) {
    debug_assert!(!dest.is_null());
    std::ptr::write_bytes(dest, value, count);
}

/// Fill `count` 16-bit words starting at `dest` with `value`.
///
/// # Safety
///
/// `dest` must be non-null, aligned for `u16`, and valid for writes of
/// `count` words.
#[inline]
pub unsafe fn fill16(dest: *mut u16, count: usize, value: u16) {
    debug_assert!(!dest.is_null());
    for i in 0..count {
        dest.add(i).write(value);
    }
}

/// Fill `count` 32-bit words starting at `dest` with `value`.
///
/// # Safety
///
/// `dest` must be non-null, aligned for `u32`, and valid for writes of
/// `count` words.
#[inline]
pub unsafe fn fill32(dest: *mut u32, count: usize, value: u32) {
    debug_assert!(!dest.is_null());
    for i in 0..count {
        dest.add(i).write(value);
    }
}
