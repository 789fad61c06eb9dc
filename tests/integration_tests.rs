//! Integration tests for boundfill.

use std::sync::Arc;

use boundfill::{
    BoundedFiller, CapacityPolicy, CollectingHandler, FillConfig, FillError,
};

fn capturing_filler(config: FillConfig) -> (BoundedFiller, Arc<CollectingHandler>) {
    let handler = Arc::new(CollectingHandler::new());
    let filler = BoundedFiller::with_handler(config, handler.clone());
    (filler, handler)
}

#[test]
fn test_basic_fill32() {
    // 4-word buffer, dmax = 16 bytes, n = 2: success, first 8 bytes set,
    // last 8 untouched.
    let (filler, handler) = capturing_filler(FillConfig::default());
    let mut buf = [0u32; 4];

    let result = filler.fill32_slice(&mut buf, 16, 0xAAAA_AAAA, 2);

    assert_eq!(result, Ok(2));
    assert_eq!(buf, [0xAAAA_AAAA, 0xAAAA_AAAA, 0, 0]);
    assert!(handler.is_empty());
}

#[test]
fn test_overlong_request_clamps_to_capacity() {
    // Same buffer, n = 10: violation reported once, exactly 4 words written.
    let (filler, handler) = capturing_filler(FillConfig::default());
    let mut buf = [0u32; 4];

    let result = filler.fill32_slice(&mut buf, 16, 0xAAAA_AAAA, 10);

    assert_eq!(result, Err(FillError::CapacityInsufficient));
    assert_eq!(buf, [0xAAAA_AAAA; 4]);

    let captured = handler.captured();
    assert_eq!(captured.len(), 1);
    assert_eq!(captured[0].error, FillError::CapacityInsufficient);
    assert_eq!(captured[0].op, "fill32");
    assert_eq!(captured[0].dest_addr, Some(buf.as_ptr() as usize));
}

#[test]
fn test_null_dest_touches_nothing() {
    let (filler, handler) = capturing_filler(FillConfig::default());

    let result = unsafe { filler.fill32(std::ptr::null_mut(), 16, 0xAA, 5) };

    assert_eq!(result, Err(FillError::NullDestination));
    let captured = handler.captured();
    assert_eq!(captured.len(), 1);
    assert_eq!(captured[0].dest_addr, None);
}

#[test]
fn test_zero_count_always_succeeds() {
    let (filler, handler) = capturing_filler(FillConfig::default());
    let mut buf = [0xFFu8; 8];

    // Even with a dmax past the absolute limit, n == 0 is checked first.
    let result = unsafe { filler.fill8(buf.as_mut_ptr(), usize::MAX, 0, 0) };

    assert_eq!(result, Ok(0));
    assert_eq!(buf, [0xFF; 8]);
    assert!(handler.is_empty());
}

#[test]
fn test_capacity_over_absolute_limit_refuses() {
    let (filler, handler) =
        capturing_filler(FillConfig::default().with_max_region_bytes(1024));
    let mut buf = [0u16; 8];

    let result = unsafe { filler.fill16(buf.as_mut_ptr(), 2048, 0xBEEF, 2) };

    assert_eq!(result, Err(FillError::CapacityTooLarge));
    assert_eq!(buf, [0; 8]);
    assert_eq!(handler.len(), 1);
}

#[test]
fn test_untouched_bytes_beyond_fill() {
    let filler = BoundedFiller::with_defaults();
    let mut buf = [0x11u8; 16];

    let result = filler.fill8_slice(&mut buf, 16, 0xAB, 10);

    assert_eq!(result, Ok(10));
    assert_eq!(&buf[..10], &[0xAB; 10]);
    assert_eq!(&buf[10..], &[0x11; 6]);
}

#[test]
fn test_idempotence() {
    let filler = BoundedFiller::with_defaults();
    let mut once = [0u32; 8];
    let mut twice = [0u32; 8];

    filler.fill32_slice(&mut once, 32, 0xC0FFEE, 6).unwrap();
    filler.fill32_slice(&mut twice, 32, 0xC0FFEE, 6).unwrap();
    filler.fill32_slice(&mut twice, 32, 0xC0FFEE, 6).unwrap();

    assert_eq!(once, twice);
}

#[test]
fn test_strict_policy_rejects_mismatched_dmax() {
    let (filler, handler) = capturing_filler(FillConfig::default().strict());
    let mut buf = [0u32; 4];

    let result = filler.fill32_slice(&mut buf, 8, 0xAA, 1);

    assert_eq!(result, Err(FillError::DeclaredCapacityMismatch));
    assert_eq!(buf, [0; 4]);
    assert_eq!(handler.captured()[0].error, FillError::DeclaredCapacityMismatch);
}

#[test]
fn test_lenient_policy_lets_true_size_govern() {
    let (filler, handler) = capturing_filler(
        FillConfig::default().with_capacity_policy(CapacityPolicy::Lenient),
    );
    let mut buf = [0u32; 4];

    // Understates the capacity; the slice's own size carries the fill.
    let result = filler.fill32_slice(&mut buf, 8, 0xAA, 4);

    assert_eq!(result, Ok(4));
    assert_eq!(buf, [0xAA; 4]);
    // Mismatch is a warning, not a handled violation.
    assert!(handler.is_empty());
}

#[test]
fn test_overstated_dmax_against_slice_refuses() {
    let (filler, handler) = capturing_filler(FillConfig::default());
    let mut buf = [0u32; 4];

    let result = filler.fill32_slice(&mut buf, 32, 0xAA, 2);

    assert_eq!(result, Err(FillError::CapacityExceedsStatic));
    assert_eq!(buf, [0; 4]);
    assert_eq!(handler.len(), 1);
}

#[test]
fn test_count_past_absolute_limit_classified_as_count_too_large() {
    let (filler, handler) = capturing_filler(FillConfig::default());
    let mut buf = [0u32; 4];
    let n = FillConfig::default().max_words(4) + 1;

    let result = unsafe { filler.fill32(buf.as_mut_ptr(), 16, 0xAA, n) };

    // Both the fit check and the absolute bound fail; the absolute bound
    // wins the classification, and the clamped write still happens.
    assert_eq!(result, Err(FillError::CountTooLarge));
    assert_eq!(buf, [0xAA; 4]);
    assert_eq!(handler.captured()[0].error, FillError::CountTooLarge);
}

#[test]
fn test_every_width_shares_the_contract() {
    let (filler, handler) = capturing_filler(FillConfig::default());

    let mut b8 = [0u8; 4];
    let mut b16 = [0u16; 4];
    let mut b32 = [0u32; 4];

    assert_eq!(
        filler.fill8_slice(&mut b8, 4, 0xAA, 9),
        Err(FillError::CapacityInsufficient)
    );
    assert_eq!(
        filler.fill16_slice(&mut b16, 8, 0xAAAA, 9),
        Err(FillError::CapacityInsufficient)
    );
    assert_eq!(
        filler.fill32_slice(&mut b32, 16, 0xAAAA_AAAA, 9),
        Err(FillError::CapacityInsufficient)
    );

    assert_eq!(b8, [0xAA; 4]);
    assert_eq!(b16, [0xAAAA; 4]);
    assert_eq!(b32, [0xAAAA_AAAA; 4]);

    let ops: Vec<_> = handler.captured().iter().map(|c| c.op).collect();
    assert_eq!(ops, ["fill8", "fill16", "fill32"]);
}

#[test]
fn test_handler_not_called_on_success() {
    let (filler, handler) = capturing_filler(FillConfig::default());
    let mut buf = [0u16; 16];

    for _ in 0..3 {
        filler.fill16_slice(&mut buf, 32, 0x5A5A, 16).unwrap();
    }

    assert!(handler.is_empty());
}
