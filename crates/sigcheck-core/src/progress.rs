//! Progress arithmetic for streaming reads.

/// Whole kilobytes in `bytes`, saturating at `u32::MAX`.
pub fn bytes_to_kb(bytes: u64) -> u32 {
    u32::try_from(bytes / 1024).unwrap_or(u32::MAX)
}

/// Rounded percentage of `current` over `total`.
///
/// # Panics
///
/// Panics if `total` is zero. Callers must not ask for the progress of an
/// empty transfer.
pub fn percent(current: u64, total: u64) -> u32 {
    assert!(total != 0, "percent() called with a zero total");
    let scaled = (100_u128 * u128::from(current) + u128::from(total) / 2) / u128::from(total);
    u32::try_from(scaled).unwrap_or(u32::MAX)
}
