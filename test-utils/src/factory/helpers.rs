//! Shared helper utilities for factory methods.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for generating unique IDs in tests.
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Generates a numeric string shaped like a Discord snowflake.
///
/// The value is unique within the test process.
pub fn next_snowflake() -> String {
    (100_000_000_000_000_000u64 + next_id()).to_string()
}
