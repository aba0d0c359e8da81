//! Discord permission bitmask checks.
//!
//! Discord sends permission sets as decimal strings because they outgrow the integer range
//! of some clients. A flag test only depends on the low 64 bits of the value, so the string
//! is folded modulo 2^64 instead of being parsed into a fixed-width number. This stays exact
//! for inputs of any length.

/// `MANAGE_GUILD`: required to administer bot configuration for a guild.
pub const MANAGE_GUILD: u64 = 0x20;

/// Returns true when every bit of `flag` is set in the decimal bitmask `permissions`.
///
/// Values that are not plain decimal digits never grant anything.
pub fn has_permission(permissions: &str, flag: u64) -> bool {
    low_bits(permissions).is_some_and(|bits| bits & flag == flag)
}

pub fn has_manage_guild(permissions: &str) -> bool {
    has_permission(permissions, MANAGE_GUILD)
}

/// The decimal string reduced modulo 2^64.
fn low_bits(decimal: &str) -> Option<u64> {
    if decimal.is_empty() {
        return None;
    }

    decimal.bytes().try_fold(0u64, |acc, b| {
        b.is_ascii_digit()
            .then(|| acc.wrapping_mul(10).wrapping_add(u64::from(b - b'0')))
    })
}
