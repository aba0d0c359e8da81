/// Checks that a value is shaped like a Discord snowflake: a non-empty run of ASCII digits.
///
/// Snowflakes are kept as strings end to end, so this is the only validation applied.
pub fn is_snowflake(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}
