use crate::server::error::{internal::InternalError, AppError};

/// Parses a u64 value from a stored String
///
/// # Arguments
/// - `value` - The string slice to attempt to parse into `u64`
///
/// # Returns
/// - `Ok(u64)` - Successfully parsed String to `u64`
/// - `Err(AppError::InternalErr(ParseStringId))` - Failed to parse
///   the string as a u64
pub fn parse_u64_from_string(value: &str) -> Result<u64, AppError> {
    let result = value
        .parse::<u64>()
        .map_err(|e| InternalError::ParseStringId {
            value: value.to_string(),
            source: e,
        })?;

    Ok(result)
}

/// Parses an optional stored id, treating `None` as absent.
pub fn parse_optional_u64(value: Option<&str>) -> Result<Option<u64>, AppError> {
    value.map(parse_u64_from_string).transpose()
}

/// Parses a snowflake typed by a user, accepting mention syntax like `<@&123>`.
///
/// # Returns
/// - `Some(u64)` - Digits found after stripping mention punctuation
/// - `None` - Input is not a snowflake
pub fn parse_user_snowflake(input: &str) -> Option<u64> {
    let trimmed = input
        .trim()
        .trim_start_matches('<')
        .trim_end_matches('>')
        .trim_start_matches(['@', '#', '&', '!']);

    trimmed.parse::<u64>().ok().filter(|id| *id > 0)
}
