use std::num::ParseIntError;
use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to parse a stored Discord id from String
    ///
    /// Ids are persisted as strings; a value that no longer parses means the row
    /// was written by something other than the bot.
    #[error("Failed to parse ID from String '{value}': {source}")]
    ParseStringId {
        /// The string value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: ParseIntError,
    },

    /// A stored day count puts the inactivity threshold outside the representable range
    #[error("Guild {guild_id} has an out-of-range inactivity period of {days} days")]
    DayCountOutOfRange { guild_id: u64, days: i32 },
}
