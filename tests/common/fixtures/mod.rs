//! Sample identifiers and instants used across the integration tests

use chrono::{DateTime, TimeZone, Utc};

/// Sample user ID for testing
pub const SAMPLE_USER_ID: u64 = 123456789;

/// Sample guild ID for testing
pub const SAMPLE_GUILD_ID: u64 = 111222333;

/// A second guild the sample user is also a member of
pub const OTHER_GUILD_ID: u64 = 444555666;

/// Sample voice channel IDs for testing
pub const LOBBY_CHANNEL_ID: u64 = 987654321;
pub const GAMING_CHANNEL_ID: u64 = 987654322;

/// Midday on the first of January, the start of every test timeline
pub fn start_of_day() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap()
}
