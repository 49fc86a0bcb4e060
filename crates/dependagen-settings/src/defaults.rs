use crate::resolve::{Interval, ResolvedConfig, Schedule, Weekday};
use dependagen_types::IgnoreSource;
use std::time::Duration;

/// Pinned revision of the upstream `package-ignore.json`.
pub const DEFAULT_IGNORE_URL: &str = "https://raw.githubusercontent.com/dotnet/core/b5ca8283def279b20eced6c0b14c4634659cd6eb/samples/dependadotnet/package-ignore.json";

pub const DEFAULT_TOOL_NAME: &str = "dependagen";
pub const DEFAULT_ECOSYSTEM: &str = "nuget";
pub const DEFAULT_OPEN_PULL_REQUESTS_LIMIT: u32 = 5;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Built-in configuration used when neither a config file nor CLI overrides say otherwise.
///
/// Wednesday gives a day of slack after Patch Tuesday releases.
pub fn builtin() -> ResolvedConfig {
    ResolvedConfig {
        ignore_source: IgnoreSource::Url(DEFAULT_IGNORE_URL.to_string()),
        timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        tool_name: DEFAULT_TOOL_NAME.to_string(),
        ecosystem: DEFAULT_ECOSYSTEM.to_string(),
        schedule: Schedule {
            interval: Interval::Weekly,
            day: Some(Weekday::Wednesday),
        },
        open_pull_requests_limit: DEFAULT_OPEN_PULL_REQUESTS_LIMIT,
    }
}
