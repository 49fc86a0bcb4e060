use serde::{Deserialize, Serialize};

/// `dependagen.toml` schema v1.
///
/// This is a *user-facing* config model: every field is optional and defaults apply.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DependagenConfigV1 {
    /// Optional schema string for tooling (`dependagen.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// URL serving `package-ignore.json`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ignore_url: Option<String>,

    /// Local ignore list; takes precedence over `ignore_url`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ignore_file: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,

    /// Name written in the `# generated by` header line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ecosystem: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_pull_requests_limit: Option<u32>,

    #[serde(default)]
    pub schedule: ScheduleConfig,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleConfig {
    /// `daily`, `weekly` (default) or `monthly`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<String>,

    /// Weekday for `weekly` updates; defaults to `wednesday`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day: Option<String>,
}
