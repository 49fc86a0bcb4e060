//! Config parsing and override resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod defaults;
mod model;
mod resolve;

pub use defaults::{
    DEFAULT_ECOSYSTEM, DEFAULT_IGNORE_URL, DEFAULT_OPEN_PULL_REQUESTS_LIMIT, DEFAULT_TIMEOUT_SECS,
    DEFAULT_TOOL_NAME,
};
pub use model::{DependagenConfigV1, ScheduleConfig};
pub use resolve::{Interval, Overrides, ResolvedConfig, Schedule, Weekday};

/// Conventional config file name, looked up in the scan root.
pub const CONFIG_FILE_NAME: &str = "dependagen.toml";

/// Parse `dependagen.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<DependagenConfigV1> {
    let cfg: DependagenConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective config (built-in defaults + config file + CLI overrides).
pub fn resolve_config(
    cfg: DependagenConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}
