//! The `config` use case: locate, read, and resolve `dependagen.toml`.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use dependagen_settings::{CONFIG_FILE_NAME, DependagenConfigV1, Overrides, ResolvedConfig};
use tracing::debug;

/// Read the config text for a run.
///
/// An explicit path must exist. Without one, `dependagen.toml` in the scan root is used when
/// present; a missing implicit file means defaults apply (empty string).
pub fn load_config_text(root: &Utf8Path, explicit: Option<&Utf8Path>) -> anyhow::Result<String> {
    if let Some(path) = explicit {
        return std::fs::read_to_string(path).with_context(|| format!("read config {}", path));
    }

    let implicit = root.join(CONFIG_FILE_NAME);
    if !implicit.is_file() {
        debug!(path = %implicit, "no config file; using defaults");
        return Ok(String::new());
    }
    std::fs::read_to_string(&implicit).with_context(|| format!("read config {}", implicit))
}

/// Directory that relative paths inside the config file are anchored to.
pub fn config_dir(root: &Utf8Path, explicit: Option<&Utf8Path>) -> Utf8PathBuf {
    match explicit {
        Some(path) => path.parent().map(Utf8Path::to_path_buf).unwrap_or_default(),
        None => root.to_path_buf(),
    }
}

/// Parse (empty is allowed, defaults apply) and resolve against CLI overrides.
///
/// A relative `ignore_file` in the config is taken relative to `config_dir`. CLI paths are
/// left alone and stay relative to the working directory.
pub fn resolve_settings(
    config_text: &str,
    config_dir: &Utf8Path,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    let mut cfg = if config_text.trim().is_empty() {
        DependagenConfigV1::default()
    } else {
        dependagen_settings::parse_config_toml(config_text).context("parse config")?
    };
    if let Some(file) = cfg.ignore_file.as_deref()
        && Utf8Path::new(file).is_relative()
    {
        cfg.ignore_file = Some(config_dir.join(file).into_string());
    }
    dependagen_settings::resolve_config(cfg, overrides).context("resolve config")
}
