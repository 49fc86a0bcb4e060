//! CLI entry point for dependagen.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and exit codes.
//! All business logic lives in the `dependagen-app` crate.

mod logging;

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use clap::builder::PossibleValuesParser;
use dependagen_app::{
    GenerateInput, config_dir, load_config_text, load_ignore_index, resolve_settings, run_generate,
};
use dependagen_scan::ScanRules;
use dependagen_settings::Overrides;
use std::io::Write;
use tracing::debug;

const USAGE_HINT: &str = "Must specify a repo root directory as input";

#[derive(Parser, Debug)]
#[command(
    name = "dependagen",
    version,
    about = "Generate a dependabot.yml for every .NET project under a directory"
)]
struct Cli {
    /// Repository root to scan for .csproj, .fsproj and .vbproj files.
    root: Option<Utf8PathBuf>,

    /// Path to a dependagen config TOML (default: <ROOT>/dependagen.toml if present).
    #[arg(long)]
    config: Option<Utf8PathBuf>,

    /// URL of the package ignore list (JSON).
    #[arg(long, conflicts_with = "ignore_file")]
    ignore_url: Option<String>,

    /// Read the package ignore list from a local file instead of downloading it.
    #[arg(long)]
    ignore_file: Option<Utf8PathBuf>,

    /// Timeout for the ignore list download, in seconds.
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Log level for diagnostics on stderr (overridden by RUST_LOG).
    #[arg(long, default_value = "warn", value_parser = PossibleValuesParser::new(logging::LOG_LEVELS))]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let Some(root) = cli.root.clone() else {
        println!("{USAGE_HINT}");
        return Ok(());
    };

    logging::init_logging(&cli.log_level)?;

    match cmd_generate(&cli, &root) {
        Ok(document) => write_stdout(&document),
        Err(err) => {
            eprintln!("dependagen error: {err:#}");
            std::process::exit(1);
        }
    }
}

/// Everything is resolved, downloaded and scanned before a single byte reaches stdout.
fn cmd_generate(cli: &Cli, root: &Utf8Path) -> anyhow::Result<String> {
    let root = root
        .canonicalize_utf8()
        .unwrap_or_else(|_| root.to_path_buf());
    if !root.is_dir() {
        anyhow::bail!("repo root is not a directory: {}", root);
    }

    let config_text =
        load_config_text(&root, cli.config.as_deref()).context("load config")?;
    let overrides = Overrides {
        ignore_url: cli.ignore_url.clone(),
        ignore_file: cli.ignore_file.clone(),
        timeout_secs: cli.timeout_secs,
    };
    let config_dir = config_dir(&root, cli.config.as_deref());
    let settings = resolve_settings(&config_text, &config_dir, overrides)?;
    debug!(?settings, "resolved settings");

    let index = load_ignore_index(&settings)?;
    let rules = ScanRules::dotnet();

    let output = run_generate(GenerateInput {
        root: &root,
        settings: &settings,
        index: &index,
        rules: &rules,
    })?;

    Ok(output.document)
}

fn write_stdout(text: &str) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(text.as_bytes())
        .and_then(|()| stdout.flush())
        .context("write document to stdout")
}
