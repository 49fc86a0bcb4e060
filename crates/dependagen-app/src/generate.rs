//! The `generate` use case: scan a tree and render `dependabot.yml` for it.

use anyhow::Context;
use camino::Utf8Path;
use dependagen_ignore::IgnoreIndex;
use dependagen_render::{
    RenderableConfig, RenderableHeader, RenderableIgnore, RenderableSchedule, RenderableUpdate,
};
use dependagen_scan::ScanRules;
use dependagen_settings::ResolvedConfig;
use dependagen_types::ProjectManifest;
use tracing::info;

/// Input for the generate use case.
#[derive(Clone, Debug)]
pub struct GenerateInput<'a> {
    /// Directory to scan; output directories are relative to it.
    pub root: &'a Utf8Path,
    pub settings: &'a ResolvedConfig,
    pub index: &'a IgnoreIndex,
    pub rules: &'a ScanRules,
}

/// Output from the generate use case.
#[derive(Clone, Debug)]
pub struct GenerateOutput {
    /// Qualifying projects in discovery order.
    pub manifests: Vec<ProjectManifest>,
    /// The complete document. Nothing is written until the whole scan succeeded.
    pub document: String,
}

/// Fetch or read the ignore list named by the settings. Failure is fatal for the run.
pub fn load_ignore_index(settings: &ResolvedConfig) -> anyhow::Result<IgnoreIndex> {
    dependagen_ignore::load_index(&settings.ignore_source, settings.timeout)
        .context("package ignore list unavailable")
}

pub fn run_generate(input: GenerateInput<'_>) -> anyhow::Result<GenerateOutput> {
    let manifests = dependagen_scan::scan_manifests(input.root, input.rules, input.index)
        .context("scan projects")?;

    let ignored = manifests.iter().filter(|m| m.has_ignores()).count();
    info!(
        root = %input.root,
        projects = manifests.len(),
        with_ignores = ignored,
        "scan complete"
    );

    let renderable = to_renderable(&manifests, input.settings);
    let document = dependagen_render::render_dependabot_yaml(&renderable);

    Ok(GenerateOutput {
        manifests,
        document,
    })
}

pub fn to_renderable(manifests: &[ProjectManifest], settings: &ResolvedConfig) -> RenderableConfig {
    let schedule = RenderableSchedule {
        interval: settings.schedule.interval.as_str().to_string(),
        day: settings.schedule.day.map(|d| d.as_str().to_string()),
    };

    RenderableConfig {
        header: RenderableHeader {
            tool: settings.tool_name.clone(),
            ignore_source: settings.ignore_source.to_string(),
        },
        updates: manifests
            .iter()
            .map(|m| RenderableUpdate {
                ecosystem: settings.ecosystem.clone(),
                directory: m.directory.as_str().to_string(),
                file_name: m.file_name.clone(),
                schedule: schedule.clone(),
                open_pull_requests_limit: settings.open_pull_requests_limit,
                ignores: m
                    .ignores
                    .iter()
                    .map(|i| RenderableIgnore {
                        dependency_name: i.package_name.clone(),
                        versions: i.versions.clone(),
                    })
                    .collect(),
            })
            .collect(),
    }
}
