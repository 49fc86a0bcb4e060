//! Project file discovery and extraction.
//!
//! This crate is allowed to do filesystem IO. It reads each project file at most once, line by
//! line, and stops at the first versioned `PackageReference`: one reference per project is all
//! the ignore matching ever looks at.

#![forbid(unsafe_code)]

mod discover;
mod error;
mod parse;
mod rules;

use camino::Utf8Path;
use dependagen_ignore::IgnoreIndex;
use dependagen_types::{PackageIgnoreMapping, ProjectManifest, RepoDir};
use std::fs::File;
use std::io::BufReader;
use tracing::debug;

pub use discover::discover_manifests;
pub use error::ScanError;
pub use parse::{ManifestFacts, extract_package_name, extract_target_framework, scan_lines};
pub use rules::{
    DOTNET_TOOLING_DIR_SUFFIX, PACKAGE_REFERENCE_INCLUDE, ScanRules, TARGET_FRAMEWORK_END,
    TARGET_FRAMEWORK_PREFIX, TARGET_FRAMEWORK_START, VERSIONED_PACKAGE_REFERENCE,
};

/// Fuzz-friendly API for the line extractors. **Never panics** on any input.
pub mod fuzz {
    use super::*;

    /// Run both extractors and the reference pattern over one line with the .NET rules.
    pub fn scan_line(line: &str) -> (Option<String>, Option<String>, bool) {
        let rules = ScanRules::dotnet();
        (
            extract_target_framework(line, &rules).map(str::to_string),
            extract_package_name(line, &rules).map(str::to_string),
            rules.versioned_reference.is_match(line),
        )
    }

    /// Scan arbitrary bytes as a whole project file.
    pub fn scan_bytes(bytes: &[u8]) -> Option<ManifestFacts> {
        scan_lines(bytes, &ScanRules::dotnet()).ok().flatten()
    }
}

/// Look up the extracted package in the ignore index.
///
/// Yields at most one mapping: only one package reference is extracted per project.
pub fn match_ignores(facts: &ManifestFacts, index: &IgnoreIndex) -> Vec<PackageIgnoreMapping> {
    let Some(package) = facts.package_name.as_deref() else {
        return Vec::new();
    };
    index
        .lookup(package, facts.target_framework.as_deref())
        .map(|versions| {
            vec![PackageIgnoreMapping {
                package_name: package.to_string(),
                versions: versions.to_vec(),
            }]
        })
        .unwrap_or_default()
}

/// Scan one project file. `Ok(None)` means it declares no versioned package reference.
pub fn scan_manifest(
    root: &Utf8Path,
    path: &Utf8Path,
    rules: &ScanRules,
    index: &IgnoreIndex,
) -> Result<Option<ProjectManifest>, ScanError> {
    let Some(kind) = rules.manifest_kind(path) else {
        return Ok(None);
    };
    let read_err = |source: std::io::Error| ScanError::ReadManifest {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(read_err)?;
    let Some(facts) = scan_lines(BufReader::new(file), rules).map_err(read_err)? else {
        debug!(path = %path, "no versioned package reference; skipping");
        return Ok(None);
    };

    let ignores = match_ignores(&facts, index);
    debug!(
        path = %path,
        target_framework = facts.target_framework.as_deref().unwrap_or(""),
        package = facts.package_name.as_deref().unwrap_or(""),
        ignores = ignores.len(),
        "scanned project"
    );

    Ok(Some(ProjectManifest {
        path: path.to_path_buf(),
        file_name: path.file_name().unwrap_or(path.as_str()).to_string(),
        kind,
        directory: RepoDir::of_file(root, path),
        target_framework: facts.target_framework,
        ignores,
    }))
}

/// Discover and scan every project under `root`, keeping discovery order.
pub fn scan_manifests(
    root: &Utf8Path,
    rules: &ScanRules,
    index: &IgnoreIndex,
) -> Result<Vec<ProjectManifest>, ScanError> {
    let mut out = Vec::new();
    for path in discover_manifests(root, rules)? {
        if let Some(manifest) = scan_manifest(root, &path, rules, index)? {
            out.push(manifest);
        }
    }
    Ok(out)
}
