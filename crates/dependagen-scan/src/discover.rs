use crate::{ScanError, ScanRules};
use camino::{Utf8Path, Utf8PathBuf};
use std::path::PathBuf;
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Discover project files under `root`, in a stable order.
///
/// Behavior:
/// - The root and every subdirectory are visited, except directories matching
///   [`ScanRules::is_excluded_dir`], which are not descended into.
/// - Within a directory, its files come before its subdirectories; both sorted by name.
/// - Symlinked files are listed like regular files. Symlinked directories are not followed.
pub fn discover_manifests(
    root: &Utf8Path,
    rules: &ScanRules,
) -> Result<Vec<Utf8PathBuf>, ScanError> {
    if !root.is_dir() {
        return Err(ScanError::MissingRoot {
            path: root.to_path_buf(),
        });
    }

    let walker = WalkDir::new(root)
        .sort_by(|a, b| {
            let a_dir = a.file_type().is_dir();
            let b_dir = b.file_type().is_dir();
            a_dir
                .cmp(&b_dir)
                .then_with(|| a.file_name().cmp(b.file_name()))
        })
        .into_iter()
        .filter_entry(|e| {
            let skip = e.depth() > 0
                && e.file_type().is_dir()
                && rules.is_excluded_dir(&e.path().to_string_lossy());
            if skip {
                debug!(dir = %e.path().display(), "skipping tooling directory");
            }
            !skip
        });

    let mut out = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|source| ScanError::Walk {
            root: root.to_path_buf(),
            source,
        })?;
        let is_file = entry.file_type().is_file()
            || (entry.path_is_symlink() && entry.path().is_file());
        if !is_file {
            continue;
        }
        let Some(path) = pathbuf_to_utf8(entry.path().to_path_buf()) else {
            warn!(path = %entry.path().display(), "skipping non UTF-8 path");
            continue;
        };
        if rules.manifest_kind(&path).is_some() {
            out.push(path);
        }
    }

    Ok(out)
}

fn pathbuf_to_utf8(path: PathBuf) -> Option<Utf8PathBuf> {
    Utf8PathBuf::from_path_buf(path).ok()
}
