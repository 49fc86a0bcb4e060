use camino::{Utf8Component, Utf8Path};
use std::fmt;

/// Scan-root-relative directory as written to `dependabot.yml`.
///
/// Normalization rules are intentionally simple and deterministic:
/// - always forward slashes (`/`)
/// - always a leading `/`; the scan root itself is `/`
/// - no `.` segments, no empty segments, no trailing `/`
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RepoDir(String);

impl Default for RepoDir {
    fn default() -> Self {
        RepoDir::root()
    }
}

impl RepoDir {
    pub fn root() -> Self {
        Self("/".to_string())
    }

    pub fn new<S: AsRef<str>>(s: S) -> Self {
        let normalized = s.as_ref().replace('\\', "/");
        let segments: Vec<&str> = normalized
            .split('/')
            .filter(|seg| !seg.is_empty() && *seg != ".")
            .collect();
        Self(format!("/{}", segments.join("/")))
    }

    /// Directory of `file` relative to `root`.
    ///
    /// Falls back to the full parent path when `file` is not under `root`.
    pub fn of_file(root: &Utf8Path, file: &Utf8Path) -> Self {
        let parent = file.parent().unwrap_or(file);
        let rel = parent.strip_prefix(root).unwrap_or(parent);
        let segments: Vec<&str> = rel
            .components()
            .filter_map(|c| match c {
                Utf8Component::Normal(s) => Some(s),
                _ => None,
            })
            .collect();
        RepoDir::new(segments.join("/"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0 == "/"
    }
}

impl fmt::Display for RepoDir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
