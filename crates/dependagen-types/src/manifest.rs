use crate::RepoDir;
use camino::{Utf8Path, Utf8PathBuf};

/// Project file flavours recognised by the scanner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ManifestKind {
    CSharp,
    FSharp,
    VisualBasic,
}

impl ManifestKind {
    pub const ALL: [ManifestKind; 3] = [
        ManifestKind::CSharp,
        ManifestKind::FSharp,
        ManifestKind::VisualBasic,
    ];

    /// File extension without the leading dot.
    pub fn extension(self) -> &'static str {
        match self {
            ManifestKind::CSharp => "csproj",
            ManifestKind::FSharp => "fsproj",
            ManifestKind::VisualBasic => "vbproj",
        }
    }

    /// Exact, case-sensitive extension match.
    pub fn from_extension(ext: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.extension() == ext)
    }

    pub fn from_path(path: &Utf8Path) -> Option<Self> {
        path.extension().and_then(Self::from_extension)
    }
}

/// A package reference that matched an ignore rule, with the version patterns to skip.
///
/// Patterns are opaque: they are copied verbatim into the output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PackageIgnoreMapping {
    pub package_name: String,
    pub versions: Vec<String>,
}

/// A project file that declares at least one versioned package reference.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectManifest {
    /// Absolute path as discovered on disk.
    pub path: Utf8PathBuf,
    pub file_name: String,
    pub kind: ManifestKind,
    pub directory: RepoDir,
    /// First `net*` target framework seen before (or on) the package reference line.
    pub target_framework: Option<String>,
    pub ignores: Vec<PackageIgnoreMapping>,
}

impl ProjectManifest {
    pub fn has_ignores(&self) -> bool {
        !self.ignores.is_empty()
    }
}
