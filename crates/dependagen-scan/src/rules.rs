use camino::Utf8Path;
use dependagen_types::ManifestKind;
use regex::Regex;
use std::sync::LazyLock;

/// Local SDK installs (`./.dotnet`) carry their own project templates; never scan them.
pub const DOTNET_TOOLING_DIR_SUFFIX: &str = "/.dotnet";

pub const TARGET_FRAMEWORK_START: &str = "<TargetFramework>";
pub const TARGET_FRAMEWORK_END: &str = "</TargetFramework>";
pub const TARGET_FRAMEWORK_PREFIX: &str = "net";

/// A `PackageReference` whose `Version` starts with a digit.
pub const VERSIONED_PACKAGE_REFERENCE: &str = r#"PackageReference.*Version="[0-9]"#;
pub const PACKAGE_REFERENCE_INCLUDE: &str = r#"PackageReference Include=""#;

static VERSIONED_PACKAGE_REFERENCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(VERSIONED_PACKAGE_REFERENCE).expect("versioned package reference pattern compiles")
});

/// Everything the scanner matches against: which files are projects, which directories to
/// skip, and the markers used for line extraction.
#[derive(Clone, Debug)]
pub struct ScanRules {
    pub manifest_kinds: Vec<ManifestKind>,
    pub excluded_dir_suffixes: Vec<String>,
    pub framework_start: String,
    pub framework_end: String,
    pub framework_prefix: String,
    pub versioned_reference: Regex,
    pub package_include: String,
}

impl Default for ScanRules {
    fn default() -> Self {
        Self::dotnet()
    }
}

impl ScanRules {
    /// SDK-style .NET projects.
    pub fn dotnet() -> Self {
        Self {
            manifest_kinds: ManifestKind::ALL.to_vec(),
            excluded_dir_suffixes: vec![DOTNET_TOOLING_DIR_SUFFIX.to_string()],
            framework_start: TARGET_FRAMEWORK_START.to_string(),
            framework_end: TARGET_FRAMEWORK_END.to_string(),
            framework_prefix: TARGET_FRAMEWORK_PREFIX.to_string(),
            versioned_reference: VERSIONED_PACKAGE_REFERENCE_RE.clone(),
            package_include: PACKAGE_REFERENCE_INCLUDE.to_string(),
        }
    }

    pub fn manifest_kind(&self, path: &Utf8Path) -> Option<ManifestKind> {
        ManifestKind::from_path(path).filter(|k| self.manifest_kinds.contains(k))
    }

    /// Suffix match on the `/`-normalized directory path.
    pub fn is_excluded_dir(&self, dir: &str) -> bool {
        let normalized = dir.replace('\\', "/");
        let normalized = normalized.trim_end_matches('/');
        self.excluded_dir_suffixes
            .iter()
            .any(|suffix| normalized.ends_with(suffix.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dotnet_rules_know_three_project_kinds() {
        let rules = ScanRules::dotnet();
        assert!(rules.manifest_kind(Utf8Path::new("a/App.csproj")).is_some());
        assert!(rules.manifest_kind(Utf8Path::new("a/Lib.fsproj")).is_some());
        assert!(rules.manifest_kind(Utf8Path::new("a/Old.vbproj")).is_some());
        assert!(rules.manifest_kind(Utf8Path::new("a/App.sln")).is_none());
        assert!(rules.manifest_kind(Utf8Path::new("a/Directory.Build.props")).is_none());
    }

    #[test]
    fn manifest_kinds_can_be_narrowed() {
        let rules = ScanRules {
            manifest_kinds: vec![ManifestKind::CSharp],
            ..ScanRules::dotnet()
        };
        assert!(rules.manifest_kind(Utf8Path::new("App.csproj")).is_some());
        assert!(rules.manifest_kind(Utf8Path::new("Lib.fsproj")).is_none());
    }

    #[test]
    fn tooling_dir_is_excluded_by_suffix() {
        let rules = ScanRules::dotnet();
        assert!(rules.is_excluded_dir("/repo/.dotnet"));
        assert!(rules.is_excluded_dir("/repo/eng/.dotnet/"));
        assert!(rules.is_excluded_dir("C:\\repo\\.dotnet"));
        assert!(!rules.is_excluded_dir("/repo/.dotnet/sdk"));
        assert!(!rules.is_excluded_dir("/repo/my.dotnet"));
        assert!(!rules.is_excluded_dir("/repo/dotnet"));
    }

    #[test]
    fn versioned_reference_requires_leading_digit() {
        let re = &ScanRules::dotnet().versioned_reference;
        assert!(re.is_match(r#"<PackageReference Include="Foo" Version="1.2.3" />"#));
        assert!(!re.is_match(r#"<PackageReference Include="Foo" Version="$(FooVersion)" />"#));
        assert!(!re.is_match(r#"<PackageReference Include="Foo" />"#));
        assert!(!re.is_match(r#"<ProjectReference Include="..\Lib\Lib.csproj" />"#));
    }
}
