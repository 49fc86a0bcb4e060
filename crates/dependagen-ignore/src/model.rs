use serde::{Deserialize, Serialize};

/// Top-level shape of `package-ignore.json`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageInfoSet {
    pub packages: Vec<PackageInfo>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageInfo {
    pub name: String,
    pub mapping: Vec<FrameworkIgnoreMapping>,
}

/// Version patterns to skip for one package on one target framework.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameworkIgnoreMapping {
    pub target_framework: String,
    pub ignore: Vec<String>,
}
