#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableHeader {
    /// Shown as `# generated by {tool}`.
    pub tool: String,
    /// Where the ignore rules came from; shown as a comment.
    pub ignore_source: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableSchedule {
    pub interval: String,
    pub day: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableIgnore {
    pub dependency_name: String,
    pub versions: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableUpdate {
    pub ecosystem: String,
    pub directory: String,
    pub file_name: String,
    pub schedule: RenderableSchedule,
    pub open_pull_requests_limit: u32,
    pub ignores: Vec<RenderableIgnore>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableConfig {
    pub header: RenderableHeader,
    pub updates: Vec<RenderableUpdate>,
}
