use camino::Utf8PathBuf;

/// The ignore list could not be obtained or does not have the expected shape.
///
/// Every variant is fatal for a run: no document is produced without the ignore list.
#[derive(Debug, thiserror::Error)]
pub enum IgnoreListError {
    #[error("could not download package ignore list from {url}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("package ignore list request to {url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("could not read package ignore list {path}")]
    Read {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("package ignore list is not valid JSON of the expected shape")]
    Malformed(#[source] serde_json::Error),

    #[error("package ignore list is empty (null payload)")]
    Empty,

    #[error("duplicate ignore rule for {key}")]
    DuplicateRule { key: String },
}
