use crate::{IgnoreIndex, IgnoreListError};
use camino::Utf8Path;
use dependagen_types::IgnoreSource;
use std::time::Duration;
use tracing::{debug, info};

/// Load the ignore index from wherever `source` points. One request, no retry.
pub fn load_index(
    source: &IgnoreSource,
    timeout: Duration,
) -> Result<IgnoreIndex, IgnoreListError> {
    let index = match source {
        IgnoreSource::Url(url) => fetch_index(url, timeout)?,
        IgnoreSource::File(path) => read_index(path)?,
    };
    info!(source = %source, rules = index.len(), "loaded package ignore list");
    Ok(index)
}

pub fn fetch_index(url: &str, timeout: Duration) -> Result<IgnoreIndex, IgnoreListError> {
    debug!(url, timeout_secs = timeout.as_secs(), "downloading package ignore list");

    let fetch_err = |source: reqwest::Error| IgnoreListError::Fetch {
        url: url.to_string(),
        source,
    };

    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(fetch_err)?;
    let response = client.get(url).send().map_err(fetch_err)?;

    let status = response.status();
    if !status.is_success() {
        return Err(IgnoreListError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let body = response.text().map_err(fetch_err)?;
    IgnoreIndex::parse_json(&body)
}

pub fn read_index(path: &Utf8Path) -> Result<IgnoreIndex, IgnoreListError> {
    debug!(path = %path, "reading package ignore list");
    let text = std::fs::read_to_string(path).map_err(|source| IgnoreListError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    IgnoreIndex::parse_json(&text)
}
