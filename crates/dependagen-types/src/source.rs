use camino::Utf8PathBuf;
use std::fmt;

/// Where the package ignore list is loaded from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IgnoreSource {
    Url(String),
    File(Utf8PathBuf),
}

impl fmt::Display for IgnoreSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IgnoreSource::Url(url) => f.write_str(url),
            IgnoreSource::File(path) => f.write_str(path.as_str()),
        }
    }
}
