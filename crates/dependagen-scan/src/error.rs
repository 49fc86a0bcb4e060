use camino::Utf8PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("scan root is not a directory: {path}")]
    MissingRoot { path: Utf8PathBuf },

    #[error("walk {root}")]
    Walk {
        root: Utf8PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("read {path}")]
    ReadManifest {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
}
