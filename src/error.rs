use std::fmt;
use std::str::Utf8Error;

/// Errors raised by the strict lookup helpers and manifest (de)serialization.
///
/// Plain lookups never produce one of these: a missing asset is reported as
/// an empty slice or `None`.
#[derive(Debug)]
pub enum AssetError {
    NotFound { path: String },
    NotText { path: String, source: Utf8Error },
    Manifest(serde_json::Error),
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetError::NotFound { path } => write!(f, "No embedded asset named '{path}'"),
            AssetError::NotText { path, source } => {
                write!(f, "Embedded asset '{path}' is not UTF-8 text: {source}")
            }
            AssetError::Manifest(e) => write!(f, "Manifest error: {e}"),
        }
    }
}

impl std::error::Error for AssetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AssetError::NotFound { .. } => None,
            AssetError::NotText { source, .. } => Some(source),
            AssetError::Manifest(e) => Some(e),
        }
    }
}

impl From<serde_json::Error> for AssetError {
    fn from(e: serde_json::Error) -> Self {
        AssetError::Manifest(e)
    }
}
