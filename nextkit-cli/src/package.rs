use serde::Deserialize;
use std::path::Path;

use crate::error::ScaffoldError;

/// The two `package.json` fields shown when `nextkit start` runs.
///
/// A field absent from the manifest decodes as an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PackageMetadata {
    pub name: String,
    pub version: String,
}

/// Read `path` and decode the `name` and `version` fields.
///
/// Other fields in the manifest are ignored. Fails with
/// [`ScaffoldError::Read`] when the file cannot be read and
/// [`ScaffoldError::Parse`] when it is not valid JSON.
pub fn read(path: &Path) -> Result<PackageMetadata, ScaffoldError> {
    tracing::debug!(path = %path.display(), "reading package metadata");
    let bytes = std::fs::read(path).map_err(|source| ScaffoldError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_slice(&bytes).map_err(|source| ScaffoldError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
