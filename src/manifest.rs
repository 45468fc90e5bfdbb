//! Asset manifest: a JSON listing of what a registry holds.
//!
//! Hosts hand this to the browser side so a patch view can discover the
//! available files without probing for them.

use serde::{Deserialize, Serialize};

use crate::content_type::ContentType;
use crate::error::AssetError;
use crate::registry::{EmbeddedAssets, EmbeddedFile};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetManifest {
    /// Version of the crate that produced the manifest.
    pub version: String,
    /// One entry per file, in table order.
    pub assets: Vec<ManifestEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub name: String,
    /// Payload length in bytes.
    pub size: usize,
    #[serde(rename = "contentType")]
    pub content_type: ContentType,
    /// `sha256-<base64>` subresource-integrity string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub integrity: Option<String>,
}

impl ManifestEntry {
    pub fn for_file(file: &EmbeddedFile) -> Self {
        ManifestEntry {
            name: file.name.to_string(),
            size: file.len(),
            content_type: ContentType::from_path(file.name),
            integrity: integrity_of(file.content),
        }
    }
}

#[cfg(feature = "integrity")]
fn integrity_of(content: &[u8]) -> Option<String> {
    Some(crate::integrity::ContentDigest::of(content).to_sri())
}

#[cfg(not(feature = "integrity"))]
fn integrity_of(_content: &[u8]) -> Option<String> {
    None
}

impl AssetManifest {
    pub fn from_assets(assets: &EmbeddedAssets) -> Self {
        AssetManifest {
            version: crate::VERSION.to_string(),
            assets: assets.files().iter().map(ManifestEntry::for_file).collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&ManifestEntry> {
        self.assets.iter().find(|entry| entry.name == name)
    }

    pub fn to_json(&self) -> Result<String, AssetError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, AssetError> {
        Ok(serde_json::from_str(json)?)
    }
}
