pub mod content_type;
pub mod error;
#[cfg(feature = "integrity")]
pub mod integrity;
pub mod manifest;
pub mod registry;
pub mod server;
pub mod table;

use crate::manifest::AssetManifest;
use crate::registry::EmbeddedFile;
use wasm_bindgen::prelude::*;

pub use crate::error::AssetError;
pub use crate::registry::EmbeddedAssets;
pub use crate::table::{GENERIC_PATCH_VIEW_MODULE, PATCH_VIEW_ASSETS};

/// The crate version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// WASM-exposed: return the crate version string.
#[wasm_bindgen]
pub fn core_version() -> String {
    VERSION.to_string()
}

/// Look up a built-in patch-view asset by its exact name.
/// Returns an empty slice when there is no such asset.
pub fn find_resource(path: &str) -> &'static [u8] {
    PATCH_VIEW_ASSETS.find_resource(path)
}

/// Look up a built-in patch-view asset record by its exact name.
pub fn get_resource(path: &str) -> Option<&'static EmbeddedFile> {
    PATCH_VIEW_ASSETS.get(path)
}

/// WASM-exposed: copy a built-in asset into a `Uint8Array`.
/// An empty array means the asset does not exist.
#[wasm_bindgen]
pub fn find_web_resource(path: &str) -> Vec<u8> {
    find_resource(path).to_vec()
}

/// WASM-exposed: names of all built-in assets, in table order.
#[wasm_bindgen]
pub fn web_resource_names() -> Vec<String> {
    PATCH_VIEW_ASSETS.names().map(str::to_string).collect()
}

/// WASM-exposed: the built-in asset manifest as a JS object.
#[wasm_bindgen]
pub fn web_asset_manifest() -> Result<JsValue, JsValue> {
    let manifest = AssetManifest::from_assets(&PATCH_VIEW_ASSETS);
    serde_wasm_bindgen::to_value(&manifest).map_err(|e| JsValue::from_str(&format!("{e}")))
}
