//! The built-in patch-view assets: the generic patch-view module, logos,
//! and the IBM Plex Mono subset fonts with their stylesheet.

use crate::registry::{EmbeddedAssets, EmbeddedFile};

/// Key of the JS module that exports `createPatchView (patchConnection)`.
pub const GENERIC_PATCH_VIEW_MODULE: &str = "cmaj-generic-patch-view.js";

macro_rules! web_file {
    ($name:literal) => {
        EmbeddedFile::new($name, include_bytes!(concat!("../web/", $name)))
    };
}

const FILES: &[EmbeddedFile] = &[
    web_file!("cmaj-generic-patch-view.js"),
    web_file!("assets/cmajor-logo.svg"),
    web_file!("assets/sound-stacks-logo.svg"),
    web_file!("assets/ibmplexmono/v12/-F63fjptAgt5VM-kVkqdyU8n1iAq131nj-otFQ.woff2"),
    web_file!("assets/ibmplexmono/v12/-F63fjptAgt5VM-kVkqdyU8n1iEq131nj-otFQ.woff2"),
    web_file!("assets/ibmplexmono/v12/-F63fjptAgt5VM-kVkqdyU8n1iIq131nj-otFQ.woff2"),
    web_file!("assets/ibmplexmono/v12/ibmplexmono.css"),
    web_file!("assets/ibmplexmono/v12/-F63fjptAgt5VM-kVkqdyU8n1isq131nj-otFQ.woff2"),
    web_file!("assets/ibmplexmono/v12/-F63fjptAgt5VM-kVkqdyU8n1i8q131nj-o.woff2"),
];

/// Every asset available to patch views running in a browser.
pub static PATCH_VIEW_ASSETS: EmbeddedAssets = EmbeddedAssets::new(FILES);
