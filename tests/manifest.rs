use cmaj_web_assets::content_type::ContentType;
use cmaj_web_assets::manifest::AssetManifest;
use cmaj_web_assets::{PATCH_VIEW_ASSETS, VERSION};

#[test]
fn built_in_manifest_lists_every_asset() {
    let manifest = AssetManifest::from_assets(&PATCH_VIEW_ASSETS);
    assert_eq!(manifest.version, VERSION);
    assert_eq!(manifest.assets.len(), PATCH_VIEW_ASSETS.len());

    for (entry, file) in manifest.assets.iter().zip(PATCH_VIEW_ASSETS.files()) {
        assert_eq!(entry.name, file.name);
        assert_eq!(entry.size, file.len());
    }

    let types: Vec<_> = manifest.assets.iter().map(|e| e.content_type).collect();
    assert_eq!(types.iter().filter(|&&t| t == ContentType::Woff2).count(), 5);
    assert_eq!(types.iter().filter(|&&t| t == ContentType::Svg).count(), 2);
    assert_eq!(types[0], ContentType::JavaScript);
}

#[test]
fn manifest_json_is_stable() {
    let manifest = AssetManifest::from_assets(&PATCH_VIEW_ASSETS);
    let json = manifest.to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["assets"][1]["name"], "assets/cmajor-logo.svg");
    assert_eq!(value["assets"][1]["size"], 2981);
    assert_eq!(value["assets"][1]["contentType"], "svg");
}

#[cfg(feature = "integrity")]
#[test]
fn integrity_matches_payload() {
    use cmaj_web_assets::integrity::ContentDigest;

    let manifest = AssetManifest::from_assets(&PATCH_VIEW_ASSETS);
    let entry = manifest.get("assets/ibmplexmono/v12/ibmplexmono.css").unwrap();
    let css = PATCH_VIEW_ASSETS.find_resource(&entry.name);
    assert_eq!(entry.integrity.as_deref(), Some(ContentDigest::of(css).to_sri().as_str()));
}
