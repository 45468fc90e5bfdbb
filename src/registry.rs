//! Registry: a fixed table of named, embedded byte payloads.
//!
//! Tables are built at compile time from `&'static` data, so a registry is
//! immutable for the life of the process and can be shared across threads
//! without synchronization. Lookups are exact: the key must match a stored
//! name byte-for-byte, with no case folding or path cleanup.

use crate::error::AssetError;

/// A single file embedded at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmbeddedFile {
    /// Logical path used as the lookup key (e.g. "assets/cmajor-logo.svg").
    pub name: &'static str,
    /// Raw file contents. Never interpreted by the registry.
    pub content: &'static [u8],
}

impl EmbeddedFile {
    pub const fn new(name: &'static str, content: &'static [u8]) -> Self {
        EmbeddedFile { name, content }
    }

    /// Payload length in bytes.
    pub const fn len(&self) -> usize {
        self.content.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// An ordered, read-only collection of embedded files.
#[derive(Debug, Clone, Copy)]
pub struct EmbeddedAssets {
    files: &'static [EmbeddedFile],
}

impl EmbeddedAssets {
    pub const fn new(files: &'static [EmbeddedFile]) -> Self {
        EmbeddedAssets { files }
    }

    /// Return the content of the first file named exactly `path`, or an
    /// empty slice when nothing matches.
    pub fn find_resource(&self, path: &str) -> &'static [u8] {
        match self.get(path) {
            Some(file) => file.content,
            None => &[],
        }
    }

    /// Find the first file named exactly `path`.
    pub fn get(&self, path: &str) -> Option<&'static EmbeddedFile> {
        let files: &'static [EmbeddedFile] = self.files;
        files.iter().find(|file| file.name == path)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.get(path).is_some()
    }

    /// Like [`find_resource`](Self::find_resource), but a miss is an error.
    pub fn require(&self, path: &str) -> Result<&'static [u8], AssetError> {
        self.get(path)
            .map(|file| file.content)
            .ok_or_else(|| AssetError::NotFound {
                path: path.to_string(),
            })
    }

    /// Look up a text asset (JS, CSS, SVG) as a string slice.
    pub fn find_text(&self, path: &str) -> Result<&'static str, AssetError> {
        let content = self.require(path)?;
        std::str::from_utf8(content).map_err(|source| AssetError::NotText {
            path: path.to_string(),
            source,
        })
    }

    /// All files, in table order.
    pub fn files(&self) -> &'static [EmbeddedFile] {
        self.files
    }

    /// All names, in table order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + use<> {
        let files: &'static [EmbeddedFile] = self.files;
        files.iter().map(|file| file.name)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Sum of all payload sizes in bytes.
    pub fn total_size(&self) -> usize {
        self.files.iter().map(EmbeddedFile::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FILES: &[EmbeddedFile] = &[
        EmbeddedFile::new("index.html", b"<html></html>"),
        EmbeddedFile::new("style.css", b"body {}"),
        EmbeddedFile::new("font.bin", &[0x77, 0x4f, 0xff, 0xfe]),
        EmbeddedFile::new("style.css", b"shadowed"),
    ];

    static ASSETS: EmbeddedAssets = EmbeddedAssets::new(FILES);

    #[test]
    fn finds_exact_name() {
        assert_eq!(ASSETS.find_resource("index.html"), b"<html></html>");
        assert_eq!(ASSETS.find_resource("font.bin").len(), 4);
    }

    #[test]
    fn miss_is_empty_not_error() {
        assert!(ASSETS.find_resource("missing.txt").is_empty());
        assert!(ASSETS.find_resource("").is_empty());
        assert!(ASSETS.get("missing.txt").is_none());
        assert!(!ASSETS.contains("missing.txt"));
    }

    #[test]
    fn no_normalization() {
        assert!(ASSETS.find_resource("/index.html").is_empty());
        assert!(ASSETS.find_resource("INDEX.HTML").is_empty());
        assert!(ASSETS.find_resource("index.html ").is_empty());
        assert!(ASSETS.find_resource("./index.html").is_empty());
    }

    #[test]
    fn first_match_wins() {
        assert_eq!(ASSETS.find_resource("style.css"), b"body {}");
    }

    #[test]
    fn require_reports_missing_path() {
        let err = ASSETS.require("nope.js").unwrap_err();
        assert!(matches!(&err, AssetError::NotFound { path } if path == "nope.js"));
        assert_eq!(err.to_string(), "No embedded asset named 'nope.js'");
    }

    #[test]
    fn find_text_rejects_binary() {
        assert_eq!(ASSETS.find_text("style.css").unwrap(), "body {}");
        assert!(matches!(
            ASSETS.find_text("font.bin"),
            Err(AssetError::NotText { .. })
        ));
    }

    #[test]
    fn enumeration_keeps_table_order() {
        let names: Vec<_> = ASSETS.names().collect();
        assert_eq!(names, ["index.html", "style.css", "font.bin", "style.css"]);
        assert_eq!(ASSETS.len(), 4);
        assert!(!ASSETS.is_empty());
        assert_eq!(ASSETS.total_size(), 13 + 7 + 4 + 8);
    }

    #[test]
    fn empty_table() {
        let empty = EmbeddedAssets::new(&[]);
        assert!(empty.is_empty());
        assert!(empty.find_resource("anything").is_empty());
        assert_eq!(empty.total_size(), 0);
    }
}
