//! Media types for embedded assets, derived from the file extension.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    JavaScript,
    Css,
    Svg,
    Woff2,
    Json,
    Html,
    OctetStream,
}

impl ContentType {
    /// Guess from the final extension of `path`. Only the extension is
    /// compared case-insensitively; unknown extensions are `OctetStream`.
    pub fn from_path(path: &str) -> Self {
        let file_name = path.rsplit('/').next().unwrap_or(path);
        let Some((_, ext)) = file_name.rsplit_once('.') else {
            return ContentType::OctetStream;
        };

        match ext.to_ascii_lowercase().as_str() {
            "js" | "mjs" => ContentType::JavaScript,
            "css" => ContentType::Css,
            "svg" => ContentType::Svg,
            "woff2" => ContentType::Woff2,
            "json" => ContentType::Json,
            "html" | "htm" => ContentType::Html,
            _ => ContentType::OctetStream,
        }
    }

    /// HTTP media type string.
    pub fn mime(self) -> &'static str {
        match self {
            ContentType::JavaScript => "text/javascript",
            ContentType::Css => "text/css",
            ContentType::Svg => "image/svg+xml",
            ContentType::Woff2 => "font/woff2",
            ContentType::Json => "application/json",
            ContentType::Html => "text/html",
            ContentType::OctetStream => "application/octet-stream",
        }
    }

    /// True for payloads that are UTF-8 text.
    pub fn is_text(self) -> bool {
        !matches!(self, ContentType::Woff2 | ContentType::OctetStream)
    }
}
