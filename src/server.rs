//! Server: turns HTTP-style requests into responses over a registry.
//!
//! Transport-free: the host's web server or webview bridge supplies the
//! method and request target, and writes the returned status, headers and
//! body. A registry miss becomes a 404.

use std::fmt;
use std::str::FromStr;

use crate::content_type::ContentType;
use crate::registry::EmbeddedAssets;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Head,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsupportedMethod(pub String);

impl fmt::Display for UnsupportedMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unsupported method '{}'", self.0)
    }
}

impl std::error::Error for UnsupportedMethod {}

impl FromStr for Method {
    type Err = UnsupportedMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GET" => Ok(Method::Get),
            "HEAD" => Ok(Method::Head),
            other => Err(UnsupportedMethod(other.to_string())),
        }
    }
}

/// A parsed request. `method` is `Err` for anything but GET and HEAD.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetRequest<'a> {
    pub method: Result<Method, UnsupportedMethod>,
    /// Registry key: the target without query, fragment, or leading `/`.
    pub path: &'a str,
}

impl<'a> AssetRequest<'a> {
    pub fn parse(method: &str, target: &'a str) -> Self {
        AssetRequest {
            method: method.parse(),
            path: asset_key(target),
        }
    }

    pub fn get(target: &'a str) -> Self {
        AssetRequest {
            method: Ok(Method::Get),
            path: asset_key(target),
        }
    }
}

/// Strip the query string, fragment and one leading `/` from a request target.
fn asset_key(target: &str) -> &str {
    let end = target.find(['?', '#']).unwrap_or(target.len());
    let path = &target[..end];
    path.strip_prefix('/').unwrap_or(path)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetResponse {
    pub status: u16,
    pub content_type: &'static str,
    /// Length of the asset, also reported for HEAD where `body` is empty.
    pub content_length: usize,
    pub body: &'static [u8],
}

impl AssetResponse {
    fn ok(content_type: ContentType, content: &'static [u8], method: Method) -> Self {
        AssetResponse {
            status: 200,
            content_type: content_type.mime(),
            content_length: content.len(),
            body: match method {
                Method::Get => content,
                Method::Head => &[],
            },
        }
    }

    fn empty(status: u16) -> Self {
        AssetResponse {
            status,
            content_type: "text/plain",
            content_length: 0,
            body: &[],
        }
    }

    pub fn not_found() -> Self {
        Self::empty(404)
    }

    pub fn method_not_allowed() -> Self {
        Self::empty(405)
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Header pairs to send alongside the body.
    pub fn headers(&self) -> [(&'static str, String); 2] {
        [
            ("Content-Type", self.content_type.to_string()),
            ("Content-Length", self.content_length.to_string()),
        ]
    }
}

/// Serve `request` from `assets`.
pub fn resolve(assets: &EmbeddedAssets, request: &AssetRequest<'_>) -> AssetResponse {
    let method = match &request.method {
        Ok(method) => *method,
        Err(e) => {
            log::warn!("{e} for '{}'", request.path);
            return AssetResponse::method_not_allowed();
        }
    };

    match assets.get(request.path) {
        Some(file) => {
            log::trace!("serving '{}' ({} bytes)", file.name, file.len());
            AssetResponse::ok(ContentType::from_path(file.name), file.content, method)
        }
        None => {
            log::debug!("no embedded asset for '{}'", request.path);
            AssetResponse::not_found()
        }
    }
}
