//! Local content serving via custom protocol.
//!
//! Registers a `mayday://` custom protocol so that the crash window can
//! load bundled HTML/JS/CSS without a local HTTP server.

use std::borrow::Cow;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Custom protocol scheme served by [`ContentProvider`].
pub const SCHEME: &str = "mayday";

/// Serves assets from memory and, optionally, from a base directory.
///
/// When a WebView requests `mayday://localhost/crash/index.html`, the
/// provider first looks for an in-memory override registered under
/// `crash/index.html`, then for `{base_dir}/crash/index.html`.
#[derive(Debug, Default)]
pub struct ContentProvider {
    /// Base directory for resolving asset paths.
    base_dir: Option<PathBuf>,
    /// In-memory assets (bundled pages).
    overrides: HashMap<String, (String, Vec<u8>)>, // path -> (mime, data)
}

impl ContentProvider {
    /// A provider that only serves in-memory assets.
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// A provider rooted at `base_dir`.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: Some(base_dir.into()),
            overrides: HashMap::new(),
        }
    }

    /// Register an in-memory asset.
    pub fn add_override(
        &mut self,
        path: impl Into<String>,
        mime: impl Into<String>,
        data: impl Into<Vec<u8>>,
    ) {
        let path = path.into();
        let clean = path.trim_start_matches('/').to_string();
        self.overrides.insert(clean, (mime.into(), data.into()));
    }

    /// Resolve a request path to content bytes and MIME type.
    pub fn resolve(&self, path: &str) -> Option<(Cow<'_, str>, Cow<'_, [u8]>)> {
        let clean = path.trim_start_matches('/');

        if let Some((mime, data)) = self.overrides.get(clean) {
            return Some((Cow::Borrowed(mime.as_str()), Cow::Borrowed(data.as_slice())));
        }

        let base_dir = self.base_dir.as_ref()?;
        let file_path = base_dir.join(clean);

        // Prevent directory traversal (including symlink bypass).
        let canonical_base = std::fs::canonicalize(base_dir).ok()?;
        let canonical_file = std::fs::canonicalize(&file_path).ok()?;
        if !canonical_file.starts_with(&canonical_base) {
            return None;
        }

        let data = std::fs::read(&canonical_file).ok()?;
        let mime = mime_from_extension(&file_path);
        Some((Cow::Owned(mime.to_string()), Cow::Owned(data)))
    }

    pub fn base_dir(&self) -> Option<&Path> {
        self.base_dir.as_deref()
    }
}

/// Strip the scheme and host from a `mayday://` request URI.
///
/// On Windows, WebView2 rewrites `mayday://localhost/x` to
/// `http://mayday.localhost/x`; both forms are accepted.
pub fn request_path(uri: &str) -> &str {
    let path = uri
        .strip_prefix("mayday://localhost/")
        .or_else(|| uri.strip_prefix("mayday://localhost"))
        .or_else(|| uri.strip_prefix("http://mayday.localhost/"))
        .or_else(|| uri.strip_prefix("mayday:///"))
        .or_else(|| uri.strip_prefix("mayday://"))
        .unwrap_or("");
    // Drop query string and fragment.
    path.split(['?', '#']).next().unwrap_or("")
}

/// Guess MIME type from file extension.
fn mime_from_extension(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("html") | Some("htm") => "text/html",
        Some("css") => "text/css",
        Some("js") | Some("mjs") => "application/javascript",
        Some("json") => "application/json",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("woff") => "font/woff",
        Some("woff2") => "font/woff2",
        Some("txt") => "text/plain",
        _ => "application/octet-stream",
    }
}
