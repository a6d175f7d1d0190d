// File: src/statics.rs
// Purpose: Static-asset fallback for URIs no route claims

use std::path::{Component, Path, PathBuf};

use crate::error::StaticNotFound;

/// A file resolved from the static root, ready to send.
#[derive(Debug, Clone)]
pub struct StaticFile {
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

/// Serves files from a configured static root when no route matches.
pub struct StaticFiles {
    root: PathBuf,
}

impl StaticFiles {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolves a request path under the static root.
    ///
    /// Fails with [`StaticNotFound`] when no file exists there. Paths with
    /// parent-directory components never escape the root; they are treated
    /// as not found.
    pub fn serve(&self, path: &str) -> Result<StaticFile, StaticNotFound> {
        let relative = path.trim_start_matches('/');
        if relative.is_empty() {
            return Err(StaticNotFound(path.to_string()));
        }

        let candidate = Path::new(relative);
        let traversal = candidate
            .components()
            .any(|c| !matches!(c, Component::Normal(_)));
        if traversal {
            return Err(StaticNotFound(path.to_string()));
        }

        let full = self.root.join(candidate);
        match std::fs::read(&full) {
            Ok(bytes) => Ok(StaticFile {
                content_type: content_type_for(candidate),
                bytes,
            }),
            Err(err) => {
                if err.kind() != std::io::ErrorKind::NotFound {
                    tracing::warn!("failed to read static file {:?}: {}", full, err);
                }
                Err(StaticNotFound(path.to_string()))
            }
        }
    }
}

/// Infers a Content-Type from the file extension.
pub fn content_type_for(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("html") | Some("htm") => "text/html; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("js") => "text/javascript; charset=utf-8",
        Some("json") => "application/json",
        Some("txt") => "text/plain; charset=utf-8",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("woff2") => "font/woff2",
        _ => "application/octet-stream",
    }
}
