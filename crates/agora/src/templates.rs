// File: src/templates.rs
// Purpose: Loads named templates from the template root, with memoization

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use crate::error::RenderError;

/// File-backed template store.
///
/// Templates are addressed by name and resolved to `<root>/<name>.html`.
/// Loading is lazy: the file is read on first access and, when caching is
/// enabled, memoized for the life of the store. The cache write lock is
/// only taken on that first load, so concurrent requests for warm
/// templates never block each other.
pub struct TemplateStore {
    root: PathBuf,
    cache_enabled: bool,
    cache: RwLock<HashMap<String, Arc<str>>>,
}

impl TemplateStore {
    pub fn new(root: impl Into<PathBuf>, cache_enabled: bool) -> Self {
        Self {
            root: root.into(),
            cache_enabled,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Gets the source text of a named template.
    ///
    /// Fails with [`RenderError::TemplateNotFound`] when no file backs the
    /// name. Names are plain identifiers for files under the root; path
    /// separators and `..` are rejected as not-found rather than resolved.
    pub fn get(&self, name: &str) -> Result<Arc<str>, RenderError> {
        if self.cache_enabled {
            if let Ok(cache) = self.cache.read() {
                if let Some(text) = cache.get(name) {
                    return Ok(Arc::clone(text));
                }
            }
        }

        let text = self.load(name)?;

        if self.cache_enabled {
            if let Ok(mut cache) = self.cache.write() {
                cache.insert(name.to_string(), Arc::clone(&text));
            }
        }

        Ok(text)
    }

    fn load(&self, name: &str) -> Result<Arc<str>, RenderError> {
        if name.is_empty() || name.contains('/') || name.contains('\\') || name.contains("..") {
            return Err(RenderError::TemplateNotFound(name.to_string()));
        }

        let path = self.root.join(format!("{name}.html"));
        match std::fs::read_to_string(&path) {
            Ok(text) => Ok(Arc::from(text.as_str())),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                Err(RenderError::TemplateNotFound(name.to_string()))
            }
            Err(err) => Err(RenderError::Io {
                name: name.to_string(),
                source: err,
            }),
        }
    }
}
