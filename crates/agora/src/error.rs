// File: src/error.rs
// Purpose: Error taxonomy for rendering, static serving, and handlers

use thiserror::Error;

/// View rendering failures. Both surface as 500 responses.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("template not found: {0}")]
    TemplateNotFound(String),

    #[error("failed to read template {name}")]
    Io {
        name: String,
        #[source]
        source: std::io::Error,
    },
}

/// Static fallback failure: no file under the static root for this path.
/// Surfaces as 404.
#[derive(Debug, Error)]
#[error("no static file for {0}")]
pub struct StaticNotFound(pub String);

/// Failure signalled by a request handler. Surfaces as 500 with no partial
/// output; there are no retries.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct HandlerError {
    message: String,
}

impl HandlerError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<anyhow::Error> for HandlerError {
    fn from(err: anyhow::Error) -> Self {
        Self {
            message: format!("{err:#}"),
        }
    }
}

impl From<String> for HandlerError {
    fn from(message: String) -> Self {
        Self { message }
    }
}

impl From<&str> for HandlerError {
    fn from(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}
