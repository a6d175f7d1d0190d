// File: src/view.rs
// Purpose: Handler outcomes - redirect or template+model

use crate::value::Model;

/// A handler's declared outcome. Immutable once constructed: a redirect
/// terminates processing before any rendering, a render names a template
/// and carries the model to interpolate into it.
#[derive(Debug, Clone)]
pub enum ViewResult {
    Redirect { location: String },
    Render { template: String, model: Model },
}

impl ViewResult {
    /// A redirect to `location`, answered as 303 See Other.
    pub fn redirect(location: impl Into<String>) -> Self {
        ViewResult::Redirect {
            location: location.into(),
        }
    }

    /// Render the named template against `model`.
    pub fn render(template: impl Into<String>, model: Model) -> Self {
        ViewResult::Render {
            template: template.into(),
            model,
        }
    }

    pub fn is_redirect(&self) -> bool {
        matches!(self, ViewResult::Redirect { .. })
    }
}
