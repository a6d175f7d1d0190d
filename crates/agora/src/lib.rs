// Agora - minimal routing and view-rendering core
// Explicit route table, escaped-by-default templates, static fallback

pub mod config;
pub mod dispatch;
pub mod error;
pub mod render;
pub mod request;
pub mod response;
pub mod statics;
pub mod templates;
pub mod value;
pub mod view;

// Re-export router types alongside the core
pub use agora_router::{Bindings, Method, Pattern, RouteError, RouteTable};

// Re-export core types
pub use config::Config;
pub use dispatch::{App, Handler};
pub use error::{HandlerError, RenderError, StaticNotFound};
pub use render::{escape_html, Renderer};
pub use request::{FormData, QueryParams, Request};
pub use response::{ErrorResponse, PageResponse, RedirectResponse};
pub use statics::{StaticFile, StaticFiles};
pub use templates::TemplateStore;
pub use value::{Model, Value};
pub use view::ViewResult;

// Re-export commonly used types from dependencies
pub use axum;
pub use axum::http::StatusCode;
