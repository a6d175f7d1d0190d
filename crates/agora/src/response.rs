// File: src/response.rs
// Purpose: HTTP response builders for rendered pages, redirects, and errors

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{Html, IntoResponse, Response};

use crate::render::escape_html;
use crate::statics::StaticFile;

/// A rendered HTML page.
#[derive(Debug)]
pub struct PageResponse {
    html: String,
    status: StatusCode,
}

impl PageResponse {
    pub fn new(html: impl Into<String>) -> Self {
        Self {
            html: html.into(),
            status: StatusCode::OK,
        }
    }
}

impl IntoResponse for PageResponse {
    fn into_response(self) -> Response {
        (self.status, Html(self.html)).into_response()
    }
}

/// A redirect with the `Location` header set. Defaults to 303 See Other so
/// a POST-then-redirect lands as a GET.
#[derive(Debug)]
pub struct RedirectResponse {
    location: String,
    status: StatusCode,
}

impl RedirectResponse {
    pub fn to(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            status: StatusCode::SEE_OTHER,
        }
    }

    /// Override the status (301, 302, 303, 307, 308).
    pub fn status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }
}

impl IntoResponse for RedirectResponse {
    fn into_response(self) -> Response {
        // A redirect without a Location header is not a redirect. A target
        // that cannot be carried in a header is a server-side bug, answered
        // as such rather than sent as a dead-end 3xx.
        match HeaderValue::from_str(&self.location) {
            Ok(value) => {
                let mut response = self.status.into_response();
                response.headers_mut().insert(header::LOCATION, value);
                response
            }
            Err(_) => ErrorResponse::internal(format!(
                "invalid redirect location: {}",
                self.location
            ))
            .into_response(),
        }
    }
}

/// An error page. The message is HTML-escaped before it reaches the body.
#[derive(Debug)]
pub struct ErrorResponse {
    message: String,
    status: StatusCode,
}

impl ErrorResponse {
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn not_found(path: &str) -> Self {
        Self {
            message: format!("no resource at {path}"),
            status: StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        let body = format!(
            r#"<div class="error">{}</div>"#,
            escape_html(&self.message)
        );
        (self.status, Html(body)).into_response()
    }
}

impl IntoResponse for StaticFile {
    fn into_response(self) -> Response {
        (
            StatusCode::OK,
            [(header::CONTENT_TYPE, self.content_type)],
            self.bytes,
        )
            .into_response()
    }
}
