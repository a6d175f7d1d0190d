// File: src/request.rs
// Purpose: Request context with path bindings, query params, and form data

use std::collections::HashMap;

use agora_router::{Bindings, Method};
use axum::http::HeaderMap;

/// Request context passed to handlers.
#[derive(Clone)]
pub struct Request {
    /// HTTP method (GET or POST)
    pub method: Method,

    /// Canonical request path
    pub path: String,

    /// Path-variable bindings extracted by the matcher
    pub bindings: Bindings,

    /// Query parameters from the URL (?key=value)
    pub query: QueryParams,

    /// Form data decoded from a url-encoded POST body
    pub form: FormData,

    /// Request headers
    pub headers: HeaderMap,

    /// Raw request body
    pub body: Vec<u8>,
}

impl std::fmt::Debug for Request {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Request")
            .field("method", &self.method)
            .field("path", &self.path)
            .field("bindings", &self.bindings)
            .finish()
    }
}

impl Request {
    pub fn new(
        method: Method,
        path: impl Into<String>,
        bindings: Bindings,
        query: &str,
        headers: HeaderMap,
        body: Vec<u8>,
    ) -> Self {
        let query = QueryParams::parse(query);
        let form = if method == Method::Post {
            FormData::parse(&body)
        } else {
            FormData::default()
        };

        Self {
            method,
            path: path.into(),
            bindings,
            query,
            form,
            headers,
            body,
        }
    }

    /// Gets a bound path variable, e.g. `threadName` from `/threads/{threadName}`.
    pub fn binding(&self, name: &str) -> Option<&str> {
        self.bindings.get(name).map(String::as_str)
    }

    /// Gets a header value as a string.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)?.to_str().ok()
    }

    pub fn is_get(&self) -> bool {
        self.method == Method::Get
    }

    pub fn is_post(&self) -> bool {
        self.method == Method::Post
    }
}

/// Query parameters from the URL.
#[derive(Debug, Clone, Default)]
pub struct QueryParams {
    params: HashMap<String, String>,
}

impl QueryParams {
    /// Parses a raw query string like `page=2&filter=active`.
    pub fn parse(raw: &str) -> Self {
        Self {
            params: parse_urlencoded(raw),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// Gets a query parameter parsed into a specific type.
    pub fn get_as<T: std::str::FromStr>(&self, key: &str) -> Option<T> {
        self.params.get(key)?.parse().ok()
    }

    pub fn has(&self, key: &str) -> bool {
        self.params.contains_key(key)
    }

    pub fn as_map(&self) -> &HashMap<String, String> {
        &self.params
    }
}

/// Form data from url-encoded POST bodies.
#[derive(Debug, Clone, Default)]
pub struct FormData {
    fields: HashMap<String, String>,
}

impl FormData {
    /// Decodes a url-encoded request body. Field values are trimmed.
    pub fn parse(body: &[u8]) -> Self {
        let raw = String::from_utf8_lossy(body);
        let fields = parse_urlencoded(&raw)
            .into_iter()
            .map(|(k, v)| (k, v.trim().to_string()))
            .collect();
        Self { fields }
    }

    pub fn from_fields(fields: HashMap<String, String>) -> Self {
        let fields = fields
            .into_iter()
            .map(|(k, v)| (k, v.trim().to_string()))
            .collect();
        Self { fields }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Gets a form field parsed into a specific type.
    pub fn get_as<T: std::str::FromStr>(&self, key: &str) -> Option<T> {
        self.fields.get(key)?.parse().ok()
    }

    pub fn has(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn as_map(&self) -> &HashMap<String, String> {
        &self.fields
    }
}

/// Decodes `k=v&k2=v2` pairs, handling `+` as space and percent escapes.
fn parse_urlencoded(raw: &str) -> HashMap<String, String> {
    raw.split('&')
        .filter(|pair| !pair.is_empty())
        .filter_map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let key = key.replace('+', " ");
            let value = value.replace('+', " ");
            let key = urlencoding::decode(&key).ok()?.into_owned();
            let value = urlencoding::decode(&value).ok()?.into_owned();
            Some((key, value))
        })
        .collect()
}
