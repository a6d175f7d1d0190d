//! # Agora Router
//!
//! An explicit route table mapping (HTTP method, URI pattern) pairs to
//! handlers. Patterns support literal segments and `{name}` path variables:
//!
//! - Literal segments match exactly, case-sensitive (`/threads`)
//! - `{name}` matches any single non-empty segment and binds it
//! - Segment counts must match exactly; there are no wildcards
//!
//! Routes are registered one by one; registering the same (method, pattern)
//! twice is an error. Lookup walks routes in registration order and the
//! first match wins — that ordering is the documented tie-break when both a
//! literal and a variable route could match the same path.
//!
//! ## Example
//!
//! ```
//! use agora_router::{Method, RouteTable};
//!
//! let mut table: RouteTable<&'static str> = RouteTable::new();
//! table.register(Method::Get, "/threads/{threadName}", "show-thread").unwrap();
//!
//! let (handler, bindings) = table.lookup(Method::Get, "/threads/general").unwrap();
//! assert_eq!(*handler, "show-thread");
//! assert_eq!(bindings.get("threadName").map(String::as_str), Some("general"));
//! ```

use std::fmt;

use thiserror::Error;

pub mod path;
pub mod pattern;

pub use path::{is_canonical_path, normalize_path};
pub use pattern::{Bindings, Pattern, Segment};

/// HTTP methods the route table understands.
///
/// Anything else never matches a route and falls through to whatever the
/// caller does on `lookup` returning `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Registration-time errors. Both are fatal at startup; the table is never
/// mutated after a failed registration.
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("duplicate route: {method} {pattern}")]
    Duplicate { method: Method, pattern: String },

    #[error("invalid route pattern {pattern:?}: {reason}")]
    InvalidPattern { pattern: String, reason: String },
}

/// One registered route.
#[derive(Debug, Clone)]
pub struct Route<H> {
    pub method: Method,
    pub pattern: Pattern,
    pub handler: H,
}

/// The route table: registration-ordered, immutable after startup.
#[derive(Debug, Clone)]
pub struct RouteTable<H> {
    routes: Vec<Route<H>>,
}

impl<H> Default for RouteTable<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> RouteTable<H> {
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Registers a handler under (method, pattern).
    ///
    /// Fails with [`RouteError::Duplicate`] when a route with the same
    /// method and the same pattern shape already exists — `/t/{a}` and
    /// `/t/{b}` count as duplicates since they match identical paths.
    pub fn register(
        &mut self,
        method: Method,
        pattern: &str,
        handler: H,
    ) -> Result<(), RouteError> {
        let pattern = Pattern::parse(pattern)?;

        if self
            .routes
            .iter()
            .any(|r| r.method == method && r.pattern.same_shape(&pattern))
        {
            return Err(RouteError::Duplicate {
                method,
                pattern: pattern.as_str().to_string(),
            });
        }

        self.routes.push(Route {
            method,
            pattern,
            handler,
        });
        Ok(())
    }

    /// Finds the first registered route matching (method, path).
    ///
    /// The path is normalized before matching, so `/threads/` and
    /// `/threads` resolve identically. Returns the handler together with
    /// the path-variable bindings for this request.
    pub fn lookup(&self, method: Method, path: &str) -> Option<(&H, Bindings)> {
        let path = normalize_path(path);
        self.routes
            .iter()
            .filter(|r| r.method == method)
            .find_map(|r| r.pattern.matches(&path).map(|b| (&r.handler, b)))
    }

    /// All registered routes, in registration order.
    pub fn routes(&self) -> &[Route<H>] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
