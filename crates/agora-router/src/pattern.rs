//! Route pattern parsing and matching.
//!
//! A pattern is an ordered sequence of `/`-delimited segments. A segment
//! wrapped in braces (`{threadName}`) matches any single non-empty path
//! segment and binds its value; every other segment is a literal that must
//! match exactly, case-sensitive. Segment counts must line up — there is no
//! prefix or trailing-wildcard matching.

use std::collections::HashMap;
use std::fmt;

use crate::path::normalize_path;
use crate::RouteError;

/// Path-variable bindings extracted from one matched request.
pub type Bindings = HashMap<String, String>;

/// One parsed pattern segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Literal text, matched exactly.
    Literal(String),
    /// `{name}` variable, matches any single non-empty segment.
    Param(String),
}

/// A parsed route pattern, fixed at registration time.
#[derive(Debug, Clone)]
pub struct Pattern {
    raw: String,
    segments: Vec<Segment>,
}

impl Pattern {
    /// Parses a pattern string like `/threads/{threadName}/posts`.
    ///
    /// Fails with [`RouteError::InvalidPattern`] when a segment mixes braces
    /// with literal text, when a variable name is empty or not an
    /// identifier, or when braces are unbalanced.
    ///
    /// # Examples
    ///
    /// ```
    /// use agora_router::Pattern;
    ///
    /// let pattern = Pattern::parse("/threads/{threadName}").unwrap();
    /// assert_eq!(pattern.as_str(), "/threads/{threadName}");
    ///
    /// assert!(Pattern::parse("/threads/{").is_err());
    /// assert!(Pattern::parse("/threads/{}").is_err());
    /// ```
    pub fn parse(pattern: &str) -> Result<Self, RouteError> {
        let raw = normalize_path(pattern).into_owned();

        let mut segments = Vec::new();
        for part in raw.split('/').filter(|s| !s.is_empty()) {
            segments.push(parse_segment(&raw, part)?);
        }

        Ok(Self { raw, segments })
    }

    /// The normalized pattern text, as registered.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Matches a canonical request path, returning the variable bindings.
    ///
    /// Bound values are percent-decoded, so `/threads/rust%20talk` binds
    /// `threadName = "rust talk"`. A value whose decoded form contains `/`
    /// does not match: an encoded slash must not smuggle in an extra
    /// segment.
    ///
    /// # Examples
    ///
    /// ```
    /// use agora_router::Pattern;
    ///
    /// let pattern = Pattern::parse("/threads/{threadName}").unwrap();
    /// let bindings = pattern.matches("/threads/general").unwrap();
    /// assert_eq!(bindings.get("threadName").map(String::as_str), Some("general"));
    ///
    /// assert!(pattern.matches("/threads").is_none());
    /// assert!(pattern.matches("/threads/general/posts").is_none());
    /// ```
    pub fn matches(&self, path: &str) -> Option<Bindings> {
        let parts: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        if parts.len() != self.segments.len() {
            return None;
        }

        let mut bindings = Bindings::new();
        for (segment, part) in self.segments.iter().zip(&parts) {
            match segment {
                Segment::Literal(lit) => {
                    if lit != part {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    let value = urlencoding::decode(part).ok()?;
                    if value.contains('/') {
                        return None;
                    }
                    bindings.insert(name.clone(), value.into_owned());
                }
            }
        }
        Some(bindings)
    }

    /// Whether two patterns match exactly the same set of paths.
    ///
    /// Variable names are ignored: `/t/{a}` and `/t/{b}` have the same
    /// shape. Used for duplicate detection at registration time.
    pub fn same_shape(&self, other: &Pattern) -> bool {
        self.segments.len() == other.segments.len()
            && self
                .segments
                .iter()
                .zip(&other.segments)
                .all(|(a, b)| match (a, b) {
                    (Segment::Literal(x), Segment::Literal(y)) => x == y,
                    (Segment::Param(_), Segment::Param(_)) => true,
                    _ => false,
                })
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

fn parse_segment(pattern: &str, part: &str) -> Result<Segment, RouteError> {
    let invalid = |reason: &str| RouteError::InvalidPattern {
        pattern: pattern.to_string(),
        reason: reason.to_string(),
    };

    match part.strip_prefix('{').map(|rest| rest.strip_suffix('}')) {
        Some(Some(name)) => {
            if name.is_empty() {
                return Err(invalid("empty variable name"));
            }
            if !is_identifier(name) {
                return Err(invalid("variable name must be an identifier"));
            }
            Ok(Segment::Param(name.to_string()))
        }
        Some(None) => Err(invalid("unclosed '{' in segment")),
        None => {
            if part.contains('{') || part.contains('}') {
                return Err(invalid("braces may only wrap a whole segment"));
            }
            Ok(Segment::Literal(part.to_string()))
        }
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
