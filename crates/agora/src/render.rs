// File: src/render.rs
// Purpose: Template rendering with escaped-by-default interpolation

use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::error::RenderError;
use crate::templates::TemplateStore;
use crate::value::{Model, Value};

/// The view renderer: resolves template names through a [`TemplateStore`]
/// and interpolates models into their source text.
///
/// Placeholder syntax:
/// - `{name}` / `{user.name}` — substitute the model value, HTML-escaped
/// - `{!name}` — substitute raw, without escaping (explicit opt-out)
/// - `{#each items} ... {/each}` — repeat the block per element of an
///   Array value, with `{it}` bound to the current element
///
/// Escaping is the default on every substitution path; the only way to get
/// unescaped output is the `!` marker, which routes through the separately
/// named [`substitute_raw`].
pub struct Renderer {
    templates: TemplateStore,
}

impl Renderer {
    pub fn new(templates: TemplateStore) -> Self {
        Self { templates }
    }

    /// Renders a named template against a model.
    pub fn render(&self, template: &str, model: &Model) -> Result<String, RenderError> {
        let source: Arc<str> = self.templates.get(template)?;
        Ok(render_str(&source, model))
    }
}

static BLOCK_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)\{#each\s+([a-zA-Z_][a-zA-Z0-9_\.]*)\s*\}(.*?)\{/each\}").unwrap()
});

static VAR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{(!?)([a-zA-Z_][a-zA-Z0-9_\.]*)\}").unwrap());

/// Renders template source text against a model.
///
/// Repetition blocks are expanded first; each block body is interpolated
/// once per element with `it` bound, so values substituted inside a block
/// are never re-scanned for placeholders.
pub fn render_str(source: &str, model: &Model) -> String {
    let mut out = String::with_capacity(source.len());
    let mut last = 0;

    for caps in BLOCK_RE.captures_iter(source) {
        let whole = caps.get(0).expect("capture 0 always present");
        out.push_str(&interpolate(&source[last..whole.start()], model));

        if let Some(Value::Array(items)) = lookup(model, &caps[1]) {
            let body = &caps[2];
            for item in items {
                let mut scoped = model.clone();
                scoped.insert("it".to_string(), item.clone());
                out.push_str(&interpolate(body, &scoped));
            }
        }
        // Missing or non-array sequences render the block zero times.

        last = whole.end();
    }

    out.push_str(&interpolate(&source[last..], model));
    out
}

/// Substitutes scalar placeholders. Unknown names are left as literal
/// placeholder text so a typo is visible in the output instead of silently
/// vanishing.
fn interpolate(content: &str, model: &Model) -> String {
    VAR_RE
        .replace_all(content, |caps: &Captures| {
            let raw = &caps[1] == "!";
            let name = &caps[2];
            match lookup(model, name) {
                Some(value) if raw => substitute_raw(value),
                Some(value) => substitute_escaped(value),
                None => caps[0].to_string(),
            }
        })
        .to_string()
}

/// The default substitution path: value text, HTML-escaped.
fn substitute_escaped(value: &Value) -> String {
    escape_html(&value.to_string())
}

/// The explicit unescaped path, reached only via the `{!name}` marker.
fn substitute_raw(value: &Value) -> String {
    value.to_string()
}

fn lookup<'a>(model: &'a Model, path: &str) -> Option<&'a Value> {
    match path.split_once('.') {
        Some((head, rest)) => model.get(head)?.get_path(rest),
        None => model.get(path),
    }
}

/// Escapes `& < > " '` to their entity equivalents.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
