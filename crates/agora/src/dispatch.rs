// File: src/dispatch.rs
// Purpose: The request pipeline - route lookup, handler invocation, view dispatch

use std::sync::Arc;

use agora_router::{normalize_path, Method, RouteError, RouteTable};
use axum::http;
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Response};
use tracing::{debug, error, info};

use crate::config::Config;
use crate::error::HandlerError;
use crate::render::Renderer;
use crate::request::Request;
use crate::response::{ErrorResponse, PageResponse, RedirectResponse};
use crate::statics::StaticFiles;
use crate::templates::TemplateStore;
use crate::view::ViewResult;

/// A request handler: receives the request context (path bindings, query,
/// form, raw body) and declares its outcome as a [`ViewResult`].
pub type Handler = Arc<dyn Fn(&Request) -> Result<ViewResult, HandlerError> + Send + Sync>;

/// The process-wide routing and rendering core.
///
/// Built once at startup from explicit `get`/`post` registrations, then
/// shared immutably across requests. Control flow per request:
///
/// request → route lookup → handler → (redirect | render)
///                        ↘ no match → static fallback → 404
pub struct App {
    routes: RouteTable<Handler>,
    renderer: Renderer,
    statics: StaticFiles,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self {
            routes: RouteTable::new(),
            renderer: Renderer::new(TemplateStore::new(
                &config.templates.dir,
                config.templates.cache,
            )),
            statics: StaticFiles::new(&config.statics.dir),
        }
    }

    /// Registers a handler for `GET pattern`.
    pub fn get<F>(&mut self, pattern: &str, handler: F) -> Result<(), RouteError>
    where
        F: Fn(&Request) -> Result<ViewResult, HandlerError> + Send + Sync + 'static,
    {
        self.route(Method::Get, pattern, handler)
    }

    /// Registers a handler for `POST pattern`.
    pub fn post<F>(&mut self, pattern: &str, handler: F) -> Result<(), RouteError>
    where
        F: Fn(&Request) -> Result<ViewResult, HandlerError> + Send + Sync + 'static,
    {
        self.route(Method::Post, pattern, handler)
    }

    /// Registers a handler. Duplicate (method, pattern) pairs fail here,
    /// at startup, not at request time.
    pub fn route<F>(&mut self, method: Method, pattern: &str, handler: F) -> Result<(), RouteError>
    where
        F: Fn(&Request) -> Result<ViewResult, HandlerError> + Send + Sync + 'static,
    {
        self.routes.register(method, pattern, Arc::new(handler))?;
        info!("registered route: {} {}", method, pattern);
        Ok(())
    }

    /// Runs one request through the pipeline and produces the response.
    pub fn dispatch(
        &self,
        method: &http::Method,
        path: &str,
        query: &str,
        headers: HeaderMap,
        body: Vec<u8>,
    ) -> Response {
        let path = normalize_path(path).into_owned();

        let Some(method) = method_of(method) else {
            // Verbs outside GET/POST never match a route.
            debug!("unroutable method {} {}", method, path);
            return self.static_fallback(&path);
        };

        match self.routes.lookup(method, &path) {
            Some((handler, bindings)) => {
                let request = Request::new(method, path, bindings, query, headers, body);
                self.invoke(handler.clone(), &request)
            }
            None => self.static_fallback(&path),
        }
    }

    /// Calls the matched handler and dispatches its view result. A redirect
    /// short-circuits: the renderer is never consulted for that request.
    fn invoke(&self, handler: Handler, request: &Request) -> Response {
        match handler(request) {
            Ok(ViewResult::Redirect { location }) => {
                debug!("{} {} -> redirect {}", request.method, request.path, location);
                RedirectResponse::to(location).into_response()
            }
            Ok(ViewResult::Render { template, model }) => {
                match self.renderer.render(&template, &model) {
                    Ok(html) => PageResponse::new(html).into_response(),
                    Err(err) => {
                        error!("rendering {} failed: {}", template, err);
                        ErrorResponse::internal(format!("template error: {err}")).into_response()
                    }
                }
            }
            Err(err) => {
                error!("handler for {} {} failed: {}", request.method, request.path, err);
                ErrorResponse::internal(err.to_string()).into_response()
            }
        }
    }

    /// No route matched: try the static root, else 404.
    fn static_fallback(&self, path: &str) -> Response {
        match self.statics.serve(path) {
            Ok(file) => file.into_response(),
            Err(_) => ErrorResponse::not_found(path).into_response(),
        }
    }
}

fn method_of(method: &http::Method) -> Option<Method> {
    if *method == http::Method::GET {
        Some(Method::Get)
    } else if *method == http::Method::POST {
        Some(Method::Post)
    } else {
        None
    }
}
