// File: src/routes.rs
// Purpose: Explicit route registrations for the forum board

use std::collections::HashMap;
use std::sync::Arc;

use agora::{App, HandlerError, Model, RouteError, Value, ViewResult};

use crate::board::{Board, Post};

/// Registers every forum route on the app. Any error here is fatal at
/// startup - a duplicate or malformed pattern never reaches serving.
pub fn register(app: &mut App, board: Arc<Board>) -> Result<(), RouteError> {
    let b = Arc::clone(&board);
    app.get("/", move |_| {
        let threads: Vec<Value> = b
            .threads()
            .iter()
            .map(|t| {
                let mut entry = HashMap::new();
                entry.insert("name".to_string(), Value::from(t.name.as_str()));
                entry.insert("posts".to_string(), Value::from(t.posts.len()));
                Value::Object(entry)
            })
            .collect();

        let mut model = Model::new();
        model.insert("thread_count".to_string(), Value::from(threads.len()));
        model.insert("threads".to_string(), Value::Array(threads));
        Ok(ViewResult::render("index", model))
    })?;

    let b = Arc::clone(&board);
    app.post("/threads", move |req| {
        let name = match req.form.get("name").filter(|n| !n.is_empty()) {
            Some(name) => name.to_string(),
            // Nothing to create; back to the board.
            None => return Ok(ViewResult::redirect("/")),
        };
        b.create_thread(&name);
        Ok(ViewResult::redirect(thread_url(&name)))
    })?;

    let b = Arc::clone(&board);
    app.get("/threads/{threadName}", move |req| {
        let name = req
            .binding("threadName")
            .ok_or_else(|| HandlerError::new("missing threadName binding"))?;
        let posts = b
            .posts_of(name)
            .ok_or_else(|| HandlerError::new(format!("no such thread: {name}")))?;

        let posts: Vec<Value> = posts
            .iter()
            .map(|p| {
                let mut entry = HashMap::new();
                entry.insert("author".to_string(), Value::from(p.author.as_str()));
                entry.insert("body".to_string(), Value::from(p.body.as_str()));
                Value::Object(entry)
            })
            .collect();

        let mut model = Model::new();
        model.insert("threadName".to_string(), Value::from(name));
        model.insert("post_count".to_string(), Value::from(posts.len()));
        model.insert("posts".to_string(), Value::Array(posts));
        Ok(ViewResult::render("thread", model))
    })?;

    let b = Arc::clone(&board);
    app.post("/threads/{threadName}/posts", move |req| {
        let name = req
            .binding("threadName")
            .ok_or_else(|| HandlerError::new("missing threadName binding"))?
            .to_string();

        let author = req
            .form
            .get("author")
            .filter(|a| !a.is_empty())
            .unwrap_or("anonymous")
            .to_string();
        let body = req
            .form
            .get("body")
            .filter(|b| !b.is_empty())
            .ok_or_else(|| HandlerError::new("post body must not be empty"))?
            .to_string();

        if !b.add_post(&name, Post { author, body }) {
            return Err(HandlerError::new(format!("no such thread: {name}")));
        }
        Ok(ViewResult::redirect(thread_url(&name)))
    })?;

    Ok(())
}

/// Redirect target for a thread page. The name came from form input, so it
/// is percent-encoded before it lands in a Location header.
fn thread_url(name: &str) -> String {
    format!("/threads/{}", urlencoding::encode(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use agora::axum::http::{HeaderMap, Method as HttpMethod, StatusCode};
    use agora::Config;

    fn forum_app() -> (App, Arc<Board>) {
        let mut config = Config::default();
        config.templates.dir = "templates".to_string();
        config.statics.dir = "static".to_string();
        let board = Arc::new(Board::seeded());
        let mut app = App::new(&config);
        register(&mut app, Arc::clone(&board)).unwrap();
        (app, board)
    }

    #[test]
    fn test_routes_register_cleanly() {
        let (_, _) = forum_app();
    }

    #[test]
    fn test_create_thread_redirects_to_thread_page() {
        let (app, board) = forum_app();
        let response = app.dispatch(
            &HttpMethod::POST,
            "/threads",
            "",
            HeaderMap::new(),
            b"name=rust".to_vec(),
        );
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers().get("location").unwrap(), "/threads/rust");
        assert!(board.posts_of("rust").is_some());
    }

    #[test]
    fn test_create_thread_without_name_returns_home() {
        let (app, _) = forum_app();
        let response = app.dispatch(
            &HttpMethod::POST,
            "/threads",
            "",
            HeaderMap::new(),
            b"name=".to_vec(),
        );
        assert_eq!(response.headers().get("location").unwrap(), "/");
    }

    #[test]
    fn test_posting_appends_and_redirects_back() {
        let (app, board) = forum_app();
        let response = app.dispatch(
            &HttpMethod::POST,
            "/threads/general/posts",
            "",
            HeaderMap::new(),
            b"author=Alice&body=hello".to_vec(),
        );
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers().get("location").unwrap(),
            "/threads/general"
        );
        let posts = board.posts_of("general").unwrap();
        assert_eq!(posts.last().unwrap().body, "hello");
    }

    #[test]
    fn test_thread_name_with_space_survives_the_round_trip() {
        let (app, board) = forum_app();
        let response = app.dispatch(
            &HttpMethod::POST,
            "/threads",
            "",
            HeaderMap::new(),
            b"name=rust+talk".to_vec(),
        );
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers().get("location").unwrap(),
            "/threads/rust%20talk"
        );
        assert!(board.posts_of("rust talk").is_some());

        // Following the redirect must reach the thread page, not a 500.
        let response = app.dispatch(
            &HttpMethod::GET,
            "/threads/rust%20talk",
            "",
            HeaderMap::new(),
            Vec::new(),
        );
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn test_control_chars_in_name_still_produce_a_location() {
        let (app, _) = forum_app();
        let response = app.dispatch(
            &HttpMethod::POST,
            "/threads",
            "",
            HeaderMap::new(),
            b"name=a%0Ab".to_vec(),
        );
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers().get("location").unwrap(), "/threads/a%0Ab");
    }

    #[test]
    fn test_unknown_thread_is_a_handler_error() {
        let (app, _) = forum_app();
        let response = app.dispatch(
            &HttpMethod::GET,
            "/threads/missing",
            "",
            HeaderMap::new(),
            Vec::new(),
        );
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_empty_post_body_is_rejected() {
        let (app, _) = forum_app();
        let response = app.dispatch(
            &HttpMethod::POST,
            "/threads/general/posts",
            "",
            HeaderMap::new(),
            b"author=Alice&body=".to_vec(),
        );
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
