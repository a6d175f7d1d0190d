//! Integration tests for agora-router.
//!
//! Covers registration, duplicate detection, pattern matching, variable
//! binding, normalization, and the registration-order tie-break.

use pretty_assertions::assert_eq;

use agora_router::{Method, Pattern, RouteError, RouteTable};

fn table(routes: &[(Method, &str, &'static str)]) -> RouteTable<&'static str> {
    let mut t = RouteTable::new();
    for (method, pattern, name) in routes {
        t.register(*method, pattern, *name).unwrap();
    }
    t
}

#[test]
fn static_route_matches_exact_path() {
    let t = table(&[(Method::Get, "/threads", "list")]);
    let (handler, bindings) = t.lookup(Method::Get, "/threads").unwrap();
    assert_eq!(*handler, "list");
    assert!(bindings.is_empty());
}

#[test]
fn method_must_match() {
    let t = table(&[(Method::Get, "/threads", "list")]);
    assert!(t.lookup(Method::Post, "/threads").is_none());
}

#[test]
fn variable_segment_binds_value() {
    let t = table(&[(Method::Get, "/threads/{threadName}", "show")]);
    let (_, bindings) = t.lookup(Method::Get, "/threads/general").unwrap();
    assert_eq!(bindings.get("threadName").map(String::as_str), Some("general"));
}

#[test]
fn multiple_variables_bind_independently() {
    let t = table(&[(Method::Get, "/threads/{threadName}/posts/{postId}", "show-post")]);
    let (_, bindings) = t
        .lookup(Method::Get, "/threads/general/posts/42")
        .unwrap();
    assert_eq!(bindings.get("threadName").map(String::as_str), Some("general"));
    assert_eq!(bindings.get("postId").map(String::as_str), Some("42"));
}

#[test]
fn bound_values_are_percent_decoded() {
    let t = table(&[(Method::Get, "/threads/{threadName}", "show")]);
    let (_, bindings) = t.lookup(Method::Get, "/threads/rust%20talk").unwrap();
    assert_eq!(bindings.get("threadName").map(String::as_str), Some("rust talk"));
}

#[test]
fn encoded_slash_does_not_smuggle_a_segment() {
    let t = table(&[(Method::Get, "/threads/{threadName}", "show")]);
    assert!(t.lookup(Method::Get, "/threads/a%2Fb").is_none());
}

#[test]
fn segment_counts_must_match_exactly() {
    let t = table(&[(Method::Get, "/threads/{threadName}", "show")]);
    assert!(t.lookup(Method::Get, "/threads").is_none());
    assert!(t.lookup(Method::Get, "/threads/general/extra").is_none());
}

#[test]
fn literals_are_case_sensitive() {
    let t = table(&[(Method::Get, "/threads", "list")]);
    assert!(t.lookup(Method::Get, "/Threads").is_none());
}

#[test]
fn lookup_normalizes_request_path() {
    let t = table(&[(Method::Get, "/threads/{threadName}", "show")]);
    assert!(t.lookup(Method::Get, "/threads/general/").is_some());
    assert!(t.lookup(Method::Get, "/threads//general").is_some());
}

#[test]
fn first_registered_route_wins() {
    // A literal and a variable route both match /threads/general; the
    // tie-break is registration order, so the literal registered first wins.
    let t = table(&[
        (Method::Get, "/threads/general", "literal"),
        (Method::Get, "/threads/{threadName}", "variable"),
    ]);
    let (handler, _) = t.lookup(Method::Get, "/threads/general").unwrap();
    assert_eq!(*handler, "literal");

    let reversed = table(&[
        (Method::Get, "/threads/{threadName}", "variable"),
        (Method::Get, "/threads/general", "literal"),
    ]);
    let (handler, _) = reversed.lookup(Method::Get, "/threads/general").unwrap();
    assert_eq!(*handler, "variable");
}

#[test]
fn duplicate_registration_fails() {
    let mut t: RouteTable<&str> = RouteTable::new();
    t.register(Method::Get, "/threads", "a").unwrap();

    let err = t.register(Method::Get, "/threads", "b").unwrap_err();
    assert!(matches!(err, RouteError::Duplicate { .. }));

    // Same pattern under a different method is fine.
    t.register(Method::Post, "/threads", "c").unwrap();
}

#[test]
fn duplicate_detection_ignores_variable_names() {
    let mut t: RouteTable<&str> = RouteTable::new();
    t.register(Method::Get, "/threads/{a}", "a").unwrap();

    let err = t.register(Method::Get, "/threads/{b}", "b").unwrap_err();
    assert!(matches!(err, RouteError::Duplicate { .. }));
}

#[test]
fn failed_registration_leaves_table_unchanged() {
    let mut t: RouteTable<&str> = RouteTable::new();
    t.register(Method::Get, "/threads", "a").unwrap();
    let _ = t.register(Method::Get, "/threads", "b");
    assert_eq!(t.len(), 1);
}

#[test]
fn malformed_patterns_are_rejected() {
    let mut t: RouteTable<&str> = RouteTable::new();
    for bad in ["/{", "/{}", "/x{y}", "/{a b}", "/{9lives}"] {
        let err = t.register(Method::Get, bad, "h").unwrap_err();
        assert!(matches!(err, RouteError::InvalidPattern { .. }), "{bad}");
    }
}

#[test]
fn variable_does_not_match_empty_segment() {
    let t = table(&[(Method::Get, "/threads/{threadName}", "show")]);
    // "/threads//" normalizes to "/threads", which has too few segments.
    assert!(t.lookup(Method::Get, "/threads//").is_none());
}

#[test]
fn pattern_display_is_normalized() {
    let p = Pattern::parse("/threads/{threadName}/").unwrap();
    assert_eq!(p.to_string(), "/threads/{threadName}");
}
