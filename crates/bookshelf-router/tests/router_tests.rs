//! Integration tests for bookshelf-router
//!
//! Tests are organized by feature area:
//! - Building (validation, duplicates, view resolution)
//! - Resolution (static, dynamic, catch-all, normalization, case folding)
//! - Named routes and URL generation

use bookshelf_router::*;
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::collections::HashMap;

fn home_table() -> RouteTable<&'static str> {
    RouteTable::builder().named("/", "Home", "home").build().unwrap()
}

// ============================================================================
// Building
// ============================================================================

#[test]
fn test_single_home_entry() {
    let table = home_table();
    assert_eq!(table.len(), 1);

    let entry = &table.entries()[0];
    assert_eq!(entry.path(), "/");
    assert_eq!(entry.name(), Some("Home"));
    assert_eq!(*entry.view(), "home");
}

#[test]
fn test_building_twice_yields_equal_tables() {
    assert_eq!(home_table(), home_table());
}

#[test]
fn test_insertion_order_preserved() {
    let table = RouteTable::builder()
        .route("/b", 2)
        .route("/a", 1)
        .route("/c", 3)
        .build()
        .unwrap();

    let paths: Vec<&str> = table.iter().map(RouteEntry::path).collect();
    assert_eq!(paths, vec!["/b", "/a", "/c"]);
}

#[test]
fn test_duplicate_path_rejected() {
    let err = RouteTable::builder()
        .route("/about", 1)
        .route("/about/", 2)
        .build()
        .unwrap_err();

    assert_eq!(
        err,
        RouteError::DuplicatePath {
            path: "/about".to_string(),
            existing: "/about".to_string(),
        }
    );
}

#[test]
fn test_duplicate_path_with_renamed_param_rejected() {
    let result = RouteTable::builder()
        .route("/books/:id", 1)
        .route("/books/:slug", 2)
        .build();

    assert!(matches!(result, Err(RouteError::DuplicatePath { .. })));
}

#[test]
fn test_case_variants_collide_only_when_case_insensitive() {
    let sensitive = RouteTable::builder()
        .route("/About", 1)
        .route("/about", 2)
        .build();
    assert!(sensitive.is_ok());

    let insensitive = RouteTable::builder()
        .case_insensitive(true)
        .route("/About", 1)
        .route("/about", 2)
        .build();
    assert!(matches!(insensitive, Err(RouteError::DuplicatePath { .. })));
}

#[test]
fn test_duplicate_name_rejected() {
    let err = RouteTable::builder()
        .named("/", "Home", 1)
        .named("/start", "Home", 2)
        .build()
        .unwrap_err();

    assert_eq!(err, RouteError::DuplicateName("Home".to_string()));
}

#[rstest]
#[case("")]
#[case("home")]
#[case("//")]
#[case("/a//b")]
#[case("/a\\b")]
#[case("/users/:")]
#[case("/users/:9lives")]
#[case("/docs/*rest/edit")]
#[case("/pair/:x/:x")]
fn test_invalid_patterns_rejected(#[case] pattern: &str) {
    let result = RouteTable::builder().route(pattern, ()).build();
    assert!(
        matches!(result, Err(RouteError::InvalidPattern { .. })),
        "pattern {:?} should be rejected",
        pattern
    );
}

#[test]
fn test_from_defs_resolves_views() {
    let mut views: HashMap<String, u8> = HashMap::new();
    views.insert("home".to_string(), 7);

    let table = RouteTable::from_defs(
        [RouteDef::named("/", "Home", "home")],
        &views,
        RouteOptions::default(),
    )
    .unwrap();

    assert_eq!(table.by_name("Home").map(|e| *e.view()), Some(7));
}

#[test]
fn test_from_defs_fails_fast_on_unknown_view() {
    let views: HashMap<String, u8> = HashMap::new();

    let err = RouteTable::from_defs(
        [RouteDef::named("/", "Home", "home")],
        &views,
        RouteOptions::default(),
    )
    .unwrap_err();

    assert_eq!(
        err,
        RouteError::UnresolvedView {
            path: "/".to_string(),
            view: "home".to_string(),
        }
    );
}

// ============================================================================
// Resolution
// ============================================================================

#[test]
fn test_resolve_root_and_nonexistent() {
    let table = home_table();

    let found = table.resolve("/").unwrap();
    assert_eq!(*found.view(), "home");
    assert_eq!(found.name(), Some("Home"));
    assert!(found.params.is_empty());

    assert!(table.resolve("/nonexistent").is_none());
}

#[rstest]
#[case("/")]
#[case("")]
#[case("//")]
#[case("/?tab=books")]
#[case("/#top")]
fn test_resolve_normalizes_requested_path(#[case] requested: &str) {
    assert!(home_table().resolve(requested).is_some());
}

#[test]
fn test_resolve_dynamic_param() {
    let table = RouteTable::builder()
        .route("/books/:id", "book")
        .build()
        .unwrap();

    let found = table.resolve("/books/42/").unwrap();
    assert_eq!(found.param("id"), Some("42"));
    assert!(table.resolve("/books").is_none());
    assert!(table.resolve("/books/42/edit").is_none());
}

#[test]
fn test_resolve_catch_all() {
    let table = RouteTable::builder()
        .route("/", "home")
        .route("/docs/*rest", "docs")
        .build()
        .unwrap();

    let found = table.resolve("/docs/guide/install").unwrap();
    assert_eq!(*found.view(), "docs");
    assert_eq!(found.param("rest"), Some("guide/install"));
    assert!(table.resolve("/docs").is_none());
}

#[test]
fn test_resolve_case_insensitive() {
    let table = RouteTable::builder()
        .case_insensitive(true)
        .route("/Book/List", "list")
        .build()
        .unwrap();

    assert!(table.resolve("/book/list").is_some());
    assert!(table.resolve("/BOOK/LIST").is_some());

    let strict = RouteTable::builder()
        .route("/Book/List", "list")
        .build()
        .unwrap();
    assert!(strict.resolve("/book/list").is_none());
}

#[test]
fn test_table_shared_across_threads() {
    let table = std::sync::Arc::new(home_table());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let table = table.clone();
            std::thread::spawn(move || table.resolve("/").map(|m| *m.view()))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), Some("home"));
    }
}

// ============================================================================
// Named routes
// ============================================================================

#[test]
fn test_url_for_static_and_dynamic() {
    let table = RouteTable::builder()
        .named("/", "Home", ())
        .named("/books/:id", "book", ())
        .named("/docs/*rest", "docs", ())
        .build()
        .unwrap();

    assert_eq!(table.url_for("Home", &HashMap::new()).unwrap(), "/");

    let mut params = HashMap::new();
    params.insert("id".to_string(), "9".to_string());
    assert_eq!(table.url_for("book", &params).unwrap(), "/books/9");

    let mut params = HashMap::new();
    params.insert("rest".to_string(), "guide/intro".to_string());
    assert_eq!(table.url_for("docs", &params).unwrap(), "/docs/guide/intro");
}

#[test]
fn test_url_for_errors() {
    let table = RouteTable::builder()
        .named("/books/:id", "book", ())
        .build()
        .unwrap();

    assert_eq!(
        table.url_for("missing", &HashMap::new()),
        Err(RouteError::UnknownRouteName("missing".to_string()))
    );
    assert_eq!(
        table.url_for("book", &HashMap::new()),
        Err(RouteError::MissingParam {
            route: "book".to_string(),
            param: "id".to_string(),
        })
    );
}
