use http::Method;

use super::RouteTable;
use crate::error::{PatternError, RouterError};
use crate::handler::Handler;

fn table(routes: &[(Method, &str)]) -> RouteTable {
    let mut table = RouteTable::new();
    for (method, template) in routes {
        table
            .add(method.clone(), template, Handler::Literal(true).into())
            .unwrap();
    }
    table
}

#[test]
fn test_static_before_parameterized() {
    let table = table(&[(Method::GET, "/a/:x"), (Method::GET, "/a/b")]);
    let m = table.match_route(&Method::GET, "/a/b").unwrap();
    assert_eq!(m.route.template(), "/a/b");
    let m = table.match_route(&Method::GET, "/a/c").unwrap();
    assert_eq!(m.route.template(), "/a/:x");
    assert_eq!(m.get_param("x"), Some("c"));
}

#[test]
fn test_ties_broken_by_registration_order() {
    let table = table(&[
        (Method::GET, "/p/:first"),
        (Method::GET, "/p/:second"),
        (Method::GET, "/s"),
        (Method::GET, "/t"),
    ]);
    let order: Vec<usize> = table.iter().map(|r| r.seq()).collect();
    assert_eq!(order, vec![2, 3, 0, 1]);
    let m = table.match_route(&Method::GET, "/p/v").unwrap();
    assert_eq!(m.route.template(), "/p/:first");
}

#[test]
fn test_method_filter() {
    let table = table(&[(Method::GET, "/items"), (Method::POST, "/items")]);
    let m = table.match_route(&Method::POST, "/items").unwrap();
    assert_eq!(m.route.method(), &Method::POST);
    assert!(table.match_route(&Method::DELETE, "/items").is_none());
}

#[test]
fn test_all_supported_methods() {
    let table = table(&[
        (Method::GET, "/r"),
        (Method::POST, "/r"),
        (Method::PUT, "/r"),
        (Method::PATCH, "/r"),
        (Method::DELETE, "/r"),
    ]);
    assert_eq!(table.len(), 5);
    assert!(table.match_route(&Method::PATCH, "/r").is_some());
}

#[test]
fn test_unsupported_method_rejected() {
    let mut table = RouteTable::new();
    let err = table
        .add(Method::OPTIONS, "/r", Handler::Literal(true).into())
        .unwrap_err();
    assert_eq!(err, RouterError::UnsupportedMethod(Method::OPTIONS));
    assert!(table.is_empty());
}

#[test]
fn test_duplicate_param_rejected() {
    let mut table = RouteTable::new();
    let err = table
        .add(Method::GET, "/x/:id/:id", Handler::Literal(true).into())
        .unwrap_err();
    assert!(matches!(
        err,
        RouterError::Pattern(PatternError::DuplicateParam { .. })
    ));
}

#[test]
fn test_no_match() {
    let table = table(&[(Method::GET, "/user/:name")]);
    assert!(table.match_route(&Method::GET, "/users/alice").is_none());
}
