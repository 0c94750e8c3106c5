mod common;

use std::sync::Arc;
use std::thread;

use http::Method;
use scoperoute::{handler, Request, Router, SharedRouter};
use serde_json::json;

use common::user_router;

#[test]
fn test_concurrent_dispatch() {
    let shared = Arc::new(SharedRouter::new(user_router()));
    let workers: Vec<_> = (0..8)
        .map(|i| {
            let shared = Arc::clone(&shared);
            thread::spawn(move || {
                for _ in 0..50 {
                    let name = format!("user{i}");
                    let result = shared
                        .dispatch(Request::new(Method::GET, &format!("/user/{name}")))
                        .unwrap();
                    assert_eq!(result.status, 200);
                    assert_eq!(result.payload, Some(json!(format!("hello {name}"))));
                }
            })
        })
        .collect();
    for w in workers {
        w.join().unwrap();
    }
}

#[test]
fn test_replace_publishes_new_routes() {
    let shared = SharedRouter::new(user_router());
    let snapshot = shared.load();

    let mut next = Router::new();
    next.get(
        "/health",
        handler(|_ctx, res| {
            res.json("ok");
        }),
    )
    .unwrap();
    let previous = shared.replace(next);
    assert_eq!(previous.routes().len(), 2);

    let health = shared.dispatch(Request::new(Method::GET, "/health")).unwrap();
    assert_eq!(health.payload, Some(json!("ok")));
    let gone = shared.dispatch(Request::new(Method::GET, "/user/alice")).unwrap();
    assert_eq!(gone.status, 404);

    // Snapshots taken earlier keep serving the old table.
    let old = snapshot.dispatch(Request::new(Method::GET, "/user/alice")).unwrap();
    assert_eq!(old.status, 200);
}
