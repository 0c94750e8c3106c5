#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use http::Method;
use scoperoute::{handler, DispatchResult, Handler, Request, Router};

/// Router with the `/user` demo group: `GET /user/error` answers 500,
/// `GET /user/:name` answers 200 with `"hello <name>"`.
pub fn user_router() -> Router {
    let mut router = Router::new();
    router
        .group("/user", |r| {
            r.get(
                "/error",
                handler(|_ctx, res| {
                    res.status(500);
                }),
            )?;
            r.get(
                "/:name",
                handler(|ctx, res| {
                    let name = ctx.param("name").unwrap_or_default();
                    res.status(200).json(format!("hello {name}"));
                }),
            )?;
            Ok(())
        })
        .unwrap();
    router
}

/// Handler that counts its invocations and stops the chain.
pub fn counting_handler(counter: &Arc<AtomicUsize>) -> Handler {
    let counter = Arc::clone(counter);
    handler(move |_ctx, res| {
        counter.fetch_add(1, Ordering::SeqCst);
        res.status(200);
    })
}

pub fn get(router: &Router, uri: &str) -> DispatchResult {
    router.dispatch(Request::new(Method::GET, uri)).unwrap()
}
