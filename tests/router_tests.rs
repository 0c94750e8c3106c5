mod common;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use http::Method;
use scoperoute::context::{RequestContext, Response};
use scoperoute::error::{HandlerResolutionError, RouterError};
use scoperoute::handler::{HandlerObject, HandlerRegistry};
use scoperoute::middleware::MiddlewareHandler;
use scoperoute::{
    guard, handler, ChainFlow, DispatchOutcome, Handler, MiddlewareOutcome, Request, Router,
};
use serde_json::json;

use common::{counting_handler, get, user_router};

#[test]
fn test_static_route_wins_over_parameterized() {
    let router = user_router();
    let result = get(&router, "/user/error");
    assert_eq!(result.status, 500);
    assert!(result.payload.is_none());
    assert_eq!(
        result.outcome,
        DispatchOutcome::Routed {
            template: "/user/error".to_string(),
            handlers_run: 1,
        }
    );
}

#[test]
fn test_static_wins_even_when_declared_later() {
    let mut router = Router::new();
    router
        .group("/user", |r| {
            r.get("/:name", handler(|_ctx, res| {
                res.status(200);
            }))?;
            r.get("/error", handler(|_ctx, res| {
                res.status(500);
            }))?;
            Ok(())
        })
        .unwrap();
    assert_eq!(get(&router, "/user/error").status, 500);
    assert_eq!(get(&router, "/user/bob").status, 200);
}

#[test]
fn test_param_bound_into_payload() {
    let router = user_router();
    let result = get(&router, "/user/alice");
    assert_eq!(result.status, 200);
    assert_eq!(result.payload, Some(json!("hello alice")));
    assert_eq!(result.get_header("content-type"), Some("application/json"));
}

#[test]
fn test_query_string_is_ignored_for_matching() {
    let router = user_router();
    let result = get(&router, "/user/alice?verbose=1");
    assert_eq!(result.payload, Some(json!("hello alice")));
}

#[test]
fn test_no_route_without_handler_is_bare_404() {
    let router = user_router();
    let result = get(&router, "/nothing/here");
    assert_eq!(result.status, 404);
    assert!(result.payload.is_none());
    assert_eq!(result.outcome, DispatchOutcome::NotFound);
}

#[test]
fn test_method_mismatch_is_404() {
    let router = user_router();
    let result = router
        .dispatch(Request::new(Method::POST, "/user/alice"))
        .unwrap();
    assert_eq!(result.status, 404);
}

#[test]
fn test_partial_path_does_not_match() {
    let router = user_router();
    assert_eq!(get(&router, "/user/alice/extra").status, 404);
    assert_eq!(get(&router, "/user").status, 404);
}

#[test]
fn test_custom_404_handler() {
    let mut router = user_router();
    router.status(
        404,
        handler(|ctx, res| {
            assert_eq!(res.status_code(), 404);
            res.json(json!({ "error": "not found", "path": ctx.path() }));
        }),
    );
    let result = get(&router, "/missing");
    assert_eq!(result.status, 404);
    assert_eq!(
        result.payload,
        Some(json!({ "error": "not found", "path": "/missing" }))
    );
}

#[test]
fn test_denying_middleware_skips_route_handler() {
    let calls = Arc::new(AtomicUsize::new(0));
    let mut router = Router::new();
    router
        .group("/user", |r| {
            r.get("/:name", counting_handler(&calls))?;
            Ok(())
        })
        .unwrap();
    router.middleware_with_status(guard(|_ctx: &RequestContext| false), 403);

    let result = get(&router, "/user/alice");
    assert_eq!(result.status, 403);
    assert!(result.payload.is_none());
    assert_eq!(result.outcome, DispatchOutcome::Denied { status: 403 });
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_denial_uses_status_handler() {
    let mut router = user_router();
    router.middleware_with_status(MiddlewareHandler::Literal(false), 401);
    router.status(
        401,
        handler(|_ctx, res| {
            res.json("login required");
        }),
    );

    let result = get(&router, "/user/alice");
    assert_eq!(result.status, 401);
    assert_eq!(result.payload, Some(json!("login required")));
}

#[test]
fn test_middleware_without_status_defaults_to_403() {
    let mut router = user_router();
    router.middleware(MiddlewareHandler::Literal(false));
    assert_eq!(get(&router, "/user/alice").status, 403);
}

#[test]
fn test_deny_without_fallback_uses_403_handler() {
    let calls = Arc::new(AtomicUsize::new(0));
    let mut router = Router::new();
    router
        .group("/user", |r| r.get("/:name", counting_handler(&calls)).map(|_| ()))
        .unwrap();
    router.middleware(false);
    router.status(
        403,
        handler(|_ctx, res| {
            res.json("forbidden");
        }),
    );

    let result = get(&router, "/user/alice");
    assert_eq!(result.status, 403);
    assert_eq!(result.payload, Some(json!("forbidden")));
    assert_eq!(result.outcome, DispatchOutcome::Denied { status: 403 });
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_middleware_prefix_is_tested_against_route_template() {
    let calls = Arc::new(AtomicUsize::new(0));
    let mut router = Router::new();
    router
        .group("/admin", |r| r.get("/panel", counting_handler(&calls)).map(|_| ()))
        .unwrap();
    router.middleware(false);
    router
        .get("/x/:section/y", counting_handler(&calls))
        .unwrap();

    // The concrete path contains "/admin", the serving template does not.
    let result = get(&router, "/x/admin/y");
    assert_eq!(result.status, 200);
    assert_eq!(
        result.outcome,
        DispatchOutcome::Routed {
            template: "/x/:section/y".to_string(),
            handlers_run: 1,
        }
    );
    assert_eq!(get(&router, "/admin/panel").status, 403);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_middleware_only_guards_its_scope() {
    let calls = Arc::new(AtomicUsize::new(0));
    let mut router = Router::new();
    router
        .group("/admin", |r| r.get("/settings", counting_handler(&calls)).map(|_| ()))
        .unwrap();
    router.middleware(false);
    router
        .group("/public", |r| r.get("/info", counting_handler(&calls)).map(|_| ()))
        .unwrap();

    assert_eq!(get(&router, "/admin/settings").status, 403);
    assert_eq!(get(&router, "/public/info").status, 200);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_middleware_prefix_matches_anywhere_in_template() {
    let ok = || {
        handler(|_ctx, res| {
            res.status(200);
        })
    };
    let mut router = Router::new();
    router
        .group("/admin", |r| r.get("/panel", ok()).map(|_| ()))
        .unwrap();
    router.middleware(false);
    router
        .group("/x", |r| r.get("/admin/y", ok()).map(|_| ()))
        .unwrap();

    assert_eq!(
        router.middleware_registry().entries()[0].url_prefix.as_ref(),
        "/admin"
    );
    assert_eq!(get(&router, "/admin/panel").status, 403);
    assert_eq!(get(&router, "/x/admin/y").status, 403);
}

#[test]
fn test_middleware_runs_in_registration_order() {
    let mut router = user_router();
    router.middleware(guard(|_ctx: &RequestContext| {
        let mut extra = serde_json::Map::new();
        extra.insert("user".to_string(), json!("bob"));
        MiddlewareOutcome::AllowWith(extra)
    }));
    router.middleware(guard(|ctx: &RequestContext| ctx.get("user") == Some(&json!("bob"))));

    assert_eq!(get(&router, "/user/alice").status, 200);
}

#[test]
fn test_attributes_from_middleware_reach_handler() {
    let mut router = Router::new();
    router
        .group("/me", |r| {
            r.get("/profile", handler(|ctx, res| {
                let user = ctx.get("user").cloned().unwrap_or_default();
                res.json(user);
            }))?;
            Ok(())
        })
        .unwrap();
    router.middleware(guard(|ctx: &RequestContext| match ctx.header("x-user") {
        Some(user) => {
            let mut extra = serde_json::Map::new();
            extra.insert("user".to_string(), json!(user));
            MiddlewareOutcome::AllowWith(extra)
        }
        None => MiddlewareOutcome::Deny,
    }));

    let ok = router
        .dispatch(Request::new(Method::GET, "/me/profile").with_header("X-User", "carol"))
        .unwrap();
    assert_eq!(ok.payload, Some(json!("carol")));
    assert_eq!(get(&router, "/me/profile").status, 403);
}

#[test]
fn test_chain_stops_at_first_stop() {
    let calls = Arc::new(AtomicUsize::new(0));
    let mut router = Router::new();
    router
        .get(
            "/chain",
            vec![
                handler(|ctx, _res| {
                    ctx.set("step", json!(1));
                    ChainFlow::Next
                }),
                handler(|ctx, res| {
                    res.json(ctx.get("step").cloned());
                }),
                counting_handler(&calls),
            ],
        )
        .unwrap();

    let result = get(&router, "/chain");
    assert_eq!(result.payload, Some(json!(1)));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert!(matches!(
        result.outcome,
        DispatchOutcome::Routed { handlers_run: 2, .. }
    ));
}

#[test]
fn test_redirect() {
    let mut router = Router::new();
    router
        .get("/old", handler(|_ctx, res| res.redirect("/new")))
        .unwrap();
    let result = get(&router, "/old");
    assert_eq!(result.status, 302);
    assert_eq!(result.get_header("location"), Some("/new"));
}

#[test]
fn test_request_id_header_is_propagated() {
    let router = user_router();
    let id = "01ARZ3NDEKTSV4RRFFQ69G5FAV";
    let result = router
        .dispatch(Request::new(Method::GET, "/user/alice").with_header("X-Request-Id", id))
        .unwrap();
    assert_eq!(result.request_id.to_string(), id);
}

#[test]
fn test_unsupported_method_is_rejected_at_declaration() {
    let mut router = Router::new();
    let err = router
        .add_route(Method::OPTIONS, "/x", Handler::Literal(true))
        .map(|_| ())
        .unwrap_err();
    assert!(matches!(err, RouterError::UnsupportedMethod(m) if m == Method::OPTIONS));
}

struct UserController;

impl HandlerObject for UserController {
    fn handle(&self, method: &str, ctx: &mut RequestContext, res: &mut Response) -> Option<ChainFlow> {
        match method {
            "show" => {
                let id = ctx.param("id").unwrap_or_default().to_string();
                res.json(json!({ "id": id }));
                Some(ChainFlow::Stop)
            }
            _ => None,
        }
    }

    fn guard(&self, method: &str, ctx: &RequestContext) -> Option<MiddlewareOutcome> {
        match method {
            "isLoggedIn" => Some(ctx.header("authorization").is_some().into()),
            _ => None,
        }
    }
}

fn named_router() -> Router {
    let mut registry = HandlerRegistry::new();
    registry.register("controllers/UserController", Arc::new(UserController));
    let mut router = Router::new().with_resolver(Arc::new(registry));
    router
        .group("/users", |r| {
            r.get("/:id", "controllers/UserController@show")?;
            r.get("/:id/edit", "controllers/UserController@edit")?;
            r.get("/:id/missing", "controllers/Nope@show")?;
            Ok(())
        })
        .unwrap();
    router.middleware("controllers/UserController@isLoggedIn");
    router
}

#[test]
fn test_named_handler_and_middleware() {
    let router = named_router();
    let result = router
        .dispatch(Request::new(Method::GET, "/users/7").with_header("Authorization", "t"))
        .unwrap();
    assert_eq!(result.payload, Some(json!({ "id": "7" })));

    assert_eq!(get(&router, "/users/7").status, 403);
}

#[test]
fn test_named_resolution_errors_leave_router_usable() {
    let router = named_router();
    let authorized = |uri: &str| Request::new(Method::GET, uri).with_header("Authorization", "t");

    let err = router.dispatch(authorized("/users/7/edit")).unwrap_err();
    assert!(matches!(err, RouterError::UnsupportedCallback { .. }));

    let err = router.dispatch(authorized("/users/7/missing")).unwrap_err();
    assert!(matches!(
        err,
        RouterError::HandlerResolution(HandlerResolutionError::NotFound { .. })
    ));

    let result = router.dispatch(authorized("/users/7")).unwrap();
    assert_eq!(result.status, 200);
    assert_eq!(router.routes().len(), 3);
}

#[test]
fn test_named_handler_without_resolver_is_an_error() {
    let mut router = Router::new();
    router.get("/x", "controllers/UserController@show").unwrap();
    let err = router.dispatch(Request::new(Method::GET, "/x")).unwrap_err();
    assert!(matches!(
        err,
        RouterError::HandlerResolution(HandlerResolutionError::NoResolver { .. })
    ));
}
