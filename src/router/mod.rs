//! # Router Module
//!
//! The [`Router`] aggregate owns everything a request needs: the route table, the
//! middleware registry, the status table and, during declaration, the namespace
//! stack that scopes groups and middleware.
//!
//! ## Declaration
//!
//! ```rust
//! use scoperoute::handler::handler;
//! use scoperoute::middleware::guard;
//! use scoperoute::context::Request;
//! use scoperoute::router::Router;
//! use http::Method;
//!
//! # fn main() -> Result<(), scoperoute::error::RouterError> {
//! let mut router = Router::new();
//! router.group("/user", |r| {
//!     r.get("/error", handler(|_ctx, res| {
//!         res.status(500);
//!     }))?;
//!     r.get("/:name", handler(|ctx, res| {
//!         let name = ctx.param("name").unwrap_or_default().to_string();
//!         res.status(200).json(format!("hello {name}"));
//!     }))?;
//!     Ok(())
//! })?;
//! // Scoped to "/user": declared right after the group
//! router.middleware(guard(|ctx| ctx.header("x-api-key").is_some()));
//!
//! let result = router.dispatch(
//!     Request::new(Method::GET, "/user/alice").with_header("X-Api-Key", "k"),
//! )?;
//! assert_eq!(result.status, 200);
//! assert_eq!(result.payload, Some(serde_json::json!("hello alice")));
//!
//! let denied = router.dispatch(Request::new(Method::GET, "/user/alice"))?;
//! assert_eq!(denied.status, 403);
//! # Ok(())
//! # }
//! ```
//!
//! ## Scoping rules
//!
//! - A route's template is the concatenation of all enclosing group segments and
//!   its own template. No slash normalisation happens.
//! - A middleware is scoped to the enclosing groups' prefix plus the most recently
//!   declared route template or group segment at that level.
//! - After a group body returns, successfully or with an error, the prefix is
//!   exactly what it was before the group.
//!
//! ## Sharing
//!
//! Declaration needs `&mut Router`; dispatch needs only `&Router`. Once declared, a
//! router can be published through [`SharedRouter`] and served from many threads.

mod core;
mod shared;

pub use core::Router;
pub use shared::SharedRouter;
