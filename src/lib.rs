//! # scoperoute
//!
//! **scoperoute** is an in-process HTTP request router. Given a method and a path it
//! selects the best matching route, binds path parameters, runs the access-control
//! middleware scoped to that route, and invokes the route's handler chain. When no
//! route matches or access is denied it falls back to a per-status handler, or to a
//! bare status code.
//!
//! ## Architecture
//!
//! - **[`pattern`]** - compiles templates such as `/user/:name` into anchored matchers
//! - **[`namespace`]** - declaration-time prefix stack for nested groups
//! - **[`routes`]** - the route table and its matching order
//! - **[`middleware`]** - prefix-scoped access checks and their registry
//! - **[`status`]** - status-code fallback handlers
//! - **[`handler`]** - inline, named (`module@method`) and literal handlers
//! - **[`context`]** - request data and the response sink
//! - **[`dispatcher`]** - the per-request state machine
//! - **[`router`]** - the aggregate owning all of the above
//!
//! ### Request Handling Flow
//!
//! ```mermaid
//! sequenceDiagram
//!     participant Host
//!     participant Router
//!     participant Routes as RouteTable
//!     participant MW as MiddlewareRegistry
//!     participant Chain as Handler chain
//!     participant Status as StatusTable
//!
//!     Host->>Router: dispatch(Request GET /user/alice)
//!     Router->>Routes: match_route(GET, "/user/alice")
//!     alt No route
//!         Router->>Status: resolve(404)
//!         Router-->>Host: 404
//!     end
//!     Routes-->>Router: /user/:name {name: "alice"}
//!     Router->>MW: evaluate("/user/:name")
//!     alt Denied
//!         Router->>Status: resolve(fallback or 403)
//!         Router-->>Host: 403
//!     end
//!     Router->>Chain: run handlers until Stop
//!     Chain-->>Router: status + payload
//!     Router-->>Host: DispatchResult
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use scoperoute::{handler, Request, Router};
//! use http::Method;
//!
//! # fn main() -> Result<(), scoperoute::RouterError> {
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
//!
//! let result = router.dispatch(Request::new(Method::GET, "/user/error"))?;
//! assert_eq!(result.status, 500);
//!
//! let result = router.dispatch(Request::new(Method::GET, "/nowhere"))?;
//! assert_eq!(result.status, 404);
//! assert!(result.payload.is_none());
//! # Ok(())
//! # }
//! ```
//!
//! ## Runtime Considerations
//!
//! Dispatch is synchronous and performs no I/O. Declaration needs `&mut Router` and
//! must finish before requests are served; afterwards the router is read-only and
//! can be shared across threads (see [`router::SharedRouter`]).

pub mod cli;
pub mod config;
pub mod context;
pub mod dispatcher;
pub mod error;
pub mod handler;
pub mod ids;
pub mod logging;
pub mod middleware;
pub mod namespace;
pub mod pattern;
pub mod router;
pub mod routes;
pub mod status;

pub use context::{Request, RequestContext, Response};
pub use dispatcher::{DispatchOutcome, DispatchResult};
pub use error::{HandlerResolutionError, PatternError, RouterError};
pub use handler::{handler, ChainFlow, Handler};
pub use middleware::{guard, MiddlewareOutcome};
pub use router::{Router, SharedRouter};
