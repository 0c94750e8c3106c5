//! # Middleware Module
//!
//! Access-control middleware scoped by URL prefix.
//!
//! ## Scoping
//!
//! Each entry in the [`MiddlewareRegistry`] carries the prefix that was in scope
//! when it was declared: the enclosing groups' prefix plus the most recently
//! declared route template or group segment. Declared right after
//! `group("/admin", ..)` a middleware guards everything under `/admin`; declared
//! right after `get("/:name", ..)` inside `group("/user", ..)` it guards
//! `/user/:name` only.
//!
//! An entry applies to a route when its prefix occurs **anywhere** in the route's
//! template (containment, not an anchored prefix): a middleware scoped to `/admin`
//! also guards `/x/admin/y`. An empty prefix, i.e. a middleware declared before any
//! route at top level, applies to every route.
//!
//! ## Evaluation
//!
//! Applicable entries run in registration order. Each returns a
//! [`MiddlewareOutcome`]:
//!
//! - `Allow` - continue with the next entry
//! - `AllowWith(attributes)` - merge attributes into the request context, continue
//! - `Deny` - stop; the request ends with the entry's fallback status, or 403
//!
//! ```rust
//! use scoperoute::middleware::{guard, MiddlewareOutcome};
//!
//! let require_key = guard(|ctx| ctx.header("x-api-key") == Some("secret"));
//! let attach_user = guard(|ctx| match ctx.header("x-user") {
//!     Some(user) => {
//!         let mut attrs = serde_json::Map::new();
//!         attrs.insert("user".into(), serde_json::json!(user));
//!         MiddlewareOutcome::AllowWith(attrs)
//!     }
//!     None => MiddlewareOutcome::Deny,
//! });
//! # let _ = (require_key, attach_user);
//! ```

mod core;
mod registry;

pub use core::{guard, Middleware, MiddlewareHandler, MiddlewareOutcome};
pub use registry::{Access, MiddlewareEntry, MiddlewareRegistry, DEFAULT_DENY_STATUS};
