//! # Routes Module
//!
//! The route table: `(method, compiled pattern, handler chain)` entries and the
//! matching policy applied to them.
//!
//! ## Matching order
//!
//! Routes without placeholders are tried before routes with placeholders; within
//! each class routes are tried in registration order. A literal route such as
//! `/user/error` is therefore never shadowed by `/user/:name`, regardless of which
//! was declared first. The first route whose method equals the request method and
//! whose pattern matches the whole path wins; at most one route matches.
//!
//! ```rust
//! use scoperoute::handler::Handler;
//! use scoperoute::routes::RouteTable;
//! use http::Method;
//!
//! let mut table = RouteTable::new();
//! table.add(Method::GET, "/user/:name", Handler::Literal(true).into()).unwrap();
//! table.add(Method::GET, "/user/error", Handler::Literal(true).into()).unwrap();
//!
//! let m = table.match_route(&Method::GET, "/user/error").unwrap();
//! assert_eq!(m.route.template(), "/user/error");
//! assert!(m.params.is_empty());
//! ```

mod core;
#[cfg(test)]
mod tests;

pub use core::{Route, RouteMatch, RouteTable, SUPPORTED_METHODS};
