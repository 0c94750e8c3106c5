//! # Context Module
//!
//! Per-request data handed to middleware and handlers.
//!
//! - [`Request`] is the raw transport state a host collects (method, URI, headers,
//!   body, uploaded files). The router turns it into a [`RequestContext`] once a
//!   route matched and its path parameters are known.
//! - [`RequestContext`] offers plain key-value lookups over params, query, body,
//!   files and headers, plus an attribute bag middleware can extend through
//!   [`MiddlewareOutcome::AllowWith`](crate::middleware::MiddlewareOutcome::AllowWith).
//! - [`Response`] is the sink handlers write a status, headers and payload into.
//!
//! ```rust
//! use scoperoute::context::Request;
//! use http::Method;
//!
//! let req = Request::new(Method::GET, "/search?q=rust&page=2")
//!     .with_header("X-Api-Key", "secret");
//! assert_eq!(req.path(), "/search");
//! assert_eq!(req.query_value("page"), Some("2"));
//! ```

mod request;
mod response;

pub use request::{HeaderVec, Request, RequestContext, UploadedFile, MAX_INLINE_HEADERS};
pub use response::Response;
