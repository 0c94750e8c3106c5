//! # Dispatcher Module
//!
//! Runs one request through the route table, the middleware registry and the
//! status table.
//!
//! ## Request Flow
//!
//! 1. Routes whose method equals the request method are tried in matching order
//!    (static before parameterized, then registration order); the first full-path
//!    match wins and its placeholders become the path parameters.
//! 2. No match: the 404 status handler runs, or the result is a bare 404.
//! 3. Match: middleware whose prefix occurs in the route's template runs in
//!    registration order. The first deny ends the request with that entry's
//!    fallback status (or 403), through the status table when a handler is
//!    registered for the code.
//! 4. Allowed: the route's handler chain runs until a handler stops it.
//!
//! Exactly one of these terminal actions happens per dispatch. Handler resolution
//! failures are returned as [`RouterError`](crate::error::RouterError); they never
//! alter the router's tables.

mod core;

pub use core::{DispatchOutcome, DispatchResult, Dispatcher};
