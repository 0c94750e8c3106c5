//! # Handler Module
//!
//! Route and status handlers, and the seam for string-addressed handler objects.
//!
//! ## Handler kinds
//!
//! A [`Handler`] is one of:
//!
//! - **Inline** - any `Fn(&mut RequestContext, &mut Response) -> R` where
//!   `R: Into<ChainFlow>`, wrapped with [`handler`]
//! - **Named** - a `"module/path@method"` reference resolved at invocation time through
//!   the router's [`HandlerResolver`]
//! - **Literal** - `true` continues a chain, `false` stops it
//!
//! ## Chains
//!
//! A route owns a [`HandlerChain`]. Handlers run in order until one returns
//! [`ChainFlow::Stop`]. A closure returning `()` stops the chain, so the common
//! single-handler route needs no explicit signal:
//!
//! ```rust
//! use scoperoute::handler::{handler, ChainFlow, Handler, HandlerChain};
//!
//! let chain = HandlerChain::from(vec![
//!     handler(|ctx, _res| {
//!         ctx.set("seen", serde_json::json!(true));
//!         ChainFlow::Next
//!     }),
//!     handler(|_ctx, res| {
//!         res.status(204);
//!     }),
//! ]);
//! assert_eq!(chain.len(), 2);
//! ```
//!
//! ## Named handlers
//!
//! Named references keep dynamic loading out of the router: the host installs a
//! [`HandlerResolver`] (for instance a [`HandlerRegistry`]) that maps module paths to
//! [`HandlerObject`]s.

mod core;
mod named;

pub use core::{handler, ChainFlow, Handler, HandlerChain, RouteHandler};
pub use named::{HandlerObject, HandlerRef, HandlerRegistry, HandlerResolver};
