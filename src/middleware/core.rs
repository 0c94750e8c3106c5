use std::fmt;
use std::sync::Arc;

use serde_json::{Map, Value};

use crate::context::RequestContext;
use crate::error::RouterError;
use crate::handler::{HandlerRef, HandlerResolver};

/// Decision of one middleware.
#[derive(Debug, Clone, PartialEq)]
pub enum MiddlewareOutcome {
    Allow,
    /// Allow and attach attributes (e.g. an authenticated identity) to the request
    AllowWith(Map<String, Value>),
    Deny,
}

impl From<bool> for MiddlewareOutcome {
    fn from(allowed: bool) -> Self {
        if allowed {
            MiddlewareOutcome::Allow
        } else {
            MiddlewareOutcome::Deny
        }
    }
}

/// Access check run before a route's handler chain.
pub trait Middleware: Send + Sync {
    fn check(&self, ctx: &RequestContext) -> MiddlewareOutcome;
}

impl<F, R> Middleware for F
where
    F: Fn(&RequestContext) -> R + Send + Sync,
    R: Into<MiddlewareOutcome>,
{
    fn check(&self, ctx: &RequestContext) -> MiddlewareOutcome {
        (self)(ctx).into()
    }
}

/// A registered middleware.
#[derive(Clone)]
pub enum MiddlewareHandler {
    Inline(Arc<dyn Middleware>),
    Named(HandlerRef),
    /// `true` always allows, `false` always denies
    Literal(bool),
}

/// Wrap a closure as an inline [`MiddlewareHandler`].
pub fn guard<F, R>(f: F) -> MiddlewareHandler
where
    F: Fn(&RequestContext) -> R + Send + Sync + 'static,
    R: Into<MiddlewareOutcome>,
{
    MiddlewareHandler::Inline(Arc::new(f))
}

impl MiddlewareHandler {
    #[must_use]
    pub fn named(reference: &str) -> Self {
        MiddlewareHandler::Named(HandlerRef::new(reference))
    }

    /// Run the check.
    ///
    /// # Errors
    ///
    /// Named middleware fails like named route handlers do, see
    /// [`Handler::invoke`](crate::handler::Handler::invoke).
    pub fn check(
        &self,
        resolver: Option<&dyn HandlerResolver>,
        ctx: &RequestContext,
    ) -> Result<MiddlewareOutcome, RouterError> {
        match self {
            MiddlewareHandler::Inline(m) => Ok(m.check(ctx)),
            MiddlewareHandler::Literal(allowed) => Ok(MiddlewareOutcome::from(*allowed)),
            MiddlewareHandler::Named(reference) => {
                let object = reference.resolve(resolver)?;
                object
                    .guard(reference.method(), ctx)
                    .ok_or_else(|| RouterError::UnsupportedCallback {
                        reference: reference.as_str().to_string(),
                    })
            }
        }
    }
}

impl fmt::Debug for MiddlewareHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MiddlewareHandler::Inline(_) => f.write_str("MiddlewareHandler::Inline(..)"),
            MiddlewareHandler::Named(r) => write!(f, "MiddlewareHandler::Named({})", r.as_str()),
            MiddlewareHandler::Literal(b) => write!(f, "MiddlewareHandler::Literal({b})"),
        }
    }
}

impl From<&str> for MiddlewareHandler {
    fn from(reference: &str) -> Self {
        MiddlewareHandler::named(reference)
    }
}

impl From<bool> for MiddlewareHandler {
    fn from(allowed: bool) -> Self {
        MiddlewareHandler::Literal(allowed)
    }
}
