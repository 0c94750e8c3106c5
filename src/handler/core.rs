use std::fmt;
use std::sync::Arc;

use crate::context::{RequestContext, Response};
use crate::error::RouterError;

use super::named::{HandlerRef, HandlerResolver};

/// Signal returned by a chain handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainFlow {
    /// Run the next handler of the chain
    Next,
    /// End the chain here
    Stop,
}

impl From<()> for ChainFlow {
    fn from(_: ()) -> Self {
        ChainFlow::Stop
    }
}

impl From<bool> for ChainFlow {
    fn from(next: bool) -> Self {
        if next {
            ChainFlow::Next
        } else {
            ChainFlow::Stop
        }
    }
}

/// Something that can serve a matched route or a status fallback.
pub trait RouteHandler: Send + Sync {
    fn call(&self, ctx: &mut RequestContext, res: &mut Response) -> ChainFlow;
}

impl<F, R> RouteHandler for F
where
    F: Fn(&mut RequestContext, &mut Response) -> R + Send + Sync,
    R: Into<ChainFlow>,
{
    fn call(&self, ctx: &mut RequestContext, res: &mut Response) -> ChainFlow {
        (self)(ctx, res).into()
    }
}

/// A registered route or status handler.
#[derive(Clone)]
pub enum Handler {
    Inline(Arc<dyn RouteHandler>),
    Named(HandlerRef),
    Literal(bool),
}

/// Wrap a closure as an inline [`Handler`].
pub fn handler<F, R>(f: F) -> Handler
where
    F: Fn(&mut RequestContext, &mut Response) -> R + Send + Sync + 'static,
    R: Into<ChainFlow> + 'static,
{
    Handler::Inline(Arc::new(f))
}

impl Handler {
    /// Named reference of the form `module/path@method`.
    ///
    /// The reference is validated when the handler is invoked.
    #[must_use]
    pub fn named(reference: &str) -> Self {
        Handler::Named(HandlerRef::new(reference))
    }

    /// Run the handler.
    ///
    /// # Errors
    ///
    /// Named handlers fail with [`RouterError::HandlerResolution`] when the reference
    /// cannot be resolved and [`RouterError::UnsupportedCallback`] when the resolved
    /// object does not expose the method.
    pub fn invoke(
        &self,
        resolver: Option<&dyn HandlerResolver>,
        ctx: &mut RequestContext,
        res: &mut Response,
    ) -> Result<ChainFlow, RouterError> {
        match self {
            Handler::Inline(h) => Ok(h.call(ctx, res)),
            Handler::Literal(next) => Ok(ChainFlow::from(*next)),
            Handler::Named(reference) => {
                let object = reference.resolve(resolver)?;
                object
                    .handle(reference.method(), ctx, res)
                    .ok_or_else(|| RouterError::UnsupportedCallback {
                        reference: reference.as_str().to_string(),
                    })
            }
        }
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Handler::Inline(_) => f.write_str("Handler::Inline(..)"),
            Handler::Named(r) => write!(f, "Handler::Named({})", r.as_str()),
            Handler::Literal(b) => write!(f, "Handler::Literal({b})"),
        }
    }
}

impl From<&str> for Handler {
    fn from(reference: &str) -> Self {
        Handler::named(reference)
    }
}

impl From<bool> for Handler {
    fn from(value: bool) -> Self {
        Handler::Literal(value)
    }
}

/// Ordered handlers of one route.
#[derive(Clone, Debug, Default)]
pub struct HandlerChain(Vec<Handler>);

impl HandlerChain {
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Handler> {
        self.0.iter()
    }

    /// Run handlers in order until one stops the chain.
    ///
    /// Returns the number of handlers that ran.
    ///
    /// # Errors
    ///
    /// Propagates the first handler error; later handlers do not run.
    pub fn run(
        &self,
        resolver: Option<&dyn HandlerResolver>,
        ctx: &mut RequestContext,
        res: &mut Response,
    ) -> Result<usize, RouterError> {
        let mut ran = 0;
        for h in &self.0 {
            ran += 1;
            if h.invoke(resolver, ctx, res)? == ChainFlow::Stop {
                break;
            }
        }
        Ok(ran)
    }
}

impl From<Handler> for HandlerChain {
    fn from(h: Handler) -> Self {
        HandlerChain(vec![h])
    }
}

impl From<Vec<Handler>> for HandlerChain {
    fn from(handlers: Vec<Handler>) -> Self {
        HandlerChain(handlers)
    }
}

impl From<&str> for HandlerChain {
    fn from(reference: &str) -> Self {
        HandlerChain(vec![Handler::named(reference)])
    }
}
