use std::sync::Arc;

use tracing::{debug, info};

use crate::context::RequestContext;
use crate::error::RouterError;
use crate::handler::HandlerResolver;

use super::{MiddlewareHandler, MiddlewareOutcome};

/// Status used when a denying middleware has no fallback status of its own.
pub const DEFAULT_DENY_STATUS: u16 = 403;

/// One registered middleware and the prefix it guards.
#[derive(Debug, Clone)]
pub struct MiddlewareEntry {
    pub url_prefix: Arc<str>,
    pub handler: MiddlewareHandler,
    pub fallback_status: Option<u16>,
}

impl MiddlewareEntry {
    /// Containment test: the prefix may occur anywhere in `path`.
    #[inline]
    #[must_use]
    pub fn applies_to(&self, path: &str) -> bool {
        path.contains(self.url_prefix.as_ref())
    }
}

/// Result of evaluating the middleware that applies to a route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
    Allowed,
    Denied {
        /// Status the request ends with
        status: u16,
        /// Prefix of the entry that denied
        prefix: Arc<str>,
    },
}

/// Ordered middleware entries.
#[derive(Debug, Clone, Default)]
pub struct MiddlewareRegistry {
    entries: Vec<MiddlewareEntry>,
}

impl MiddlewareRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(
        &mut self,
        url_prefix: &str,
        handler: MiddlewareHandler,
        fallback_status: Option<u16>,
    ) {
        debug!(
            url_prefix = %url_prefix,
            fallback_status = ?fallback_status,
            position = self.entries.len(),
            "Middleware registered"
        );
        self.entries.push(MiddlewareEntry {
            url_prefix: Arc::from(url_prefix),
            handler,
            fallback_status,
        });
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn entries(&self) -> &[MiddlewareEntry] {
        &self.entries
    }

    /// Entries applying to `path`, in registration order.
    pub fn resolve<'a>(&'a self, path: &'a str) -> impl Iterator<Item = &'a MiddlewareEntry> + 'a {
        self.entries.iter().filter(move |e| e.applies_to(path))
    }

    /// Run the entries applying to `path` until one denies.
    ///
    /// Attributes from `AllowWith` outcomes are merged into `ctx` as they arrive,
    /// so later entries see them.
    ///
    /// # Errors
    ///
    /// Propagates resolution errors of named middleware; evaluation stops there.
    pub fn evaluate(
        &self,
        path: &str,
        ctx: &mut RequestContext,
        resolver: Option<&dyn HandlerResolver>,
    ) -> Result<Access, RouterError> {
        for entry in self.resolve(path) {
            match entry.handler.check(resolver, ctx)? {
                MiddlewareOutcome::Allow => {}
                MiddlewareOutcome::AllowWith(attributes) => {
                    debug!(
                        url_prefix = %entry.url_prefix,
                        attributes = attributes.len(),
                        "Middleware attached attributes"
                    );
                    ctx.extend_attributes(attributes);
                }
                MiddlewareOutcome::Deny => {
                    let status = entry.fallback_status.unwrap_or(DEFAULT_DENY_STATUS);
                    info!(
                        request_id = %ctx.request_id(),
                        path = %path,
                        url_prefix = %entry.url_prefix,
                        status = status,
                        "Middleware denied access"
                    );
                    return Ok(Access::Denied {
                        status,
                        prefix: Arc::clone(&entry.url_prefix),
                    });
                }
            }
        }
        Ok(Access::Allowed)
    }
}
