use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::context::{RequestContext, Response};
use crate::error::HandlerResolutionError;
use crate::middleware::MiddlewareOutcome;

use super::ChainFlow;

/// An object that serves named handler references.
///
/// Both role methods default to `None`, meaning "this object has no such method in
/// that role"; the router reports that as
/// [`RouterError::UnsupportedCallback`](crate::error::RouterError::UnsupportedCallback).
pub trait HandlerObject: Send + Sync {
    /// Serve a route or status fallback through `method`.
    fn handle(
        &self,
        _method: &str,
        _ctx: &mut RequestContext,
        _res: &mut Response,
    ) -> Option<ChainFlow> {
        None
    }

    /// Decide access through `method` when used as middleware.
    fn guard(&self, _method: &str, _ctx: &RequestContext) -> Option<MiddlewareOutcome> {
        None
    }
}

/// Maps module paths to handler objects.
///
/// The router calls `resolve` each time a named handler runs.
pub trait HandlerResolver: Send + Sync {
    fn resolve(&self, module: &str) -> Option<Arc<dyn HandlerObject>>;
}

/// `module/path@method` reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerRef {
    raw: Arc<str>,
}

impl HandlerRef {
    #[must_use]
    pub fn new(reference: &str) -> Self {
        Self {
            raw: Arc::from(reference),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Split into `(module, method)`.
    ///
    /// # Errors
    ///
    /// [`HandlerResolutionError::Malformed`] unless the reference has a non-empty
    /// module path, exactly one `@`, and a non-empty method.
    pub fn parts(&self) -> Result<(&str, &str), HandlerResolutionError> {
        match self.raw.split_once('@') {
            Some((module, method))
                if !module.is_empty() && !method.is_empty() && !method.contains('@') =>
            {
                Ok((module, method))
            }
            _ => Err(HandlerResolutionError::Malformed {
                reference: self.raw.to_string(),
            }),
        }
    }

    /// Module path part, or the whole reference when malformed.
    #[must_use]
    pub fn module(&self) -> &str {
        self.parts().map(|(m, _)| m).unwrap_or(&self.raw)
    }

    /// Method part, or an empty string when malformed.
    #[must_use]
    pub fn method(&self) -> &str {
        self.parts().map(|(_, m)| m).unwrap_or("")
    }

    /// Last `/` segment of the module path.
    #[must_use]
    pub fn object_name(&self) -> &str {
        let module = self.module();
        module.rsplit('/').next().unwrap_or(module)
    }

    pub(crate) fn resolve(
        &self,
        resolver: Option<&dyn HandlerResolver>,
    ) -> Result<Arc<dyn HandlerObject>, HandlerResolutionError> {
        let (module, method) = self.parts()?;
        let resolver = resolver.ok_or_else(|| HandlerResolutionError::NoResolver {
            reference: self.raw.to_string(),
        })?;
        debug!(module = %module, method = %method, "Resolving named handler");
        resolver
            .resolve(module)
            .ok_or_else(|| HandlerResolutionError::NotFound {
                module: module.to_string(),
            })
    }
}

/// In-memory [`HandlerResolver`] keyed by module path.
#[derive(Default, Clone)]
pub struct HandlerRegistry {
    objects: HashMap<String, Arc<dyn HandlerObject>>,
}

impl HandlerRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an object under a module path. A later registration replaces an
    /// earlier one for the same path.
    pub fn register(&mut self, module: &str, object: Arc<dyn HandlerObject>) -> &mut Self {
        self.objects.insert(module.to_string(), object);
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl HandlerResolver for HandlerRegistry {
    fn resolve(&self, module: &str) -> Option<Arc<dyn HandlerObject>> {
        self.objects.get(module).map(Arc::clone)
    }
}
