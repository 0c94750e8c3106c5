use std::sync::Arc;

use http::Method;
use tracing::{debug, info};

use crate::config::RouterConfig;
use crate::context::Request;
use crate::dispatcher::{DispatchResult, Dispatcher};
use crate::error::RouterError;
use crate::handler::{Handler, HandlerChain, HandlerResolver};
use crate::middleware::{MiddlewareHandler, MiddlewareRegistry};
use crate::namespace::NamespaceStack;
use crate::routes::RouteTable;
use crate::status::StatusTable;

/// Routes, middleware and status handlers of one application.
#[derive(Default)]
pub struct Router {
    routes: RouteTable,
    middleware: MiddlewareRegistry,
    statuses: StatusTable,
    namespace: NamespaceStack,
    resolver: Option<Arc<dyn HandlerResolver>>,
}

impl Router {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a router tuned by `config`.
    #[must_use]
    pub fn with_config(config: &RouterConfig) -> Self {
        let mut router = Self::new();
        router
            .routes
            .set_slow_match_threshold(config.slow_match_threshold());
        router
    }

    /// Install the resolver used for `module@method` handler references.
    #[must_use]
    pub fn with_resolver(mut self, resolver: Arc<dyn HandlerResolver>) -> Self {
        self.resolver = Some(resolver);
        self
    }

    pub fn set_resolver(&mut self, resolver: Arc<dyn HandlerResolver>) -> &mut Self {
        self.resolver = Some(resolver);
        self
    }

    /// Declare a route under the current group prefix.
    ///
    /// # Errors
    ///
    /// [`RouterError::Pattern`] for a template with a repeated placeholder,
    /// [`RouterError::UnsupportedMethod`] for methods other than GET, POST, PUT,
    /// PATCH and DELETE. Nothing is registered on error.
    pub fn add_route(
        &mut self,
        method: Method,
        template: &str,
        chain: impl Into<HandlerChain>,
    ) -> Result<&mut Self, RouterError> {
        let full = self.namespace.qualify(template);
        self.routes.add(method, &full, chain.into())?;
        self.namespace.record_last(template);
        Ok(self)
    }

    pub fn get(
        &mut self,
        template: &str,
        chain: impl Into<HandlerChain>,
    ) -> Result<&mut Self, RouterError> {
        self.add_route(Method::GET, template, chain)
    }

    pub fn post(
        &mut self,
        template: &str,
        chain: impl Into<HandlerChain>,
    ) -> Result<&mut Self, RouterError> {
        self.add_route(Method::POST, template, chain)
    }

    pub fn put(
        &mut self,
        template: &str,
        chain: impl Into<HandlerChain>,
    ) -> Result<&mut Self, RouterError> {
        self.add_route(Method::PUT, template, chain)
    }

    pub fn patch(
        &mut self,
        template: &str,
        chain: impl Into<HandlerChain>,
    ) -> Result<&mut Self, RouterError> {
        self.add_route(Method::PATCH, template, chain)
    }

    pub fn delete(
        &mut self,
        template: &str,
        chain: impl Into<HandlerChain>,
    ) -> Result<&mut Self, RouterError> {
        self.add_route(Method::DELETE, template, chain)
    }

    /// Declare nested routes, groups and middleware under `segment`.
    ///
    /// The prefix is restored before the body's error, if any, is returned.
    ///
    /// # Errors
    ///
    /// Whatever `body` returns.
    pub fn group<F>(&mut self, segment: &str, body: F) -> Result<&mut Self, RouterError>
    where
        F: FnOnce(&mut Self) -> Result<(), RouterError>,
    {
        self.namespace.enter(segment);
        debug!(
            prefix = %self.namespace.current(),
            depth = self.namespace.depth(),
            "Entering route group"
        );
        let result = body(self);
        self.namespace.leave(segment);
        self.namespace.record_last(segment);
        result.map(|()| self)
    }

    /// Guard the scope of the preceding route or group. Denial ends the request with 403.
    pub fn middleware(&mut self, handler: impl Into<MiddlewareHandler>) -> &mut Self {
        let scope = self.namespace.scope();
        self.middleware.register(&scope, handler.into(), None);
        self
    }

    /// Like [`middleware`](Self::middleware), but denial ends the request with `status`.
    pub fn middleware_with_status(
        &mut self,
        handler: impl Into<MiddlewareHandler>,
        status: u16,
    ) -> &mut Self {
        let scope = self.namespace.scope();
        self.middleware.register(&scope, handler.into(), Some(status));
        self
    }

    /// Handler for a status fallback. Replaces an earlier handler for the same code.
    pub fn status(&mut self, code: u16, handler: impl Into<Handler>) -> &mut Self {
        self.statuses.register(code, handler.into());
        self
    }

    /// Serve one request.
    ///
    /// # Errors
    ///
    /// Resolution failures of named handlers or middleware. Routing outcomes such as
    /// "no route" or "access denied" are not errors.
    pub fn dispatch(&self, request: Request) -> Result<DispatchResult, RouterError> {
        self.dispatcher().dispatch(request)
    }

    #[must_use]
    pub fn dispatcher(&self) -> Dispatcher<'_> {
        Dispatcher::new(
            &self.routes,
            &self.middleware,
            &self.statuses,
            self.resolver.as_deref(),
        )
    }

    #[must_use]
    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    #[must_use]
    pub fn middleware_registry(&self) -> &MiddlewareRegistry {
        &self.middleware
    }

    #[must_use]
    pub fn status_table(&self) -> &StatusTable {
        &self.statuses
    }

    /// Declaration scope; only meaningful while routes are being declared.
    #[must_use]
    pub fn namespace(&self) -> &NamespaceStack {
        &self.namespace
    }

    /// Log the declared tables.
    pub fn dump_routes(&self) {
        let routes_summary: Vec<String> = self
            .routes
            .iter()
            .take(10)
            .map(|r| format!("{} {}", r.method(), r.template()))
            .collect();
        info!(
            routes_count = self.routes.len(),
            middleware_count = self.middleware.len(),
            status_handlers = self.statuses.len(),
            routes_summary = ?routes_summary,
            "Routing table loaded"
        );
        for route in self.routes.iter() {
            debug!(
                method = %route.method(),
                template = %route.template(),
                handlers = route.chain().len(),
                "Route"
            );
        }
    }
}
