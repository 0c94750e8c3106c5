use std::time::{Duration, Instant};

use http::Method;
use tracing::{debug, info, warn};

use crate::error::RouterError;
use crate::handler::HandlerChain;
use crate::pattern::{ParamVec, PathPattern};

/// Methods a route can be declared for.
pub const SUPPORTED_METHODS: [Method; 5] = [
    Method::GET,
    Method::POST,
    Method::PUT,
    Method::PATCH,
    Method::DELETE,
];

/// Default threshold above which a route match is logged as slow.
const DEFAULT_SLOW_MATCH: Duration = Duration::from_millis(1);

/// A declared route. Immutable once in the table.
#[derive(Debug, Clone)]
pub struct Route {
    method: Method,
    pattern: PathPattern,
    chain: HandlerChain,
    seq: usize,
}

impl Route {
    #[must_use]
    pub fn method(&self) -> &Method {
        &self.method
    }

    #[must_use]
    pub fn pattern(&self) -> &PathPattern {
        &self.pattern
    }

    /// Full template including the enclosing groups' prefix.
    #[must_use]
    pub fn template(&self) -> &str {
        self.pattern.template()
    }

    #[must_use]
    pub fn chain(&self) -> &HandlerChain {
        &self.chain
    }

    /// Registration index.
    #[must_use]
    pub fn seq(&self) -> usize {
        self.seq
    }
}

/// Result of matching a request to a route.
#[derive(Debug)]
pub struct RouteMatch<'a> {
    pub route: &'a Route,
    /// Bound placeholder values, in declaration order
    pub params: ParamVec,
}

impl RouteMatch<'_> {
    #[inline]
    #[must_use]
    pub fn get_param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Routes kept in matching order: static routes first, then parameterized ones,
/// each class in registration order.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<Route>,
    static_count: usize,
    slow_match: Duration,
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new()
    }
}

impl RouteTable {
    #[must_use]
    pub fn new() -> Self {
        Self {
            routes: Vec::new(),
            static_count: 0,
            slow_match: DEFAULT_SLOW_MATCH,
        }
    }

    /// Set the duration above which matches are logged at warn level.
    pub fn set_slow_match_threshold(&mut self, threshold: Duration) {
        self.slow_match = threshold;
    }

    /// Compile `template` and store the route.
    ///
    /// `template` must already carry the enclosing groups' prefix.
    ///
    /// # Errors
    ///
    /// [`RouterError::UnsupportedMethod`] for methods outside [`SUPPORTED_METHODS`],
    /// [`RouterError::Pattern`] when the template does not compile.
    pub fn add(
        &mut self,
        method: Method,
        template: &str,
        chain: HandlerChain,
    ) -> Result<(), RouterError> {
        if !SUPPORTED_METHODS.contains(&method) {
            return Err(RouterError::UnsupportedMethod(method));
        }
        let pattern = PathPattern::compile(template)?;
        let seq = self.routes.len();
        let is_static = pattern.is_static();

        debug!(
            method = %method,
            template = %template,
            params = pattern.param_count(),
            handlers = chain.len(),
            "Route registered"
        );

        let route = Route {
            method,
            pattern,
            chain,
            seq,
        };
        if is_static {
            self.routes.insert(self.static_count, route);
            self.static_count += 1;
        } else {
            self.routes.push(route);
        }
        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Routes in matching order.
    pub fn iter(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter()
    }

    /// Find the route serving `method` + `path`.
    #[must_use]
    pub fn match_route(&self, method: &Method, path: &str) -> Option<RouteMatch<'_>> {
        debug!(method = %method, path = %path, "Route match attempt");
        let match_start = Instant::now();

        let found = self
            .routes
            .iter()
            .filter(|r| &r.method == method)
            .find_map(|r| r.pattern.match_path(path).map(|params| (r, params)));

        let match_duration = match_start.elapsed();

        match found {
            Some((route, params)) => {
                if match_duration > self.slow_match {
                    warn!(
                        method = %method,
                        path = %path,
                        template = %route.template(),
                        path_params = ?params,
                        duration_us = match_duration.as_micros(),
                        "Slow route matching detected"
                    );
                } else {
                    info!(
                        method = %method,
                        path = %path,
                        template = %route.template(),
                        path_params = ?params,
                        duration_us = match_duration.as_micros(),
                        "Route matched"
                    );
                }
                Some(RouteMatch { route, params })
            }
            None => {
                warn!(
                    method = %method,
                    path = %path,
                    duration_us = match_duration.as_micros(),
                    "No route matched"
                );
                None
            }
        }
    }
}
