use std::collections::HashMap;
use std::sync::Arc;

use http::Method;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error, info_span};

use crate::context::{HeaderVec, Request, RequestContext, Response};
use crate::error::RouterError;
use crate::handler::HandlerResolver;
use crate::ids::{RequestId, REQUEST_ID_HEADER};
use crate::middleware::{Access, MiddlewareRegistry};
use crate::pattern::ParamVec;
use crate::routes::{RouteMatch, RouteTable};
use crate::status::StatusTable;

/// How a dispatch ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DispatchOutcome {
    /// A route matched, access was granted and its chain ran
    Routed {
        template: String,
        /// Number of chain handlers that ran
        handlers_run: usize,
    },
    /// No route matched
    NotFound,
    /// A middleware denied access
    Denied { status: u16 },
}

/// Terminal result of one dispatch.
#[derive(Debug, Clone, Serialize)]
pub struct DispatchResult {
    pub request_id: RequestId,
    pub status: u16,
    #[serde(skip_serializing)]
    pub headers: HeaderVec,
    pub payload: Option<Value>,
    pub outcome: DispatchOutcome,
}

impl DispatchResult {
    fn from_response(request_id: RequestId, res: Response, outcome: DispatchOutcome) -> Self {
        let (status, headers, payload) = res.into_parts();
        Self {
            request_id,
            status,
            headers,
            payload,
            outcome,
        }
    }

    #[inline]
    #[must_use]
    pub fn get_header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Headers as an owned map (allocates).
    #[must_use]
    pub fn headers_map(&self) -> HashMap<String, String> {
        self.headers
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }
}

/// Borrowed view over a router's tables that serves requests.
///
/// Holds no request state; one `Dispatcher` can serve any number of requests,
/// concurrently when the tables are shared read-only.
#[derive(Clone, Copy)]
pub struct Dispatcher<'a> {
    routes: &'a RouteTable,
    middleware: &'a MiddlewareRegistry,
    statuses: &'a StatusTable,
    resolver: Option<&'a dyn HandlerResolver>,
}

impl<'a> Dispatcher<'a> {
    #[must_use]
    pub fn new(
        routes: &'a RouteTable,
        middleware: &'a MiddlewareRegistry,
        statuses: &'a StatusTable,
        resolver: Option<&'a dyn HandlerResolver>,
    ) -> Self {
        Self {
            routes,
            middleware,
            statuses,
            resolver,
        }
    }

    /// Serve one request.
    ///
    /// # Errors
    ///
    /// Resolution failures of named handlers or middleware.
    pub fn dispatch(&self, request: Request) -> Result<DispatchResult, RouterError> {
        let request_id = RequestId::from_header_or_new(request.header(REQUEST_ID_HEADER));
        let method: Method = request.method().clone();
        let span = info_span!(
            "dispatch",
            request_id = %request_id,
            method = %method,
            path = %request.path()
        );
        let _enter = span.enter();

        let result = match self.routes.match_route(&method, request.path()) {
            None => {
                let ctx = request.into_context(request_id, Arc::from(""), ParamVec::new());
                self.fallback(404, ctx, DispatchOutcome::NotFound)
            }
            Some(route_match) => self.serve(request, request_id, route_match),
        };

        if let Err(e) = &result {
            error!(error = %e, "Dispatch failed");
        }
        result
    }

    fn serve(
        &self,
        request: Request,
        request_id: RequestId,
        RouteMatch { route, params }: RouteMatch<'_>,
    ) -> Result<DispatchResult, RouterError> {
        let template = route.pattern().template_arc();
        let mut ctx = request.into_context(request_id, Arc::clone(&template), params);

        match self.middleware.evaluate(&template, &mut ctx, self.resolver)? {
            Access::Denied { status, .. } => {
                self.fallback(status, ctx, DispatchOutcome::Denied { status })
            }
            Access::Allowed => {
                let mut res = Response::new();
                let handlers_run = route.chain().run(self.resolver, &mut ctx, &mut res)?;
                debug!(
                    template = %template,
                    handlers_run = handlers_run,
                    status = res.status_code(),
                    "Handler chain finished"
                );
                Ok(DispatchResult::from_response(
                    request_id,
                    res,
                    DispatchOutcome::Routed {
                        template: template.to_string(),
                        handlers_run,
                    },
                ))
            }
        }
    }

    fn fallback(
        &self,
        status: u16,
        mut ctx: RequestContext,
        outcome: DispatchOutcome,
    ) -> Result<DispatchResult, RouterError> {
        let mut res = Response::with_status(status);
        match self.statuses.resolve(status) {
            Some(handler) => {
                debug!(status = status, "Running status handler");
                handler.invoke(self.resolver, &mut ctx, &mut res)?;
            }
            None => {
                debug!(status = status, "No status handler, answering with bare status");
            }
        }
        Ok(DispatchResult::from_response(ctx.request_id(), res, outcome))
    }
}
