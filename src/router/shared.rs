use std::sync::Arc;

use arc_swap::ArcSwap;
use tracing::info;

use crate::context::Request;
use crate::dispatcher::DispatchResult;
use crate::error::RouterError;

use super::Router;

/// A published, read-only router that can be replaced atomically.
///
/// Requests dispatch against the snapshot loaded when they start; a replacement
/// only affects requests that start afterwards. Declaration always happens on a
/// private `Router` before it is published.
pub struct SharedRouter {
    current: ArcSwap<Router>,
}

impl SharedRouter {
    #[must_use]
    pub fn new(router: Router) -> Self {
        Self {
            current: ArcSwap::from_pointee(router),
        }
    }

    /// Snapshot of the router currently published.
    #[must_use]
    pub fn load(&self) -> Arc<Router> {
        self.current.load_full()
    }

    /// Publish a new router and return the previous snapshot.
    pub fn replace(&self, router: Router) -> Arc<Router> {
        let routes = router.routes().len();
        let previous = self.current.swap(Arc::new(router));
        info!(
            routes_count = routes,
            previous_routes_count = previous.routes().len(),
            "Router replaced"
        );
        previous
    }

    /// Dispatch against the current snapshot.
    ///
    /// # Errors
    ///
    /// See [`Router::dispatch`].
    pub fn dispatch(&self, request: Request) -> Result<DispatchResult, RouterError> {
        self.current.load().dispatch(request)
    }
}
