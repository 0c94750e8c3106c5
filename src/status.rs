//! Status-code fallback handlers.

use std::collections::HashMap;

use tracing::debug;

use crate::handler::Handler;

/// Handlers invoked when no route matches (404) or access is denied (403 or a
/// middleware's own fallback status).
///
/// At most one handler per code; registering a code again replaces the handler.
#[derive(Debug, Clone, Default)]
pub struct StatusTable {
    handlers: HashMap<u16, Handler>,
}

impl StatusTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, code: u16, handler: Handler) {
        if self.handlers.insert(code, handler).is_some() {
            debug!(code = code, "Status handler replaced");
        } else {
            debug!(code = code, "Status handler registered");
        }
    }

    /// Handler for `code`, if any. Absence is not an error: the caller answers with
    /// the bare status.
    #[must_use]
    pub fn resolve(&self, code: u16) -> Option<&Handler> {
        self.handlers.get(&code)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}
