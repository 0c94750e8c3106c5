//! Declaration-time scope tracking for nested route groups.
//!
//! [`NamespaceStack`] holds the concatenated prefix of all enclosing groups and the
//! most recently declared path segment. It is only consulted while routes and
//! middleware are being declared; dispatch never reads it.

use tracing::warn;

/// Prefix state of the declaration phase.
///
/// `enter` pushes the current prefix length before appending, `leave` truncates back
/// to that length, so restoration is exact even when a segment's text recurs inside
/// the prefix (e.g. `/a` inside `/a/b/a`).
#[derive(Debug, Default, Clone)]
pub struct NamespaceStack {
    current: String,
    last: String,
    marks: Vec<usize>,
}

impl NamespaceStack {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Concatenated prefix of all open groups.
    #[must_use]
    pub fn current(&self) -> &str {
        &self.current
    }

    /// Most recently declared route template or group segment.
    #[must_use]
    pub fn last(&self) -> &str {
        &self.last
    }

    /// Number of open groups.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.marks.len()
    }

    /// Open a group: append `segment` to the current prefix.
    pub fn enter(&mut self, segment: &str) {
        self.marks.push(self.current.len());
        self.current.push_str(segment);
    }

    /// Close the innermost group, restoring the prefix that was current before
    /// the matching [`enter`](Self::enter).
    pub fn leave(&mut self, segment: &str) {
        match self.marks.pop() {
            Some(mark) => {
                let actual = &self.current[mark..];
                if actual != segment {
                    warn!(
                        expected = %segment,
                        actual = %actual,
                        "Namespace leave does not match the innermost group"
                    );
                }
                self.current.truncate(mark);
            }
            None => {
                warn!(segment = %segment, "Namespace leave without a matching enter");
            }
        }
    }

    /// Remember the segment a following middleware declaration scopes to.
    pub fn record_last(&mut self, segment: &str) {
        self.last.clear();
        self.last.push_str(segment);
    }

    /// Prefix a middleware declared now applies to: `current + last`.
    #[must_use]
    pub fn scope(&self) -> String {
        let mut scope = String::with_capacity(self.current.len() + self.last.len());
        scope.push_str(&self.current);
        scope.push_str(&self.last);
        scope
    }

    /// Full template for a route declared now: `current + template`.
    #[must_use]
    pub fn qualify(&self, template: &str) -> String {
        let mut full = String::with_capacity(self.current.len() + template.len());
        full.push_str(&self.current);
        full.push_str(template);
        full
    }

    /// Return to the empty state at the start of a declaration phase.
    pub fn reset(&mut self) {
        self.current.clear();
        self.last.clear();
        self.marks.clear();
    }
}
