use std::fmt;
use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;
use smallvec::SmallVec;

use crate::error::PatternError;

/// Maximum number of path parameters before heap allocation.
/// Most routes have ≤4 placeholders (e.g. `/users/:id/posts/:post_id`).
pub const MAX_INLINE_PARAMS: usize = 8;

/// Ordered `(name, value)` pairs bound by a successful match.
///
/// Names are shared with the compiled pattern (`Arc<str>` clone is a refcount bump),
/// values are per-request data taken from the path.
pub type ParamVec = SmallVec<[(Arc<str>, String); MAX_INLINE_PARAMS]>;

/// Placeholder scanner: `:name`, `<name>` or `{name}`
static PLACEHOLDER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r":([A-Za-z0-9_]+)|<([A-Za-z0-9_]+)>|\{([A-Za-z0-9_]+)\}")
        .expect("placeholder regex should be valid")
});

/// A compiled URL template.
///
/// Immutable after [`PathPattern::compile`].
#[derive(Clone)]
pub struct PathPattern {
    template: Arc<str>,
    regex: Regex,
    param_names: Vec<Arc<str>>,
}

impl PathPattern {
    /// Compile a template into a matcher plus the ordered list of placeholder names.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::DuplicateParam`] if a placeholder name repeats.
    pub fn compile(template: &str) -> Result<Self, PatternError> {
        let mut pattern = String::with_capacity(template.len() + 16);
        pattern.push('^');
        let mut param_names: Vec<Arc<str>> = Vec::new();
        let mut cursor = 0;

        for caps in PLACEHOLDER_REGEX.captures_iter(template) {
            let (Some(whole), Some(name)) = (
                caps.get(0),
                caps.get(1).or_else(|| caps.get(2)).or_else(|| caps.get(3)),
            ) else {
                continue;
            };
            let name = name.as_str();
            if param_names.iter().any(|n| n.as_ref() == name) {
                return Err(PatternError::DuplicateParam {
                    template: template.to_string(),
                    name: name.to_string(),
                });
            }

            pattern.push_str(&regex::escape(&template[cursor..whole.start()]));
            pattern.push_str("([^/]+)");
            param_names.push(Arc::from(name));
            cursor = whole.end();
        }

        pattern.push_str(&regex::escape(&template[cursor..]));
        pattern.push('$');

        let regex = Regex::new(&pattern).map_err(|e| PatternError::InvalidRegex {
            template: template.to_string(),
            message: e.to_string(),
        })?;

        Ok(Self {
            template: Arc::from(template),
            regex,
            param_names,
        })
    }

    /// The template this pattern was compiled from.
    #[must_use]
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Shared handle to the template, for logging and dispatch results.
    #[must_use]
    pub fn template_arc(&self) -> Arc<str> {
        Arc::clone(&self.template)
    }

    /// Placeholder names in declaration order.
    #[must_use]
    pub fn param_names(&self) -> &[Arc<str>] {
        &self.param_names
    }

    #[must_use]
    pub fn param_count(&self) -> usize {
        self.param_names.len()
    }

    /// `true` when the template has no placeholders.
    #[must_use]
    pub fn is_static(&self) -> bool {
        self.param_names.is_empty()
    }

    /// Match a request path against the template.
    ///
    /// Returns one `(name, value)` pair per placeholder, in declaration order,
    /// or `None` when the path does not satisfy the template.
    #[must_use]
    pub fn match_path(&self, path: &str) -> Option<ParamVec> {
        let caps = self.regex.captures(path)?;
        let mut params = ParamVec::new();
        for (idx, name) in self.param_names.iter().enumerate() {
            let value = caps.get(idx + 1)?;
            params.push((Arc::clone(name), value.as_str().to_string()));
        }
        Some(params)
    }
}

impl fmt::Debug for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PathPattern")
            .field("template", &self.template)
            .field("regex", &self.regex.as_str())
            .field("param_names", &self.param_names)
            .finish()
    }
}
