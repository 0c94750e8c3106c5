use std::fmt;

use http::Method;

/// Error raised while compiling a URL template into a [`PathPattern`](crate::pattern::PathPattern).
///
/// Pattern errors happen at declaration time and should abort startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    /// The same placeholder name appears more than once in one template
    DuplicateParam {
        /// Full template as passed to the compiler
        template: String,
        /// The repeated placeholder name
        name: String,
    },
    /// The assembled matcher could not be compiled
    InvalidRegex {
        /// Full template as passed to the compiler
        template: String,
        /// Message reported by the regex engine
        message: String,
    },
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternError::DuplicateParam { template, name } => {
                write!(
                    f,
                    "pattern error: placeholder '{}' appears more than once in '{}'",
                    name, template
                )
            }
            PatternError::InvalidRegex { template, message } => {
                write!(
                    f,
                    "pattern error: template '{}' does not compile: {}",
                    template, message
                )
            }
        }
    }
}

impl std::error::Error for PatternError {}

/// Error raised when a named handler reference (`module/path@method`) cannot be resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResolutionError {
    /// The reference is not of the form `module/path@method`
    Malformed {
        /// The raw reference string
        reference: String,
    },
    /// A named handler was invoked but the router has no resolver installed
    NoResolver {
        /// The raw reference string
        reference: String,
    },
    /// The resolver does not know the module path
    NotFound {
        /// The module path part of the reference
        module: String,
    },
}

impl fmt::Display for HandlerResolutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandlerResolutionError::Malformed { reference } => {
                write!(
                    f,
                    "handler resolution error: '{}' is not of the form 'module@method'",
                    reference
                )
            }
            HandlerResolutionError::NoResolver { reference } => {
                write!(
                    f,
                    "handler resolution error: no resolver installed for '{}'",
                    reference
                )
            }
            HandlerResolutionError::NotFound { module } => {
                write!(f, "handler resolution error: cannot load '{}'", module)
            }
        }
    }
}

impl std::error::Error for HandlerResolutionError {}

/// Top-level error type of the router.
///
/// Routing outcomes (no match, access denied, missing status handler) are not errors;
/// they are reported through [`DispatchResult`](crate::dispatcher::DispatchResult).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouterError {
    /// A route template failed to compile
    Pattern(PatternError),
    /// A named handler could not be resolved
    HandlerResolution(HandlerResolutionError),
    /// A resolved handler object does not expose the requested method in the role it was used in
    UnsupportedCallback {
        /// The raw reference string
        reference: String,
    },
    /// The method is not one of GET, POST, PUT, PATCH, DELETE
    UnsupportedMethod(Method),
}

impl fmt::Display for RouterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouterError::Pattern(e) => write!(f, "{e}"),
            RouterError::HandlerResolution(e) => write!(f, "{e}"),
            RouterError::UnsupportedCallback { reference } => {
                write!(f, "cannot call handler '{}'", reference)
            }
            RouterError::UnsupportedMethod(method) => {
                write!(f, "method {} cannot be routed", method)
            }
        }
    }
}

impl std::error::Error for RouterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RouterError::Pattern(e) => Some(e),
            RouterError::HandlerResolution(e) => Some(e),
            _ => None,
        }
    }
}

impl From<PatternError> for RouterError {
    fn from(e: PatternError) -> Self {
        RouterError::Pattern(e)
    }
}

impl From<HandlerResolutionError> for RouterError {
    fn from(e: HandlerResolutionError) -> Self {
        RouterError::HandlerResolution(e)
    }
}
