//! # Pattern Module
//!
//! Compiles parameterized URL templates into anchored matchers.
//!
//! A template mixes literal text with named placeholders. Three placeholder
//! spellings are accepted and may be mixed freely:
//!
//! - `:name` (e.g. `/user/:name`)
//! - `<name>` (e.g. `/user/<name>`)
//! - `{name}` (e.g. `/user/{name}`)
//!
//! Names are made of ASCII letters, digits and underscores and must be unique
//! within one template. Each placeholder captures exactly one non-empty path
//! segment; everything else in the template is matched literally.
//!
//! ## Example
//!
//! ```rust
//! use scoperoute::pattern::PathPattern;
//!
//! let pattern = PathPattern::compile("/users/:user_id/posts/<post_id>").unwrap();
//! let params = pattern.match_path("/users/7/posts/abc").unwrap();
//! assert_eq!(params[0].1, "7");
//! assert_eq!(params[1].1, "abc");
//! assert!(pattern.match_path("/users/7/posts").is_none());
//! ```
//!
//! Matching is anchored at both ends: the whole path must satisfy the template.
//! Capture values are returned raw; no percent-decoding happens here.

mod core;

pub use core::{ParamVec, PathPattern, MAX_INLINE_PARAMS};
