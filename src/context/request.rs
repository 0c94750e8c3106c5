use std::collections::HashMap;
use std::sync::Arc;

use http::Method;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use smallvec::SmallVec;

use crate::ids::RequestId;
use crate::pattern::ParamVec;

/// Maximum inline headers before heap allocation.
pub const MAX_INLINE_HEADERS: usize = 16;

/// Header storage; names keep their original spelling, lookups are case-insensitive.
pub type HeaderVec = SmallVec<[(Arc<str>, String); MAX_INLINE_HEADERS]>;

/// Metadata of a file uploaded with the request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedFile {
    /// Client-side file name
    pub name: String,
    /// Declared media type
    pub content_type: String,
    /// Size in bytes
    pub size: u64,
    /// Where the host stored the upload
    pub path: String,
}

/// Raw inbound request as collected by the host.
#[derive(Debug, Clone)]
pub struct Request {
    method: Method,
    path: String,
    query: HashMap<String, String>,
    headers: HeaderVec,
    body: Option<Value>,
    files: HashMap<String, UploadedFile>,
}

impl Request {
    /// Create a request from a method and a request URI.
    ///
    /// Everything from the first `?` on is split off and parsed as the query string.
    pub fn new(method: Method, uri: &str) -> Self {
        let (path, query) = match uri.split_once('?') {
            Some((path, query_str)) => (
                path.to_string(),
                url::form_urlencoded::parse(query_str.as_bytes())
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
            ),
            None => (uri.to_string(), HashMap::new()),
        };

        Self {
            method,
            path,
            query,
            headers: HeaderVec::new(),
            body: None,
            files: HashMap::new(),
        }
    }

    #[must_use]
    pub fn with_query(mut self, name: &str, value: &str) -> Self {
        self.query.insert(name.to_string(), value.to_string());
        self
    }

    #[must_use]
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((Arc::from(name), value.to_string()));
        self
    }

    /// Replace the body with a decoded JSON document.
    #[must_use]
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Add one form field to the body, turning it into an object if needed.
    #[must_use]
    pub fn with_form_field(mut self, name: &str, value: &str) -> Self {
        let mut fields = match self.body.take() {
            Some(Value::Object(map)) => map,
            _ => Map::new(),
        };
        fields.insert(name.to_string(), Value::String(value.to_string()));
        self.body = Some(Value::Object(fields));
        self
    }

    #[must_use]
    pub fn with_file(mut self, field: &str, file: UploadedFile) -> Self {
        self.files.insert(field.to_string(), file);
        self
    }

    #[must_use]
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Request path without the query string.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[must_use]
    pub fn query_value(&self, name: &str) -> Option<&str> {
        self.query.get(name).map(String::as_str)
    }

    /// Header value, matched case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub(crate) fn into_context(
        self,
        request_id: RequestId,
        template: Arc<str>,
        params: ParamVec,
    ) -> RequestContext {
        RequestContext {
            request_id,
            method: self.method,
            path: self.path,
            template,
            params,
            query: self.query,
            headers: self.headers,
            body: self.body,
            files: self.files,
            attributes: Map::new(),
        }
    }
}

/// Request data seen by middleware and handlers for one dispatch.
#[derive(Debug, Clone)]
pub struct RequestContext {
    request_id: RequestId,
    method: Method,
    path: String,
    template: Arc<str>,
    params: ParamVec,
    query: HashMap<String, String>,
    headers: HeaderVec,
    body: Option<Value>,
    files: HashMap<String, UploadedFile>,
    attributes: Map<String, Value>,
}

impl RequestContext {
    #[must_use]
    pub fn request_id(&self) -> RequestId {
        self.request_id
    }

    #[must_use]
    pub fn method(&self) -> &Method {
        &self.method
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Full template of the route being served (empty for status fallbacks
    /// that ran without a matched route).
    #[must_use]
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Path parameter bound by the matched route.
    #[inline]
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == name)
            .map(|(_, v)| v.as_str())
    }

    #[must_use]
    pub fn params(&self) -> &ParamVec {
        &self.params
    }

    #[must_use]
    pub fn query(&self, name: &str) -> Option<&str> {
        self.query.get(name).map(String::as_str)
    }

    #[must_use]
    pub fn query_map(&self) -> &HashMap<String, String> {
        &self.query
    }

    #[must_use]
    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    /// Field of an object body.
    #[must_use]
    pub fn body_field(&self, name: &str) -> Option<&Value> {
        self.body.as_ref().and_then(|b| b.get(name))
    }

    #[must_use]
    pub fn file(&self, name: &str) -> Option<&UploadedFile> {
        self.files.get(name)
    }

    /// Header value, matched case-insensitively.
    #[inline]
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Attribute attached by middleware or an earlier chain handler.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    pub fn set(&mut self, name: &str, value: Value) -> &mut Self {
        self.attributes.insert(name.to_string(), value);
        self
    }

    #[must_use]
    pub fn attributes(&self) -> &Map<String, Value> {
        &self.attributes
    }

    pub(crate) fn extend_attributes(&mut self, extra: Map<String, Value>) {
        self.attributes.extend(extra);
    }

    /// Query, files, params and body merged into one map; later sources win.
    #[must_use]
    pub fn all(&self) -> Map<String, Value> {
        let mut merged = Map::new();
        for (k, v) in &self.query {
            merged.insert(k.clone(), Value::String(v.clone()));
        }
        for (k, file) in &self.files {
            merged.insert(
                k.clone(),
                serde_json::to_value(file).unwrap_or(Value::Null),
            );
        }
        for (k, v) in &self.params {
            merged.insert(k.to_string(), Value::String(v.clone()));
        }
        if let Some(Value::Object(body)) = &self.body {
            for (k, v) in body {
                merged.insert(k.clone(), v.clone());
            }
        }
        merged
    }
}
