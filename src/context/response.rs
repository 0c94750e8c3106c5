use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use tracing::error;

use super::HeaderVec;

/// Response sink handlers write into.
///
/// Starts at status 200 with no payload; status fallbacks pre-set the code.
#[derive(Debug, Clone)]
pub struct Response {
    status: u16,
    headers: HeaderVec,
    payload: Option<Value>,
}

impl Default for Response {
    fn default() -> Self {
        Self::with_status(200)
    }
}

impl Response {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_status(status: u16) -> Self {
        Self {
            status,
            headers: HeaderVec::new(),
            payload: None,
        }
    }

    /// Set the status code.
    pub fn status(&mut self, code: u16) -> &mut Self {
        self.status = code;
        self
    }

    /// Serialize `body` as the JSON payload.
    ///
    /// A value that cannot be serialized turns the response into a 500.
    pub fn json<T: Serialize>(&mut self, body: T) {
        match serde_json::to_value(body) {
            Ok(value) => {
                self.set_header("content-type", "application/json".to_string());
                self.payload = Some(value);
            }
            Err(e) => {
                error!(error = %e, "Response payload serialization failed");
                self.status = 500;
                self.set_header("content-type", "application/json".to_string());
                self.payload = Some(serde_json::json!({ "error": "Internal Server Error" }));
            }
        }
    }

    /// Plain-text payload.
    pub fn text(&mut self, body: &str) {
        self.set_header("content-type", "text/plain".to_string());
        self.payload = Some(Value::String(body.to_string()));
    }

    /// Redirect the client: 302 with a `Location` header.
    pub fn redirect(&mut self, location: &str) {
        self.status = 302;
        self.set_header("location", location.to_string());
    }

    /// Add or replace a header (case-insensitive name).
    pub fn set_header(&mut self, name: &str, value: String) -> &mut Self {
        self.headers.retain(|(k, _)| !k.eq_ignore_ascii_case(name));
        self.headers.push((Arc::from(name), value));
        self
    }

    #[inline]
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    #[must_use]
    pub fn status_code(&self) -> u16 {
        self.status
    }

    #[must_use]
    pub fn payload(&self) -> Option<&Value> {
        self.payload.as_ref()
    }

    pub(crate) fn into_parts(self) -> (u16, HeaderVec, Option<Value>) {
        (self.status, self.headers, self.payload)
    }
}
