//! # Command Response
//!
//! The value a handler returns to the host. Carries named result values for
//! the host's output layer to render, or an error message when the command
//! could not be serviced.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

/// The response from a command that's been handled.
///
/// Either a set of named result values or an error message. Construction is
/// deterministic: the same inputs produce an equal response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Response {
    values: BTreeMap<String, Value>,
    error_message: Option<String>,
}

impl Response {
    /// A response holding a single named result value. Further values can be
    /// chained on with [`Response::with`].
    pub fn result(name: &str, value: impl Into<Value>) -> Response {
        Response::empty().with(name, value)
    }

    /// A response with no values and no error.
    pub fn empty() -> Response {
        Response {
            values: BTreeMap::new(),
            error_message: None,
        }
    }

    /// A response carrying an error message instead of result values.
    pub fn error(message: &str) -> Response {
        Response {
            values: BTreeMap::new(),
            error_message: Some(message.to_string()),
        }
    }

    /// Adds a named result value.
    pub fn with(mut self, name: &str, value: impl Into<Value>) -> Response {
        self.values.insert(name.to_string(), value.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.error_message.is_some()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when the response carries neither values nor an error.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty() && !self.is_error()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn values(&self) -> &BTreeMap<String, Value> {
        &self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_result_response() {
        let resp = Response::result("message", "pong").with("count", json!(3));
        assert!(!resp.is_error());
        assert_eq!(resp.len(), 2);
        assert_eq!(resp.get("message"), Some(&json!("pong")));
        assert_eq!(resp.get("count"), Some(&json!(3)));
    }

    #[test]
    fn test_error_response() {
        let resp = Response::error("no such user");
        assert!(resp.is_error());
        assert_eq!(resp.error_message(), Some("no such user"));
        assert!(!resp.is_empty());
        assert_eq!(resp.len(), 0);
    }

    #[test]
    fn test_empty_response() {
        let resp = Response::empty();
        assert!(resp.is_empty());
        assert!(!resp.is_error());
    }

    #[test]
    fn test_construction_is_deterministic() {
        let a = Response::result("message", "Hello, Alice!").with("greeted", json!("Alice"));
        let b = Response::result("message", "Hello, Alice!").with("greeted", json!("Alice"));
        assert_eq!(a, b);
    }
}
