//! Name resolution and greeting text.
//!
//! # Design
//! The query string supplies the initial name. A non-empty body that parses
//! as a JSON object containing `name` overrides it, even when the body value
//! is `null`. Any body that fails to parse leaves the query name untouched.

use serde_json::{Map, Value};

use crate::error::BodyError;
use crate::http::HttpRequest;

/// Key looked up in both the query string and the JSON body.
pub const NAME_KEY: &str = "name";

/// Greeting returned when no name could be resolved.
pub const FALLBACK_MESSAGE: &str = "This HTTP triggered function executed successfully. \
Pass a name in the query string or in the request body for a personalized response.";

/// Parse a request body as a JSON object.
pub fn parse_body(body: &str) -> Result<Map<String, Value>, BodyError> {
    match serde_json::from_str::<Value>(body)? {
        Value::Object(map) => Ok(map),
        Value::Null => Err(BodyError::NotAnObject("null")),
        Value::Bool(_) => Err(BodyError::NotAnObject("a boolean")),
        Value::Number(_) => Err(BodyError::NotAnObject("a number")),
        Value::String(_) => Err(BodyError::NotAnObject("a string")),
        Value::Array(_) => Err(BodyError::NotAnObject("an array")),
    }
}

/// String form of a JSON value used as a name.
///
/// Strings are taken verbatim, other scalars and containers by their compact
/// JSON text. `null` has no name.
pub fn json_value_to_name(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Resolve the caller's name from the query string and body.
pub fn resolve_name(request: &HttpRequest) -> Option<String> {
    let name = request.query_param(NAME_KEY);

    let body = match request.body.as_deref() {
        Some(body) if !body.is_empty() => body,
        _ => return name,
    };

    match parse_body(body) {
        Ok(object) => match object.get(NAME_KEY) {
            Some(value) => json_value_to_name(value),
            None => name,
        },
        Err(err) => {
            tracing::debug!(error = %err, "ignoring unusable request body");
            name
        }
    }
}

/// Build the response text for a resolved name.
pub fn greeting_message(name: Option<&str>) -> String {
    match name {
        Some(name) if !name.is_empty() => {
            format!("Hello, {name}. This HTTP triggered function executed successfully.")
        }
        _ => FALLBACK_MESSAGE.to_string(),
    }
}
