//! Error types for request body parsing.
//!
//! # Design
//! The handler never surfaces these to the caller. They exist so that body
//! parsing returns an explicit `Result` which the handler matches on and
//! then discards, keeping whatever name the query string produced.

use thiserror::Error;

/// Reasons a request body could not be used as a JSON object.
#[derive(Debug, Error)]
pub enum BodyError {
    /// The body is not well-formed JSON.
    #[error("malformed JSON body: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The body is valid JSON but its top-level value is not an object.
    #[error("JSON body is {0}, expected an object")]
    NotAnObject(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_an_object_names_the_kind() {
        let err = BodyError::NotAnObject("an array");
        assert_eq!(err.to_string(), "JSON body is an array, expected an object");
    }

    #[test]
    fn malformed_wraps_serde_error() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = BodyError::from(source);
        assert!(err.to_string().starts_with("malformed JSON body:"));
    }
}
