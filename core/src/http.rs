//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! These types describe HTTP requests and responses as plain data. The
//! greeting handler consumes an `HttpRequest` and produces an `HttpResponse`
//! without ever touching the network; the host binding (the axum server, or
//! a test) is responsible for reading the socket and writing the reply.
//!
//! All fields use owned types (`String`, `Vec`) so values can be built from
//! any transport without lifetime concerns.

use serde::Deserialize;

/// HTTP method for a request. Only the methods the function is routed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
}

/// An HTTP request described as plain data.
///
/// `query` holds already percent-decoded pairs in the order they appeared.
/// `body` is the full request body read as text; `None` when the request
/// carried no body.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HttpRequest {
    pub method: HttpMethod,
    #[serde(default)]
    pub query: Vec<(String, String)>,
    #[serde(default)]
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn get() -> Self {
        Self {
            method: HttpMethod::Get,
            query: Vec::new(),
            body: None,
        }
    }

    pub fn post(body: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Post,
            query: Vec::new(),
            body: Some(body.into()),
        }
    }

    /// Append a query parameter.
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Look up a query parameter, ignoring ASCII case in the key.
    /// Repeated keys are joined with `,`.
    pub fn query_param(&self, key: &str) -> Option<String> {
        let values: Vec<&str> = self
            .query
            .iter()
            .filter(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
            .collect();
        if values.is_empty() {
            None
        } else {
            Some(values.join(","))
        }
    }
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}
