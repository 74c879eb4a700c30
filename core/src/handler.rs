//! The greeting function: one `HttpRequest` in, one `HttpResponse` out.
//!
//! # Design
//! `GreetingHandler` holds only the injected logger and carries no mutable
//! state between calls, so the same instance can serve concurrent requests
//! and identical requests always produce identical responses. Reading the
//! body off the wire is the host's job; by the time `handle` runs the body
//! is already a `String`.

use crate::http::{HttpRequest, HttpResponse};
use crate::logger::Logger;
use crate::name::{greeting_message, resolve_name};

/// Content type of every greeting response.
pub const CONTENT_TYPE: &str = "text/plain; charset=utf-8";

/// Line logged once per handled request.
pub const PROCESSED_MESSAGE: &str = "HTTP trigger function processed a request.";

/// Stateless HTTP handler producing a plain-text greeting.
#[derive(Debug, Clone)]
pub struct GreetingHandler<L> {
    logger: L,
}

impl<L: Logger> GreetingHandler<L> {
    pub fn new(logger: L) -> Self {
        Self { logger }
    }

    /// Handle one request. Never fails: an unusable body falls back to the
    /// query-string name, and a missing name falls back to a generic message.
    pub fn handle(&self, request: &HttpRequest) -> HttpResponse {
        self.logger.info(PROCESSED_MESSAGE);

        let name = resolve_name(request);
        HttpResponse {
            status: 200,
            headers: vec![("Content-Type".to_string(), CONTENT_TYPE.to_string())],
            body: greeting_message(name.as_deref()),
        }
    }
}
