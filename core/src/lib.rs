//! Transport-independent core of the greeting HTTP function.
//!
//! # Overview
//! Maps an `HttpRequest` to an `HttpResponse` without touching the network
//! (host-does-IO pattern). The host reads the request off the wire, hands
//! the core a plain value and writes back the plain value it returns, so the
//! core stays deterministic and testable.
//!
//! # Design
//! - `GreetingHandler` is stateless; it holds only an injected `Logger`.
//! - Name resolution is split out in `name` so each step (query lookup, body
//!   parse, JSON stringification, message formatting) can be used alone.
//! - Body parse failures are an explicit `Result` that the handler discards.

pub mod error;
pub mod handler;
pub mod http;
pub mod logger;
pub mod name;

pub use error::BodyError;
pub use handler::{GreetingHandler, CONTENT_TYPE, PROCESSED_MESSAGE};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use logger::{Logger, TracingLogger};
pub use name::{greeting_message, json_value_to_name, parse_body, resolve_name, FALLBACK_MESSAGE};
