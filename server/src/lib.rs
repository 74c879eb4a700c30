use std::sync::Arc;

use axum::{
    body::{Body, Bytes},
    extract::{rejection::QueryRejection, DefaultBodyLimit, Query, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use greeting_core::{GreetingHandler, HttpMethod, HttpRequest, HttpResponse, Logger, TracingLogger};
use tokio::net::TcpListener;

pub mod config;

/// Name the function is published under, as in `/api/{name}`.
pub const FUNCTION_NAME: &str = "HttpTrigger1";

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

pub type SharedHandler = Arc<GreetingHandler<Arc<dyn Logger>>>;

pub fn app() -> Router {
    app_with_logger(Arc::new(TracingLogger))
}

pub fn app_with_logger(logger: Arc<dyn Logger>) -> Router {
    let handler: SharedHandler = Arc::new(GreetingHandler::new(logger));
    Router::new()
        .route(&format!("/api/{FUNCTION_NAME}"), get(greet).post(greet))
        .route("/", get(greet).post(greet))
        .layer(DefaultBodyLimit::disable())
        .with_state(handler)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn greet(
    State(handler): State<SharedHandler>,
    method: Method,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
    body: Bytes,
) -> Response {
    let request = to_core_request(method, query, &body);
    to_axum_response(handler.handle(&request))
}

fn to_core_request(
    method: Method,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
    body: &[u8],
) -> HttpRequest {
    let method = if method == Method::POST {
        HttpMethod::Post
    } else {
        HttpMethod::Get
    };
    let query = match query {
        Ok(Query(pairs)) => pairs,
        Err(err) => {
            tracing::debug!(error = %err, "ignoring undecodable query string");
            Vec::new()
        }
    };
    HttpRequest {
        method,
        query,
        body: decode_body(body),
    }
}

/// Decode a body as UTF-8, dropping a leading byte-order mark.
fn decode_body(body: &[u8]) -> Option<String> {
    let body = body.strip_prefix(UTF8_BOM).unwrap_or(body);
    if body.is_empty() {
        None
    } else {
        Some(String::from_utf8_lossy(body).into_owned())
    }
}

fn to_axum_response(response: HttpResponse) -> Response {
    let mut builder = Response::builder().status(response.status);
    for (name, value) in response.headers {
        builder = builder.header(name, value);
    }
    match builder.body(Body::from(response.body)) {
        Ok(response) => response,
        Err(err) => {
            tracing::error!(error = %err, "handler produced an invalid response");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(pairs: &[(&str, &str)]) -> Result<Query<Vec<(String, String)>>, QueryRejection> {
        Ok(Query(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        ))
    }

    #[test]
    fn empty_body_becomes_none() {
        let req = to_core_request(Method::POST, query(&[]), b"");
        assert_eq!(req.method, HttpMethod::Post);
        assert!(req.body.is_none());
    }

    #[test]
    fn invalid_utf8_body_is_decoded_lossily() {
        let req = to_core_request(Method::POST, query(&[]), b"{\"name\":\"\xff\"}");
        assert_eq!(req.body.as_deref(), Some("{\"name\":\"\u{FFFD}\"}"));
    }

    #[test]
    fn get_keeps_query_pairs() {
        let req = to_core_request(Method::GET, query(&[("name", "Alice")]), b"");
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.query_param("name").as_deref(), Some("Alice"));
    }

    #[test]
    fn leading_bom_is_stripped() {
        let req = to_core_request(Method::POST, query(&[]), b"\xEF\xBB\xBF{\"name\":\"Bob\"}");
        assert_eq!(req.body.as_deref(), Some("{\"name\":\"Bob\"}"));
    }

    #[test]
    fn bom_only_body_becomes_none() {
        let req = to_core_request(Method::POST, query(&[]), b"\xEF\xBB\xBF");
        assert!(req.body.is_none());
    }

    #[test]
    fn inner_bom_is_kept() {
        let req = to_core_request(Method::POST, query(&[]), b"{}\xEF\xBB\xBF");
        assert_eq!(req.body.as_deref(), Some("{}\u{FEFF}"));
    }

    #[test]
    fn response_keeps_status_and_headers() {
        let resp = to_axum_response(HttpResponse {
            status: 200,
            headers: vec![("Content-Type".to_string(), "text/plain; charset=utf-8".to_string())],
            body: "hi".to_string(),
        });
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()["content-type"], "text/plain; charset=utf-8");
    }

    #[test]
    fn invalid_status_becomes_500() {
        let resp = to_axum_response(HttpResponse {
            status: 1000,
            headers: Vec::new(),
            body: String::new(),
        });
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
