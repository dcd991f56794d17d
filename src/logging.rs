//! Middleware for logging requests and responses.

use axum::{
    body::{Body, Bytes},
    extract::Request,
    http::{
        header::CONTENT_TYPE,
        request::Parts as RequestParts,
        response::Parts as ResponseParts,
    },
    middleware::Next,
    response::Response,
};
use serde_json::Value;

use crate::Error;

/// The number of bytes of a body that are logged at the `info` level.
pub const LOG_BODY_LENGTH_LIMIT: usize = 64;

/// Log the request and response for each request.
///
/// Both the request and response are logged at the `info` level.
/// If a body is longer than [LOG_BODY_LENGTH_LIMIT] bytes, it is truncated and
/// the full body is logged at the `debug` level. Passwords in JSON request
/// bodies are redacted.
///
/// # Errors
/// Returns [Error::BodyReadError] if the request or response body cannot be read.
pub async fn logging_middleware(request: Request, next: Next) -> Result<Response, Error> {
    let (parts, body) = request.into_parts();
    let body_bytes = read_body(body).await?;
    let body_text = String::from_utf8_lossy(&body_bytes);

    if is_json(&parts) {
        log_request(&parts, &redact_password(&body_text));
    } else {
        log_request(&parts, &body_text);
    }

    let request = Request::from_parts(parts, Body::from(body_bytes.clone()));
    let response = next.run(request).await;

    let (parts, body) = response.into_parts();
    let body_bytes = read_body(body).await?;
    log_response(&parts, &String::from_utf8_lossy(&body_bytes));

    Ok(Response::from_parts(parts, Body::from(body_bytes)))
}

fn is_json(parts: &RequestParts) -> bool {
    parts
        .headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("application/json"))
}

const REDACTED: &str = "********";

/// Replace the `password` field of a JSON object with asterisks.
///
/// Text that is not a JSON object, or has no password, is returned unchanged.
fn redact_password(body_text: &str) -> String {
    let Ok(Value::Object(mut object)) = serde_json::from_str::<Value>(body_text) else {
        return body_text.to_owned();
    };

    match object.get_mut("password") {
        Some(password) => {
            *password = Value::String(REDACTED.to_owned());
            Value::Object(object).to_string()
        }
        None => body_text.to_owned(),
    }
}

/// Read a whole body into memory.
///
/// The bytes are passed on untouched, only the log lines use a lossy UTF-8 copy.
async fn read_body(body: Body) -> Result<Bytes, Error> {
    axum::body::to_bytes(body, usize::MAX)
        .await
        .inspect_err(|error| tracing::error!("could not read body: {error}"))
        .map_err(|error| Error::BodyReadError(error.to_string()))
}

/// The longest prefix of `text` that fits in [LOG_BODY_LENGTH_LIMIT] bytes
/// without splitting a character.
fn truncate(text: &str) -> &str {
    let mut end = LOG_BODY_LENGTH_LIMIT.min(text.len());

    while !text.is_char_boundary(end) {
        end -= 1;
    }

    &text[..end]
}

fn log_request(parts: &RequestParts, body: &str) {
    if body.len() > LOG_BODY_LENGTH_LIMIT {
        tracing::info!(
            "Received request: {} {}\nbody: {}...",
            parts.method,
            parts.uri,
            truncate(body)
        );
        tracing::debug!("Full request body: {body:?}");
    } else {
        tracing::info!(
            "Received request: {} {}\nbody: {body:?}",
            parts.method,
            parts.uri
        );
    }
}

fn log_response(parts: &ResponseParts, body: &str) {
    if body.len() > LOG_BODY_LENGTH_LIMIT {
        tracing::info!(
            "Sending response: {}\nbody: {}...",
            parts.status,
            truncate(body)
        );
        tracing::debug!("Full response body: {body:?}");
    } else {
        tracing::info!("Sending response: {}\nbody: {body:?}", parts.status);
    }
}
