//! Session identification middleware.
//!
//! Sessions ride on the `x-session-id` header. A request without the header
//! gets a fresh session; a request with a malformed header is rejected before
//! it reaches a handler. Every response echoes the resolved id so clients can
//! keep their session. Cookie transport and expiry are the hosting
//! framework's concern, not ours.

use axum::{
    body::Body,
    http::{HeaderValue, Request, StatusCode},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

/// Header carrying the session id as a UUID.
pub const SESSION_HEADER: &str = "x-session-id";

/// The session a request operates on, inserted into request extensions by
/// [`session_middleware`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionId(pub Uuid);

/// Resolve the request's session id and echo it on the response.
pub async fn session_middleware(
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, (StatusCode, String)> {
    let id = match request.headers().get(SESSION_HEADER) {
        Some(value) => value
            .to_str()
            .ok()
            .and_then(|raw| Uuid::parse_str(raw.trim()).ok())
            .ok_or_else(|| {
                tracing::warn!("Malformed {} header", SESSION_HEADER);
                (StatusCode::BAD_REQUEST, "Invalid session id.".to_string())
            })?,
        None => Uuid::new_v4(),
    };

    request.extensions_mut().insert(SessionId(id));

    let mut response = next.run(request).await;
    response.headers_mut().insert(
        SESSION_HEADER,
        HeaderValue::from_str(&id.to_string()).expect("UUID is a valid header value"),
    );
    Ok(response)
}
