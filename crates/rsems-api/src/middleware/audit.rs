use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

use super::auth::AuthUser;

/// Audit logging middleware.
///
/// Emits one `api_request` event per request with the caller (when the
/// route was authenticated) and the handling time. Bodies are never logged;
/// they carry patient-reported symptoms.
pub async fn audit_log(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(req).await;

    // Set on the response by `require_auth`; absent on public routes and
    // on requests rejected before a token was accepted.
    let caller = response
        .extensions()
        .get::<AuthUser>()
        .map(|user| user.id.to_string());

    tracing::info!(
        method = %method,
        path = %path,
        status = response.status().as_u16(),
        caller = caller.as_deref().unwrap_or("anonymous"),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "api_request"
    );

    response
}
