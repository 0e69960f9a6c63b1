use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;

/// Claims read from the bearer token.
#[derive(Debug, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub exp: u64,
}

/// Verifies HS256 bearer tokens issued by the hosted auth provider.
pub struct JwtVerifier {
    key: DecodingKey,
    validation: Validation,
}

impl JwtVerifier {
    pub fn new(secret: &str, audience: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_audience(&[audience]);
        validation.validate_exp = true;

        Self {
            key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    pub fn verify(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        Ok(decode::<Claims>(token, &self.key, &self.validation)?.claims)
    }
}

/// Authenticated caller, inserted into request extensions by [`require_auth`]
/// and handed to handlers explicitly.
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub id: Uuid,
}

/// JWT validation middleware.
///
/// Extracts the `Authorization: Bearer <token>` header and verifies the JWT.
/// On success, inserts `AuthUser` into request extensions for handlers to use,
/// and into the response extensions for the audit log.
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = req
        .headers()
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ApiError::Unauthorized("missing bearer token".to_string()))?;

    let claims = state.verifier.verify(token).map_err(|e| {
        tracing::debug!(error = %e, "rejected bearer token");
        ApiError::Unauthorized("invalid bearer token".to_string())
    })?;

    let user = AuthUser { id: claims.sub };
    req.extensions_mut().insert(user.clone());

    let mut response = next.run(req).await;
    response.extensions_mut().insert(user);
    Ok(response)
}
