use std::sync::Arc;

use aws_sdk_s3::Client as S3Client;

use crate::config::ApiConfig;
use crate::middleware::auth::JwtVerifier;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub s3: S3Client,
    pub bucket: String,
    pub verifier: Arc<JwtVerifier>,
}

impl AppState {
    pub fn new(s3: S3Client, config: &ApiConfig) -> Self {
        Self {
            s3,
            bucket: config.bucket.clone(),
            verifier: Arc::new(JwtVerifier::new(&config.jwt_secret, &config.jwt_audience)),
        }
    }
}
