use std::env;
use std::net::SocketAddr;

const DEFAULT_BUCKET: &str = "rsems";
const DEFAULT_AUDIENCE: &str = "authenticated";
const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:3000";

/// Service configuration, read from the environment at startup.
#[derive(Clone)]
pub struct ApiConfig {
    pub bucket: String,
    /// HS256 secret used to verify bearer tokens.
    pub jwt_secret: String,
    pub jwt_audience: String,
    /// Address for the standalone listener. Ignored on Lambda.
    pub listen_addr: SocketAddr,
    pub on_lambda: bool,
}

impl ApiConfig {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let jwt_secret = lookup("RSEMS_JWT_SECRET")
            .filter(|s| !s.is_empty())
            .ok_or_else(|| eyre::eyre!("RSEMS_JWT_SECRET must be set"))?;

        let listen_addr = lookup("RSEMS_LISTEN_ADDR")
            .unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());
        let listen_addr: SocketAddr = listen_addr
            .parse()
            .map_err(|e| eyre::eyre!("invalid RSEMS_LISTEN_ADDR '{listen_addr}': {e}"))?;

        Ok(Self {
            bucket: lookup("RSEMS_BUCKET").unwrap_or_else(|| DEFAULT_BUCKET.to_string()),
            jwt_secret,
            jwt_audience: lookup("RSEMS_JWT_AUDIENCE")
                .unwrap_or_else(|| DEFAULT_AUDIENCE.to_string()),
            listen_addr,
            on_lambda: lookup("AWS_LAMBDA_RUNTIME_API").is_some(),
        })
    }
}
