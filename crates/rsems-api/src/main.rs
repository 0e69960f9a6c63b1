use rsems_api::config::ApiConfig;
use rsems_api::state::AppState;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging for CloudWatch
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = ApiConfig::from_env()?;
    let s3 = rsems_storage::client::build_client().await;
    let state = AppState::new(s3, &config);
    let app = rsems_api::app(state);

    if config.on_lambda {
        tracing::info!(bucket = %config.bucket, "starting lambda runtime");
        return lambda_http::run(app).await.map_err(|e| eyre::eyre!(e));
    }

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, bucket = %config.bucket, "listening");
    axum::serve(listener, app).await?;
    Ok(())
}
