use tracing_subscriber::EnvFilter;

use r2iss_api::build_router;
use r2iss_api::config::{ApiConfig, Runtime};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging for CloudWatch
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    let config = ApiConfig::from_env()?;
    let runtime = config.runtime;
    let bind_addr = config.bind_addr;
    let app = build_router(config);

    match runtime {
        Runtime::Lambda => {
            tracing::info!("starting lambda runtime");
            lambda_http::run(app).await.map_err(|e| eyre::eyre!(e))
        }
        Runtime::Local => {
            let listener = tokio::net::TcpListener::bind(bind_addr).await?;
            tracing::info!(addr = %bind_addr, "listening");
            axum::serve(listener, app).await?;
            Ok(())
        }
    }
}
