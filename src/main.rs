//! LearnHub server: renders the Leptos front-end shell and serves its bundle.

mod config;
mod routes;
mod telemetry;

use std::process::ExitCode;

use config::{LogFormat, ServerConfig};

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] config::ConfigError),
    #[error("{0}")]
    Router(String),
    #[error("listener: {0}")]
    Io(#[from] std::io::Error),
}

async fn serve(config: ServerConfig) -> Result<(), StartupError> {
    let app = routes::app(&config).map_err(StartupError::Router)?;
    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(%addr, "learnhub listening");
    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let dotenv = dotenvy::dotenv();
    let config = ServerConfig::from_env();
    telemetry::init(config.as_ref().map_or(LogFormat::Pretty, |c| c.log_format));

    match dotenv {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded .env"),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!(error = %e, ".env ignored"),
    }

    let result = match config {
        Ok(config) => serve(config).await,
        Err(e) => Err(e.into()),
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "learnhub stopped");
            ExitCode::FAILURE
        }
    }
}
