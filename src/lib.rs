pub mod models;
pub mod services;
pub mod traits;

use std::sync::Arc;
use tracing::{error, info};

use crate::services::invoke;
use crate::services::server;
use crate::services::settings::{RunMode, Settings};
use crate::services::telegram::RealTelegramApi;
use crate::traits::telegram_api::TelegramApi;

/// High-level entrypoint: init logging, load settings from the environment,
/// run the front end selected by `ENVIRONMENT`.
pub async fn run_from_env(port: u16) -> std::io::Result<()> {
    // Initialize structured logging (default to info if RUST_LOG not set)
    let log_spec = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(log_spec))
        .with_target(false)
        .compact()
        .try_init();

    // Missing credentials are a fatal startup error: log and never serve.
    let settings = match Settings::from_env() {
        Ok(s) => s,
        Err(e) => {
            error!(error = %e, "startup configuration error");
            return Err(std::io::Error::new(
                std::io::ErrorKind::Other,
                format!("configuration error: {}", e),
            ));
        }
    };

    run_with_settings(settings, port).await
}

/// Runner: builds the Telegram client once and dispatches on the configured mode.
pub async fn run_with_settings(settings: Settings, port: u16) -> std::io::Result<()> {
    let api: Arc<dyn TelegramApi> = Arc::new(
        RealTelegramApi::from_settings(&settings)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?,
    );

    match settings.mode {
        RunMode::LocalServer => {
            info!("local server mode starting");
            server::serve(api, port).await
        }
        RunMode::Direct => {
            info!("direct invocation mode starting");
            invoke::run_once(api.as_ref())
                .await
                .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))
        }
    }
}
