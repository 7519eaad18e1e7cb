//! Tracing subscriber setup for binaries and tests that embed the pricing core.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{AppConfig, LogFormat};
use crate::core::{AppError, Result};

/// Builds the env filter: `RUST_LOG` wins, otherwise `cotizador=<log_level>`
pub fn env_filter(app: &AppConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("cotizador={}", app.log_level)))
}

/// Install the global tracing subscriber
///
/// Fails with a configuration error if a subscriber is already installed.
pub fn init_tracing(app: &AppConfig) -> Result<()> {
    let registry = tracing_subscriber::registry().with(env_filter(app));

    let installed = match app.log_format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init(),
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).try_init(),
    };

    installed.map_err(|e| AppError::Configuration(format!("Tracing init failed: {}", e)))?;

    tracing::info!(env = %app.env, format = ?app.log_format, "Tracing initialized");
    Ok(())
}
