use tokio::net::TcpListener;

use crate::config::Config;
use crate::database;
use crate::error::{AppError, Result};
use crate::{create_app, AppState};

/// Configuration validated, database not yet connected.
pub struct Startup {
    config: Config,
}

/// Database connection established; the listener may now bind.
///
/// A `Ready` can only be obtained through [`Startup::connect`], so the
/// bind-after-connect ordering is enforced by construction rather than by
/// callback discipline.
pub struct Ready {
    config: Config,
    db: mongodb::Client,
}

impl Startup {
    pub fn from_env() -> Result<Self> {
        let config = Config::from_env()?;
        Ok(Self { config })
    }

    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    // The only suspension point before the listener exists.
    pub async fn connect(self) -> Result<Ready> {
        let db = database::connect(&self.config.mongo_uri, self.config.connect_timeout).await?;
        Ok(Ready {
            config: self.config,
            db,
        })
    }
}

impl Ready {
    pub async fn serve(self) -> Result<()> {
        let port = self.config.port;
        let addr = format!("0.0.0.0:{}", port);
        let state = AppState {
            db: self.db,
            config: self.config,
        };
        let app = create_app(state);

        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| AppError::ServerError(format!("Failed to bind to {}: {}", addr, e)))?;

        tracing::info!("🚀 Server running on port {}", port);

        axum::serve(listener, app)
            .await
            .map_err(|e| AppError::ServerError(format!("Server error: {}", e)))
    }
}

/// Cold start to serving: validate config, connect, then bind. No retries;
/// any failure is returned to `main`, which exits non-zero and leaves
/// restarts to the process supervisor.
pub async fn run() -> Result<()> {
    Startup::from_env()?.connect().await?.serve().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn connect_failure_never_yields_a_ready_state() {
        let config = Config {
            mongo_uri: "mongodb://127.0.0.1:9".to_string(),
            port: 0,
            allowed_origins: vec!["http://localhost:3000".to_string()],
            connect_timeout: Duration::from_millis(300),
        };

        let result = Startup::with_config(config).connect().await;
        assert!(result.is_err());
    }
}
