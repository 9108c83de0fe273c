use crate::error::{AppError, Result};
use mongodb::{bson::doc, options::ClientOptions, Client};
use std::time::Duration;

/// Connects to the document store and verifies reachability with a ping.
///
/// The whole attempt is bounded by `timeout`; an unreachable or slow
/// database surfaces as an error instead of hanging startup forever.
pub async fn connect(mongo_uri: &str, timeout: Duration) -> Result<Client> {
    tracing::info!("🔗 Connecting to MongoDB");

    let mut options = ClientOptions::parse(mongo_uri).await?;
    options.app_name = Some("conceptlab-backend".to_string());
    options.connect_timeout = Some(timeout);
    options.server_selection_timeout = Some(timeout);

    let client = Client::with_options(options)?;

    // The driver connects lazily; ping so connectivity failures are caught
    // here rather than on the first request.
    tokio::time::timeout(
        timeout,
        client.database("admin").run_command(doc! { "ping": 1 }, None),
    )
    .await
    .map_err(|_| AppError::DatabaseTimeout)??;

    tracing::info!("✅ MongoDB connected");

    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn malformed_uri_is_rejected() {
        let result = connect("not-a-mongo-uri", Duration::from_millis(500)).await;
        assert!(matches!(result, Err(AppError::DatabaseError(_))));
    }

    #[tokio::test]
    async fn unreachable_database_fails_within_the_bound() {
        // Port 9 (discard) refuses connections on loopback.
        let started = std::time::Instant::now();
        let result = connect("mongodb://127.0.0.1:9", Duration::from_millis(300)).await;

        assert!(result.is_err());
        assert!(started.elapsed() < Duration::from_secs(5));
    }
}
