//! Database connection
//!
//! The handle is constructed once by the composition root and injected into
//! [`crate::state::AppState`]; nothing here is global or lazily memoized.
//! Connection failure at startup propagates to the caller.

use mongodb::{Client, Database};
use sponsorlink_core::AppConfig;

/// Collection names.
pub const BRANDS: &str = "brands";
pub const APPLICATIONS: &str = "applications";

/// Open a client and select the configured database.
///
/// `mongodb` maintains its own connection pool internally; the returned
/// handle is cheap to clone and safe to share across requests.
pub async fn connect(config: &AppConfig) -> Result<Database, mongodb::error::Error> {
    let client = Client::with_uri_str(&config.database_url).await?;
    let db = client.database(&config.database_name);

    // Fail fast on an unreachable or misconfigured deployment.
    db.run_command(bson::doc! { "ping": 1 }).await?;
    tracing::info!(database = %config.database_name, "connected to MongoDB");

    Ok(db)
}
