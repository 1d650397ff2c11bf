//! sponsorlink server binary
//!
//! Composition root: loads configuration, connects to MongoDB, constructs
//! the shared clients, and runs the HTTP server.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use sponsorlink_core::{AppConfig, EmailVerifier, GeminiClient, SessionKey};
use sponsorlink_server::{db, run_server, AppState, ServerConfig};

#[derive(Parser, Debug)]
#[command(name = "sponsorlink-server", version, about = "Brand-influencer marketplace API server")]
struct Cli {
    /// Address to bind to
    #[arg(long, default_value = "127.0.0.1:3030")]
    bind: SocketAddr,

    /// Allow any CORS origin (development only)
    #[arg(long)]
    cors_permissive: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("sponsorlink_server=info,sponsorlink_core=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = AppConfig::from_env().context("configuration")?;

    let database = db::connect(&config).await.context("MongoDB connection")?;
    let genai = GeminiClient::new(config.gemini_api_key.clone()).context("generative client")?;
    let verifier = EmailVerifier::new();
    let sessions = SessionKey::new(config.session_secret.clone());

    let state = AppState::new(database, genai, verifier, sessions);
    let server = ServerConfig {
        bind_addr: cli.bind,
        cors_permissive: cli.cors_permissive,
    };

    run_server(state, server).await?;
    Ok(())
}
