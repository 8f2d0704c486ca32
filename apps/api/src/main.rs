mod analysis;
mod config;
mod db;
mod errors;
mod llm_client;
mod mailer;
mod publish;
mod questions;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::{create_pool, init_schema};
use crate::llm_client::{CompletionClient, OpenAiBackend};
use crate::mailer::SmtpMailer;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (panics on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Interview API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL and the document tables
    let db = create_pool(&config.database_url).await?;
    init_schema(&db).await?;

    // Initialize SMTP mailer (fixed sender identity)
    let mailer = Arc::new(SmtpMailer::new(
        &config.smtp_relay,
        &config.mail_address,
        &config.mail_password,
    )?);
    info!("SMTP mailer initialized (relay: {})", config.smtp_relay);

    // Initialize completion client
    let backend = OpenAiBackend::new(config.llm_api_key.clone(), config.llm_api_url.clone());
    let llm = CompletionClient::new(Arc::new(backend));
    info!("Completion client initialized (model: {})", llm_client::MODEL);

    // Build app state
    let state = AppState {
        db,
        llm,
        mailer,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
