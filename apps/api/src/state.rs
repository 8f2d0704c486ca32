use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::llm_client::CompletionClient;
use crate::mailer::Mailer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub llm: CompletionClient,
    /// Pluggable mail transport. Default: SmtpMailer over the configured relay.
    pub mailer: Arc<dyn Mailer>,
    pub config: Config,
}
