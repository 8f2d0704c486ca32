pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis;
use crate::publish;
use crate::questions;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/chat", post(questions::handlers::handle_generate))
        .route("/aianalysis", post(analysis::handlers::handle_analysis))
        .route("/publish", post(publish::handlers::handle_publish))
        .route("/resources", get(questions::handlers::handle_list_resources))
        .with_state(state)
}
