//! Axum route handlers for question-set generation and listing.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::llm_client::extract::extract_json;
use crate::llm_client::CompletionOptions;
use crate::questions::models::{QuestionSet, QuestionSpec};
use crate::questions::prompts::build_generation_messages;
use crate::questions::store;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct GenerateQuestionsRequest {
    /// Free-form context for the question generator (skills, focus areas).
    pub content: String,
    pub role: String,
    /// Requested number of questions.
    pub questions: u32,
    pub experience: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct GenerateQuestionsResponse {
    /// The generated question array re-serialized as a JSON string, as the
    /// consuming client expects it.
    pub response: String,
    pub q_id: Uuid,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /chat
///
/// Generates a question set via the LLM, persists it under a fresh
/// identifier, and returns the serialized array plus the identifier.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateQuestionsRequest>,
) -> Result<Json<GenerateQuestionsResponse>, AppError> {
    let messages = build_generation_messages(&request.content, &request.role);
    let raw = state
        .llm
        .complete(&messages, &CompletionOptions::default_policy())
        .await?;

    let specs: Vec<QuestionSpec> = extract_json(&raw)?;
    let response = serde_json::to_string(&specs)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to serialize questions: {e}")))?;

    let set = QuestionSet {
        q_id: Uuid::new_v4(),
        role: request.role,
        experience: request.experience,
        no_of_questions: request.questions,
        skills: request.skills,
        questions: specs,
    };
    store::insert_question_set(&state.db, &set).await?;

    info!(
        "Generated question set {} ({} questions) for role {}",
        set.q_id,
        set.questions.len(),
        set.role
    );

    Ok(Json(GenerateQuestionsResponse {
        response,
        q_id: set.q_id,
    }))
}

/// GET /resources
///
/// Returns every stored question set document.
pub async fn handle_list_resources(
    State(state): State<AppState>,
) -> Result<Json<Vec<QuestionSet>>, AppError> {
    let sets = store::list_question_sets(&state.db).await?;
    Ok(Json(sets))
}
