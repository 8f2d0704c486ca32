//! Axum route handler for AI feedback on a scored interview.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::analysis::aggregate::aggregate;
use crate::analysis::prompts::build_evaluation_message;
use crate::errors::AppError;
use crate::llm_client::extract::extract_json;
use crate::llm_client::CompletionOptions;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnalysisRequest {
    pub candidate_name: String,
    pub candidate_email: String,
    pub candidates_experience: String,
    pub candidates_skills: Vec<String>,
    pub hiring_for: String,
    pub job_description: String,
    /// Index-aligned with `scores_respectively` — same length, same order.
    pub questions_asked_to_the_candidate: Vec<String>,
    pub scores_respectively: Vec<String>,
}

/// Qualitative feedback as produced by the evaluation completion.
#[derive(Debug, Serialize, Deserialize)]
pub struct Feedback {
    pub comments: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handler
// ────────────────────────────────────────────────────────────────────────────

/// POST /aianalysis
///
/// Aggregates the submitted scores, asks the LLM for qualitative feedback on
/// the transcript, and returns the parsed comments.
pub async fn handle_analysis(
    State(state): State<AppState>,
    Json(request): Json<AnalysisRequest>,
) -> Result<Json<Feedback>, AppError> {
    let totals = aggregate(
        &request.questions_asked_to_the_candidate,
        &request.scores_respectively,
    )?;

    info!(
        "Aggregated {} answers for {}: {}/{} ({})",
        request.questions_asked_to_the_candidate.len(),
        request.candidate_name,
        totals.total_score,
        totals.max_possible_score,
        totals.percentage
    );

    let message = build_evaluation_message(&request, &totals);
    let raw = state
        .llm
        .complete(&[message], &CompletionOptions::default_policy())
        .await?;

    let feedback: Feedback = extract_json(&raw)?;
    Ok(Json(feedback))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_request_deserializes_wire_shape() {
        let json = serde_json::json!({
            "candidate_name": "Asha Rao",
            "candidate_email": "asha@example.com",
            "candidates_experience": "4",
            "candidates_skills": ["Rust"],
            "hiring_for": "Backend Engineer",
            "job_description": "Own the platform.",
            "questions_asked_to_the_candidate": ["Q1"],
            "scores_respectively": ["3 out of 4"]
        });
        let request: AnalysisRequest = serde_json::from_value(json).unwrap();
        assert_eq!(request.questions_asked_to_the_candidate.len(), 1);
        assert_eq!(request.scores_respectively[0], "3 out of 4");
    }

    #[test]
    fn test_feedback_serializes_comments_only() {
        let feedback = Feedback {
            comments: "Solid fundamentals, weak on system design.".to_string(),
        };
        let value = serde_json::to_value(&feedback).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"comments": "Solid fundamentals, weak on system design."})
        );
    }
}
