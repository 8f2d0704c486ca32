//! Score aggregation — deterministic totals from text-encoded score entries.
//!
//! Interviewers record scores as free text ("3 out of 4", "2 - weak answer");
//! only the leading token counts. Each question carries a fixed maximum of 4.

use serde::Serialize;
use thiserror::Error;

/// Fixed per-question maximum score.
pub const PER_QUESTION_MAX: i64 = 4;

#[derive(Debug, Error, PartialEq)]
pub enum AggregateError {
    #[error("questions and scores are misaligned: {questions} questions vs {scores} scores")]
    MisalignedScores { questions: usize, scores: usize },

    #[error("score entry {index} has a non-numeric leading token: {token:?}")]
    BadScoreToken { index: usize, token: String },
}

/// Aggregated interview totals. Recomputed per request, never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct AggregateResult {
    pub total_score: i64,
    pub max_possible_score: i64,
    /// Two decimals with a trailing percent sign, e.g. "75.00%".
    pub percentage: String,
}

/// Sums the leading integer token of every score entry and derives the
/// percentage against `count × 4`.
///
/// No clamping: a malformed total above the nominal maximum yields a
/// percentage above 100%. Zero questions divide to NaN ("NaN%").
pub fn aggregate(
    questions_asked: &[String],
    scores_respectively: &[String],
) -> Result<AggregateResult, AggregateError> {
    if questions_asked.len() != scores_respectively.len() {
        return Err(AggregateError::MisalignedScores {
            questions: questions_asked.len(),
            scores: scores_respectively.len(),
        });
    }

    let mut total_score: i64 = 0;
    for (index, entry) in scores_respectively.iter().enumerate() {
        let token = entry.split_whitespace().next().unwrap_or("");
        let value = token
            .parse::<i64>()
            .map_err(|_| AggregateError::BadScoreToken {
                index,
                token: token.to_string(),
            })?;
        total_score += value;
    }

    let max_possible_score = questions_asked.len() as i64 * PER_QUESTION_MAX;
    let percentage = format!(
        "{:.2}%",
        total_score as f64 / max_possible_score as f64 * 100.0
    );

    Ok(AggregateResult {
        total_score,
        max_possible_score,
        percentage,
    })
}
