//! Axum route handler for publishing interview results.

use axum::{extract::State, Json};
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::mailer::MailEnvelope;
use crate::publish::dispatch::dispatch_reports;
use crate::publish::models::{PublishRequest, PublishedResult};
use crate::publish::report;
use crate::publish::store;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct PublishResponse {
    pub message: String,
    pub success: bool,
}

/// POST /publish
///
/// Persists the published-result record, composes the candidate report (and
/// the interviewer summary when requested), and dispatches both. Mail
/// delivery failure is not an error response: the endpoint always answers
/// 200 with a success flag once the record is stored.
pub async fn handle_publish(
    State(state): State<AppState>,
    Json(request): Json<PublishRequest>,
) -> Result<Json<PublishResponse>, AppError> {
    let record = PublishedResult::from_request(&request);
    store::insert_published_result(&state.db, &record).await?;

    let composed = report::compose(&request)?;
    let candidate = MailEnvelope {
        to: vec![request.email.clone()],
        subject: composed.subject,
        html_body: composed.html_body,
    };
    let interviewer = request.receive_results_mail.then(|| {
        let summary = report::compose_interviewer_summary(&request);
        MailEnvelope {
            to: vec![request.interviewer_email.clone()],
            subject: summary.subject,
            html_body: summary.html_body,
        }
    });

    info!(
        "Publishing results for {} (u_id {}, with_answers: {}, interviewer copy: {})",
        request.name,
        request.user_id,
        request.publish_with_answers,
        interviewer.is_some()
    );

    let outcome = dispatch_reports(state.mailer.as_ref(), candidate, interviewer).await;

    let response = if outcome.candidate_delivered {
        PublishResponse {
            message: "Results published successfully!!".to_string(),
            success: true,
        }
    } else {
        PublishResponse {
            message: "Error publishing results, kindly check the entered E-mail address."
                .to_string(),
            success: false,
        }
    };

    Ok(Json(response))
}
