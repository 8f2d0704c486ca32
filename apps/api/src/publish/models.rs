use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Tri-state interview outcome used to pick the report tone.
/// Any wire value other than "selected"/"rejected" collapses to
/// `Undetermined` and must behave exactly like "status not requested".
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum SelectionStatus {
    Selected,
    Rejected,
    #[default]
    Undetermined,
}

impl From<String> for SelectionStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "selected" => SelectionStatus::Selected,
            "rejected" => SelectionStatus::Rejected,
            _ => SelectionStatus::Undetermined,
        }
    }
}

/// A question/answer pair as echoed back by the publishing client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportQuestion {
    pub question: String,
    pub answer: String,
}

/// The publish request as the client sends it. camelCase wire keys are
/// mapped onto snake_case fields; `questions` and `scores` must be
/// index-aligned when answers are published.
#[derive(Debug, Clone, Deserialize)]
pub struct PublishRequest {
    pub user_id: Uuid,
    pub q_id: Uuid,
    pub name: String,
    pub email: String,
    pub total_marks: String,
    pub marks: String,
    pub percentage: String,
    #[serde(default)]
    pub questions: Vec<ReportQuestion>,
    #[serde(default)]
    pub scores: Vec<String>,
    #[serde(rename = "publishWithAnswers")]
    pub publish_with_answers: bool,
    #[serde(rename = "includeSelectionStatus")]
    pub include_selection_status: bool,
    #[serde(rename = "selectionStatus", default)]
    pub selection_status: SelectionStatus,
    #[serde(rename = "companyName")]
    pub company_name: String,
    pub role: String,
    #[serde(rename = "interviewerEmail", default)]
    pub interviewer_email: String,
    #[serde(rename = "receiveResultsMail", default)]
    pub receive_results_mail: bool,
}

/// The persisted published-result document, one per `u_id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublishedResult {
    pub u_id: Uuid,
    pub q_id: Uuid,
    pub username: String,
    pub email: String,
    pub total_marks: String,
    pub marks: String,
    pub percentage: String,
    pub published_with_answers: bool,
    pub include_selection_status: bool,
    pub selection_status: SelectionStatus,
    pub company_name: String,
    pub published_at: DateTime<Utc>,
}

impl PublishedResult {
    pub fn from_request(request: &PublishRequest) -> Self {
        Self {
            u_id: request.user_id,
            q_id: request.q_id,
            username: request.name.clone(),
            email: request.email.clone(),
            total_marks: request.total_marks.clone(),
            marks: request.marks.clone(),
            percentage: request.percentage.clone(),
            published_with_answers: request.publish_with_answers,
            include_selection_status: request.include_selection_status,
            selection_status: request.selection_status,
            company_name: request.company_name.clone(),
            published_at: Utc::now(),
        }
    }
}
