// Evaluation prompt construction for the feedback endpoint.

use crate::analysis::aggregate::AggregateResult;
use crate::analysis::handlers::AnalysisRequest;
use crate::llm_client::ChatMessage;

/// Output-format directive: a single object with a `comments` field.
pub const FEEDBACK_FORMAT: &str = r#"{
    "comments": "Your comments on candidate's performance based on the scores."
}"#;

/// Evaluation prompt template. All `{placeholder}` slots are filled from the
/// request and the aggregated totals.
const EVALUATION_PROMPT_TEMPLATE: &str = r#"As a Senior Technical Recruiter with 30+ years of experience in hiring people, your role is to carefully assess the candidate's technical skills and suitability for the position of {hiring_for}.
Please evaluate the candidate only based on their technical proficiency by the scores obtained comparing them with the company's job description and provide feedback accordingly.

Candidate Information:
- Name: {candidate_name}
- Email: {candidate_email}
- Experience: {candidates_experience} years
- Skills: {skills}

Questions Asked to the Candidate and their scores for the response by the interviewer:
{transcript}

Total Score:
{total_score} out of {max_possible_score}

Percentage:
{percentage}

Job Description by the organisation:
{job_description}

Above is the candidate's performance and the job description.
Please provide your evaluation only in the following JSON format:
{format}"#;

/// Builds the single system message embedding the full transcript, computed
/// totals, and the job description.
pub fn build_evaluation_message(
    request: &AnalysisRequest,
    totals: &AggregateResult,
) -> ChatMessage {
    let transcript = request
        .questions_asked_to_the_candidate
        .iter()
        .zip(&request.scores_respectively)
        .map(|(question, score)| format!("{question} - mark scored - {score}"))
        .collect::<Vec<_>>()
        .join(", ");

    let content = EVALUATION_PROMPT_TEMPLATE
        .replace("{hiring_for}", &request.hiring_for)
        .replace("{candidate_name}", &request.candidate_name)
        .replace("{candidate_email}", &request.candidate_email)
        .replace("{candidates_experience}", &request.candidates_experience)
        .replace("{skills}", &request.candidates_skills.join(", "))
        .replace("{transcript}", &transcript)
        .replace("{total_score}", &totals.total_score.to_string())
        .replace("{max_possible_score}", &totals.max_possible_score.to_string())
        .replace("{percentage}", &totals.percentage)
        .replace("{job_description}", &request.job_description)
        .replace("{format}", FEEDBACK_FORMAT);

    ChatMessage::system(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::aggregate::aggregate;

    fn sample_request() -> AnalysisRequest {
        AnalysisRequest {
            candidate_name: "Asha Rao".to_string(),
            candidate_email: "asha@example.com".to_string(),
            candidates_experience: "4".to_string(),
            candidates_skills: vec!["Rust".to_string(), "Kafka".to_string()],
            hiring_for: "Backend Engineer".to_string(),
            job_description: "Own the streaming platform.".to_string(),
            questions_asked_to_the_candidate: vec![
                "Explain backpressure".to_string(),
                "Design a rate limiter".to_string(),
            ],
            scores_respectively: vec!["4".to_string(), "3 out of 4".to_string()],
        }
    }

    #[test]
    fn test_message_is_single_system_role() {
        let request = sample_request();
        let totals = aggregate(
            &request.questions_asked_to_the_candidate,
            &request.scores_respectively,
        )
        .unwrap();

        let message = build_evaluation_message(&request, &totals);
        assert_eq!(message.role, "system");
    }

    #[test]
    fn test_message_embeds_transcript_and_totals() {
        let request = sample_request();
        let totals = aggregate(
            &request.questions_asked_to_the_candidate,
            &request.scores_respectively,
        )
        .unwrap();

        let message = build_evaluation_message(&request, &totals);
        assert!(message
            .content
            .contains("Explain backpressure - mark scored - 4"));
        assert!(message
            .content
            .contains("Design a rate limiter - mark scored - 3 out of 4"));
        assert!(message.content.contains("7 out of 8"));
        assert!(message.content.contains("87.50%"));
        assert!(message.content.contains("Rust, Kafka"));
        assert!(message.content.contains(FEEDBACK_FORMAT));
    }

    #[test]
    fn test_no_unfilled_placeholders_remain() {
        let request = sample_request();
        let totals = aggregate(
            &request.questions_asked_to_the_candidate,
            &request.scores_respectively,
        )
        .unwrap();

        let message = build_evaluation_message(&request, &totals);
        for placeholder in [
            "{hiring_for}",
            "{candidate_name}",
            "{candidate_email}",
            "{candidates_experience}",
            "{skills}",
            "{transcript}",
            "{total_score}",
            "{max_possible_score}",
            "{percentage}",
            "{job_description}",
            "{format}",
        ] {
            assert!(
                !message.content.contains(placeholder),
                "unfilled placeholder {placeholder}"
            );
        }
    }
}
