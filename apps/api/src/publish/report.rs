//! Report composition — a pure decision over six HTML report variants.
//!
//! Two content modes (with-answers table / summary narrative) × three tone
//! outcomes (advanced / declined / undetermined) select the template and the
//! subject line. No I/O; identical input composes identical output.
//!
//! All interpolated values are HTML-escaped before substitution. Structural
//! markup (the bold company name in the tone clause) stays on the template
//! side, so escaping never changes the rendered layout.

use thiserror::Error;

use crate::publish::models::{PublishRequest, SelectionStatus};

#[derive(Debug, Error, PartialEq)]
pub enum ReportError {
    #[error("questions and scores are misaligned: {questions} questions vs {scores} scores")]
    MisalignedScores { questions: usize, scores: usize },
}

/// A composed report, ready for dispatch.
#[derive(Debug, Clone)]
pub struct Report {
    pub subject: String,
    pub html_body: String,
}

/// Whether the report carries the full question/answer/score table.
#[derive(Debug, Clone, Copy, PartialEq)]
enum ContentMode {
    WithAnswers,
    SummaryOnly,
}

/// Report tone, derived from `(includeSelectionStatus, selectionStatus)`.
#[derive(Debug, Clone, Copy, PartialEq)]
enum ToneOutcome {
    Advanced,
    Declined,
    Undetermined,
}

/// Subject line, page header, and the supplemental clause for one tone.
struct Tone {
    subject: String,
    header: &'static str,
    clause: String,
}

fn content_mode(publish_with_answers: bool) -> ContentMode {
    if publish_with_answers {
        ContentMode::WithAnswers
    } else {
        ContentMode::SummaryOnly
    }
}

fn tone_outcome(include_selection_status: bool, status: SelectionStatus) -> ToneOutcome {
    match (include_selection_status, status) {
        (true, SelectionStatus::Selected) => ToneOutcome::Advanced,
        (true, SelectionStatus::Rejected) => ToneOutcome::Declined,
        _ => ToneOutcome::Undetermined,
    }
}

// The subject is plain text, so the role is interpolated unescaped there;
// the clause is HTML and escapes the company name.
fn tone_for(outcome: ToneOutcome, role: &str, company_name: &str) -> Tone {
    let company = escape_html(company_name);
    match outcome {
        ToneOutcome::Advanced => Tone {
            subject: format!("Interview Results for {role}"),
            header: "Congratulations!!",
            clause: format!(
                " We are pleased to inform you that you have been selected to proceed \
                to the next round of the interview process by <strong>{company}</strong>. \
                Further details will be communicated to you shortly."
            ),
        },
        ToneOutcome::Declined => Tone {
            subject: format!("Interview Results for {role}"),
            header: "Interview Update",
            clause: format!(
                " We regret to inform you that you have not been selected for further \
                consideration in the interview process by <strong>{company}</strong>."
            ),
        },
        ToneOutcome::Undetermined => Tone {
            subject: format!("Interview Update for {role}"),
            header: "Interview Results",
            clause: String::new(),
        },
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Templates
// ────────────────────────────────────────────────────────────────────────────

const TABLE_REPORT_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<style>
 body {
    font-family: Arial, sans-serif;
    background-color: #f5f5f5;
    padding: 20px;
  }
  .container {
    max-width: 600px;
    margin: 0 auto;
    background-color: #fff;
    border-radius: 10px;
    padding: 20px;
    box-shadow: 0 0 10px rgba(0, 0, 0, 0.1);
  }
  h1 {
    color: #2a2392;
    text-align: center;
  }
  h3 {
    color: #2a2392;
  }
  p {
    line-height: 1.6;
  }
  table {
    width: 100%;
    border-collapse: collapse;
    margin-top: 20px;
  }
  th, td {
    padding: 8px;
    border-bottom: 1px solid #ddd;
    text-align: left;
  }
  th {
    background-color: #f2f2f2;
  }
</style>
</head>
<body>
<div class="container">
  <h1>{header}</h1>
  <p>Dear <strong>{name}</strong>,</p>
  <p>Congratulations on completing the interview!.{clause} Below are the details of your performance:</p>
  <table>
    <tr>
      <th>Question</th>
      <th>Answer</th>
      <th>Score</th>
    </tr>{rows}
  </table>
  <p>Your Score: {marks}</p>
  <p>Total Score: {total_marks}</p>
  <p>Percentage: {percentage}%</p>
  <p>Once again, well done!</p>
  <div class="message">
  <p>Thank you for your interest in {company}.</p>
  <p>If you would like feedback on your interview performance or have any questions, please feel free to reach out to us. We are happy to provide any assistance or guidance.</p>
</div>
<strong><h3>Best regards,</h3>
<h3>{company}.</h3></strong>
</div>
</body>
</html>"#;

const TABLE_ROW_TEMPLATE: &str = r#"
    <tr>
      <td>{question}</td>
      <td>{answer}</td>
      <td>{score}</td>
    </tr>"#;

const SUMMARY_REPORT_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<style>
 body {
    font-family: Arial, sans-serif;
    background-color: #f5f5f5;
    padding: 20px;
  }
  .container {
    max-width: 600px;
    margin: 0 auto;
    background-color: #fff;
    border-radius: 10px;
    padding: 20px;
    box-shadow: 0 0 10px rgba(0, 0, 0, 0.1);
  }
  h1 {
    color: #2a2392;
    text-align: center;
  }
  h3 {
    color: #2a2392;
  }
  p {
    line-height: 1.6;
  }
</style>
</head>
<body>
<div class="container">
  <h1>{header}</h1>
  <p>Dear <strong>{name}</strong>,</p>
  <p><strong>Congratulations!</strong> You have successfully completed the interview process with {company}.{clause}</p>
  <p>Your Score: {marks}</p>
  <p>Total Score: {total_marks}</p>
  <p>Percentage: {percentage}%</p>
  <p>Once again, well done!</p>
  <div class="message">
  <p>Thank you for your interest in {company}.</p>
  <p>If you would like feedback on your interview performance or have any questions, please feel free to reach out to us. We are happy to provide any assistance or guidance.</p>
</div>
<strong><h3>Best regards,</h3>
<h3>{company}.</h3></strong>
</div>
</body>
</html>"#;

const INTERVIEWER_SUMMARY_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<style>
  body {
    font-family: Arial, sans-serif;
    background-color: #f5f5f5;
    padding: 20px;
  }
  .container {
    max-width: 600px;
    margin: 0 auto;
    background-color: #fff;
    border-radius: 10px;
    padding: 20px;
    box-shadow: 0 0 10px rgba(0, 0, 0, 0.1);
  }
  h1 {
    color: #2a2392;
    text-align: center;
  }
  p {
    line-height: 1.6;
  }
  ul {
    list-style-type: none;
    padding: 0;
  }
  li {
    margin-bottom: 10px;
  }
  .result-details {
    background-color: #f9f9f9;
    padding: 10px;
    border-radius: 5px;
  }
  .result-details p {
    margin: 0;
  }
  .total-score {
    font-weight: bold;
    color: #2a2392;
  }
  .percentage {
    color: #2a2392;
    font-size: 20px;
    text-align: center;
    margin-top: 20px;
  }
</style>
</head>
<body>
<div class="container">
  <h1>Interview Results</h1>
  <p>Dear {interviewer},</p>
  <p>Thank you for conducting the interview. Below are the results:</p>
  <div class="result-details">
    <ul>
      <li>Name: {name}</li>
      <li>Email: {email}</li>
      <li class="total-score">Total Score: {marks}/{total_marks}</li>
    </ul>
  </div>
  <p class="percentage">Total Percentage: {percentage}</p>
</div>
</body>
</html>"#;

// ────────────────────────────────────────────────────────────────────────────
// Composition
// ────────────────────────────────────────────────────────────────────────────

/// Composes the candidate report: exactly one of the six variants.
pub fn compose(request: &PublishRequest) -> Result<Report, ReportError> {
    let outcome = tone_outcome(request.include_selection_status, request.selection_status);
    let tone = tone_for(outcome, &request.role, &request.company_name);

    let template = match content_mode(request.publish_with_answers) {
        ContentMode::WithAnswers => {
            if request.questions.len() != request.scores.len() {
                return Err(ReportError::MisalignedScores {
                    questions: request.questions.len(),
                    scores: request.scores.len(),
                });
            }
            let rows: String = request
                .questions
                .iter()
                .zip(&request.scores)
                .map(|(entry, score)| {
                    TABLE_ROW_TEMPLATE
                        .replace("{question}", &escape_html(&entry.question))
                        .replace("{answer}", &escape_html(&entry.answer))
                        .replace("{score}", &escape_html(score))
                })
                .collect();
            TABLE_REPORT_TEMPLATE.replace("{rows}", &rows)
        }
        ContentMode::SummaryOnly => SUMMARY_REPORT_TEMPLATE.to_string(),
    };

    let html_body = template
        .replace("{header}", tone.header)
        .replace("{clause}", &tone.clause)
        .replace("{name}", &escape_html(&request.name))
        .replace("{marks}", &escape_html(&request.marks))
        .replace("{total_marks}", &escape_html(&request.total_marks))
        .replace("{percentage}", &escape_html(&request.percentage))
        .replace("{company}", &escape_html(&request.company_name));

    Ok(Report {
        subject: tone.subject,
        html_body,
    })
}

/// Composes the interviewer-facing summary sent alongside the candidate
/// report when `receiveResultsMail` is set. Fixed subject, no branching.
pub fn compose_interviewer_summary(request: &PublishRequest) -> Report {
    let html_body = INTERVIEWER_SUMMARY_TEMPLATE
        .replace("{interviewer}", &escape_html(&request.interviewer_email))
        .replace("{name}", &escape_html(&request.name))
        .replace("{email}", &escape_html(&request.email))
        .replace("{marks}", &escape_html(&request.marks))
        .replace("{total_marks}", &escape_html(&request.total_marks))
        .replace("{percentage}", &escape_html(&request.percentage));

    Report {
        subject: "Interview Results".to_string(),
        html_body,
    }
}

/// Minimal HTML entity escaping for interpolated values.
fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::publish::models::ReportQuestion;

    fn request(
        publish_with_answers: bool,
        include_selection_status: bool,
        selection_status: SelectionStatus,
    ) -> PublishRequest {
        PublishRequest {
            user_id: Uuid::new_v4(),
            q_id: Uuid::new_v4(),
            name: "Asha Rao".to_string(),
            email: "asha@example.com".to_string(),
            total_marks: "12".to_string(),
            marks: "9".to_string(),
            percentage: "75.00".to_string(),
            questions: vec![
                ReportQuestion {
                    question: "Explain backpressure".to_string(),
                    answer: "Producers slow down".to_string(),
                },
                ReportQuestion {
                    question: "Design a rate limiter".to_string(),
                    answer: "Token bucket".to_string(),
                },
            ],
            scores: vec!["4".to_string(), "3 out of 4".to_string()],
            publish_with_answers,
            include_selection_status,
            selection_status,
            company_name: "Acme Corp".to_string(),
            role: "Backend Engineer".to_string(),
            interviewer_email: "lead@acme.example".to_string(),
            receive_results_mail: false,
        }
    }

    #[test]
    fn test_selected_tone_is_congratulatory() {
        let report = compose(&request(true, true, SelectionStatus::Selected)).unwrap();
        assert_eq!(report.subject, "Interview Results for Backend Engineer");
        assert!(report.html_body.contains("<h1>Congratulations!!</h1>"));
        assert!(report
            .html_body
            .contains("selected to proceed to the next round"));
    }

    #[test]
    fn test_rejected_tone_is_regretful() {
        let report = compose(&request(true, true, SelectionStatus::Rejected)).unwrap();
        assert_eq!(report.subject, "Interview Results for Backend Engineer");
        assert!(report.html_body.contains("<h1>Interview Update</h1>"));
        assert!(report.html_body.contains("We regret to inform you"));
    }

    #[test]
    fn test_status_not_requested_uses_generic_tone() {
        let report = compose(&request(true, false, SelectionStatus::Selected)).unwrap();
        assert_eq!(report.subject, "Interview Update for Backend Engineer");
        assert!(report.html_body.contains("<h1>Interview Results</h1>"));
        assert!(!report.html_body.contains("selected to proceed"));
        assert!(!report.html_body.contains("We regret"));
    }

    #[test]
    fn test_junk_status_does_not_affect_output() {
        let generic = compose(&request(false, false, SelectionStatus::Undetermined)).unwrap();
        let with_junk = compose(&request(false, false, SelectionStatus::Rejected)).unwrap();
        assert_eq!(generic.subject, with_junk.subject);
        assert_eq!(generic.html_body, with_junk.html_body);
    }

    #[test]
    fn test_exactly_six_distinct_variants() {
        let mut bodies = Vec::new();
        for with_answers in [true, false] {
            for (include, status) in [
                (true, SelectionStatus::Selected),
                (true, SelectionStatus::Rejected),
                (false, SelectionStatus::Undetermined),
            ] {
                let report = compose(&request(with_answers, include, status)).unwrap();
                bodies.push(report.html_body);
            }
        }
        assert_eq!(bodies.len(), 6);
        for (i, a) in bodies.iter().enumerate() {
            for b in bodies.iter().skip(i + 1) {
                assert_ne!(a, b, "two variants rendered identically");
            }
        }
    }

    #[test]
    fn test_with_answers_renders_one_row_per_question_in_order() {
        let report = compose(&request(true, false, SelectionStatus::Undetermined)).unwrap();
        let body = &report.html_body;

        assert_eq!(body.matches("<tr>").count(), 3); // header + 2 rows
        let first = body.find("Explain backpressure").unwrap();
        let second = body.find("Design a rate limiter").unwrap();
        assert!(first < second);
        assert!(body.contains("<td>3 out of 4</td>"));
    }

    #[test]
    fn test_summary_mode_has_no_table() {
        let report = compose(&request(false, false, SelectionStatus::Undetermined)).unwrap();
        assert!(!report.html_body.contains("<table>"));
        assert!(report.html_body.contains("Your Score: 9"));
        assert!(report.html_body.contains("Percentage: 75.00%"));
    }

    #[test]
    fn test_misaligned_scores_are_rejected_not_truncated() {
        let mut misaligned = request(true, false, SelectionStatus::Undetermined);
        misaligned.scores.pop();

        let result = compose(&misaligned);
        assert_eq!(
            result.unwrap_err(),
            ReportError::MisalignedScores {
                questions: 2,
                scores: 1
            }
        );
    }

    #[test]
    fn test_summary_mode_ignores_misaligned_scores() {
        // The table is never rendered, so the alignment invariant does not apply.
        let mut misaligned = request(false, false, SelectionStatus::Undetermined);
        misaligned.scores.pop();
        assert!(compose(&misaligned).is_ok());
    }

    #[test]
    fn test_interpolated_values_are_escaped() {
        let mut hostile = request(true, true, SelectionStatus::Selected);
        hostile.name = "<script>alert(1)</script>".to_string();
        hostile.company_name = "Acme & Sons <Ltd>".to_string();
        hostile.questions[0].question = "What does `a < b` mean?".to_string();

        let report = compose(&hostile).unwrap();
        assert!(!report.html_body.contains("<script>"));
        assert!(report.html_body.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(report.html_body.contains("Acme &amp; Sons &lt;Ltd&gt;"));
        assert!(report.html_body.contains("`a &lt; b`"));
    }

    #[test]
    fn test_no_unfilled_placeholders_remain() {
        for with_answers in [true, false] {
            let report = compose(&request(with_answers, true, SelectionStatus::Selected)).unwrap();
            for placeholder in [
                "{header}", "{clause}", "{name}", "{marks}", "{total_marks}", "{percentage}",
                "{company}", "{rows}", "{question}", "{answer}", "{score}",
            ] {
                assert!(
                    !report.html_body.contains(placeholder),
                    "unfilled placeholder {placeholder}"
                );
            }
        }
    }

    #[test]
    fn test_interviewer_summary_shape() {
        let report = compose_interviewer_summary(&request(true, true, SelectionStatus::Selected));
        assert_eq!(report.subject, "Interview Results");
        assert!(report.html_body.contains("Dear lead@acme.example"));
        assert!(report.html_body.contains("Total Score: 9/12"));
        assert!(report.html_body.contains("Total Percentage: 75.00"));
    }

    #[test]
    fn test_composition_is_deterministic() {
        let input = request(true, true, SelectionStatus::Selected);
        let first = compose(&input).unwrap();
        let second = compose(&input).unwrap();
        assert_eq!(first.subject, second.subject);
        assert_eq!(first.html_body, second.html_body);
    }
}
