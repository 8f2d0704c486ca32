use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One generated interview question with its reference answer and weightage.
///
/// Produced only by the completion pipeline (`CompletionClient` + extractor)
/// and immutable once stored. `weightage` is an opaque label; aggregation
/// never interprets it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionSpec {
    pub question: String,
    pub answer: String,
    pub weightage: String,
}

/// A persisted question set: one JSONB document under `questions/<q_id>`.
///
/// Created once per generation request with a fresh identifier, never
/// mutated afterwards. Field names are the stored document's keys
/// (`no_of_questions` is the count the caller asked for, which the model
/// is not guaranteed to honor).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionSet {
    pub q_id: Uuid,
    pub role: String,
    pub experience: String,
    pub no_of_questions: u32,
    pub skills: Vec<String>,
    pub questions: Vec<QuestionSpec>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_spec_round_trips_through_json() {
        let spec = QuestionSpec {
            question: "What is ownership in Rust?".to_string(),
            answer: "Each value has a single owner; moves transfer it.".to_string(),
            weightage: "4".to_string(),
        };

        let json = serde_json::to_string(&spec).unwrap();
        let recovered: QuestionSpec = serde_json::from_str(&json).unwrap();

        assert_eq!(recovered, spec);
    }

    #[test]
    fn test_question_set_document_keys() {
        let set = QuestionSet {
            q_id: Uuid::new_v4(),
            role: "Backend Engineer".to_string(),
            experience: "4".to_string(),
            no_of_questions: 5,
            skills: vec!["Rust".to_string(), "SQL".to_string()],
            questions: vec![],
        };

        let doc = serde_json::to_value(&set).unwrap();
        assert!(doc.get("q_id").is_some());
        assert!(doc.get("no_of_questions").is_some());
        assert_eq!(doc["skills"][0], "Rust");
    }

    #[test]
    fn test_question_spec_requires_all_fields() {
        let missing_weightage = r#"{"question":"Q","answer":"A"}"#;
        let result: Result<QuestionSpec, _> = serde_json::from_str(missing_weightage);
        assert!(result.is_err());
    }
}
