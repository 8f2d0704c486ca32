// LLM prompt construction for question-set generation.
// The evaluation prompt lives with the analysis module.

use crate::llm_client::ChatMessage;

/// Output-format directive appended to every generation prompt: an array of
/// question/answer/weightage objects and nothing else.
pub const QUESTION_SET_FORMAT: &str = r#"[{
    "question": "generated question",
    "answer": "answer for the question",
    "weightage":"weightage for the question"
},
........]"#;

/// System prompt template. Replace `{role}` before sending.
const INTERVIEWER_SYSTEM_TEMPLATE: &str = "Act as an {role} in Tech Industry with \
    30+ years of experience, going to conduct an Crucial Technical Interview \
    for your organisation, ok ?";

/// Builds the two-message generation prompt: the interviewer persona plus the
/// caller's free-form context with the strict format directive.
pub fn build_generation_messages(content: &str, role: &str) -> Vec<ChatMessage> {
    let system = INTERVIEWER_SYSTEM_TEMPLATE.replace("{role}", role);
    let user = format!(
        "{content}Just give me only the array of objects with question, answer and \
        weightage as keys with their respective values only in this format {QUESTION_SET_FORMAT}"
    );
    vec![ChatMessage::system(system), ChatMessage::user(user)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_message_embeds_role_persona() {
        let messages = build_generation_messages("Ask about async Rust. ", "Staff Engineer");
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, "system");
        assert!(messages[0].content.contains("Staff Engineer"));
        assert!(messages[0].content.contains("30+ years"));
    }

    #[test]
    fn test_user_message_carries_context_and_format_directive() {
        let messages = build_generation_messages("Ask about async Rust. ", "Staff Engineer");
        assert_eq!(messages[1].role, "user");
        assert!(messages[1].content.starts_with("Ask about async Rust. "));
        assert!(messages[1].content.contains(QUESTION_SET_FORMAT));
        assert!(messages[1].content.contains("question, answer and"));
    }
}
