use crate::domain::a002_chat_message::AnswerSource;
use serde::{Deserialize, Serialize};

/// Reply shown when the backend returned neither an answer nor a message
pub const NO_ANSWER_TEXT: &str = "No answer provided.";

/// Ответ backend на вопрос
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AskQuestionResponse {
    #[serde(default)]
    pub answer: Option<String>,

    /// Returned instead of `answer` when retrieval found nothing
    #[serde(default)]
    pub message: Option<String>,

    #[serde(default)]
    pub sources: Vec<AnswerSource>,
}

impl AskQuestionResponse {
    /// Text of the bot reply: `answer`, then `message`, then [`NO_ANSWER_TEXT`].
    /// Empty strings count as missing.
    pub fn reply_text(&self) -> String {
        [self.answer.as_deref(), self.message.as_deref()]
            .into_iter()
            .flatten()
            .find(|s| !s.is_empty())
            .unwrap_or(NO_ANSWER_TEXT)
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> AskQuestionResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_answer_preferred_over_message() {
        let resp = parse(r#"{"answer": "Page 1 covers X.", "message": "ignored"}"#);
        assert_eq!(resp.reply_text(), "Page 1 covers X.");
    }

    #[test]
    fn test_message_fallback() {
        let resp = parse(r#"{"message": "No relevant chunks found."}"#);
        assert_eq!(resp.reply_text(), "No relevant chunks found.");

        let resp = parse(r#"{"answer": "", "message": "No relevant chunks found."}"#);
        assert_eq!(resp.reply_text(), "No relevant chunks found.");
    }

    #[test]
    fn test_no_answer_fallback() {
        assert_eq!(parse("{}").reply_text(), NO_ANSWER_TEXT);
    }

    #[test]
    fn test_sources_are_parsed() {
        let resp = parse(
            r#"{"answer": "x", "sources": [{"file_name": "a.pdf", "chunk_id": 3, "similarity": 0.82}]}"#,
        );
        assert_eq!(resp.sources.len(), 1);
        assert_eq!(resp.sources[0].chunk_id, 3);
    }
}
