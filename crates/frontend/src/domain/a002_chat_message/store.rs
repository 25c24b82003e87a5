//! Transcript of the active document.

use contracts::domain::a002_chat_message::{AnswerSource, ChatMessage, MessageId};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConversationError {
    #[error("message text is empty")]
    EmptyMessage,
}

/// Identifies the transcript an answer was requested for.
///
/// Every [`ConversationStore::reset`] starts a new context, so an answer
/// carrying an older token belongs to a transcript that no longer exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContextToken(u64);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConversationStore {
    messages: Vec<ChatMessage>,
    answer_pending: bool,
    // Not reset with the transcript: ids stay unique for the whole session.
    next_id: u64,
    epoch: u64,
}

impl ConversationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the transcript with a single bot greeting and start a new context.
    pub fn reset(&mut self, greeting: impl Into<String>) {
        let id = self.allocate_id();
        self.messages = vec![ChatMessage::bot(id, greeting)];
        self.answer_pending = false;
        self.epoch += 1;
    }

    pub fn append_user(&mut self, text: impl Into<String>) -> Result<MessageId, ConversationError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(ConversationError::EmptyMessage);
        }
        let id = self.allocate_id();
        self.messages.push(ChatMessage::user(id, text));
        Ok(id)
    }

    /// Mark an answer as outstanding and return the context it belongs to.
    pub fn begin_answer(&mut self) -> ContextToken {
        debug_assert!(!self.answer_pending, "an answer is already pending");
        self.answer_pending = true;
        self.context_token()
    }

    pub fn complete_answer(&mut self, text: impl Into<String>) -> MessageId {
        self.complete_answer_with_sources(text, Vec::new())
    }

    pub fn complete_answer_with_sources(
        &mut self,
        text: impl Into<String>,
        sources: Vec<AnswerSource>,
    ) -> MessageId {
        let id = self.allocate_id();
        self.messages
            .push(ChatMessage::bot(id, text).with_sources(sources));
        self.answer_pending = false;
        id
    }

    pub fn context_token(&self) -> ContextToken {
        ContextToken(self.epoch)
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn last_message(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    pub fn answer_pending(&self) -> bool {
        self.answer_pending
    }

    fn allocate_id(&mut self) -> MessageId {
        self.next_id += 1;
        MessageId::new(self.next_id)
    }
}
