//! QueryDispatcher: one question at a time, reply committed after a fixed pause.
//!
//! Flow of [`QueryDispatcher::ask`]:
//! 1. reject blank questions, a missing active document and a pending answer (no I/O)
//! 2. append the user message, mark the answer pending, remember the context token
//! 3. call the backend
//! 4. wait `answer_delay_ms` whatever the outcome
//! 5. commit the bot reply if the transcript is still the one the question was asked in

use crate::domain::a002_chat_message::ContextToken;
use crate::shared::backend::PdfQaBackend;
use crate::shared::config::ChatConfig;
use crate::shared::session::SessionCell;
use crate::shared::timer::Timer;
use contracts::domain::a002_chat_message::{AnswerSource, MessageId};
use contracts::usecases::u002_ask_question::AskQuestionRequest;

/// Prefix of the bot reply when the backend call failed
pub const QUERY_FAILED_PREFIX: &str = "Failed to get an answer: ";

/// Rejections raised before any request is sent
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AskError {
    #[error("question is empty")]
    EmptyQuestion,
    #[error("no document is active")]
    NoActiveDocument,
    #[error("an answer is still pending")]
    AnswerPending,
    #[error("session is no longer available")]
    SessionClosed,
}

/// How a dispatched question ended
#[derive(Debug, Clone, PartialEq)]
pub enum AskOutcome {
    Answered { message_id: MessageId },
    /// The failure text was committed as a regular bot message
    QueryFailed { message_id: MessageId, detail: String },
    /// The active transcript changed while the question was outstanding
    Discarded,
}

/// Question accepted into the transcript and waiting for its reply
#[derive(Debug, Clone, PartialEq)]
pub struct PendingQuestion {
    pub user_message: MessageId,
    pub context: ContextToken,
    pub request: AskQuestionRequest,
}

pub struct QueryDispatcher<'a, S, B, T> {
    session: &'a S,
    backend: &'a B,
    timer: &'a T,
    num_chunks: u32,
    answer_delay_ms: u32,
}

impl<'a, S, B, T> QueryDispatcher<'a, S, B, T>
where
    S: SessionCell,
    B: PdfQaBackend,
    T: Timer,
{
    pub fn new(session: &'a S, backend: &'a B, timer: &'a T, config: &ChatConfig) -> Self {
        Self {
            session,
            backend,
            timer,
            num_chunks: config.num_chunks,
            answer_delay_ms: config.answer_delay_ms,
        }
    }

    pub async fn ask(&self, question: &str) -> Result<AskOutcome, AskError> {
        let pending = self.begin(question)?;
        log::debug!(
            "Asking (num_chunks={}): {}",
            pending.request.num_chunks,
            pending.request.query
        );

        let (reply, sources, failure) = match self.backend.ask_question(&pending.request).await {
            Ok(response) => (response.reply_text(), response.sources, None),
            Err(err) => {
                log::warn!("Question failed: {}", err);
                let detail = err.detail_text();
                (format!("{}{}", QUERY_FAILED_PREFIX, detail), Vec::new(), Some(detail))
            }
        };

        // Not cancellable: the pause runs even if the user moved on meanwhile.
        self.timer.sleep(self.answer_delay_ms).await;

        let committed = self.commit(&pending, reply, sources);
        Ok(match (committed, failure) {
            (None, _) => AskOutcome::Discarded,
            (Some(message_id), None) => AskOutcome::Answered { message_id },
            (Some(message_id), Some(detail)) => AskOutcome::QueryFailed { message_id, detail },
        })
    }

    /// Validate and record the question. Nothing is sent from here.
    pub fn begin(&self, question: &str) -> Result<PendingQuestion, AskError> {
        let query = question.trim();
        if query.is_empty() {
            return Err(AskError::EmptyQuestion);
        }
        let request = AskQuestionRequest::new(query).with_num_chunks(self.num_chunks);

        self.session
            .write(|s| {
                if s.documents.active_document().is_none() {
                    return Err(AskError::NoActiveDocument);
                }
                if s.conversation.answer_pending() {
                    return Err(AskError::AnswerPending);
                }
                let user_message = s
                    .conversation
                    .append_user(question)
                    .map_err(|_| AskError::EmptyQuestion)?;
                let context = s.conversation.begin_answer();
                Ok(PendingQuestion {
                    user_message,
                    context,
                    request,
                })
            })
            .ok_or(AskError::SessionClosed)?
    }

    /// Append the reply if `pending` still belongs to the current transcript.
    fn commit(
        &self,
        pending: &PendingQuestion,
        reply: String,
        sources: Vec<AnswerSource>,
    ) -> Option<MessageId> {
        self.session
            .write(|s| {
                if s.conversation.context_token() != pending.context {
                    log::info!(
                        "Dropping late answer to message {}: conversation was reset",
                        pending.user_message
                    );
                    return None;
                }
                Some(s.conversation.complete_answer_with_sources(reply, sources))
            })
            .flatten()
    }
}
