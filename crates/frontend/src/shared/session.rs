//! Session state owned by the client and the seam async flows mutate it through.
//!
//! `ChatSession` is the single owner of every state slice (documents,
//! transcript, view mode, upload flag, notice). Components read it and issue
//! commands; nothing keeps a private copy.

use crate::domain::a001_pdf_document::{DocumentRegistry, RegistryError};
use crate::domain::a002_chat_message::ConversationStore;
use crate::layout::view_mode::{ViewMode, ViewModeController};
use contracts::domain::a001_pdf_document::{DocumentName, PdfDocument};
use leptos::prelude::*;

/// Transcript placeholder while no document is registered
pub const EMPTY_STATE_TEXT: &str = "No PDF is uploaded. Please upload a PDF to start chatting.";

pub fn uploaded_greeting(name: &DocumentName) -> String {
    format!("Uploaded {} successfully. Ask me anything!", name)
}

pub fn loaded_greeting(name: &DocumentName) -> String {
    format!("Loaded {}. Ask me anything!", name)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UploadState {
    pub in_flight: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChatSession {
    pub documents: DocumentRegistry,
    pub conversation: ConversationStore,
    pub view: ViewModeController,
    pub upload: UploadState,
    /// Blocking notice waiting for the user to dismiss it
    pub notice: Option<String>,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a freshly uploaded document and open its conversation.
    pub fn activate_uploaded(&mut self, document: PdfDocument) {
        let greeting = uploaded_greeting(self.documents.register(document));
        self.conversation.reset(greeting);
        self.view.show_chat();
    }

    /// Switch to an already uploaded document.
    pub fn select_document(&mut self, name: &str) -> Result<(), RegistryError> {
        let greeting = loaded_greeting(self.documents.select(name)?);
        self.conversation.reset(greeting);
        self.view.show_chat();
        Ok(())
    }

    pub fn show_upload(&mut self) {
        self.view.show_upload();
    }

    pub fn show_chat(&mut self) {
        self.view.show_chat();
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view.mode()
    }

    pub fn raise_notice(&mut self, text: impl Into<String>) {
        self.notice = Some(text.into());
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Question input is accepted only with an active document and no pending answer
    pub fn can_ask(&self) -> bool {
        self.documents.active_document().is_some() && !self.conversation.answer_pending()
    }
}

/// Shared handle to a [`ChatSession`].
///
/// `write` returns `None` once the underlying storage is gone
/// (e.g. the owning reactive scope was disposed). Checks and mutation happen
/// in one `write` call so nothing can change in between.
pub trait SessionCell {
    fn write<R>(&self, f: impl FnOnce(&mut ChatSession) -> R) -> Option<R>;
}

impl SessionCell for RwSignal<ChatSession> {
    fn write<R>(&self, f: impl FnOnce(&mut ChatSession) -> R) -> Option<R> {
        self.try_update(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_chat_message::Sender;

    #[test]
    fn test_initial_session() {
        let session = ChatSession::new();
        assert!(session.documents.is_empty());
        assert!(session.conversation.messages().is_empty());
        assert_eq!(session.view_mode(), ViewMode::Chat);
        assert!(!session.can_ask());
    }

    #[test]
    fn test_upload_activation_resets_to_single_greeting() {
        let mut session = ChatSession::new();
        session.show_upload();
        session.activate_uploaded(PdfDocument::new("a.pdf"));

        let messages = session.conversation.messages();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].sender, Sender::Bot);
        assert_eq!(messages[0].text, "Uploaded a.pdf successfully. Ask me anything!");
        assert_eq!(session.view_mode(), ViewMode::Chat);
        assert!(session.can_ask());
    }

    #[test]
    fn test_selection_resets_to_loaded_greeting() {
        let mut session = ChatSession::new();
        session.activate_uploaded(PdfDocument::new("a.pdf"));
        session.activate_uploaded(PdfDocument::new("b.pdf"));
        session.conversation.append_user("question about b").unwrap();
        session.conversation.begin_answer();
        session.show_upload();

        session.select_document("a.pdf").unwrap();
        let messages = session.conversation.messages();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].text.contains("a.pdf"));
        assert!(!session.conversation.answer_pending());
        assert_eq!(session.view_mode(), ViewMode::Chat);
    }

    #[test]
    fn test_invalid_selection_leaves_state_untouched() {
        let mut session = ChatSession::new();
        session.activate_uploaded(PdfDocument::new("a.pdf"));
        let before = session.clone();

        let err = session.select_document("ghost.pdf").unwrap_err();
        assert_eq!(err, RegistryError::InvalidSelection("ghost.pdf".to_string()));
        assert_eq!(session, before);
    }

    #[test]
    fn test_view_switch_does_not_touch_data() {
        let mut session = ChatSession::new();
        session.activate_uploaded(PdfDocument::new("a.pdf"));
        let documents = session.documents.clone();
        let conversation = session.conversation.clone();

        session.show_upload();
        session.show_chat();
        session.show_upload();
        assert_eq!(session.documents, documents);
        assert_eq!(session.conversation, conversation);
    }

    #[test]
    fn test_notice_lifecycle() {
        let mut session = ChatSession::new();
        session.raise_notice("Please upload a valid PDF file.");
        assert_eq!(session.notice.as_deref(), Some("Please upload a valid PDF file."));
        session.dismiss_notice();
        assert!(session.notice.is_none());
    }
}
