//! Chat UI
//!
//! - chat_view.rs: header + transcript + question form
//! - transcript.rs: message list with auto-scroll
//! - typing_indicator.rs: dots shown while an answer is pending

mod chat_view;
mod transcript;
mod typing_indicator;

pub use chat_view::ChatView;
pub use transcript::{MessageBubble, Transcript};
pub use typing_indicator::TypingIndicator;
