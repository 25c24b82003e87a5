pub mod aggregate;

pub use aggregate::{AnswerSource, ChatMessage, MessageId, Sender};
