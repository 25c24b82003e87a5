pub mod store;
pub mod ui;

pub use store::{ContextToken, ConversationError, ConversationStore};
