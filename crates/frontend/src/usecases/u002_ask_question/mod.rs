pub mod api;
pub mod dispatcher;
pub mod view;

pub use dispatcher::{AskError, AskOutcome, QueryDispatcher};
pub use view::QuestionForm;
