pub mod request;
pub mod response;

pub use request::{AskQuestionRequest, DEFAULT_NUM_CHUNKS};
pub use response::{AskQuestionResponse, NO_ANSWER_TEXT};

use crate::usecases::common::UseCaseMetadata;

pub struct AskQuestion;

impl UseCaseMetadata for AskQuestion {
    fn usecase_index() -> &'static str {
        "u002"
    }

    fn usecase_name() -> &'static str {
        "ask_question"
    }

    fn display_name() -> &'static str {
        "Chat with PDF"
    }

    fn endpoint() -> &'static str {
        "/ask-question"
    }

    fn description() -> &'static str {
        "Ask a question about the uploaded documents"
    }
}
