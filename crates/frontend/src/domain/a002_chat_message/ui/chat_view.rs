use super::transcript::Transcript;
use crate::layout::global_context::use_app_context;
use crate::usecases::u002_ask_question::QuestionForm;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u002_ask_question::AskQuestion;
use leptos::prelude::*;

#[component]
pub fn ChatView() -> impl IntoView {
    let ctx = use_app_context();
    let title = Memo::new(move |_| {
        ctx.session.with(|s| match s.documents.active_name() {
            Some(name) => format!("Chatting with: {}", name),
            None => AskQuestion::display_name().to_string(),
        })
    });

    view! {
        <div class="chat-interface full-width">
            <div class="chat-header">
                <h2>{move || title.get()}</h2>
            </div>
            <Transcript />
            <div class="chat-input-container">
                <QuestionForm />
            </div>
        </div>
    }
}
