use crate::layout::global_context::use_app_context;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Question input. Disabled while no document is active or an answer is pending.
#[component]
pub fn QuestionForm() -> impl IntoView {
    let ctx = use_app_context();
    let query = RwSignal::new(String::new());
    let can_ask = Memo::new(move |_| ctx.session.with(|s| s.can_ask()));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let text = query.get_untracked();
        if text.trim().is_empty() || !can_ask.get_untracked() {
            return;
        }
        ctx.ask(text);
        query.set(String::new());
    };

    view! {
        <form class="question-form" on:submit=on_submit>
            <input
                type="text"
                class="question-input"
                placeholder="Ask a question about your PDF..."
                prop:value=move || query.get()
                prop:disabled=move || !can_ask.get()
                on:input=move |ev| query.set(event_target_value(&ev))
            />
            <button
                type="submit"
                class="send-button"
                aria-label="Send message"
                prop:disabled=move || !can_ask.get() || query.with(|q| q.trim().is_empty())
            >
                {icon("send")}
            </button>
        </form>
    }
}
