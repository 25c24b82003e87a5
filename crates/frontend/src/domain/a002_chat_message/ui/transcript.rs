use super::typing_indicator::TypingIndicator;
use crate::layout::global_context::use_app_context;
use crate::shared::session::EMPTY_STATE_TEXT;
use contracts::domain::a002_chat_message::ChatMessage;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;

#[component]
pub fn Transcript() -> impl IntoView {
    let ctx = use_app_context();
    let container_ref = NodeRef::<leptos::html::Div>::new();

    let messages = Memo::new(move |_| ctx.session.with(|s| s.conversation.messages().to_vec()));
    let answer_pending = Memo::new(move |_| ctx.session.with(|s| s.conversation.answer_pending()));
    let show_placeholder = Memo::new(move |_| {
        ctx.session
            .with(|s| s.documents.is_empty() && s.conversation.messages().is_empty())
    });

    // Keep the newest message (or the typing indicator) in view
    Effect::new(move |_| {
        messages.track();
        answer_pending.track();
        if let Some(container) = container_ref.get() {
            request_animation_frame(move || {
                container.set_scroll_top(container.scroll_height());
            });
        }
    });

    view! {
        <div node_ref=container_ref class="message-container">
            <Show when=move || show_placeholder.get()>
                <div class="message-wrapper bot-message">
                    <div class="message">
                        <p>{EMPTY_STATE_TEXT}</p>
                    </div>
                </div>
            </Show>

            <For
                each=move || messages.get()
                key=|msg| msg.id.as_string()
                let:msg
            >
                <MessageBubble message=msg />
            </For>

            <Show when=move || answer_pending.get()>
                <div class="message-wrapper bot-message">
                    <div class="message typing-message">
                        <TypingIndicator />
                    </div>
                </div>
            </Show>
        </div>
    }
}

#[component]
pub fn MessageBubble(message: ChatMessage) -> impl IntoView {
    let wrapper_class = if message.is_user() {
        "message-wrapper user-message"
    } else {
        "message-wrapper bot-message"
    };
    let time = message.created_at.with_timezone(&chrono::Local).format("%H:%M").to_string();
    let sources = (!message.sources.is_empty()).then(|| {
        message
            .sources
            .iter()
            .map(|src| format!("📄 {} #{} ({:.0}%)", src.file_name, src.chunk_id, src.similarity * 100.0))
            .collect::<Vec<_>>()
            .join(" • ")
    });

    view! {
        <div class=wrapper_class data-sender=message.sender.as_str()>
            <div class="message">
                <p style="white-space: pre-wrap;">{message.text}</p>
                {sources.map(|line| view! {
                    <div style="font-size: 11px; opacity: 0.7; margin-top: 6px;">{line}</div>
                })}
                <div class="message-time" style="font-size: 10px; opacity: 0.5;">{time}</div>
            </div>
        </div>
    }
}
