use leptos::prelude::*;

#[component]
pub fn TypingIndicator() -> impl IntoView {
    view! {
        <div class="typing-indicator">
            {(1..=5)
                .map(|i| view! { <span class=format!("dot dot{}", i)></span> })
                .collect_view()}
        </div>
    }
}
