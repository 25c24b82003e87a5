use crate::domain::a002_chat_message::ui::ChatView;
use crate::layout::global_context::use_app_context;
use crate::layout::view_mode::ViewMode;
use crate::usecases::u001_upload_pdf::{UploadOverlay, UploadView};
use leptos::prelude::*;

#[component]
pub fn Center(children: Children) -> impl IntoView {
    view! {
        <div data-zone="center" class="app-content" style="flex: 1; overflow: auto;">
            {children()}
        </div>
    }
}

/// Upload page or chat page, depending on the current view mode
#[component]
pub fn MainContent() -> impl IntoView {
    let ctx = use_app_context();
    // Memo: без него ChatView пересоздаётся на каждое изменение сессии
    let mode = Memo::new(move |_| ctx.session.with(|s| s.view_mode()));

    view! {
        {move || match mode.get() {
            ViewMode::Upload => view! { <UploadView /> }.into_any(),
            ViewMode::Chat => view! { <ChatView /> }.into_any(),
        }}
        <UploadOverlay />
    }
}
