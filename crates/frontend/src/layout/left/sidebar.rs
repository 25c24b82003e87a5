//! Sidebar: logo, view switch, uploaded documents

use crate::domain::a001_pdf_document::ui::DocumentList;
use crate::layout::global_context::use_app_context;
use crate::layout::view_mode::ViewMode;
use crate::shared::icons::icon;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u001_upload_pdf::UploadPdf;
use contracts::usecases::u002_ask_question::AskQuestion;
use leptos::prelude::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_app_context();
    let mode = Memo::new(move |_| ctx.session.with(|s| s.view_mode()));

    view! {
        <div class="app-sidebar__content">
            <div class="app-sidebar__logo">
                {icon("logo")}
                <span>"ChatWith" <span class="pdf-highlight">"PDF"</span></span>
            </div>

            <nav class="app-sidebar__nav">
                <div
                    class="app-sidebar__item"
                    class:app-sidebar__item--active=move || mode.get() == ViewMode::Upload
                    on:click=move |_| ctx.show_upload()
                >
                    <div class="app-sidebar__item-content">
                        {icon("upload")}
                        <span>{UploadPdf::display_name()}</span>
                    </div>
                </div>
                <div
                    class="app-sidebar__item"
                    class:app-sidebar__item--active=move || mode.get() == ViewMode::Chat
                    on:click=move |_| ctx.show_chat()
                >
                    <div class="app-sidebar__item-content">
                        {icon("chat")}
                        <span>{AskQuestion::display_name()}</span>
                    </div>
                </div>
            </nav>

            <div class="app-sidebar__section">
                <DocumentList />
            </div>
        </div>
    }
}
