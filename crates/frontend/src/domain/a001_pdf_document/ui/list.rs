//! "Your PDFs" list in the sidebar. Clicking an entry selects the document.

use crate::layout::global_context::use_app_context;
use crate::shared::icons::icon;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;

#[component]
pub fn DocumentList() -> impl IntoView {
    let ctx = use_app_context();
    let documents = Memo::new(move |_| ctx.session.with(|s| s.documents.documents().to_vec()));

    view! {
        <div class="pdf-list-header">
            <span>"Your PDFs"</span>
        </div>
        <div class="pdf-list">
            <Show
                when=move || documents.with(|docs| !docs.is_empty())
                fallback=|| view! { <div class="no-pdfs-message">"No PDFs uploaded yet"</div> }
            >
                <For
                    each=move || documents.get()
                    key=|doc| doc.name.as_string()
                    let:doc
                >
                    {{
                        let name = doc.name.clone();
                        let is_active = {
                            let name = name.clone();
                            move || ctx.session.with(|s| s.documents.is_active(name.as_str()))
                        };
                        let on_click = {
                            let name = name.clone();
                            move |_: leptos::ev::MouseEvent| ctx.select_document(name.as_str())
                        };
                        view! {
                            <div class="pdf-item" class:active=is_active on:click=on_click>
                                {icon("document")}
                                <span>{name.to_string()}</span>
                                {doc.num_chunks.map(|n| view! {
                                    <span class="pdf-chunks">{format!("{} chunks", n)}</span>
                                })}
                            </div>
                        }
                    }}
                </For>
            </Show>
        </div>
    }
}
