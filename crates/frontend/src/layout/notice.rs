//! Blocking notice: one message, one button. Nothing else is clickable until dismissed.

use crate::layout::global_context::use_app_context;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn NoticeModal() -> impl IntoView {
    let ctx = use_app_context();
    let notice = Memo::new(move |_| ctx.session.with(|s| s.notice.clone()));

    view! {
        {move || notice.get().map(|text| view! {
            <div class="modal-overlay">
                <div class="modal" role="alertdialog" aria-modal="true">
                    <p class="modal-text">{text}</p>
                    <div class="modal-actions">
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| ctx.dismiss_notice()
                        >
                            "OK"
                        </Button>
                    </div>
                </div>
            </div>
        })}
    }
}
