use crate::layout::global_context::use_app_context;
use crate::shared::icons::icon;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u001_upload_pdf::UploadPdf;
use leptos::prelude::*;
use thaw::*;

/// Drop zone + file picker. Both hand the raw file to the upload controller.
#[component]
pub fn UploadView() -> impl IntoView {
    let ctx = use_app_context();
    let input_ref = NodeRef::<leptos::html::Input>::new();
    let dragging = RwSignal::new(false);

    let on_change = move |ev: leptos::ev::Event| {
        let input: web_sys::HtmlInputElement = event_target(&ev);
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            ctx.upload(file);
        }
        // Clear input so the same file can be picked again
        input.set_value("");
    };

    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        dragging.set(false);
        if let Some(file) = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .and_then(|files| files.get(0))
        {
            ctx.upload(file);
        }
    };

    view! {
        <div class="upload-section">
            <div class="content-header">
                <h1>"Chat with " <span class="pdf-highlight">"PDF"</span></h1>
                <p class="subtitle">{UploadPdf::description()}</p>
            </div>
            <div
                class="upload-container"
                class:dragging=move || dragging.get()
                on:click=move |_| {
                    if let Some(input) = input_ref.get() {
                        input.click();
                    }
                }
                on:dragover=move |ev: leptos::ev::DragEvent| {
                    ev.prevent_default();
                    dragging.set(true);
                }
                on:dragleave=move |_| dragging.set(false)
                on:drop=on_drop
            >
                <input
                    node_ref=input_ref
                    type="file"
                    accept="application/pdf"
                    style="display: none;"
                    on:change=on_change
                    on:click=|ev| ev.stop_propagation()
                />
                <div class="upload-content">
                    <div class="upload-icon">{icon("upload")}</div>
                    <p class="upload-text">"Click to upload, or drag PDF here"</p>
                    <div class="upload-button-container">
                        <Button appearance=ButtonAppearance::Primary>
                            {icon("upload")}
                            " Upload PDF"
                        </Button>
                    </div>
                </div>
            </div>
        </div>
    }
}

/// Blocking overlay while an upload request is outstanding
#[component]
pub fn UploadOverlay() -> impl IntoView {
    let ctx = use_app_context();
    let in_flight = Memo::new(move |_| ctx.session.with(|s| s.upload.in_flight));

    view! {
        <Show when=move || in_flight.get()>
            <div class="loading-overlay">
                <div class="loading-popup">
                    <div class="spinner"></div>
                    <p>"Uploading PDF, please wait..."</p>
                </div>
            </div>
        </Show>
    }
}
