use crate::layout::global_context::use_app_context;
use crate::shared::backend::PdfQaBackend;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy, Debug, PartialEq)]
enum BackendStatus {
    Online,
    Offline,
    Checking,
}

impl BackendStatus {
    fn display_text(&self) -> &'static str {
        match self {
            BackendStatus::Online => "Backend: Online",
            BackendStatus::Offline => "Backend: Offline",
            BackendStatus::Checking => "Backend: Checking...",
        }
    }

    fn css_class(&self) -> &'static str {
        match self {
            BackendStatus::Online => "status-online",
            BackendStatus::Offline => "status-offline",
            BackendStatus::Checking => "status-checking",
        }
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let ctx = use_app_context();
    let status = RwSignal::new(BackendStatus::Checking);

    // Простая проверка бэкенда через /health
    let check_backend = move || {
        status.set(BackendStatus::Checking);
        let backend = ctx.backend();

        spawn_local(async move {
            let next = match backend.health().await {
                Ok(health) if health.is_healthy() => BackendStatus::Online,
                Ok(health) => {
                    log::warn!("Backend reports status {:?}", health.status);
                    BackendStatus::Offline
                }
                Err(err) => {
                    log::warn!("Health check failed: {}", err);
                    BackendStatus::Offline
                }
            };
            status.set(next);
        });
    };

    // Запускаем проверку при монтировании
    Effect::new(move |_| {
        check_backend();
    });

    view! {
        <footer data-zone="footer" class="status-bar">
            <span
                class=move || status.get().css_class()
                title="Click to re-check"
                on:click=move |_| check_backend()
            >
                {move || status.get().display_text()}
            </span>
        </footer>
    }
}
