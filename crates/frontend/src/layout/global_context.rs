use crate::shared::backend::HttpBackend;
use crate::shared::config::AppConfig;
use crate::shared::session::ChatSession;
use crate::shared::timer::BrowserTimer;
use crate::usecases::u001_upload_pdf::upload_document;
use crate::usecases::u002_ask_question::QueryDispatcher;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// App-wide owner of the chat session. Components read `session` and call
/// the command methods; none of them keeps its own copy of the state.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub session: RwSignal<ChatSession>,
    config: StoredValue<AppConfig>,
}

impl AppGlobalContext {
    pub fn new(config: AppConfig) -> Self {
        log::info!("Backend origin: {}", config.backend.base_url);
        Self {
            session: RwSignal::new(ChatSession::new()),
            config: StoredValue::new(config),
        }
    }

    pub fn backend(&self) -> HttpBackend {
        self.config.with_value(|config| HttpBackend::new(&config.backend))
    }

    pub fn upload(&self, file: web_sys::File) {
        let session = self.session;
        let backend = self.backend();
        spawn_local(async move {
            if let Err(err) = upload_document(&session, &backend, &file).await {
                log::warn!("Upload rejected: {}", err);
            }
        });
    }

    pub fn ask(&self, question: String) {
        let session = self.session;
        let backend = self.backend();
        let chat = self.config.with_value(|config| config.chat.clone());
        spawn_local(async move {
            let timer = BrowserTimer;
            let dispatcher = QueryDispatcher::new(&session, &backend, &timer, &chat);
            match dispatcher.ask(&question).await {
                Ok(outcome) => log::debug!("Question finished: {:?}", outcome),
                Err(err) => log::warn!("Question rejected: {}", err),
            }
        });
    }

    pub fn select_document(&self, name: &str) {
        if let Some(Err(err)) = self.session.try_update(|s| s.select_document(name)) {
            log::error!("select_document: {}", err);
        }
    }

    pub fn show_upload(&self) {
        self.session.update(|s| s.show_upload());
    }

    pub fn show_chat(&self) {
        self.session.update(|s| s.show_chat());
    }

    pub fn dismiss_notice(&self) {
        self.session.update(|s| s.dismiss_notice());
    }
}

pub fn use_app_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext context not found")
}
