//! Fakes for driving controllers without a browser.

use crate::shared::backend::{BackendError, PdfQaBackend, RawFile};
use crate::shared::session::{ChatSession, SessionCell};
use crate::shared::timer::Timer;
use contracts::system::health::HealthResponse;
use contracts::usecases::u001_upload_pdf::UploadPdfResponse;
use contracts::usecases::u002_ask_question::{AskQuestionRequest, AskQuestionResponse};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

pub type SharedSession = Rc<RefCell<ChatSession>>;

pub fn new_session() -> SharedSession {
    Rc::new(RefCell::new(ChatSession::new()))
}

impl SessionCell for SharedSession {
    fn write<R>(&self, f: impl FnOnce(&mut ChatSession) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// Ordered record of what happened during a flow
pub type EventLog = Rc<RefCell<Vec<String>>>;

#[derive(Debug, Clone)]
pub struct FakeFile {
    pub name: String,
    pub media_type: String,
}

impl FakeFile {
    pub fn pdf(name: &str) -> Self {
        Self {
            name: name.to_string(),
            media_type: "application/pdf".to_string(),
        }
    }

    pub fn typed(name: &str, media_type: &str) -> Self {
        Self {
            name: name.to_string(),
            media_type: media_type.to_string(),
        }
    }
}

impl RawFile for FakeFile {
    fn file_name(&self) -> String {
        self.name.clone()
    }

    fn media_type(&self) -> String {
        self.media_type.clone()
    }
}

type Hook = Box<dyn Fn()>;

/// Backend answering from scripted queues
#[derive(Default)]
pub struct FakeBackend {
    pub uploads: RefCell<VecDeque<Result<UploadPdfResponse, BackendError>>>,
    pub answers: RefCell<VecDeque<Result<AskQuestionResponse, BackendError>>>,
    pub upload_calls: RefCell<Vec<String>>,
    pub ask_calls: RefCell<Vec<AskQuestionRequest>>,
    pub log: EventLog,
    /// Runs while the upload request is "on the wire"
    pub during_upload: Option<Hook>,
}

impl FakeBackend {
    pub fn new(log: EventLog) -> Self {
        Self {
            log,
            ..Self::default()
        }
    }

    pub fn with_upload(self, result: Result<UploadPdfResponse, BackendError>) -> Self {
        self.uploads.borrow_mut().push_back(result);
        self
    }

    pub fn with_answer(self, result: Result<AskQuestionResponse, BackendError>) -> Self {
        self.answers.borrow_mut().push_back(result);
        self
    }

    pub fn during_upload(mut self, hook: impl Fn() + 'static) -> Self {
        self.during_upload = Some(Box::new(hook));
        self
    }

    pub fn network_calls(&self) -> usize {
        self.upload_calls.borrow().len() + self.ask_calls.borrow().len()
    }
}

impl PdfQaBackend for FakeBackend {
    type File = FakeFile;

    async fn upload_pdf(&self, file: &FakeFile) -> Result<UploadPdfResponse, BackendError> {
        self.upload_calls.borrow_mut().push(file.name.clone());
        if let Some(hook) = &self.during_upload {
            hook();
        }
        self.log.borrow_mut().push("upload response".to_string());
        self.uploads
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(UploadPdfResponse::default()))
    }

    async fn ask_question(
        &self,
        request: &AskQuestionRequest,
    ) -> Result<AskQuestionResponse, BackendError> {
        self.ask_calls.borrow_mut().push(request.clone());
        self.log.borrow_mut().push("backend response".to_string());
        self.answers
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(AskQuestionResponse::default()))
    }

    async fn health(&self) -> Result<HealthResponse, BackendError> {
        Ok(HealthResponse {
            status: "healthy".to_string(),
        })
    }
}

/// Timer that returns immediately, recording requested delays
#[derive(Default)]
pub struct FakeTimer {
    pub sleeps: RefCell<Vec<u32>>,
    pub log: EventLog,
    /// Runs while the delay is pending
    pub during_sleep: Option<Hook>,
}

impl FakeTimer {
    pub fn new(log: EventLog) -> Self {
        Self {
            log,
            ..Self::default()
        }
    }

    pub fn during_sleep(mut self, hook: impl Fn() + 'static) -> Self {
        self.during_sleep = Some(Box::new(hook));
        self
    }
}

impl Timer for FakeTimer {
    async fn sleep(&self, ms: u32) {
        self.sleeps.borrow_mut().push(ms);
        self.log.borrow_mut().push(format!("sleep {}", ms));
        if let Some(hook) = &self.during_sleep {
            hook();
        }
    }
}
