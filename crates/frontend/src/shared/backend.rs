//! Seam between the conversation state machine and the question-answering service.
//!
//! Controllers are generic over [`PdfQaBackend`] so the whole upload/ask flow
//! runs against [`HttpBackend`] in the browser and against scripted fakes in tests.

use crate::shared::config::BackendConfig;
use contracts::system::health::HealthResponse;
use contracts::usecases::common::error_body::detail_text;
use contracts::usecases::u001_upload_pdf::UploadPdfResponse;
use contracts::usecases::u002_ask_question::{AskQuestionRequest, AskQuestionResponse};
use serde_json::Value;

/// Raw file handed over by the picker or the drop zone
pub trait RawFile {
    fn file_name(&self) -> String;
    /// Declared media type, e.g. "application/pdf"
    fn media_type(&self) -> String;
}

impl RawFile for web_sys::File {
    fn file_name(&self) -> String {
        self.name()
    }

    fn media_type(&self) -> String {
        self.type_()
    }
}

/// Failure of a single backend round trip
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BackendError {
    /// Non-2xx answer; `detail` is the `detail` field of the JSON body, if any
    #[error("Request failed with status code {status}")]
    Status { status: u16, detail: Option<Value> },
    /// The request never produced a response
    #[error("{0}")]
    Transport(String),
}

impl BackendError {
    /// Backend-supplied detail when present, transport/status text otherwise.
    pub fn detail_text(&self) -> String {
        match self {
            BackendError::Status {
                detail: Some(detail),
                ..
            } => detail_text(detail).unwrap_or_else(|| self.to_string()),
            other => other.to_string(),
        }
    }
}

#[allow(async_fn_in_trait)]
pub trait PdfQaBackend {
    type File: RawFile;

    /// `POST /upload-pdf`, multipart body with a single `file` field
    async fn upload_pdf(&self, file: &Self::File) -> Result<UploadPdfResponse, BackendError>;

    /// `POST /ask-question`
    async fn ask_question(
        &self,
        request: &AskQuestionRequest,
    ) -> Result<AskQuestionResponse, BackendError>;

    /// `GET /health`
    async fn health(&self) -> Result<HealthResponse, BackendError>;
}

/// Browser implementation on top of `gloo-net`
#[derive(Debug, Clone)]
pub struct HttpBackend {
    base_url: String,
}

impl HttpBackend {
    pub fn new(config: &BackendConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl PdfQaBackend for HttpBackend {
    type File = web_sys::File;

    async fn upload_pdf(&self, file: &web_sys::File) -> Result<UploadPdfResponse, BackendError> {
        crate::usecases::u001_upload_pdf::api::upload_pdf(&self.base_url, file).await
    }

    async fn ask_question(
        &self,
        request: &AskQuestionRequest,
    ) -> Result<AskQuestionResponse, BackendError> {
        crate::usecases::u002_ask_question::api::ask_question(&self.base_url, request).await
    }

    async fn health(&self) -> Result<HealthResponse, BackendError> {
        crate::system::health::health(&self.base_url).await
    }
}

/// Turn a non-2xx `gloo-net` response into [`BackendError::Status`]
pub(crate) async fn status_error(response: gloo_net::http::Response) -> BackendError {
    let status = response.status();
    let detail = response
        .json::<contracts::usecases::common::ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.detail);
    BackendError::Status { status, detail }
}

pub(crate) fn transport_error(err: impl std::fmt::Display) -> BackendError {
    BackendError::Transport(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_string_detail_wins() {
        let err = BackendError::Status {
            status: 500,
            detail: Some(json!("index not found")),
        };
        assert_eq!(err.detail_text(), "index not found");
    }

    #[test]
    fn test_structured_detail_pretty_printed() {
        let err = BackendError::Status {
            status: 422,
            detail: Some(json!({ "code": 7 })),
        };
        assert_eq!(err.detail_text(), "{\n  \"code\": 7\n}");
    }

    #[test]
    fn test_status_text_without_detail() {
        let err = BackendError::Status {
            status: 502,
            detail: None,
        };
        assert_eq!(err.detail_text(), "Request failed with status code 502");
    }

    #[test]
    fn test_falsy_detail_falls_back_to_status_text() {
        let err = BackendError::Status {
            status: 500,
            detail: Some(json!(false)),
        };
        assert_eq!(err.detail_text(), "Request failed with status code 500");
    }

    #[test]
    fn test_transport_text() {
        let err = BackendError::Transport("Network Error".to_string());
        assert_eq!(err.detail_text(), "Network Error");
    }
}
