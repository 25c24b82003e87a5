//! UploadController: validate a raw file, send it, hand the result to the session.

use crate::shared::backend::{PdfQaBackend, RawFile};
use crate::shared::session::SessionCell;
use contracts::domain::a001_pdf_document::{DocumentName, PdfDocument, PDF_MEDIA_TYPE};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UploadError {
    /// Declared media type is not PDF; nothing was sent
    #[error("Please upload a valid PDF file.")]
    InvalidFileType { media_type: String },
    #[error("Failed to upload PDF: {0}")]
    UploadFailed(String),
    #[error("Another PDF is still uploading, please wait.")]
    UploadInProgress,
    #[error("Session is no longer available.")]
    SessionClosed,
}

pub fn validate(file: &impl RawFile) -> Result<(), UploadError> {
    let media_type = file.media_type();
    if media_type != PDF_MEDIA_TYPE {
        return Err(UploadError::InvalidFileType { media_type });
    }
    Ok(())
}

/// Clears `UploadState::in_flight` however the request ends.
struct InFlightGuard<'a, S: SessionCell> {
    session: &'a S,
}

impl<S: SessionCell> Drop for InFlightGuard<'_, S> {
    fn drop(&mut self) {
        self.session.write(|s| s.upload.in_flight = false);
    }
}

pub struct UploadController<'a, S, B> {
    session: &'a S,
    backend: &'a B,
}

impl<'a, S, B> UploadController<'a, S, B>
where
    S: SessionCell,
    B: PdfQaBackend,
{
    pub fn new(session: &'a S, backend: &'a B) -> Self {
        Self { session, backend }
    }

    /// Validate and upload `file`. Does not touch documents or transcript.
    pub async fn submit(&self, file: &B::File) -> Result<PdfDocument, UploadError> {
        validate(file)?;

        let started = self
            .session
            .write(|s| !std::mem::replace(&mut s.upload.in_flight, true))
            .ok_or(UploadError::SessionClosed)?;
        if !started {
            return Err(UploadError::UploadInProgress);
        }
        let _in_flight = InFlightGuard {
            session: self.session,
        };

        let name = file.file_name();
        log::info!("Uploading {}", name);
        match self.backend.upload_pdf(file).await {
            Ok(response) => {
                log::info!(
                    "Uploaded {} ({} chunks)",
                    name,
                    response
                        .num_chunks
                        .map(|n| n.to_string())
                        .unwrap_or_else(|| "?".to_string())
                );
                Ok(PdfDocument::new(DocumentName::new(name)).with_chunks(response.num_chunks))
            }
            Err(err) => {
                log::warn!("Upload of {} failed: {}", name, err);
                Err(UploadError::UploadFailed(err.detail_text()))
            }
        }
    }
}

/// Upload `file` and, on success, make it the active document with a fresh transcript.
/// Failures are raised as a blocking notice and leave documents and transcript unchanged.
pub async fn upload_document<S, B>(
    session: &S,
    backend: &B,
    file: &B::File,
) -> Result<DocumentName, UploadError>
where
    S: SessionCell,
    B: PdfQaBackend,
{
    match UploadController::new(session, backend).submit(file).await {
        Ok(document) => {
            let name = document.name.clone();
            session
                .write(|s| s.activate_uploaded(document))
                .ok_or(UploadError::SessionClosed)?;
            Ok(name)
        }
        Err(err) => {
            session.write(|s| s.raise_notice(err.to_string()));
            Err(err)
        }
    }
}
