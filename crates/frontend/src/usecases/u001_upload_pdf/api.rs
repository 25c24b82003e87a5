use crate::shared::api_utils::api_url;
use crate::shared::backend::{status_error, transport_error, BackendError};
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u001_upload_pdf::{UploadPdf, UploadPdfResponse, FILE_FIELD};
use gloo_net::http::Request;
use web_sys::FormData;

/// Загрузить PDF на backend (multipart, поле `file`)
pub async fn upload_pdf(
    base_url: &str,
    file: &web_sys::File,
) -> Result<UploadPdfResponse, BackendError> {
    let form_data = FormData::new().map_err(|e| transport_error(format!("{e:?}")))?;
    form_data
        .append_with_blob_and_filename(FILE_FIELD, file, &file.name())
        .map_err(|e| transport_error(format!("{e:?}")))?;

    // Content-Type with the multipart boundary is set by the browser.
    let response = Request::post(&api_url(base_url, UploadPdf::endpoint()))
        .body(form_data)
        .map_err(transport_error)?
        .send()
        .await
        .map_err(transport_error)?;

    if !response.ok() {
        return Err(status_error(response).await);
    }

    // Only the acknowledgement matters; a body we cannot read is still a success.
    Ok(response
        .json::<UploadPdfResponse>()
        .await
        .unwrap_or_default())
}
