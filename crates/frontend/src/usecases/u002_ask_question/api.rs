use crate::shared::api_utils::api_url;
use crate::shared::backend::{status_error, transport_error, BackendError};
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u002_ask_question::{AskQuestion, AskQuestionRequest, AskQuestionResponse};
use gloo_net::http::Request;

/// Задать вопрос по загруженным документам
pub async fn ask_question(
    base_url: &str,
    request: &AskQuestionRequest,
) -> Result<AskQuestionResponse, BackendError> {
    let response = Request::post(&api_url(base_url, AskQuestion::endpoint()))
        .json(request)
        .map_err(transport_error)?
        .send()
        .await
        .map_err(transport_error)?;

    if !response.ok() {
        return Err(status_error(response).await);
    }

    // A 2xx body without answer/message still yields a reply ("No answer provided.").
    Ok(response
        .json::<AskQuestionResponse>()
        .await
        .unwrap_or_default())
}
