use crate::shared::api_utils::api_url;
use crate::shared::backend::{status_error, transport_error, BackendError};
use contracts::system::health::{HealthResponse, HEALTH_ENDPOINT};
use gloo_net::http::Request;

/// Проверить доступность backend
pub async fn health(base_url: &str) -> Result<HealthResponse, BackendError> {
    let response = Request::get(&api_url(base_url, HEALTH_ENDPOINT))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(transport_error)?;

    if !response.ok() {
        return Err(status_error(response).await);
    }

    response.json().await.map_err(transport_error)
}
