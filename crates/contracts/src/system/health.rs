use serde::{Deserialize, Serialize};

/// Path of the backend liveness probe
pub const HEALTH_ENDPOINT: &str = "/health";

/// Ответ `GET /health`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    #[serde(default)]
    pub status: String,
}

impl HealthResponse {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}
