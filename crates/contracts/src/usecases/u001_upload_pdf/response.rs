use serde::{Deserialize, Serialize};

/// Ответ backend на загрузку PDF
///
/// The client only needs the 2xx acknowledgement; every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UploadPdfResponse {
    #[serde(default)]
    pub message: Option<String>,

    /// Количество фрагментов, на которые разбит документ
    #[serde(default)]
    pub num_chunks: Option<u32>,

    #[serde(default)]
    pub file_name: Option<String>,
}
