use serde::{Deserialize, Serialize};

/// Number of context fragments the backend retrieves per question
pub const DEFAULT_NUM_CHUNKS: u32 = 5;

/// Запрос на ответ по документам
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AskQuestionRequest {
    pub query: String,

    #[serde(default = "default_num_chunks")]
    pub num_chunks: u32,
}

fn default_num_chunks() -> u32 {
    DEFAULT_NUM_CHUNKS
}

impl AskQuestionRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            num_chunks: DEFAULT_NUM_CHUNKS,
        }
    }

    pub fn with_num_chunks(mut self, num_chunks: u32) -> Self {
        self.num_chunks = num_chunks;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_shape() {
        let json = serde_json::to_value(AskQuestionRequest::new("What is this?")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "query": "What is this?", "num_chunks": 5 })
        );
    }
}
