use contracts::usecases::u002_ask_question::DEFAULT_NUM_CHUNKS;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub backend: BackendConfig,
    pub chat: ChatConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct BackendConfig {
    /// Origin of the question-answering service, without trailing slash
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ChatConfig {
    /// Context fragments the backend should retrieve per question
    #[serde(default = "default_num_chunks")]
    pub num_chunks: u32,
    /// Pause between a backend reply and its appearance in the transcript
    #[serde(default = "default_answer_delay_ms")]
    pub answer_delay_ms: u32,
}

fn default_num_chunks() -> u32 {
    DEFAULT_NUM_CHUNKS
}

fn default_answer_delay_ms() -> u32 {
    1000
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[backend]
base_url = "http://localhost:8000"

[chat]
num_chunks = 5
answer_delay_ms = 1000
"#;

/// Build-time override of the backend origin
const BACKEND_URL_OVERRIDE: Option<&str> = option_env!("PDF_CHAT_BACKEND_URL");

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend: BackendConfig {
                base_url: "http://localhost:8000".to_string(),
            },
            chat: ChatConfig {
                num_chunks: default_num_chunks(),
                answer_delay_ms: default_answer_delay_ms(),
            },
        }
    }
}

/// Load the client configuration
///
/// Sources, in order:
/// 1. Embedded default config
/// 2. `PDF_CHAT_BACKEND_URL` captured at build time
pub fn load_config() -> anyhow::Result<AppConfig> {
    parse_config(DEFAULT_CONFIG, BACKEND_URL_OVERRIDE)
}

fn parse_config(contents: &str, backend_override: Option<&str>) -> anyhow::Result<AppConfig> {
    let mut config: AppConfig = toml::from_str(contents)?;

    match backend_override.map(str::trim).filter(|url| !url.is_empty()) {
        Some(url) => {
            log::info!("Backend origin overridden at build time: {}", url);
            config.backend.base_url = url.to_string();
        }
        None => log::info!("Using default embedded configuration"),
    }

    config.backend.base_url = config.backend.base_url.trim_end_matches('/').to_string();
    if config.backend.base_url.is_empty() {
        anyhow::bail!("backend.base_url must not be empty");
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG, None).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.chat.num_chunks, 5);
        assert_eq!(config.chat.answer_delay_ms, 1000);
    }

    #[test]
    fn test_backend_override_trims_trailing_slash() {
        let config = parse_config(DEFAULT_CONFIG, Some("https://qa.example.com/")).unwrap();
        assert_eq!(config.backend.base_url, "https://qa.example.com");
    }

    #[test]
    fn test_missing_chat_keys_use_defaults() {
        let config = parse_config(
            "[backend]\nbase_url = \"http://10.0.0.2:8000\"\n[chat]\n",
            None,
        )
        .unwrap();
        assert_eq!(config.chat.num_chunks, DEFAULT_NUM_CHUNKS);
        assert_eq!(config.chat.answer_delay_ms, 1000);
    }

    #[test]
    fn test_blank_backend_rejected() {
        assert!(parse_config("[backend]\nbase_url = \"/\"\n[chat]\n", None).is_err());
    }
}
