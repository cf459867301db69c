pub mod error;
pub mod openai;

pub use error::{NarrativeError, NarrativeResult};
pub use openai::NarrativeClient;

use std::time::Duration;

/// Configuration for the narrative enhancement service.
///
/// A missing credential is a supported configuration: the client then
/// passes structured summaries through unchanged.
#[derive(Debug, Clone)]
pub struct NarrativeConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub timeout: Duration,
}

impl Default for NarrativeConfig {
    fn default() -> Self {
        Self {
            api_key: std::env::var("OPENAI_API_KEY").ok().filter(|k| !k.is_empty()),
            base_url: std::env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
            model: "gpt-4.1-mini".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}
