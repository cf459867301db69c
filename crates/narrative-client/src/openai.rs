use serde::{Deserialize, Serialize};

use crate::error::{NarrativeError, NarrativeResult};
use crate::NarrativeConfig;

const SUMMARY_PROMPT: &str = "You are an Amazon Ads performance lead. Based on the \
following metrics, write a concise executive summary with key risks, key wins, and \
3-5 clear action items:";

#[derive(Debug, Clone, Serialize)]
struct ResponsesRequest {
    model: String,
    input: String,
}

#[derive(Debug, Clone, Deserialize)]
struct ResponsesReply {
    #[serde(default)]
    output: Vec<OutputItem>,
}

#[derive(Debug, Clone, Deserialize)]
struct OutputItem {
    #[serde(default)]
    content: Vec<ContentPart>,
}

#[derive(Debug, Clone, Deserialize)]
struct ContentPart {
    #[serde(default)]
    text: String,
}

fn first_output_text(reply: &ResponsesReply) -> Option<String> {
    reply
        .output
        .iter()
        .flat_map(|item| item.content.iter())
        .map(|part| part.text.trim())
        .find(|text| !text.is_empty())
        .map(|text| text.to_string())
}

/// Client for the text-generation endpoint that rewrites structured
/// summaries into prose.
#[derive(Clone)]
pub struct NarrativeClient {
    client: reqwest::Client,
    config: NarrativeConfig,
}

impl NarrativeClient {
    pub fn new(config: NarrativeConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { client, config }
    }

    pub fn with_defaults() -> Self {
        Self::new(NarrativeConfig::default())
    }

    pub fn has_credential(&self) -> bool {
        self.config.api_key.is_some()
    }

    /// Rewrite the structured summary into prose.
    ///
    /// Single attempt, bounded by the client timeout. Without a credential
    /// the input is returned unchanged, and any remote failure degrades to
    /// the same pass-through rather than surfacing an error.
    pub async fn enhance(&self, summary: &str) -> String {
        let Some(api_key) = self.config.api_key.clone() else {
            return summary.to_string();
        };

        match self.try_enhance(&api_key, summary).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(error = %e, "narrative enhancement failed, keeping structured summary");
                summary.to_string()
            }
        }
    }

    async fn try_enhance(&self, api_key: &str, summary: &str) -> NarrativeResult<String> {
        let request = ResponsesRequest {
            model: self.config.model.clone(),
            input: format!("{SUMMARY_PROMPT}\n\n{summary}"),
        };

        let response = self
            .client
            .post(format!("{}/responses", self.config.base_url))
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(NarrativeError::ServiceUnavailable(format!(
                "Status: {}",
                response.status()
            )));
        }

        let reply = response.json::<ResponsesReply>().await?;
        first_output_text(&reply)
            .ok_or_else(|| NarrativeError::InvalidResponse("no text output".to_string()))
    }
}
