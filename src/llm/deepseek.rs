//! DeepSeek chat-completions client

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::Settings;
use crate::consult::ConsultationRecord;
use crate::llm::client::NoteGenerator;
use crate::llm::prompts::{build_discharge_prompt, SYSTEM_PROMPT};
use crate::{PawnoteError, Result};

const DEFAULT_DEEPSEEK_ENDPOINT: &str = "https://api.deepseek.com";
const DEFAULT_DEEPSEEK_MODEL: &str = "deepseek-chat";

/// Sampling temperature for note generation.
const TEMPERATURE: f64 = 0.7;

/// Upper bound on generated tokens per note.
const MAX_TOKENS: u32 = 500;

#[derive(Debug)]
pub struct DeepSeekClient {
    http: Client,
    api_key: String,
    model: String,
    endpoint: String,
}

impl DeepSeekClient {
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let api_key = settings.llm.api_key.trim().to_string();
        if api_key.is_empty() {
            return Err(PawnoteError::Authentication(
                "DeepSeek API key is missing. Set llm.api_key in config or DEEPSEEK_API_KEY."
                    .to_string(),
            ));
        }

        let model = if settings.llm.model.trim().is_empty() {
            DEFAULT_DEEPSEEK_MODEL.to_string()
        } else {
            settings.llm.model.trim().to_string()
        };

        let endpoint = if settings.llm.endpoint.trim().is_empty() {
            DEFAULT_DEEPSEEK_ENDPOINT.to_string()
        } else {
            settings
                .llm
                .endpoint
                .trim()
                .trim_end_matches('/')
                .to_string()
        };

        let http = Client::builder()
            .timeout(std::time::Duration::from_secs(45))
            .build()
            .map_err(|e| PawnoteError::Network(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            api_key,
            model,
            endpoint,
        })
    }

    fn request_url(&self) -> String {
        format!("{}/chat/completions", self.endpoint)
    }
}

#[async_trait]
impl NoteGenerator for DeepSeekClient {
    async fn generate(&self, record: &ConsultationRecord) -> Result<String> {
        let prompt = build_discharge_prompt(record);

        let body = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
            stream: false,
        };

        tracing::debug!(model = %body.model, url = %self.request_url(), "requesting discharge note");

        let response = self
            .http
            .post(self.request_url())
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| PawnoteError::Network(format!("DeepSeek request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(PawnoteError::Upstream(format!(
                "DeepSeek returned {}: {}",
                status,
                detail.trim()
            )));
        }

        let payload: ChatCompletionResponse = response.json().await.map_err(|e| {
            PawnoteError::Upstream(format!("Failed to parse DeepSeek response: {e}"))
        })?;

        let note = payload
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| {
                PawnoteError::Upstream("DeepSeek response contained no choices".to_string())
            })?;

        Ok(note.trim().to_string())
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f64,
    max_tokens: u32,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: String,
}
