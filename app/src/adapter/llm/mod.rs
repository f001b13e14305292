mod prompt;

use std::time::Duration;

use anyhow::Context as _;
use infrastructure::HttpClientConfig;
use reqwest_middleware::ClientWithMiddleware;
use serde::{Deserialize, Serialize};

use crate::savings::{SavingsRequest, SavingsSuggestion, SuggestionGenerator};

#[derive(Debug, Clone, Deserialize)]
pub struct LlmConfig {
    /// Base URL of an OpenAI compatible API, e.g. `https://api.openai.com/v1`
    pub url: String,
    pub model: String,
    pub api_key: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Clone)]
pub struct LlmGenerator {
    client: ClientWithMiddleware,
    base_url: String,
    model: String,
}

impl LlmGenerator {
    pub fn new(config: &LlmConfig) -> anyhow::Result<Self> {
        let client = HttpClientConfig::new(config.api_key.clone())
            .with_timeout(Duration::from_secs(config.timeout_secs))
            .new_tracing_client()?;

        Ok(Self {
            client,
            base_url: config.url.trim_end_matches('/').to_owned(),
            model: config.model.clone(),
        })
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    response_format: ResponseFormat,
    temperature: f64,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    type_: &'static str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: Option<String>,
}

impl SuggestionGenerator for LlmGenerator {
    #[tracing::instrument(skip_all, fields(model = %self.model, appliance = %request.appliance_name))]
    async fn generate(&self, request: &SavingsRequest) -> anyhow::Result<SavingsSuggestion> {
        let body = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: prompt::system_prompt(),
                },
                ChatMessage {
                    role: "user",
                    content: prompt::user_prompt(request),
                },
            ],
            response_format: ResponseFormat { type_: "json_object" },
            temperature: 0.2,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .json(&body)
            .send()
            .await
            .context("Error calling text generation endpoint")?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            anyhow::bail!("Text generation endpoint returned {}: {}", status, text);
        }

        let chat = response
            .json::<ChatResponse>()
            .await
            .context("Error decoding text generation response")?;

        let content = chat
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .context("Text generation response contained no output")?;

        parse_suggestion(&content)
    }
}

//models sometimes wrap the JSON object in a markdown code fence
fn parse_suggestion(content: &str) -> anyhow::Result<SavingsSuggestion> {
    let trimmed = content.trim();
    let json = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .and_then(|s| s.strip_suffix("```"))
        .unwrap_or(trimmed);

    serde_json::from_str(json.trim()).with_context(|| format!("Malformed suggestion output: {}", content))
}
