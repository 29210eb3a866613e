//! Chat-completion provider client
//!
//! Thin HTTP client for OpenAI-compatible `chat/completions` endpoints with
//! automatic failover across configured providers. Groq is the default
//! backend; any endpoint speaking the same wire format can be configured.

use anyhow::{anyhow, Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

pub const GROQ_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const GROQ_DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";

const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Configuration for one chat-completion provider.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Display name used in logs ("groq", "openai", ...).
    pub name: &'static str,
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub max_tokens: u32,
    pub timeout_seconds: u64,
}

/// Chat client with failover across providers in configuration order.
pub struct ChatClient {
    client: Client,
    providers: Vec<ProviderConfig>,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    temperature: f32,
    max_tokens: u32,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    content: Option<String>,
}

impl ChatClient {
    pub fn new(providers: Vec<ProviderConfig>) -> Result<Self> {
        if providers.is_empty() {
            return Err(anyhow!("at least one provider must be configured"));
        }
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .context("failed to create HTTP client")?;
        Ok(Self { client, providers })
    }

    /// Build from environment variables.
    ///
    /// `GROQ_API_KEY` configures the primary provider (`GROQ_MODEL` and
    /// `GROQ_BASE_URL` override the defaults); `OPENAI_API_KEY` adds an
    /// OpenAI fallback. At least one key must be set.
    pub fn from_env() -> Result<Self> {
        let mut providers = Vec::new();

        if let Ok(api_key) = std::env::var("GROQ_API_KEY") {
            providers.push(ProviderConfig {
                name: "groq",
                api_key,
                model: std::env::var("GROQ_MODEL")
                    .unwrap_or_else(|_| GROQ_DEFAULT_MODEL.to_string()),
                base_url: std::env::var("GROQ_BASE_URL")
                    .unwrap_or_else(|_| GROQ_BASE_URL.to_string()),
                max_tokens: 4096,
                timeout_seconds: 30,
            });
        }

        if let Ok(api_key) = std::env::var("OPENAI_API_KEY") {
            providers.push(ProviderConfig {
                name: "openai",
                api_key,
                model: std::env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string()),
                base_url: OPENAI_BASE_URL.to_string(),
                max_tokens: 4096,
                timeout_seconds: 30,
            });
        }

        if providers.is_empty() {
            return Err(anyhow!(
                "no LLM provider configured: set GROQ_API_KEY (or OPENAI_API_KEY)"
            ));
        }

        Self::new(providers)
    }

    /// Request a completion, trying each provider in order.
    pub async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        temperature: f32,
    ) -> Result<String> {
        let mut last_error = None;

        for config in &self.providers {
            match self
                .call_provider(config, system_prompt, user_prompt, temperature)
                .await
            {
                Ok(content) => {
                    debug!(provider = config.name, model = %config.model, "completion ok");
                    return Ok(content);
                }
                Err(e) => {
                    warn!(provider = config.name, "provider failed: {e:#}");
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| anyhow!("all providers failed")))
    }

    async fn call_provider(
        &self,
        config: &ProviderConfig,
        system_prompt: &str,
        user_prompt: &str,
        temperature: f32,
    ) -> Result<String> {
        let request = ChatRequest {
            model: &config.model,
            temperature,
            max_tokens: config.max_tokens,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: user_prompt,
                },
            ],
        };

        debug!(provider = config.name, model = %config.model, "sending chat request");

        let response = self
            .client
            .post(format!("{}/chat/completions", config.base_url))
            .timeout(Duration::from_secs(config.timeout_seconds))
            .header("Authorization", format!("Bearer {}", config.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .with_context(|| format!("failed to send request to {}", config.name))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(anyhow!("{} API error ({status}): {error_text}", config.name));
        }

        let result: ChatResponse = response
            .json()
            .await
            .with_context(|| format!("failed to parse {} response", config.name))?;

        let content = result
            .choices
            .first()
            .and_then(|c| c.message.content.clone())
            .unwrap_or_default();

        if content.is_empty() {
            return Err(anyhow!("{} returned an empty completion", config.name));
        }

        Ok(content)
    }
}
