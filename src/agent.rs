//! LLM agent module for the news summary.
//!
//! Talks to an OpenAI-compatible chat-completions endpoint (Groq by default).

use crate::article::Digest;
use crate::config::LlmConfig;
use crate::news::{CONNECT_TIMEOUT, USER_AGENT};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AgentError {
    #[error("LLM request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
    #[error("LLM API error ({status}): {body}")]
    Upstream { status: u16, body: String },
    #[error("failed to parse response: {0}")]
    ParseError(#[from] serde_json::Error),
    #[error("LLM response contained no choices")]
    NoChoices,
}

#[derive(Debug, Serialize)]
pub(crate) struct ChatRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ChatMessage<'a> {
    pub role: &'a str,
    pub content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Message,
}

#[derive(Debug, Deserialize)]
struct Message {
    content: String,
}

/// Build the prompt: persona, instructions, then the digest verbatim
pub fn build_prompt(persona: &str, topic: &str, digest: &Digest) -> String {
    format!(
        r#"{}
Summarize the following news articles about '{}'.
Make it informative but slightly funny, like you're roasting the situation.
Then, add a brief sentiment analysis (positive/neutral/negative) for each headline.
Here's the news:
{}"#,
        persona, topic, digest
    )
}

/// Client for the summary endpoint
#[derive(Debug, Clone)]
pub struct Summarizer {
    client: Client,
    endpoint: String,
    model: String,
    persona: String,
}

impl Summarizer {
    pub fn new(config: &LlmConfig) -> Result<Self, AgentError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            model: config.model.clone(),
            persona: config.persona.clone(),
        })
    }

    /// Ask the model to summarise `digest`. Only HTTP 200 counts as success.
    pub async fn summarize(
        &self,
        topic: &str,
        digest: &Digest,
        api_key: &str,
    ) -> Result<String, AgentError> {
        let prompt = build_prompt(&self.persona, topic, digest);
        let request = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: &prompt,
            }],
        };

        tracing::debug!(endpoint = %self.endpoint, model = %self.model, prompt_len = prompt.len(), "requesting summary");
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if status != reqwest::StatusCode::OK {
            return Err(AgentError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatResponse = serde_json::from_str(&body)?;
        parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or(AgentError::NoChoices)
    }
}
