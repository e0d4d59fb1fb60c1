//! One research cycle: credentials, topic, fetch, digest, summary.
//!
//! [`Pipeline::run`] walks the gates in order and stops at the first failure. It never
//! renders anything; the caller gets an [`Outcome`] and decides how to show it.

use crate::agent::{AgentError, Summarizer};
use crate::article::{Article, Digest};
use crate::config::{Config, ConfigError};
use crate::news::{NewsClient, NewsError};
use thiserror::Error;

/// Network, timeout or decoding failures on either API
#[derive(Error, Debug)]
pub enum TransportError {
    #[error(transparent)]
    News(#[from] NewsError),
    #[error(transparent)]
    Summary(AgentError),
}

/// Why a cycle ended without a summary
#[derive(Error, Debug)]
pub enum CycleError {
    #[error("{0}")]
    Configuration(#[from] ConfigError),
    #[error("please enter a topic to search for")]
    Validation,
    #[error("no headlines found for '{topic}'")]
    EmptyResult { topic: String },
    #[error("summary API error ({status}): {body}")]
    Upstream { status: u16, body: String },
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),
}

impl From<AgentError> for CycleError {
    fn from(err: AgentError) -> Self {
        match err {
            AgentError::Upstream { status, body } => CycleError::Upstream { status, body },
            other => CycleError::Transport(TransportError::Summary(other)),
        }
    }
}

impl From<NewsError> for CycleError {
    fn from(err: NewsError) -> Self {
        CycleError::Transport(TransportError::News(err))
    }
}

/// Result of one cycle. Articles fetched before a failure are kept so they can still be shown.
#[derive(Debug)]
pub enum Outcome {
    Success {
        articles: Vec<Article>,
        summary: String,
    },
    Failure {
        articles: Vec<Article>,
        error: CycleError,
    },
}

impl Outcome {
    fn failed(error: impl Into<CycleError>) -> Self {
        Outcome::Failure {
            articles: Vec::new(),
            error: error.into(),
        }
    }

    pub fn articles(&self) -> &[Article] {
        match self {
            Outcome::Success { articles, .. } | Outcome::Failure { articles, .. } => articles,
        }
    }

    pub fn error(&self) -> Option<&CycleError> {
        match self {
            Outcome::Success { .. } => None,
            Outcome::Failure { error, .. } => Some(error),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success { .. })
    }
}

/// Owns the configuration and both HTTP clients for the lifetime of the process
#[derive(Debug)]
pub struct Pipeline {
    config: Config,
    news: NewsClient,
    summarizer: Summarizer,
}

impl Pipeline {
    pub fn new(config: Config) -> Result<Self, TransportError> {
        let news = NewsClient::new(&config.news)?;
        let summarizer = Summarizer::new(&config.llm).map_err(TransportError::Summary)?;
        Ok(Self {
            config,
            news,
            summarizer,
        })
    }

    /// Run one cycle for `topic`
    pub async fn run(&self, topic: &str) -> Outcome {
        let credentials = match self.config.credentials() {
            Ok(c) => c,
            Err(e) => {
                tracing::warn!(error = %e, "configuration check failed");
                return Outcome::failed(e);
            }
        };

        let topic = topic.trim();
        if topic.is_empty() {
            tracing::warn!("empty topic, nothing to search");
            return Outcome::failed(CycleError::Validation);
        }

        let response = match self.news.search(topic, &credentials.news_key).await {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!(error = %e, "news fetch failed");
                return Outcome::failed(e);
            }
        };

        let articles = response.into_articles();
        if articles.is_empty() {
            tracing::warn!(topic, "news search returned no results");
            return Outcome::failed(CycleError::EmptyResult {
                topic: topic.to_string(),
            });
        }
        tracing::info!(count = articles.len(), topic, "articles fetched");

        let digest = Digest::from_articles(&articles);
        match self
            .summarizer
            .summarize(topic, &digest, &credentials.llm_key)
            .await
        {
            Ok(summary) => {
                tracing::info!(len = summary.len(), "summary received");
                Outcome::Success { articles, summary }
            }
            Err(e) => {
                tracing::warn!(error = %e, "summary request failed");
                Outcome::Failure {
                    articles,
                    error: e.into(),
                }
            }
        }
    }
}
