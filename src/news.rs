//! News search client.
//!
//! One GET against the newsdata.io `news` endpoint per cycle, decoded into [`NewsResponse`].

use crate::article::NewsResponse;
use crate::config::NewsConfig;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// User-Agent string identifying this client
pub(crate) const USER_AGENT: &str = concat!("groknews/", env!("CARGO_PKG_VERSION"));

pub(crate) const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Error, Debug)]
pub enum NewsError {
    #[error("invalid news endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),
    #[error("failed to reach news API: {0}")]
    Request(#[from] reqwest::Error),
    #[error("news API returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("malformed news API response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Client for the news search endpoint
#[derive(Debug, Clone)]
pub struct NewsClient {
    client: Client,
    endpoint: String,
    language: String,
}

impl NewsClient {
    pub fn new(config: &NewsConfig) -> Result<Self, NewsError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            language: config.language.clone(),
        })
    }

    /// Search recent articles about `topic`
    pub async fn search(&self, topic: &str, api_key: &str) -> Result<NewsResponse, NewsError> {
        let url = self.search_url(topic, api_key)?;

        tracing::debug!(endpoint = %self.endpoint, topic, "requesting news");
        // The request URL carries the API key; keep it out of error messages.
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(reqwest::Error::without_url)?;

        if !status.is_success() {
            return Err(NewsError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: NewsResponse = serde_json::from_str(&body)?;
        tracing::debug!(
            results = parsed.results.as_ref().map_or(0, Vec::len),
            "news response decoded"
        );
        Ok(parsed)
    }

    fn search_url(&self, topic: &str, api_key: &str) -> Result<Url, url::ParseError> {
        Url::parse_with_params(
            &self.endpoint,
            &[
                ("apikey", api_key),
                ("q", topic),
                ("language", self.language.as_str()),
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_url_encodes_query_parameters() {
        let client = NewsClient::new(&NewsConfig::default()).unwrap();
        let url = client.search_url("Elon Musk & AI", "k3y").unwrap();

        assert_eq!(url.host_str(), Some("newsdata.io"));
        assert_eq!(url.path(), "/api/1/news");
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("apikey".to_string(), "k3y".to_string()),
                ("q".to_string(), "Elon Musk & AI".to_string()),
                ("language".to_string(), "en".to_string()),
            ]
        );
    }

    #[test]
    fn bad_endpoint_is_reported() {
        let config = NewsConfig {
            endpoint: "not a url".to_string(),
            ..NewsConfig::default()
        };
        let client = NewsClient::new(&config).unwrap();
        assert!(matches!(
            client.search_url("AI", "k"),
            Err(url::ParseError::RelativeUrlWithoutBase)
        ));
    }
}
