//! Article and digest types - the data flowing between the news fetcher and the summariser.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of articles shown and summarised per cycle
pub const MAX_ARTICLES: usize = 5;

const NO_TITLE: &str = "No title available";
const NO_DESCRIPTION: &str = "No description.";
const NO_LINK: &str = "#";

/// Body of a news search response. Everything besides `results` is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewsResponse {
    #[serde(default)]
    pub results: Option<Vec<RawArticle>>,
}

/// A result record as sent by the API. Any field may be absent or `null`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawArticle {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}

/// An article ready for display, with placeholders filled in
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Article {
    pub title: String,
    pub description: String,
    pub link: String,
}

impl From<RawArticle> for Article {
    fn from(raw: RawArticle) -> Self {
        Self {
            title: raw.title.unwrap_or_else(|| NO_TITLE.to_string()),
            description: raw.description.unwrap_or_else(|| NO_DESCRIPTION.to_string()),
            link: raw.link.unwrap_or_else(|| NO_LINK.to_string()),
        }
    }
}

impl NewsResponse {
    /// The first [`MAX_ARTICLES`] results in API order, or an empty list.
    pub fn into_articles(self) -> Vec<Article> {
        self.results
            .unwrap_or_default()
            .into_iter()
            .take(MAX_ARTICLES)
            .map(Article::from)
            .collect()
    }
}

/// Plain-text digest of a set of articles, one `"{title}. {description}"` line each.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Digest(String);

impl Digest {
    pub fn from_articles(articles: &[Article]) -> Self {
        let mut text = String::new();
        for article in articles {
            text.push_str(&article.title);
            text.push_str(". ");
            text.push_str(&article.description);
            text.push('\n');
        }
        Self(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
