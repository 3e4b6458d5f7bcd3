//! Typed HTTP client for the posts endpoint
//!
//! GET returns a list of posts; the first `limit` are mapped to quotes with
//! `title` as the text and `body` as the category. POST sends the full local
//! list; only the status is inspected.

use async_trait::async_trait;
use quotebook_core::{Config, Quote};
use serde::Deserialize;

use crate::error::RemoteError;

/// Category used when a post has no body
pub const FALLBACK_CATEGORY: &str = "Server";

/// Source and sink for the remote quote list
#[async_trait]
pub trait RemoteQuotes: Send + Sync {
    /// Fetch the remote list
    async fn fetch_quotes(&self) -> Result<Vec<Quote>, RemoteError>;

    /// Upload the full local list
    async fn push_quotes(&self, quotes: &[Quote]) -> Result<(), RemoteError>;
}

#[derive(Debug, Deserialize)]
struct Post {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    body: Option<String>,
}

impl Post {
    /// `None` when the post has no usable title
    fn into_quote(self) -> Option<Quote> {
        let text = self.title.filter(|t| !t.is_empty())?;
        let category = self
            .body
            .filter(|b| !b.is_empty())
            .unwrap_or_else(|| FALLBACK_CATEGORY.to_string());
        Some(Quote::new(text, category))
    }
}

/// reqwest-backed posts client
pub struct PostsClient {
    url: String,
    limit: usize,
    client: reqwest::Client,
}

impl PostsClient {
    #[must_use]
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
            limit: quotebook_core::config::defaults::FETCH_LIMIT,
            client: reqwest::Client::new(),
        }
    }

    /// Build a client from configuration
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.server_url).with_limit(config.fetch_limit)
    }

    /// Set how many posts are taken per fetch (builder pattern)
    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl RemoteQuotes for PostsClient {
    async fn fetch_quotes(&self) -> Result<Vec<Quote>, RemoteError> {
        log::debug!("GET {}", self.url);
        let resp = self.client.get(&self.url).send().await?;

        if !resp.status().is_success() {
            return Err(RemoteError::Status {
                method: "GET",
                url: self.url.clone(),
                status: resp.status().as_u16(),
            });
        }

        let posts: Vec<Post> = resp.json().await?;
        let quotes: Vec<Quote> = posts
            .into_iter()
            .take(self.limit)
            .filter_map(|post| {
                let quote = post.into_quote();
                if quote.is_none() {
                    log::debug!("Skipping remote post without a title");
                }
                quote
            })
            .collect();

        log::debug!("Fetched {} remote quotes", quotes.len());
        Ok(quotes)
    }

    async fn push_quotes(&self, quotes: &[Quote]) -> Result<(), RemoteError> {
        log::debug!("POST {} ({} quotes)", self.url, quotes.len());
        let resp = self.client.post(&self.url).json(quotes).send().await?;

        if !resp.status().is_success() {
            return Err(RemoteError::Status {
                method: "POST",
                url: self.url.clone(),
                status: resp.status().as_u16(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_mapping() {
        let post: Post =
            serde_json::from_str(r#"{"userId":1,"id":1,"title":"t","body":"b"}"#).unwrap();
        assert_eq!(post.into_quote(), Some(Quote::new("t", "b")));
    }

    #[test]
    fn test_post_without_body_uses_fallback() {
        let post: Post = serde_json::from_str(r#"{"title":"t","body":""}"#).unwrap();
        assert_eq!(post.into_quote().unwrap().category, FALLBACK_CATEGORY);

        let post: Post = serde_json::from_str(r#"{"title":"t","body":null}"#).unwrap();
        assert_eq!(post.into_quote().unwrap().category, FALLBACK_CATEGORY);
    }

    #[test]
    fn test_post_without_title_is_skipped() {
        for raw in [r#"{"title":null,"body":"b"}"#, r#"{"body":"b"}"#, r#"{"title":""}"#] {
            let post: Post = serde_json::from_str(raw).unwrap();
            assert_eq!(post.into_quote(), None);
        }
    }

    #[test]
    fn test_from_config() {
        let config = Config {
            server_url: "http://localhost:1/posts".to_string(),
            fetch_limit: 2,
            ..Config::default()
        };
        let client = PostsClient::from_config(&config);
        assert_eq!(client.url(), "http://localhost:1/posts");
        assert_eq!(client.limit, 2);
    }
}
