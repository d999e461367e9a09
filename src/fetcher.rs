use futures::future::join_all;
use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::{info, warn};

use crate::item::Feed;
use crate::parser;

/// Identifying user agent sent with every feed request.
const USER_AGENT: &str =
    "Mozilla/5.0 (compatible; TechPulseBot/1.0; +https://techpulse.example.com)";

/// The fixed set of feeds the aggregator pulls from.
const FEEDS: &[(&str, &str)] = &[
    ("https://feeds.feedburner.com/TechCrunch", "TechCrunch"),
    ("https://www.theverge.com/rss/index.xml", "The Verge"),
    ("https://www.wired.com/feed/rss", "Wired"),
    ("https://feeds.arstechnica.com/arstechnica/index", "Ars Technica"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedSource {
    pub url: String,
    pub name: String,
}

impl FeedSource {
    pub fn new(url: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            name: name.into(),
        }
    }
}

/// The built-in feed table as owned sources.
pub fn default_sources() -> Vec<FeedSource> {
    FEEDS
        .iter()
        .map(|(url, name)| FeedSource::new(*url, *name))
        .collect()
}

/// Why a single feed fetch failed. Only ever logged; per-feed failures are
/// never surfaced to the aggregation caller.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected status {0}")]
    Status(StatusCode),
}

pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    pub fn new() -> Self {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }

    async fn try_fetch(&self, source: &FeedSource) -> Result<Feed, FetchError> {
        let response = self.client.get(&source.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let xml = response.text().await?;
        Ok(parser::parse_feed(&xml, &source.name))
    }

    /// Fetch and parse one feed. A failed fetch degrades to a feed with no
    /// items so one broken source never takes down the whole batch.
    pub async fn fetch_feed(&self, source: &FeedSource) -> Feed {
        match self.try_fetch(source).await {
            Ok(feed) => {
                info!("Fetched {} items from '{}'", feed.items.len(), source.name);
                feed
            }
            Err(e) => {
                warn!(
                    "Failed to fetch feed '{}' ({}): {}",
                    source.name, source.url, e
                );
                Feed {
                    title: source.name.clone(),
                    description: None,
                    link: source.url.clone(),
                    items: Vec::new(),
                }
            }
        }
    }

    /// Fetch every source concurrently and wait for all of them. There is no
    /// per-feed timeout or retry; each feed independently succeeds or comes
    /// back empty.
    pub async fn fetch_all(&self, sources: &[FeedSource]) -> Vec<Feed> {
        join_all(sources.iter().map(|s| self.fetch_feed(s))).await
    }
}

impl Default for Fetcher {
    fn default() -> Self {
        Self::new()
    }
}
