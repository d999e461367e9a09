//! TechPulse - a tech news feed aggregator
//!
//! This crate fetches a fixed set of RSS feeds concurrently, scrapes them
//! into normalized articles, merges everything into one newest-first list,
//! and buckets it into topical views (AI, gadgets, business, general tech)
//! for a page renderer to consume. When the live feeds yield nothing, a
//! static fallback dataset is substituted so there is always content.

pub mod aggregate;
pub mod fallback;
pub mod fetcher;
pub mod item;
pub mod parser;

pub use aggregate::{categorize_articles, fetch_all_articles, Digest, Topic, DISPLAY_LIMIT};
pub use fetcher::{default_sources, FeedSource, Fetcher};
pub use item::{Article, Feed};
