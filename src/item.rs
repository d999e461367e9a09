use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One normalized news entry extracted from an RSS source.
///
/// Items are immutable once parsed and carry no identity beyond their
/// content; no deduplication is performed across feeds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub link: String,
    /// Full content when the feed provides `content:encoded`, otherwise
    /// the description, otherwise nothing.
    pub content: Option<String>,
    /// Short summary, taken from the feed's `description`.
    pub snippet: Option<String>,
    /// Raw publish timestamp as it appeared in the feed.
    pub pub_date: String,
    pub author: Option<String>,
    pub categories: Vec<String>,
    /// Name of the originating feed, e.g. "TechCrunch".
    pub source: String,
}

impl Article {
    /// Best-effort parse of `pub_date`. RSS feeds conventionally use
    /// RFC 2822; some emit RFC 3339. Anything else compares as the Unix
    /// epoch so unparsable items sort oldest.
    pub fn published_at(&self) -> DateTime<Utc> {
        let raw = self.pub_date.trim();

        if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
            return dt.with_timezone(&Utc);
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return dt.with_timezone(&Utc);
        }

        DateTime::<Utc>::UNIX_EPOCH
    }
}

/// One parsed feed: channel metadata plus its items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feed {
    pub title: String,
    pub description: Option<String>,
    pub link: String,
    pub items: Vec<Article>,
}
