//! Merging fetched feeds into one date-sorted list and bucketing it into
//! topical views for display.

use std::cmp::Reverse;

use serde::Serialize;
use tracing::{info, warn};

use crate::fallback;
use crate::fetcher::{default_sources, FeedSource, Fetcher};
use crate::item::Article;

/// How many items each display bucket holds.
pub const DISPLAY_LIMIT: usize = 8;

const AI_KEYWORDS: &[&str] = &[
    "ai",
    "artificial intelligence",
    "machine learning",
    "neural network",
    "deep learning",
    "gpt",
    "llm",
    "chatgpt",
];

const GADGET_KEYWORDS: &[&str] = &[
    "iphone",
    "android",
    "smartphone",
    "laptop",
    "headphone",
    "earbuds",
    "tablet",
    "watch",
    "wearable",
    "gadget",
    "device",
    "hardware",
];

const BUSINESS_KEYWORDS: &[&str] = &[
    "business",
    "startup",
    "funding",
    "ipo",
    "acquisition",
    "merger",
    "stock",
    "investor",
    "venture capital",
    "ceo",
    "revenue",
    "profit",
];

/// Fetch the built-in feed table and return one flat list, newest first.
///
/// Never fails: broken feeds come back empty, and if every feed comes back
/// empty the static fallback dataset is substituted so callers always have
/// content to render.
pub async fn fetch_all_articles() -> Vec<Article> {
    aggregate_sources(&default_sources()).await
}

/// Same as [`fetch_all_articles`] but over an explicit source list.
pub async fn aggregate_sources(sources: &[FeedSource]) -> Vec<Article> {
    let fetcher = Fetcher::new();
    let feeds = fetcher.fetch_all(sources).await;

    let mut articles: Vec<Article> = feeds.into_iter().flat_map(|f| f.items).collect();

    if articles.is_empty() {
        warn!("All feeds failed or were empty, substituting fallback dataset");
        return fallback::articles().to_vec();
    }

    info!("Aggregated {} articles from {} feeds", articles.len(), sources.len());
    articles.sort_by_key(|a| Reverse(a.published_at()));
    articles
}

/// Topical display bucket for one article. Assignment is priority-ordered:
/// AI wins over gadgets, gadgets over business, and anything matching none
/// of the keyword sets falls through to general tech.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    Ai,
    Gadgets,
    Business,
    Tech,
}

/// Case-insensitive keyword classification over title + snippet + tags.
pub fn classify(article: &Article) -> Topic {
    let text = searchable_text(article);

    if matches_any(&text, AI_KEYWORDS) {
        Topic::Ai
    } else if matches_any(&text, GADGET_KEYWORDS) {
        Topic::Gadgets
    } else if matches_any(&text, BUSINESS_KEYWORDS) {
        Topic::Business
    } else {
        Topic::Tech
    }
}

fn searchable_text(article: &Article) -> String {
    format!(
        "{} {} {}",
        article.title,
        article.snippet.as_deref().unwrap_or(""),
        article.categories.join(" ")
    )
    .to_lowercase()
}

fn matches_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| text.contains(k))
}

/// The categorized view a page renders from. Buckets are disjoint; `all` is
/// the unfiltered head of the aggregated list.
#[derive(Debug, Clone, Serialize)]
pub struct Digest {
    pub all: Vec<Article>,
    pub tech: Vec<Article>,
    pub ai: Vec<Article>,
    pub gadgets: Vec<Article>,
    pub business: Vec<Article>,
}

/// Bucket a sorted article list into disjoint topical views, each truncated
/// to [`DISPLAY_LIMIT`]. Input order is preserved within every bucket.
pub fn categorize_articles(articles: &[Article]) -> Digest {
    let mut tech = Vec::new();
    let mut ai = Vec::new();
    let mut gadgets = Vec::new();
    let mut business = Vec::new();

    for article in articles {
        let bucket = match classify(article) {
            Topic::Ai => &mut ai,
            Topic::Gadgets => &mut gadgets,
            Topic::Business => &mut business,
            Topic::Tech => &mut tech,
        };
        if bucket.len() < DISPLAY_LIMIT {
            bucket.push(article.clone());
        }
    }

    Digest {
        all: articles.iter().take(DISPLAY_LIMIT).cloned().collect(),
        tech,
        ai,
        gadgets,
        business,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(title: &str, snippet: &str, categories: &[&str]) -> Article {
        Article {
            title: title.to_string(),
            link: "https://example.com".to_string(),
            content: None,
            snippet: if snippet.is_empty() {
                None
            } else {
                Some(snippet.to_string())
            },
            pub_date: "Mon, 09 Dec 2024 12:00:00 GMT".to_string(),
            author: None,
            categories: categories.iter().map(|c| c.to_string()).collect(),
            source: "Test".to_string(),
        }
    }

    mod classify_tests {
        use super::*;

        #[test]
        fn test_ai_from_category_tag() {
            let a = article("OpenAI Releases New Model", "", &["AI"]);
            assert_eq!(classify(&a), Topic::Ai);
        }

        #[test]
        fn test_ai_from_title_keyword() {
            let a = article("GPT breakthrough announced", "", &[]);
            assert_eq!(classify(&a), Topic::Ai);
        }

        #[test]
        fn test_ai_wins_over_gadgets_and_business() {
            // Matches machine learning, smartphone and funding keywords;
            // priority order assigns it to AI only.
            let a = article(
                "Machine learning smartphone startup lands funding",
                "",
                &[],
            );
            assert_eq!(classify(&a), Topic::Ai);
        }

        #[test]
        fn test_gadgets_win_over_business() {
            let a = article("New laptop maker posts record revenue", "", &[]);
            assert_eq!(classify(&a), Topic::Gadgets);
        }

        #[test]
        fn test_business_from_snippet() {
            let a = article(
                "Quarterly results",
                "The startup reported strong growth this quarter.",
                &[],
            );
            assert_eq!(classify(&a), Topic::Business);
        }

        #[test]
        fn test_classification_is_case_insensitive() {
            let a = article("CHATGPT Update", "", &[]);
            assert_eq!(classify(&a), Topic::Ai);
        }

        #[test]
        fn test_no_keyword_match_is_tech() {
            let a = article("Big rocket goes to orbit", "Space news.", &[]);
            assert_eq!(classify(&a), Topic::Tech);
        }
    }

    mod categorize_tests {
        use super::*;

        #[test]
        fn test_buckets_are_disjoint() {
            let articles = vec![
                article("Neural network pruning", "", &[]),
                article("New earbuds reviewed", "", &[]),
                article("Acquisition closes", "", &[]),
                article("Kernel release notes", "", &[]),
            ];

            let digest = categorize_articles(&articles);

            assert_eq!(digest.ai.len(), 1);
            assert_eq!(digest.gadgets.len(), 1);
            assert_eq!(digest.business.len(), 1);
            assert_eq!(digest.tech.len(), 1);
            assert_eq!(digest.tech[0].title, "Kernel release notes");
        }

        #[test]
        fn test_tech_excludes_other_topics() {
            let articles = vec![
                article("LLM inference on a laptop", "", &[]),
                article("Something about compilers", "", &[]),
            ];

            let digest = categorize_articles(&articles);

            // First item matches both AI and gadget keywords; AI claims it and
            // it must not leak into tech.
            assert!(digest.tech.iter().all(|a| a.title != "LLM inference on a laptop"));
            assert_eq!(digest.tech.len(), 1);
        }

        #[test]
        fn test_all_bucket_truncated_to_display_limit() {
            let articles: Vec<Article> = (0..50)
                .map(|i| article(&format!("Untagged story {}", i), "", &[]))
                .collect();

            let digest = categorize_articles(&articles);

            assert_eq!(digest.all.len(), DISPLAY_LIMIT);
            // Sort order of the input is preserved.
            assert_eq!(digest.all[0].title, "Untagged story 0");
            assert_eq!(digest.all[7].title, "Untagged story 7");
        }

        #[test]
        fn test_every_bucket_truncated() {
            let mut articles = Vec::new();
            for i in 0..20 {
                articles.push(article(&format!("ChatGPT story {}", i), "", &[]));
                articles.push(article(&format!("Tablet story {}", i), "", &[]));
            }

            let digest = categorize_articles(&articles);

            assert_eq!(digest.ai.len(), DISPLAY_LIMIT);
            assert_eq!(digest.gadgets.len(), DISPLAY_LIMIT);
        }

        #[test]
        fn test_empty_input() {
            let digest = categorize_articles(&[]);

            assert!(digest.all.is_empty());
            assert!(digest.tech.is_empty());
            assert!(digest.ai.is_empty());
            assert!(digest.gadgets.is_empty());
            assert!(digest.business.is_empty());
        }
    }
}
