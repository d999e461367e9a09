mod aggregate;
mod fallback;
mod fetcher;
mod item;
mod parser;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::aggregate::{categorize_articles, fetch_all_articles};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "techpulse=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let articles = fetch_all_articles().await;
    info!("Aggregation pass complete: {} articles", articles.len());

    let digest = categorize_articles(&articles);
    info!(
        "Buckets: all={} tech={} ai={} gadgets={} business={}",
        digest.all.len(),
        digest.tech.len(),
        digest.ai.len(),
        digest.gadgets.len(),
        digest.business.len()
    );

    println!("{}", serde_json::to_string_pretty(&digest)?);

    Ok(())
}
