//! Best-effort RSS scraping over raw XML text.
//!
//! This is deliberately not a conformant XML parser: items are located by
//! substring search, with no schema validation and no namespace awareness.
//! Feeds in the wild are messy and the goal is only to pull out the handful
//! of elements the aggregator cares about, tolerating CDATA wrapping and
//! attributes on opening tags.

use crate::item::{Article, Feed};

/// Extract the text between `<tag>` (or `<tag attr...>`) and `</tag>`,
/// unwrapping a CDATA section if present. Returns the first match only.
pub fn extract_element(xml: &str, tag: &str) -> Option<String> {
    let plain_open = format!("<{}>", tag);
    let attr_open = format!("<{} ", tag);
    let close = format!("</{}>", tag);

    let start = match xml.find(&plain_open) {
        Some(at) => at + plain_open.len(),
        None => {
            let at = xml.find(&attr_open)?;
            at + xml[at..].find('>')? + 1
        }
    };
    let end = xml[start..].find(&close)? + start;

    Some(strip_cdata(xml[start..end].trim()).to_string())
}

/// Collect every `<category>` value in an item block.
pub fn extract_categories(xml: &str) -> Vec<String> {
    let mut categories = Vec::new();
    let mut rest = xml;

    while let Some(at) = rest.find("<category") {
        let Some(gt) = rest[at..].find('>') else { break };
        let body = &rest[at + gt + 1..];
        let Some(end) = body.find("</category>") else { break };

        let value = strip_cdata(body[..end].trim());
        if !value.is_empty() {
            categories.push(value.to_string());
        }
        rest = &body[end + "</category>".len()..];
    }

    categories
}

fn strip_cdata(text: &str) -> &str {
    text.strip_prefix("<![CDATA[")
        .and_then(|t| t.strip_suffix("]]>"))
        .map(str::trim)
        .unwrap_or(text)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Parse one `<item>` block into a normalized article.
pub fn parse_item(item_xml: &str, source: &str) -> Article {
    let description = non_empty(extract_element(item_xml, "description"));
    let content = non_empty(extract_element(item_xml, "content:encoded"))
        .or_else(|| description.clone());

    Article {
        title: extract_element(item_xml, "title").unwrap_or_default(),
        link: extract_element(item_xml, "link").unwrap_or_default(),
        content,
        snippet: description,
        pub_date: extract_element(item_xml, "pubDate").unwrap_or_default(),
        author: non_empty(extract_element(item_xml, "dc:creator")),
        categories: extract_categories(item_xml),
        source: source.to_string(),
    }
}

/// Parse a whole feed document: channel metadata plus every item block.
pub fn parse_feed(xml: &str, source: &str) -> Feed {
    let mut items = Vec::new();

    for block in xml.split("<item>").skip(1) {
        let item_end = block.find("</item>").unwrap_or(block.len());
        items.push(parse_item(&block[..item_end], source));
    }

    // Channel-level elements appear before the first item, so a whole-document
    // search finds them rather than any per-item twin.
    let channel = xml.split("<item>").next().unwrap_or(xml);

    Feed {
        title: extract_element(channel, "title").unwrap_or_else(|| source.to_string()),
        description: non_empty(extract_element(channel, "description")),
        link: extract_element(channel, "link").unwrap_or_default(),
        items,
    }
}
