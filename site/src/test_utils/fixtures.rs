//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use crate::adapters::dom::{portfolio_document, Document};
use crate::domain::entities::{ArticleQuery, ArticleRecord};

/// Three articles, fewer than the default page size
pub fn test_articles() -> Vec<ArticleRecord> {
    vec![
        ArticleRecord::new(
            "Building a CLI in Rust",
            "https://dev.to/dallington256/building-a-cli-in-rust-1a2b",
        ),
        ArticleRecord::new(
            "Understanding async/await",
            "https://dev.to/dallington256/understanding-async-await-3c4d",
        ),
        ArticleRecord::new(
            "CSS grid for portfolios",
            "https://dev.to/dallington256/css-grid-for-portfolios-5e6f",
        ),
    ]
}

pub fn test_query() -> ArticleQuery {
    ArticleQuery::new("dallington256", 6)
}

/// Serialize records the way the API lists them (with extra fields)
pub fn articles_json(records: &[ArticleRecord]) -> String {
    let items: Vec<serde_json::Value> = records
        .iter()
        .enumerate()
        .map(|(i, r)| {
            serde_json::json!({
                "type_of": "article",
                "id": i + 1,
                "title": r.title,
                "url": r.url,
                "published": true,
                "tag_list": ["rust"],
            })
        })
        .collect();
    serde_json::Value::Array(items).to_string()
}

/// The default portfolio page
pub fn test_document() -> Document {
    portfolio_document("https://dev.to/dallington256")
}
