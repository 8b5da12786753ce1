//! Environmental news feed: response parsing, keyword classification and the
//! placeholder feed shown when the remote source is unavailable.

mod keywords;

use chrono::{DateTime, Utc};
use log::warn;
use serde::{Deserialize, Serialize};

pub use keywords::{classify, search_query};

pub const MAX_ARTICLES: usize = 15;
pub const IMAGE_PLACEHOLDER: &str = "🌍";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Upcycling,
    Recycling,
    Community,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter {
    All,
    Only(Category),
}

impl Filter {
    pub fn matches(self, category: Category) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(wanted) => wanted == category,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum NewsError {
    #[error("news response is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("news source reported status '{status}': {message}")]
    Status { status: String, message: String },
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Response {
    status: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    articles: Vec<RawArticle>,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawArticle {
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub url_to_image: Option<String>,
    /// Kept raw; a malformed stamp only drops the timestamp, not the article.
    pub published_at: Option<String>,
    #[serde(default)]
    pub source: RawSource,
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct RawSource {
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Article {
    pub title: String,
    pub description: String,
    pub url: String,
    pub image: String,
    pub published_at: Option<DateTime<Utc>>,
    pub source: String,
    pub category: Category,
}

impl Article {
    /// Classifies a raw feed entry, returning `None` for off-topic items.
    pub fn from_raw(raw: RawArticle) -> Option<Self> {
        let category = classify(raw.title.as_deref(), raw.description.as_deref())?;
        Some(Self {
            title: raw.title?,
            description: raw.description?,
            url: raw.url.unwrap_or_else(|| "#".to_string()),
            image: raw
                .url_to_image
                .filter(|image| !image.is_empty())
                .unwrap_or_else(|| IMAGE_PLACEHOLDER.to_string()),
            published_at: raw.published_at.as_deref().and_then(parse_timestamp),
            source: raw.source.name.unwrap_or_else(|| "Unknown".to_string()),
            category,
        })
    }
}

fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|stamp| stamp.with_timezone(&Utc))
}

pub fn process_response(json: &str) -> Result<Vec<Article>, NewsError> {
    let response: Response = serde_json::from_str(json)?;
    if response.status != "ok" {
        return Err(NewsError::Status {
            status: response.status,
            message: response.message.unwrap_or_default(),
        });
    }
    Ok(response
        .articles
        .into_iter()
        .filter_map(Article::from_raw)
        .take(MAX_ARTICLES)
        .collect())
}

pub fn fallback_articles() -> Vec<Article> {
    vec![Article {
        title: "GreenTech Innovation Reduces Carbon Emissions".to_string(),
        description: "A breakthrough in renewable energy technology promises significant reductions in carbon footprints.".to_string(),
        url: "#".to_string(),
        image: "🌱".to_string(),
        published_at: Some(Utc::now()),
        source: "GreenTech News".to_string(),
        category: Category::Upcycling,
    }]
}

pub fn load_or_fallback(result: Result<Vec<Article>, NewsError>) -> Vec<Article> {
    match result {
        Ok(articles) => articles,
        Err(err) => {
            warn!("failed to load news articles, using placeholder feed: {err}");
            fallback_articles()
        }
    }
}

pub fn filter(articles: &[Article], filter: Filter) -> Vec<&Article> {
    articles
        .iter()
        .filter(|article| filter.matches(article.category))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(title: &str, description: &str) -> serde_json::Value {
        serde_json::json!({
            "source": { "id": null, "name": "Wire" },
            "title": title,
            "description": description,
            "url": "https://example.org/a",
            "urlToImage": null,
            "publishedAt": "2024-05-01T08:30:00Z",
        })
    }

    #[test]
    fn keeps_relevant_articles_in_order() {
        let body = serde_json::json!({
            "status": "ok",
            "totalResults": 3,
            "articles": [
                entry("Wind farm opens", "New turbines power homes"),
                entry("Box office weekend", "A movie tops the charts"),
                entry("Town cuts waste", "Recycling rates climb"),
            ],
        });
        let articles = process_response(&body.to_string()).unwrap();
        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0].category, Category::Upcycling);
        assert_eq!(articles[0].image, IMAGE_PLACEHOLDER);
        assert_eq!(articles[0].source, "Wire");
        assert_eq!(articles[1].category, Category::Recycling);
        assert!(articles[1].published_at.is_some());
    }

    #[test]
    fn malformed_timestamp_keeps_the_article() {
        let mut odd = entry("Town cuts waste", "Recycling rates climb");
        odd["publishedAt"] = serde_json::json!("2024-05-01 08:30");
        let body = serde_json::json!({
            "status": "ok",
            "articles": [entry("Wind farm opens", "New turbines power homes"), odd],
        });
        let articles = load_or_fallback(process_response(&body.to_string()));
        assert_eq!(articles.len(), 2);
        assert!(articles[0].published_at.is_some());
        assert_eq!(articles[1].title, "Town cuts waste");
        assert_eq!(articles[1].published_at, None);
    }

    #[test]
    fn caps_the_feed() {
        let entries: Vec<_> = (0..20)
            .map(|i| entry(&format!("Solar record {i}"), "Output keeps rising"))
            .collect();
        let body = serde_json::json!({ "status": "ok", "articles": entries });
        let articles = process_response(&body.to_string()).unwrap();
        assert_eq!(articles.len(), MAX_ARTICLES);
        assert_eq!(articles[0].title, "Solar record 0");
    }

    #[test]
    fn error_status_falls_back_to_placeholder() {
        let body = r#"{"status":"error","code":"apiKeyInvalid","message":"bad key"}"#;
        let result = process_response(body);
        assert!(matches!(result, Err(NewsError::Status { .. })));
        let articles = load_or_fallback(result);
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].source, "GreenTech News");
    }

    #[test]
    fn filter_selects_by_category() {
        let mut articles = fallback_articles();
        let drive = Article {
            category: Category::Community,
            ..articles[0].clone()
        };
        articles.push(drive);
        assert_eq!(filter(&articles, Filter::All).len(), 2);
        let community = filter(&articles, Filter::Only(Category::Community));
        assert_eq!(community.len(), 1);
        assert_eq!(community[0].category, Category::Community);
    }
}
