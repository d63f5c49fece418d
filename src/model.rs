//! Row types decoded from envelope `data` payloads.

use serde::Deserialize;

/// A category row as returned by `GET /api/categories`.
#[derive(Debug, Clone, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Number of feeds associated with this category, when the endpoint
    /// includes it.
    #[serde(default)]
    pub feed_count: Option<i64>,
}

/// A feed row as returned by `GET /api/feeds` and
/// `GET /api/categories/{id}/feeds`.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedSummary {
    pub id: i64,
    pub url: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Names of the categories this feed belongs to, when included.
    #[serde(default)]
    pub categories: Vec<String>,
}

fn default_enabled() -> bool {
    true
}

impl Category {
    /// Flatten into form-populate data, skipping absent optional fields so
    /// fields keep their defaults.
    pub fn to_form_data(&self) -> serde_json::Map<String, serde_json::Value> {
        let mut data = serde_json::Map::new();
        data.insert("name".to_string(), self.name.clone().into());
        if let Some(description) = &self.description {
            data.insert("description".to_string(), description.clone().into());
        }
        if let Some(color) = &self.color {
            data.insert("color".to_string(), color.clone().into());
        }
        if let Some(icon) = &self.icon {
            data.insert("icon".to_string(), icon.clone().into());
        }
        data.insert("enabled".to_string(), self.enabled.into());
        data
    }
}

impl FeedSummary {
    /// Display title: the feed's name, falling back to its URL.
    pub fn title(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.url)
    }
}

/// Payload shape of `GET /api/categories/{id}/feeds`.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryFeeds {
    #[serde(default)]
    pub feeds: Vec<FeedSummary>,
    #[serde(default)]
    pub total: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_decodes_with_defaults() {
        let cat: Category = serde_json::from_str(r#"{"id": 1, "name": "Tech"}"#).unwrap();
        assert_eq!(cat.name, "Tech");
        assert!(cat.enabled);
        assert!(cat.description.is_none());
        assert!(cat.feed_count.is_none());
    }

    #[test]
    fn test_feed_title_falls_back_to_url() {
        let feed: FeedSummary =
            serde_json::from_str(r#"{"id": 2, "url": "https://example.com/rss"}"#).unwrap();
        assert_eq!(feed.title(), "https://example.com/rss");

        let named: FeedSummary = serde_json::from_str(
            r#"{"id": 2, "url": "https://example.com/rss", "name": "Example"}"#,
        )
        .unwrap();
        assert_eq!(named.title(), "Example");
    }

    #[test]
    fn test_category_feeds_payload() {
        let payload: CategoryFeeds = serde_json::from_str(
            r#"{"feeds": [{"id": 1, "url": "https://a.example/rss"}], "total": 1}"#,
        )
        .unwrap();
        assert_eq!(payload.total, 1);
        assert_eq!(payload.feeds.len(), 1);
    }
}
