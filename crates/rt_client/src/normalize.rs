//! Conversion of raw `result` payloads into entities.
//!
//! Nothing in here fails: a missing or mistyped field falls back to its
//! default (empty text, or `None` for optional structures).

use rt_core::{Article, Articles, Image, Pagination, Section, Topic};
use serde_json::Value;

/// Turns `url` into an absolute URL under `origin`.
///
/// Empty stays empty, `http://` and `https://` URLs are kept as they are,
/// anything else is treated as a path on `origin`.
pub fn ensure_full_url(origin: &str, url: &str) -> String {
    if url.is_empty() {
        return String::new();
    }

    if url.starts_with("http://") || url.starts_with("https://") {
        return url.to_string();
    }

    if url.starts_with('/') {
        format!("{}{}", origin, url)
    } else {
        format!("{}/{}", origin, url)
    }
}

fn text(raw: &Value, key: &str) -> String {
    opt_text(raw, key).unwrap_or_default()
}

fn opt_text(raw: &Value, key: &str) -> Option<String> {
    raw.get(key).and_then(Value::as_str).map(str::to_string)
}

fn opt_int(raw: &Value, key: &str) -> Option<i64> {
    raw.get(key).and_then(Value::as_i64)
}

fn array<'a>(raw: &'a Value, key: &str) -> Option<&'a Vec<Value>> {
    raw.get(key).and_then(Value::as_array)
}

#[derive(Debug, Clone)]
pub struct Normalizer {
    origin: String,
    absolutize_topic_urls: bool,
}

impl Normalizer {
    pub fn new(origin: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            absolutize_topic_urls: false,
        }
    }

    /// Also absolutize `topics[].topic_url` in listings, like author URLs are.
    pub fn absolutize_topic_urls(mut self, enabled: bool) -> Self {
        self.absolutize_topic_urls = enabled;
        self
    }

    pub fn full_url(&self, url: &str) -> String {
        ensure_full_url(&self.origin, url)
    }

    pub fn article(&self, raw: &Value) -> Article {
        let thumbnail = raw
            .get("thumbnail")
            .filter(|thumbnail| thumbnail.is_object())
            .map(image);

        let authors = array(raw, "authors")
            .filter(|authors| !authors.is_empty())
            .map(|authors| {
                authors
                    .iter()
                    .map(|author| self.topic(author, true))
                    .collect()
            });

        Article {
            title: text(raw, "title"),
            subtype: opt_text(raw, "subtype"),
            canonical_url: self.full_url(&text(raw, "canonical_url")),
            description: text(raw, "description"),
            content_elements: array(raw, "content_elements").cloned(),
            authors,
            thumbnail,
            published_time: text(raw, "published_time"),
        }
    }

    pub fn articles(&self, raw: &Value) -> Articles {
        let pagination = Pagination {
            total_size: raw
                .get("pagination")
                .and_then(|pagination| opt_int(pagination, "total_size")),
        };

        let articles = array(raw, "articles")
            .map(|articles| articles.iter().map(|article| self.article(article)).collect());

        let topics = array(raw, "topics").map(|topics| {
            topics
                .iter()
                .map(|topic| self.topic(topic, self.absolutize_topic_urls))
                .collect()
        });

        Articles {
            pagination,
            articles,
            topics,
        }
    }

    pub fn section(&self, raw: &Value) -> Section {
        let children = array(raw, "children")
            .map(|children| children.iter().map(|child| self.section(child)).collect());

        Section {
            name: text(raw, "name"),
            id: text(raw, "id"),
            children,
        }
    }

    fn topic(&self, raw: &Value, absolutize: bool) -> Topic {
        let topic_url = opt_text(raw, "topic_url");

        Topic {
            name: text(raw, "name"),
            topic_url: if absolutize {
                topic_url.map(|url| self.full_url(&url))
            } else {
                topic_url
            },
            byline: text(raw, "byline"),
        }
    }
}

fn image(raw: &Value) -> Image {
    Image {
        caption: opt_text(raw, "caption"),
        width: opt_int(raw, "width"),
        height: opt_int(raw, "height"),
        resizer_url: text(raw, "resizer_url"),
    }
}
