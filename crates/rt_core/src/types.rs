use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub caption: Option<String>,
    pub width: Option<i64>,
    pub height: Option<i64>,
    pub resizer_url: String,
}

/// An author or a subject topic. Both share the same wire shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    pub name: String,
    pub topic_url: Option<String>,
    pub byline: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub subtype: Option<String>,
    pub canonical_url: String,
    pub description: String,
    /// Body blocks exactly as the server sent them.
    pub content_elements: Option<Vec<Value>>,
    pub authors: Option<Vec<Topic>>,
    pub thumbnail: Option<Image>,
    /// ISO-8601 text, see [`Article::published_at`].
    pub published_time: String,
}

impl Article {
    /// Parses `published_time`, returning `None` when it is empty or not RFC 3339.
    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.published_time)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pagination {
    /// Size of the whole result set on the server, not of this page.
    pub total_size: Option<i64>,
}

/// One page of a listing query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Articles {
    pub pagination: Pagination,
    pub articles: Option<Vec<Article>>,
    pub topics: Option<Vec<Topic>>,
}

impl Articles {
    /// Number of articles on this page.
    pub fn len(&self) -> usize {
        self.articles.as_ref().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub name: String,
    pub id: String,
    pub children: Option<Vec<Section>>,
}

impl Section {
    /// Depth-first, pre-order walk over this section and all of its descendants.
    pub fn walk(&self) -> SectionWalk<'_> {
        SectionWalk { stack: vec![self] }
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Section> {
        self.walk().find(|section| section.id == id)
    }
}

pub struct SectionWalk<'a> {
    stack: Vec<&'a Section>,
}

impl<'a> Iterator for SectionWalk<'a> {
    type Item = &'a Section;

    fn next(&mut self) -> Option<Self::Item> {
        let section = self.stack.pop()?;
        if let Some(children) = &section.children {
            self.stack.extend(children.iter().rev());
        }
        Some(section)
    }
}

/// The `{statusCode, message, result}` wrapper around every API response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    #[serde(rename = "statusCode")]
    pub status_code: Option<i64>,
    pub message: Option<String>,
    pub result: Option<Value>,
}

impl ApiResponse {
    /// Reads the envelope out of an already parsed body. Fields of the wrong type count as absent.
    pub fn from_value(mut body: Value) -> Self {
        let status_code = body.get("statusCode").and_then(Value::as_i64);
        let message = body
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string);
        let result = body
            .get_mut("result")
            .map(Value::take)
            .filter(|result| !result.is_null());

        Self {
            status_code,
            message,
            result,
        }
    }
}
