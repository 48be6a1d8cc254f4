//! JSON payloads carried in the `query` parameter.

use rt_core::Result;
use serde::Serialize;

pub const SEARCH_ORDER: &str = "display_date:desc";

/// Offset and page size of a listing query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub offset: u32,
    pub size: u32,
}

impl PageRequest {
    pub fn new(offset: u32, size: u32) -> Self {
        Self { offset, size }
    }

    /// The page right after this one.
    pub fn next_page(self) -> Self {
        Self {
            offset: self.offset.saturating_add(self.size),
            size: self.size,
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self { offset: 0, size: 20 }
    }
}

#[derive(Debug, Serialize)]
pub struct ArticleByUrlQuery<'a> {
    pub website_url: &'a str,
    pub website: &'a str,
}

#[derive(Debug, Serialize)]
pub struct SearchQuery<'a> {
    pub keyword: &'a str,
    pub offset: u32,
    pub orderby: &'a str,
    pub size: u32,
    pub website: &'a str,
}

#[derive(Debug, Serialize)]
pub struct TopicQuery<'a> {
    pub offset: u32,
    pub size: u32,
    pub topic_url: String,
    pub website: &'a str,
}

impl<'a> TopicQuery<'a> {
    pub fn new(path: &str, page: PageRequest, website: &'a str) -> Self {
        let topic_url = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{}", path)
        };

        Self {
            offset: page.offset,
            size: page.size,
            topic_url,
            website,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SectionQuery<'a> {
    pub offset: u32,
    pub size: u32,
    pub section_ids: &'a str,
    pub website: &'a str,
}

pub fn encode<T: Serialize>(query: &T) -> Result<String> {
    Ok(serde_json::to_string(query)?)
}

/// The stock-symbol endpoint matches on the literal text, so this payload is
/// written by hand: compact, fields in the order website, symbol, size.
pub fn stock_symbol(symbol: &str, website: &str) -> Result<String> {
    Ok(format!(
        r#"{{"website":{},"symbol":{},"size":1}}"#,
        serde_json::to_string(website)?,
        serde_json::to_string(symbol)?
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_symbol_payload_is_literal() {
        assert_eq!(
            stock_symbol(".DJI", "reuters").unwrap(),
            r#"{"website":"reuters","symbol":".DJI","size":1}"#
        );
    }

    #[test]
    fn test_stock_symbol_escapes_symbol() {
        assert_eq!(
            stock_symbol(r#"A"B"#, "reuters").unwrap(),
            r#"{"website":"reuters","symbol":"A\"B","size":1}"#
        );
    }

    #[test]
    fn test_search_payload() {
        let query = SearchQuery {
            keyword: "technology",
            offset: 0,
            orderby: SEARCH_ORDER,
            size: 20,
            website: "reuters",
        };
        assert_eq!(
            encode(&query).unwrap(),
            r#"{"keyword":"technology","offset":0,"orderby":"display_date:desc","size":20,"website":"reuters"}"#
        );
    }

    #[test]
    fn test_topic_path_gets_leading_slash() {
        let page = PageRequest::default();
        assert_eq!(TopicQuery::new("markets/us", page, "reuters").topic_url, "/markets/us");
        assert_eq!(TopicQuery::new("/markets/us", page, "reuters").topic_url, "/markets/us");
    }

    #[test]
    fn test_page_request() {
        let page = PageRequest::default();
        assert_eq!(page, PageRequest::new(0, 20));
        assert_eq!(page.next_page(), PageRequest::new(20, 20));
    }
}
