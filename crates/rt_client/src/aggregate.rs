//! Fan-out searches that combine several keyword queries into one report.
//!
//! Failures of a single keyword are recorded in its summary and never abort
//! the whole aggregation.

use futures::future::join_all;
use rt_core::{Article, Articles, Result};
use serde::Serialize;
use tracing::{info, warn};

use crate::client::ReutersClient;
use crate::query::PageRequest;

pub const MAX_KEYWORDS: usize = 5;
pub const MAX_RESULTS_PER_KEYWORD: u32 = 10;
pub const DEFAULT_TRENDING_TOPICS: [&str; 5] = [
    "technology",
    "artificial intelligence",
    "cryptocurrency",
    "climate change",
    "electric vehicles",
];
const DESCRIPTION_PREVIEW_CHARS: usize = 200;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeywordSummary {
    pub keyword: String,
    pub total_found: Option<i64>,
    pub returned_count: usize,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaggedArticle {
    /// The keyword whose search produced this article.
    pub keyword: String,
    pub article: Article,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeywordSearch {
    pub summaries: Vec<KeywordSummary>,
    pub combined: Vec<TaggedArticle>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopicDigest {
    pub topic: String,
    pub total_available: Option<i64>,
    /// Descriptions are shortened to a preview.
    pub articles: Vec<Article>,
    pub error: Option<String>,
}

impl ReutersClient {
    /// Searches each keyword concurrently and merges the results, in keyword order.
    ///
    /// Only the first [`MAX_KEYWORDS`] keywords are used, and `per_keyword`
    /// is capped at [`MAX_RESULTS_PER_KEYWORD`].
    pub async fn search_keywords<S: AsRef<str>>(
        &self,
        keywords: &[S],
        per_keyword: u32,
    ) -> KeywordSearch {
        let mut summaries = Vec::new();
        let mut combined = Vec::new();

        for (keyword, result) in self.search_each(keywords, per_keyword).await {
            let (summary, articles) = summarize(keyword, result);
            combined.extend(articles.into_iter().map(|article| TaggedArticle {
                keyword: summary.keyword.clone(),
                article,
            }));
            summaries.push(summary);
        }

        info!(keywords = summaries.len(), articles = combined.len(), "Keyword search finished");
        KeywordSearch { summaries, combined }
    }

    /// One short digest per topic, in the order given.
    ///
    /// `None` means [`DEFAULT_TRENDING_TOPICS`]; an explicit empty list yields no digests.
    pub async fn trending(&self, topics: Option<&[&str]>, per_topic: u32) -> Vec<TopicDigest> {
        let topics = topics.unwrap_or(&DEFAULT_TRENDING_TOPICS[..]);

        self.search_each(topics, per_topic)
            .await
            .into_iter()
            .map(|(topic, result)| {
                let (summary, articles) = summarize(topic, result);
                TopicDigest {
                    topic: summary.keyword,
                    total_available: summary.total_found,
                    articles: articles
                        .into_iter()
                        .map(|mut article| {
                            article.description = shorten(&article.description);
                            article
                        })
                        .collect(),
                    error: summary.error,
                }
            })
            .collect()
    }

    /// Runs one capped search per keyword and pairs every result with its keyword.
    async fn search_each<'a, S: AsRef<str>>(
        &self,
        keywords: &'a [S],
        per_keyword: u32,
    ) -> Vec<(&'a str, Result<Articles>)> {
        let keywords: Vec<&str> = keywords
            .iter()
            .take(MAX_KEYWORDS)
            .map(AsRef::as_ref)
            .collect();
        let page = PageRequest::new(0, per_keyword.min(MAX_RESULTS_PER_KEYWORD));

        let searches = keywords
            .iter()
            .map(|keyword| self.search_articles(keyword, page));
        let results = join_all(searches).await;

        keywords.into_iter().zip(results).collect()
    }
}

fn summarize(keyword: &str, result: Result<Articles>) -> (KeywordSummary, Vec<Article>) {
    match result {
        Ok(page) => {
            let articles = page.articles.unwrap_or_default();
            let summary = KeywordSummary {
                keyword: keyword.to_string(),
                total_found: page.pagination.total_size,
                returned_count: articles.len(),
                error: None,
            };
            (summary, articles)
        }
        Err(err) => {
            warn!(keyword, error = %err, "Keyword search failed");
            let summary = KeywordSummary {
                keyword: keyword.to_string(),
                total_found: None,
                returned_count: 0,
                error: Some(err.to_string()),
            };
            (summary, Vec::new())
        }
    }
}

fn shorten(text: &str) -> String {
    match text.char_indices().nth(DESCRIPTION_PREVIEW_CHARS) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}
