//! Async client for the news content-delivery API.
//!
//! ```rust,ignore
//! use rt_client::prelude::*;
//!
//! let client = ReutersClient::with_config(ClientConfig::from_env())?;
//! let page = client.search_articles("technology", PageRequest::default()).await?;
//! for article in page.articles.unwrap_or_default() {
//!     println!("{} {}", article.title, article.canonical_url);
//! }
//! ```

pub mod aggregate;
pub mod client;
pub mod config;
pub mod dispatcher;
pub mod endpoint;
pub mod http;
pub mod logging;
pub mod memory;
pub mod normalize;
pub mod query;

pub use client::ReutersClient;
pub use config::ClientConfig;
pub use endpoint::Endpoint;
pub use normalize::ensure_full_url;
pub use query::PageRequest;

pub mod prelude {
    pub use super::aggregate::{KeywordSearch, KeywordSummary, TaggedArticle, TopicDigest};
    pub use super::{ClientConfig, PageRequest, ReutersClient};
    pub use rt_core::{ApiError, Article, Articles, Image, Pagination, Result, Section, Topic};
}
