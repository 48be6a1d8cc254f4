use std::sync::Arc;

use rt_core::{Article, Articles, Result, Section, Transport};
use serde_json::Value;
use tracing::{debug, info};

use crate::config::ClientConfig;
use crate::dispatcher::Dispatcher;
use crate::endpoint::Endpoint;
use crate::http::ReqwestTransport;
use crate::normalize::Normalizer;
use crate::query::{
    self, ArticleByUrlQuery, PageRequest, SearchQuery, SectionQuery, TopicQuery, SEARCH_ORDER,
};

/// Client for the news content API.
///
/// Cheap to clone. Clones share one transport, so concurrent calls from
/// independent tasks reuse the same connection pool and default headers.
#[derive(Clone)]
pub struct ReutersClient {
    dispatcher: Dispatcher,
    normalizer: Normalizer,
    website: String,
}

impl ReutersClient {
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let transport = ReqwestTransport::new(&config)?;
        Self::with_transport(config, Arc::new(transport))
    }

    /// Builds a client on top of any [`Transport`], e.g. [`crate::memory::MemoryTransport`].
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Result<Self> {
        let origin = config.origin()?;
        info!(origin = %origin, timeout = ?config.timeout, "Creating news API client");

        Ok(Self {
            dispatcher: Dispatcher::new(transport, origin.clone(), config.website.clone()),
            normalizer: Normalizer::new(origin).absolutize_topic_urls(config.absolutize_topic_urls),
            website: config.website,
        })
    }

    /// Fetches one article by its site path, e.g. `/world/some-story-2025-01-01/`.
    pub async fn fetch_article_by_url(&self, path: &str) -> Result<Article> {
        let query = query::encode(&ArticleByUrlQuery {
            website_url: path,
            website: &self.website,
        })?;

        let result = self.dispatcher.dispatch(Endpoint::ArticleByUrl, &query, None).await?;
        Ok(self.normalizer.article(&result))
    }

    /// Keyword search, newest first.
    pub async fn search_articles(&self, keyword: &str, page: PageRequest) -> Result<Articles> {
        let query = query::encode(&SearchQuery {
            keyword,
            offset: page.offset,
            orderby: SEARCH_ORDER,
            size: page.size,
            website: &self.website,
        })?;

        let result = self.dispatcher.dispatch(Endpoint::Search, &query, None).await?;
        Ok(self.normalizer.articles(&result))
    }

    /// Articles tagged with a stock symbol such as `.DJI`.
    ///
    /// An unknown symbol comes back from the server as a 404, which is
    /// reported here as an empty list rather than an error.
    pub async fn fetch_articles_by_stock_symbol(&self, symbol: &str) -> Result<Vec<Article>> {
        let query = query::stock_symbol(symbol, &self.website)?;

        match self.dispatcher.dispatch(Endpoint::StockSymbol, &query, None).await {
            Ok(result) => Ok(result
                .get("articles")
                .and_then(Value::as_array)
                .map(|articles| {
                    articles
                        .iter()
                        .map(|article| self.normalizer.article(article))
                        .collect()
                })
                .unwrap_or_default()),
            Err(err) if err.is_not_found() => {
                debug!(symbol, "Symbol not found, returning no articles");
                Ok(Vec::new())
            }
            Err(err) => Err(err),
        }
    }

    /// Articles under a topic path. A missing leading `/` is added.
    pub async fn fetch_articles_by_topic(&self, path: &str, page: PageRequest) -> Result<Articles> {
        let query = query::encode(&TopicQuery::new(path, page, &self.website))?;

        let result = self.dispatcher.dispatch(Endpoint::Topic, &query, None).await?;
        Ok(self.normalizer.articles(&result))
    }

    /// Recent stories in a section, e.g. `/markets/us/`.
    pub async fn fetch_articles_by_section(
        &self,
        path: &str,
        page: PageRequest,
    ) -> Result<Articles> {
        let query = query::encode(&SectionQuery {
            offset: page.offset,
            size: page.size,
            section_ids: path,
            website: &self.website,
        })?;

        let result = self.dispatcher.dispatch(Endpoint::Section, &query, None).await?;
        Ok(self.normalizer.articles(&result))
    }

    pub async fn fetch_site_hierarchy(&self) -> Result<Section> {
        let result = self.dispatcher.dispatch(Endpoint::SiteHierarchy, "", None).await?;
        Ok(self.normalizer.section(&result))
    }
}
