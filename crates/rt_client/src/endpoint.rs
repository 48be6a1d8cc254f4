const FETCH_PATH: &str = "/pf/api/v3/content/fetch/";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    ArticleByUrl,
    Search,
    StockSymbol,
    Topic,
    Section,
    SiteHierarchy,
}

impl Endpoint {
    pub const ALL: [Endpoint; 6] = [
        Endpoint::ArticleByUrl,
        Endpoint::Search,
        Endpoint::StockSymbol,
        Endpoint::Topic,
        Endpoint::Section,
        Endpoint::SiteHierarchy,
    ];

    /// Last path segment of the endpoint on the server.
    pub fn name(self) -> &'static str {
        match self {
            Endpoint::ArticleByUrl => "article-by-id-or-url-v1",
            Endpoint::Search => "articles-by-search-v2",
            Endpoint::StockSymbol => "articles-by-stock-symbol-v1",
            Endpoint::Topic => "articles-by-topic-v1",
            Endpoint::Section => "recent-stories-by-sections-v1",
            Endpoint::SiteHierarchy => "site-hierarchy-by-name-v1",
        }
    }

    pub fn url(self, origin: &str) -> String {
        format!("{}{}{}", origin, FETCH_PATH, self.name())
    }

    /// Parameters sent next to `query` when the caller supplies none of its own.
    /// Only the stock-symbol endpoint needs any.
    pub fn default_params(self, website: &str) -> Vec<(String, String)> {
        match self {
            Endpoint::StockSymbol => vec![
                ("d".to_string(), "303".to_string()),
                ("mxId".to_string(), "00000000".to_string()),
                ("_website".to_string(), website.to_string()),
            ],
            _ => Vec::new(),
        }
    }
}
