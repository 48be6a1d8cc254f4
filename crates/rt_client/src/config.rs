use std::env;
use std::fmt;
use std::time::Duration;

use rt_core::{ApiError, Result};
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://www.reuters.com";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_WEBSITE: &str = "reuters";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/121.0.0.0 Safari/537.36";
pub const DEFAULT_ACCEPT_LANGUAGE: &str = "en-GB,en;q=0.9";

/// Settings fixed for the lifetime of a client.
#[derive(Clone)]
pub struct ClientConfig {
    /// Origin used both for the API endpoints and for absolutizing relative links.
    pub base_url: String,
    /// Applied to every request. There is no per-call override.
    pub timeout: Duration,
    pub user_agent: String,
    pub accept_language: String,
    /// Session cookie sent with every request. Supplied by the caller, never built in.
    pub cookie: Option<String>,
    /// Value of the `website` field in query payloads.
    pub website: String,
    /// Also absolutize `topics[].topic_url` in listing results. Off by default,
    /// so those URLs stay exactly as the server sent them.
    pub absolutize_topic_urls: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            accept_language: DEFAULT_ACCEPT_LANGUAGE.to_string(),
            cookie: None,
            website: DEFAULT_WEBSITE.to_string(),
            absolutize_topic_urls: false,
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .field("accept_language", &self.accept_language)
            .field("cookie", &self.cookie.as_deref().map(|_| "<redacted>"))
            .field("website", &self.website)
            .field("absolutize_topic_urls", &self.absolutize_topic_urls)
            .finish()
    }
}

impl ClientConfig {
    /// Defaults overridden by `RT_BASE_URL`, `RT_TIMEOUT_SECS`, `RT_COOKIE`,
    /// `RT_USER_AGENT`, `RT_WEBSITE` and `RT_ABSOLUTIZE_TOPIC_URLS`.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(base_url) = env::var("RT_BASE_URL") {
            config.base_url = base_url;
        }
        if let Ok(secs) = env::var("RT_TIMEOUT_SECS") {
            match secs.trim().parse::<u64>() {
                Ok(secs) => config.timeout = Duration::from_secs(secs),
                Err(e) => {
                    tracing::warn!(value = %secs, error = %e, "Ignoring invalid RT_TIMEOUT_SECS")
                }
            }
        }
        if let Ok(cookie) = env::var("RT_COOKIE") {
            if !cookie.trim().is_empty() {
                config.cookie = Some(cookie);
            }
        }
        if let Ok(user_agent) = env::var("RT_USER_AGENT") {
            config.user_agent = user_agent;
        }
        if let Ok(website) = env::var("RT_WEBSITE") {
            config.website = website;
        }
        if let Ok(flag) = env::var("RT_ABSOLUTIZE_TOPIC_URLS") {
            config.absolutize_topic_urls = matches!(flag.trim(), "1" | "true" | "yes");
        }

        config
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_cookie(mut self, cookie: impl Into<String>) -> Self {
        self.cookie = Some(cookie.into());
        self
    }

    /// The validated base URL as `scheme://host[:port]`, without a trailing slash.
    pub fn origin(&self) -> Result<String> {
        let url = Url::parse(&self.base_url)
            .map_err(|e| ApiError::Internal(format!("Invalid base URL {}: {}", self.base_url, e)))?;

        if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
            return Err(ApiError::Internal(format!(
                "Invalid base URL {}: expected an http(s) origin",
                self.base_url
            )));
        }

        Ok(url.origin().ascii_serialization())
    }
}
