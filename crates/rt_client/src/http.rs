use async_trait::async_trait;
use reqwest::header::{
    HeaderMap, HeaderName, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, COOKIE, LOCATION, ORIGIN,
    REFERER, USER_AGENT,
};
use reqwest::redirect::Policy;
use reqwest::Client;
use rt_core::{ApiError, RawResponse, Result, Transport};

use crate::config::ClientConfig;

const ACCEPT_JSON: &str = "application/json, text/plain, */*";

/// `reqwest`-backed transport. One pooled connection set, shared by every clone of the client.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let origin = config.origin()?;
        let client = Client::builder()
            .default_headers(default_headers(config, &origin)?)
            .timeout(config.timeout)
            .redirect(Policy::none())
            .build()?;

        Ok(Self { client })
    }
}

fn default_headers(config: &ClientConfig, origin: &str) -> Result<HeaderMap> {
    let referer = format!("{}/", origin);
    let entries: [(HeaderName, &str); 5] = [
        (USER_AGENT, config.user_agent.as_str()),
        (ACCEPT, ACCEPT_JSON),
        (ACCEPT_LANGUAGE, config.accept_language.as_str()),
        (REFERER, referer.as_str()),
        (ORIGIN, origin),
    ];

    let mut headers = HeaderMap::new();
    for (name, value) in entries {
        headers.insert(name, header_value(value)?);
    }

    if let Some(cookie) = &config.cookie {
        let mut value = header_value(cookie)?;
        value.set_sensitive(true);
        headers.insert(COOKIE, value);
    }

    Ok(headers)
}

fn header_value(value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value)
        .map_err(|e| ApiError::Internal(format!("Invalid header value: {}", e)))
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(&self, url: &str, params: &[(String, String)]) -> Result<RawResponse> {
        let response = self.client.get(url).query(params).send().await?;

        let status = response.status().as_u16();
        let location = response
            .headers()
            .get(LOCATION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let body = response.text().await?;

        Ok(RawResponse {
            status,
            location,
            body,
        })
    }
}
