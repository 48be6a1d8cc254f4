use std::sync::Arc;

use rt_core::{ApiError, ApiResponse, RawResponse, Result, Transport};
use serde_json::Value;
use tracing::{debug, warn};

use crate::endpoint::Endpoint;

const BODY_PREVIEW_CHARS: usize = 500;

/// Sends one request per call and turns the raw answer into a `result` payload or an [`ApiError`].
#[derive(Clone)]
pub struct Dispatcher {
    transport: Arc<dyn Transport>,
    origin: String,
    website: String,
}

impl Dispatcher {
    pub fn new(
        transport: Arc<dyn Transport>,
        origin: impl Into<String>,
        website: impl Into<String>,
    ) -> Self {
        Self {
            transport,
            origin: origin.into(),
            website: website.into(),
        }
    }

    /// GETs `endpoint` with `query` as the `query` parameter. `extra_params`
    /// replaces the endpoint's default extras when given.
    pub async fn dispatch(
        &self,
        endpoint: Endpoint,
        query: &str,
        extra_params: Option<&[(&str, &str)]>,
    ) -> Result<Value> {
        let url = endpoint.url(&self.origin);

        let mut params = vec![("query".to_string(), query.to_string())];
        match extra_params {
            Some(extra) => params.extend(
                extra
                    .iter()
                    .map(|(name, value)| (name.to_string(), value.to_string())),
            ),
            None => params.extend(endpoint.default_params(&self.website)),
        }

        debug!(endpoint = endpoint.name(), url = %url, query, "Dispatching request");

        let raw = match self.transport.get(&url, &params).await {
            Ok(raw) => raw,
            Err(err) => {
                warn!(endpoint = endpoint.name(), error = %err, "Transport failure");
                return Err(err);
            }
        };

        debug!(
            endpoint = endpoint.name(),
            status = raw.status,
            body = preview(&raw.body),
            "Received response"
        );

        classify(raw).map_err(|err| {
            warn!(endpoint = endpoint.name(), error = %err, "Request rejected");
            err
        })
    }
}

/// Maps a raw response to the envelope's `result`, checking in order:
/// redirect, HTTP status, JSON body, envelope status and `result` presence.
pub fn classify(raw: RawResponse) -> Result<Value> {
    if (300..400).contains(&raw.status) {
        return Err(ApiError::Redirect {
            status: raw.status,
            location: raw.location.unwrap_or_else(|| "/".to_string()),
        });
    }

    if !(200..300).contains(&raw.status) {
        return Err(ApiError::External {
            status: raw.status,
            message: raw.body,
        });
    }

    let body: Value = serde_json::from_str(&raw.body)?;
    let envelope = ApiResponse::from_value(body);

    let status_code = envelope.status_code.unwrap_or(i64::from(raw.status));
    match envelope.result {
        Some(result) if (200..300).contains(&status_code) => Ok(result),
        _ => Err(ApiError::External {
            // Codes that cannot be an HTTP status are reported as a bad gateway.
            status: u16::try_from(status_code).unwrap_or(502),
            message: envelope
                .message
                .unwrap_or_else(|| "Unknown error".to_string()),
        }),
    }
}

fn preview(body: &str) -> &str {
    match body.char_indices().nth(BODY_PREVIEW_CHARS) {
        Some((idx, _)) => &body[..idx],
        None => body,
    }
}
