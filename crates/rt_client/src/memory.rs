//! Scripted in-process transport, for tests and offline callers.

use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use rt_core::{ApiError, RawResponse, Result, Transport};
use serde_json::Value;

#[derive(Debug, Clone)]
enum Reply {
    Response(RawResponse),
    Fail(String),
}

/// A request as the transport saw it.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub url: String,
    pub params: Vec<(String, String)>,
}

impl RecordedRequest {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Answers each GET with the reply registered for the longest matching URL
/// suffix. Unmatched URLs get a plain 404.
#[derive(Debug, Default)]
pub struct MemoryTransport {
    routes: Mutex<Vec<(String, Reply)>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MemoryTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, url_suffix: &str, response: RawResponse) {
        self.route(url_suffix, Reply::Response(response));
    }

    /// Registers a JSON body with the given HTTP status.
    pub fn respond_json(&self, url_suffix: &str, status: u16, body: Value) {
        self.respond(
            url_suffix,
            RawResponse {
                status,
                location: None,
                body: body.to_string(),
            },
        );
    }

    /// Registers a `200` envelope wrapping `result`.
    pub fn respond_result(&self, url_suffix: &str, result: Value) {
        self.respond_json(
            url_suffix,
            200,
            serde_json::json!({ "statusCode": 200, "result": result }),
        );
    }

    /// Makes the transport itself fail, as a refused connection would.
    pub fn fail(&self, url_suffix: &str, message: &str) {
        self.route(url_suffix, Reply::Fail(message.to_string()));
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        lock(&self.requests).clone()
    }

    fn route(&self, url_suffix: &str, reply: Reply) {
        let mut routes = lock(&self.routes);
        routes.retain(|(suffix, _)| suffix != url_suffix);
        routes.push((url_suffix.to_string(), reply));
    }
}

#[async_trait]
impl Transport for MemoryTransport {
    async fn get(&self, url: &str, params: &[(String, String)]) -> Result<RawResponse> {
        lock(&self.requests).push(RecordedRequest {
            url: url.to_string(),
            params: params.to_vec(),
        });

        let reply = lock(&self.routes)
            .iter()
            .filter(|(suffix, _)| url.ends_with(suffix.as_str()))
            .max_by_key(|(suffix, _)| suffix.len())
            .map(|(_, reply)| reply.clone());

        match reply {
            Some(Reply::Response(response)) => Ok(response),
            Some(Reply::Fail(message)) => {
                Err(ApiError::Internal(format!("Request failed: {}", message)))
            }
            None => Ok(RawResponse {
                status: 404,
                location: None,
                body: "Not Found".to_string(),
            }),
        }
    }
}
