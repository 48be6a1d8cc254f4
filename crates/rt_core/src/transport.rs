use async_trait::async_trait;
use crate::Result;

/// What came back over the wire, before any classification.
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    /// Value of the `Location` header, if the server sent one.
    pub location: Option<String>,
    pub body: String,
}

#[async_trait]
pub trait Transport: Send + Sync {
    /// Issue a single GET with the given query parameters.
    ///
    /// Implementations must not follow redirects and must report network
    /// failures as `ApiError::Internal`.
    async fn get(&self, url: &str, params: &[(String, String)]) -> Result<RawResponse>;
}
