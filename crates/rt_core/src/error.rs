use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    /// The server answered with a 3xx instead of content. Redirects are never followed.
    #[error("Redirect {status} to {location}")]
    Redirect { status: u16, location: String },

    /// The remote API rejected the request, at the HTTP level or inside the envelope.
    #[error("External error {status}: {message}")]
    External { status: u16, message: String },

    /// Transport or decoding failure on our side of the wire.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ApiError::Redirect { status, .. } | ApiError::External { status, .. } => Some(*status),
            ApiError::Internal(_) => None,
        }
    }

    pub fn location(&self) -> Option<&str> {
        match self {
            ApiError::Redirect { location, .. } => Some(location),
            _ => None,
        }
    }

    /// True for an `External` error carrying 404, which callers usually treat as "no results".
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::External { status: 404, .. })
    }

    pub fn is_redirect(&self) -> bool {
        matches!(self, ApiError::Redirect { .. })
    }

    pub fn is_internal(&self) -> bool {
        matches!(self, ApiError::Internal(_))
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Internal(format!("Request failed: {}", err))
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Internal(format!("Failed to parse JSON response: {}", err))
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_variant() {
        let redirect = ApiError::Redirect { status: 301, location: "/foo".to_string() };
        assert_eq!(redirect.to_string(), "Redirect 301 to /foo");

        let external = ApiError::External { status: 404, message: "Not Found".to_string() };
        assert_eq!(external.to_string(), "External error 404: Not Found");

        let internal = ApiError::Internal("Request failed: connection refused".to_string());
        assert_eq!(internal.to_string(), "Internal error: Request failed: connection refused");
    }

    #[test]
    fn test_accessors() {
        let redirect = ApiError::Redirect { status: 302, location: "/".to_string() };
        assert_eq!(redirect.status_code(), Some(302));
        assert_eq!(redirect.location(), Some("/"));
        assert!(redirect.is_redirect());
        assert!(!redirect.is_not_found());

        let not_found = ApiError::External { status: 404, message: String::new() };
        assert!(not_found.is_not_found());
        assert_eq!(not_found.location(), None);

        let server_error = ApiError::External { status: 500, message: String::new() };
        assert!(!server_error.is_not_found());

        let internal = ApiError::Internal("boom".to_string());
        assert_eq!(internal.status_code(), None);
        assert!(internal.is_internal());
    }

    #[test]
    fn test_json_error_becomes_internal() {
        let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let api_err: ApiError = err.into();
        assert!(api_err.is_internal());
        assert!(api_err.to_string().contains("Failed to parse JSON response"));
    }
}
