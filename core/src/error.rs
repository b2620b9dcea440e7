use std::fmt;

use http::{Method, StatusCode};
use serde::Deserialize;
use thiserror::Error;

/// The error type for KunaPay operations
#[derive(Error, Debug)]
#[error("{message}")]
pub struct Error {
    kind: ErrorKind,
    message: String,
    #[source]
    source: Option<anyhow::Error>,
}

/// The kind of error that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Required key material is empty or absent
    MissingCredential,

    /// Relative path cannot be resolved into a request URI
    InvalidPath,

    /// Configuration error (unparsable base URL, unsupported scheme, etc.)
    InvalidConfiguration,

    /// Request cannot be assembled (invalid header value, etc.)
    RequestInvalid,

    /// Request body cannot be encoded to JSON
    Serialization,

    /// The request never produced a response (DNS, connect, timeout, etc.)
    Transport,

    /// The service answered with a non-2xx status
    Api,

    /// A 2xx response body does not match the expected shape
    Decode,
}

impl Error {
    /// Create a new error with the given kind and message
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error
    pub fn with_source(mut self, source: impl Into<anyhow::Error>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Check if the request failed before reaching the service.
    ///
    /// Such errors may be retried by the caller; nothing in this crate retries them.
    pub fn is_transport_error(&self) -> bool {
        self.kind == ErrorKind::Transport
    }

    /// Get the error envelope reported by the service, if this is an [`ErrorKind::Api`] error.
    pub fn api_error(&self) -> Option<&ApiError> {
        self.source.as_ref()?.downcast_ref::<ApiError>()
    }

    /// Get the underlying cause downcast to `E`.
    ///
    /// Transport errors keep the HTTP client's own error here, decode and
    /// serialization errors keep the `serde_json::Error`.
    pub fn source_as<E>(&self) -> Option<&E>
    where
        E: fmt::Display + fmt::Debug + Send + Sync + 'static,
    {
        self.source.as_ref()?.downcast_ref::<E>()
    }
}

// Convenience constructors
impl Error {
    /// Create a missing credential error
    pub fn missing_credential(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::MissingCredential, message)
    }

    /// Create an invalid path error
    pub fn invalid_path(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidPath, message)
    }

    /// Create a config invalid error
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidConfiguration, message)
    }

    /// Create a request invalid error
    pub fn request_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::RequestInvalid, message)
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Serialization, message)
    }

    /// Create a transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Transport, message)
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Decode, message)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::MissingCredential => write!(f, "missing credential"),
            ErrorKind::InvalidPath => write!(f, "invalid path"),
            ErrorKind::InvalidConfiguration => write!(f, "invalid configuration"),
            ErrorKind::RequestInvalid => write!(f, "invalid request"),
            ErrorKind::Serialization => write!(f, "serialization error"),
            ErrorKind::Transport => write!(f, "transport error"),
            ErrorKind::Api => write!(f, "api error"),
            ErrorKind::Decode => write!(f, "decode error"),
        }
    }
}

/// Convenience type alias for Results
pub type Result<T> = std::result::Result<T, Error>;

/// A single `{code, message}` pair from an error response body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorDetail {
    /// Machine readable error code, e.g. `BAD_REQUEST`.
    #[serde(default)]
    pub code: String,
    /// Human readable description.
    #[serde(default)]
    pub message: String,
}

/// ApiError is the error envelope returned by the service for a non-2xx response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{method} {url}: {status} {errors:?}")]
pub struct ApiError {
    /// HTTP status of the response.
    pub status: StatusCode,
    /// Method of the request that failed.
    pub method: Method,
    /// Absolute URL of the request that failed.
    pub url: String,
    /// Errors reported by the service.
    ///
    /// Empty when the response had no body.
    pub errors: Vec<ErrorDetail>,
}

impl From<ApiError> for Error {
    fn from(err: ApiError) -> Self {
        Self::new(ErrorKind::Api, err.to_string()).with_source(anyhow::Error::new(err))
    }
}

// Common From implementations
impl From<http::Error> for Error {
    fn from(err: http::Error) -> Self {
        Self::request_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::header::InvalidHeaderValue> for Error {
    fn from(err: http::header::InvalidHeaderValue) -> Self {
        Self::request_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::uri::InvalidUri> for Error {
    fn from(err: http::uri::InvalidUri) -> Self {
        Self::invalid_path(err.to_string()).with_source(anyhow::Error::from(err))
    }
}
