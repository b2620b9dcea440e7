//! Response classification and decoding.

use bytes::Bytes;
use http::{Method, Response};
use kunapay_core::{ApiError, Error, ErrorDetail, Result};
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// `{"data": ...}` wrapper returned by some operations.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    /// The wrapped payload.
    pub data: T,
}

#[derive(Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    errors: Vec<ErrorDetail>,
}

/// Classify a response by status.
///
/// 2xx responses are returned unchanged. Anything else becomes an
/// [`ApiError`] carrying the decoded error list.
pub fn check_response(method: &Method, url: &str, resp: Response<Bytes>) -> Result<Response<Bytes>> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    Err(ApiError {
        status,
        method: method.clone(),
        url: url.to_string(),
        errors: parse_errors(resp.body()),
    }
    .into())
}

fn parse_errors(body: &[u8]) -> Vec<ErrorDetail> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Vec::new();
    }

    match serde_json::from_slice::<ErrorResponse>(body) {
        Ok(v) => v.errors,
        // Not an error envelope, surface the raw text.
        Err(_) => vec![ErrorDetail {
            code: String::new(),
            message: String::from_utf8_lossy(body).trim().to_string(),
        }],
    }
}

/// Decode a JSON body into `T`.
pub fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    serde_json::from_slice(body)
        .map_err(|e| Error::decode("failed to decode response body").with_source(e))
}
