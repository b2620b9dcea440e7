//! Reqwest-based HTTP transport for the KunaPay client.
//!
//! `ReqwestHttpSend` implements [`HttpSend`] on top of a [`reqwest::Client`].
//! Pass a custom client to control timeouts, proxies or TLS:
//!
//! ```no_run
//! use kunapay_core::Context;
//! use kunapay_http_send_reqwest::ReqwestHttpSend;
//! use std::time::Duration;
//!
//! # fn main() -> anyhow::Result<()> {
//! let client = reqwest::Client::builder()
//!     .timeout(Duration::from_secs(30))
//!     .build()?;
//! let ctx = Context::new().with_http_send(ReqwestHttpSend::new(client));
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;
use bytes::Bytes;
use http_body_util::BodyExt;
use kunapay_core::{Error, HttpSend, Result};
use reqwest::{Client, Request};

/// HttpSend implementation backed by reqwest.
///
/// `Default` uses `reqwest::Client::new()`, i.e. reqwest's default timeouts and pooling.
#[derive(Debug, Default, Clone)]
pub struct ReqwestHttpSend {
    client: Client,
}

impl ReqwestHttpSend {
    /// Create a new ReqwestHttpSend with a reqwest::Client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpSend for ReqwestHttpSend {
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        let req = Request::try_from(req)
            .map_err(|e| Error::request_invalid("failed to convert request").with_source(e))?;
        let resp: http::Response<_> = self
            .client
            .execute(req)
            .await
            .map_err(|e| Error::transport("failed to send request").with_source(e))?
            .into();

        let (parts, body) = resp.into_parts();
        let bs = BodyExt::collect(body)
            .await
            .map(|buf| buf.to_bytes())
            .map_err(|e| Error::transport("failed to read response body").with_source(e))?;
        Ok(http::Response::from_parts(parts, bs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kunapay_core::ErrorKind;

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        let send = ReqwestHttpSend::default();
        // Port 1 is reserved and nothing listens on it.
        let req = http::Request::get("http://127.0.0.1:1/v1/")
            .body(Bytes::new())
            .unwrap();

        let err = send.http_send(req).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Transport);
        assert!(err.source_as::<reqwest::Error>().is_some());
    }
}
