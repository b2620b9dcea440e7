use http::request::Parts;
use http::HeaderValue;
use kunapay_core::hash::hex_hmac_sha384_parts;
use kunapay_core::time::{self, format_nonce, DateTime};
use kunapay_core::{Result, SignRequest};
use log::debug;

use crate::constants::*;
use crate::Credential;

/// RequestSigner that implements KunaPay request authentication.
///
/// In signature mode each request gets a fresh millisecond nonce and the
/// lowercase hex HMAC-SHA384 of `path_and_query ++ nonce ++ body`, keyed by
/// the private key. In API key mode only the `api-key` header is set.
#[derive(Debug, Default)]
pub struct RequestSigner {
    time: Option<DateTime>,
}

impl RequestSigner {
    /// Create a new signer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    #[cfg(test)]
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }
}

impl SignRequest for RequestSigner {
    type Credential = Credential;

    fn sign_request(
        &self,
        parts: &mut Parts,
        body: Option<&[u8]>,
        credential: &Self::Credential,
    ) -> Result<()> {
        match credential {
            Credential::Signature(key) => {
                let nonce = self.time.map(format_nonce).unwrap_or_else(time::nonce);
                let path_and_query = parts
                    .uri
                    .path_and_query()
                    .map(|v| v.as_str())
                    .unwrap_or("/");
                let signature = sign(&nonce, path_and_query, body, key.private_key());
                debug!("signed request {} {path_and_query} with nonce {nonce}", parts.method);

                let mut public_key = HeaderValue::from_str(key.public_key())?;
                public_key.set_sensitive(true);

                parts.headers.insert(NONCE, HeaderValue::from_str(&nonce)?);
                parts
                    .headers
                    .insert(SIGNATURE, HeaderValue::from_str(&signature)?);
                parts.headers.insert(PUBLIC_KEY, public_key);
            }
            Credential::ApiKey(key) => {
                let mut value = HeaderValue::from_str(key.as_str())?;
                value.set_sensitive(true);

                parts.headers.insert(API_KEY, value);
            }
        }

        Ok(())
    }
}

/// Compute the KunaPay signature for one request.
///
/// `body` is the wire body. A single trailing newline is not signed, and an
/// absent or empty body is signed as `{}`.
pub fn sign(nonce: &str, path_and_query: &str, body: Option<&[u8]>, private_key: &[u8]) -> String {
    hex_hmac_sha384_parts(
        private_key,
        &[
            path_and_query.as_bytes(),
            nonce.as_bytes(),
            canonical_body(body),
        ],
    )
}

fn canonical_body(body: Option<&[u8]>) -> &[u8] {
    let Some(bs) = body else {
        return EMPTY_BODY;
    };

    let bs = bs.strip_suffix(b"\n").unwrap_or(bs);
    if bs.is_empty() {
        EMPTY_BODY
    } else {
        bs
    }
}
