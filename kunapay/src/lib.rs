//! Signed HTTP client for the KunaPay payment API.
//!
//! The client builds requests, signs them for one of the two KunaPay
//! authentication modes, sends them through a swappable transport and decodes
//! either the success payload or the API error list. Resource services sit on
//! top of four calls: [`Client::build_request`], [`Client::execute`],
//! [`Client::execute_enveloped`] and [`Client::execute_discard`].
//!
//! ## Example
//!
//! ```no_run
//! use http::Method;
//! use kunapay::{Client, Config};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize)]
//! #[serde(rename_all = "camelCase")]
//! struct Withdraw<'a> {
//!     amount: &'a str,
//!     asset: &'a str,
//!     payment_method: &'a str,
//! }
//!
//! #[derive(Debug, Deserialize)]
//! struct Created {
//!     id: String,
//! }
//!
//! # async fn example() -> kunapay::Result<()> {
//! let client = Client::new_with_signature("public-key", "private-key", Config::default())?;
//!
//! let body = Withdraw {
//!     amount: "100",
//!     asset: "USDT",
//!     payment_method: "USDT",
//! };
//! let req = client.build_request(Method::POST, "withdraw", Some(&body))?;
//! let created: Created = client.execute_enveloped(req).await?;
//! println!("withdraw {}", created.id);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub use kunapay_auth::{Credential, EnvCredentialProvider, StaticCredentialProvider};
pub use kunapay_core::{ApiError, Context, Error, ErrorDetail, ErrorKind, HttpSend, Result};
pub use kunapay_http_send_reqwest::ReqwestHttpSend;

mod client;
pub use client::{default_user_agent, Client, RequestOption};

mod config;
pub use config::{Config, API_VERSION, DEFAULT_BASE_URL, KUNAPAY_BASE_URL, KUNAPAY_USER_AGENT};

pub mod response;
