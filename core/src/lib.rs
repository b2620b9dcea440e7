//! Core components for talking to the KunaPay API.
//!
//! This crate provides the foundational types and traits shared by the
//! KunaPay crates. It knows nothing about a concrete HTTP client or about how
//! a request is authenticated; those live in sibling crates.
//!
//! ## Overview
//!
//! - **Context**: A container that holds implementations for HTTP sending and environment access
//! - **Traits**: Abstract interfaces for credential loading (`ProvideCredential`) and request signing (`SignRequest`)
//! - **Error**: A single error type whose [`ErrorKind`] tells a caller which stage failed
//!
//! ## Example
//!
//! ```no_run
//! use kunapay_core::{Result, SignRequest};
//! use http::request::Parts;
//!
//! #[derive(Clone, Debug)]
//! struct MyCredential {
//!     token: String,
//! }
//!
//! #[derive(Debug)]
//! struct MySigner;
//!
//! impl SignRequest for MySigner {
//!     type Credential = MyCredential;
//!
//!     fn sign_request(
//!         &self,
//!         req: &mut Parts,
//!         _body: Option<&[u8]>,
//!         cred: &Self::Credential,
//!     ) -> Result<()> {
//!         req.headers.insert("x-token", cred.token.parse()?);
//!         Ok(())
//!     }
//! }
//! ```
//!
//! ## Utilities
//!
//! - [`hash`]: Cryptographic hashing utilities
//! - [`time`]: Clock readings and nonce generation
//! - [`utils`]: General utilities including data redaction

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod context;
pub use context::{Context, Env, HttpSend, NoopEnv, NoopHttpSend, OsEnv, StaticEnv};

mod api;
pub use api::{ProvideCredential, SignRequest};

mod error;
pub use error::{ApiError, Error, ErrorDetail, ErrorKind, Result};
