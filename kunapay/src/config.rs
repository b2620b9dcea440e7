use std::sync::Arc;

use kunapay_core::{Context, HttpSend};

/// Default base URL of the KunaPay API.
pub const DEFAULT_BASE_URL: &str = "https://api-kunapayapp.kuna.io/";

/// API version segment appended to the base URL.
pub const API_VERSION: &str = "v1/";

/// Env var overriding the base URL.
pub const KUNAPAY_BASE_URL: &str = "KUNAPAY_BASE_URL";

/// Env var overriding the user agent.
pub const KUNAPAY_USER_AGENT: &str = "KUNAPAY_USER_AGENT";

/// Config for building a [`Client`](crate::Client).
///
/// Every field is optional. Unset fields fall back to defaults when the
/// client is built.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Transport used to send requests. Defaults to `ReqwestHttpSend::default()`.
    pub http_send: Option<Arc<dyn HttpSend>>,
    /// `User-Agent` header value. Defaults to `kunapay-rust/<version> (<os> <arch>)`.
    pub user_agent: Option<String>,
    /// Base URL of the API, without the version segment.
    pub base_url: Option<String>,
}

impl Config {
    /// Use the given transport.
    pub fn with_http_send(mut self, http_send: impl HttpSend) -> Self {
        self.http_send = Some(Arc::new(http_send));
        self
    }

    /// Override the `User-Agent` header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Override the base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Fill unset fields from the environment.
    ///
    /// Reads `KUNAPAY_BASE_URL` and `KUNAPAY_USER_AGENT`. Fields already set win.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        let get = |key: &str| ctx.env_var(key).filter(|v| !v.is_empty());

        if self.base_url.is_none() {
            self.base_url = get(KUNAPAY_BASE_URL);
        }
        if self.user_agent.is_none() {
            self.user_agent = get(KUNAPAY_USER_AGENT);
        }
        self
    }
}
