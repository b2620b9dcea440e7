use std::sync::Arc;

use bytes::Bytes;
use http::header::{ACCEPT, CONTENT_TYPE, USER_AGENT};
use http::request::Parts;
use http::{HeaderValue, Method, Request, Response, Uri};
use kunapay_auth::{Credential, RequestSigner};
use kunapay_core::{Context, Error, HttpSend, OsEnv, ProvideCredential, Result, SignRequest};
use kunapay_http_send_reqwest::ReqwestHttpSend;
use log::debug;
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::config::{Config, API_VERSION, DEFAULT_BASE_URL};
use crate::response::{check_response, decode, Envelope};

const APPLICATION_JSON: &str = "application/json";

/// Per-request hook applied after the request is signed.
///
/// Options may add headers such as idempotency keys. They must not change the
/// method or uri, which are already covered by the signature.
pub type RequestOption = Box<dyn FnOnce(&mut Parts) + Send>;

/// Default `User-Agent` sent by the client.
pub fn default_user_agent() -> String {
    format!(
        "kunapay-rust/{} ({} {})",
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS,
        std::env::consts::ARCH
    )
}

/// Client for the KunaPay API.
///
/// Cloning is cheap and clones share the same transport and credential.
#[derive(Debug, Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

#[derive(Debug)]
struct ClientInner {
    ctx: Context,
    base_url: Url,
    user_agent: String,
    credential: Credential,
    signer: RequestSigner,
}

impl Client {
    /// Create a client that signs every request with the given key pair.
    pub fn new_with_signature(
        public_key: impl Into<String>,
        private_key: impl Into<Vec<u8>>,
        config: Config,
    ) -> Result<Self> {
        Self::new(Credential::signature(public_key, private_key)?, config)
    }

    /// Create a client that sends a static API key with every request.
    pub fn new_with_api_key(api_key: impl Into<String>, config: Config) -> Result<Self> {
        Self::new(Credential::api_key(api_key)?, config)
    }

    /// Create a client from an already built credential.
    pub fn new(credential: Credential, config: Config) -> Result<Self> {
        let ctx = context(&config);
        Self::build(ctx, credential, config)
    }

    /// Create a client with a credential loaded from `provider`.
    ///
    /// A provider that has nothing to offer yields `MissingCredential`.
    pub async fn from_provider(
        provider: impl ProvideCredential<Credential = Credential>,
        config: Config,
    ) -> Result<Self> {
        let ctx = context(&config);
        let credential = provider
            .provide_credential(&ctx)
            .await?
            .ok_or_else(|| Error::missing_credential("no credential found"))?;

        Self::build(ctx, credential, config)
    }

    fn build(ctx: Context, credential: Credential, config: Config) -> Result<Self> {
        let base_url = parse_base_url(config.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL))?;
        let user_agent = config.user_agent.unwrap_or_else(default_user_agent);

        Ok(Self {
            inner: Arc::new(ClientInner {
                ctx,
                base_url,
                user_agent,
                credential,
                signer: RequestSigner::new(),
            }),
        })
    }

    /// Versioned base URL that relative paths are resolved against.
    pub fn base_url(&self) -> &str {
        self.inner.base_url.as_str()
    }

    /// Build a signed request.
    ///
    /// `path` is resolved against the versioned base URL. `body` is serialized
    /// once to minified JSON followed by a newline, and the same bytes are
    /// signed and sent.
    pub fn build_request<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Request<Bytes>> {
        self.build_request_with(method, path, body, Vec::new())
    }

    /// Build a signed request, then apply `opts` in order.
    pub fn build_request_with<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        opts: impl IntoIterator<Item = RequestOption>,
    ) -> Result<Request<Bytes>> {
        let uri = self.resolve(path)?;

        let body = match body {
            Some(v) => {
                let mut bs = serde_json::to_vec(v).map_err(|e| {
                    Error::serialization("failed to serialize request body").with_source(e)
                })?;
                bs.push(b'\n');
                Some(Bytes::from(bs))
            }
            None => None,
        };

        let (mut parts, ()) = Request::new(()).into_parts();
        parts.method = method;
        parts.uri = uri;
        parts
            .headers
            .insert(ACCEPT, HeaderValue::from_static(APPLICATION_JSON));
        parts
            .headers
            .insert(USER_AGENT, HeaderValue::from_str(&self.inner.user_agent)?);
        if body.is_some() {
            parts
                .headers
                .insert(CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON));
        }

        self.inner
            .signer
            .sign_request(&mut parts, body.as_deref(), &self.inner.credential)?;

        for opt in opts {
            opt(&mut parts);
        }

        debug!("built request {} {}", parts.method, parts.uri);
        Ok(Request::from_parts(parts, body.unwrap_or_default()))
    }

    /// Send a request and classify the response.
    ///
    /// Non-2xx responses are returned as `ErrorKind::Api`.
    pub async fn send(&self, req: Request<Bytes>) -> Result<Response<Bytes>> {
        let method = req.method().clone();
        let url = req.uri().to_string();

        debug!("sending request {method} {url}");
        let resp = self.inner.ctx.http_send(req).await?;
        debug!("got response {} for {method} {url}", resp.status());

        check_response(&method, &url, resp)
    }

    /// Send a request and decode the body as a bare `T`.
    pub async fn execute<T: DeserializeOwned>(&self, req: Request<Bytes>) -> Result<T> {
        let resp = self.send(req).await?;
        decode(resp.body())
    }

    /// Send a request and decode the `data` field of a `{"data": T}` body.
    pub async fn execute_enveloped<T: DeserializeOwned>(&self, req: Request<Bytes>) -> Result<T> {
        let resp = self.send(req).await?;
        decode::<Envelope<T>>(resp.body()).map(|v| v.data)
    }

    /// Send a request and drop the response body.
    pub async fn execute_discard(&self, req: Request<Bytes>) -> Result<()> {
        self.send(req).await.map(|_| ())
    }

    fn resolve(&self, path: &str) -> Result<Uri> {
        if path.chars().any(char::is_control) {
            return Err(Error::invalid_path(format!(
                "path {path:?} contains control characters"
            )));
        }

        let url = self.inner.base_url.join(path).map_err(|e| {
            Error::invalid_path(format!("failed to resolve path {path:?}")).with_source(e)
        })?;

        // Credentials must never leave the configured host.
        if url.origin() != self.inner.base_url.origin() {
            return Err(Error::invalid_path(format!(
                "path {path:?} resolves outside of {}",
                self.inner.base_url
            )));
        }

        Ok(url.as_str().parse::<Uri>()?)
    }
}

fn context(config: &Config) -> Context {
    let http_send = config
        .http_send
        .clone()
        .unwrap_or_else(|| Arc::new(ReqwestHttpSend::default()) as Arc<dyn HttpSend>);

    Context::new()
        .with_shared_http_send(http_send)
        .with_env(OsEnv)
}

fn parse_base_url(base_url: &str) -> Result<Url> {
    if base_url.chars().any(char::is_control) {
        return Err(Error::config_invalid(format!(
            "base url {base_url:?} contains control characters"
        )));
    }

    let mut url = Url::parse(base_url).map_err(|e| {
        Error::config_invalid(format!("failed to parse base url {base_url:?}")).with_source(e)
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(Error::config_invalid(format!(
            "base url {base_url:?} must use http or https"
        )));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    url.join(API_VERSION).map_err(|e| {
        Error::config_invalid(format!("failed to join base url {base_url:?}")).with_source(e)
    })
}
