use crate::{Context, Result};
use std::fmt::Debug;

/// ProvideCredential is the trait used by clients to load the credential from the environment.
///
/// Returning `Ok(None)` means this provider has nothing to offer; callers
/// decide whether that is fatal.
#[async_trait::async_trait]
pub trait ProvideCredential: Debug + Send + Sync + Unpin + 'static {
    /// Credential returned by this loader.
    type Credential: Send + Sync + Unpin + 'static;

    /// Load signing credential from current env.
    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>>;
}

/// SignRequest is the trait used to attach authentication to a built request.
///
/// Signing is pure in-memory work: implementations must not perform I/O.
pub trait SignRequest: Debug + Send + Sync + Unpin + 'static {
    /// Credential used by this signer.
    type Credential: Send + Sync + Unpin + 'static;

    /// Sign the request in place.
    ///
    /// ## Body
    ///
    /// `body` holds the exact bytes that will be sent on the wire, or `None`
    /// when the request has no payload. Implementations must sign these bytes
    /// and never re-serialize the payload themselves.
    fn sign_request(
        &self,
        req: &mut http::request::Parts,
        body: Option<&[u8]>,
        credential: &Self::Credential,
    ) -> Result<()>;
}
