//! Credentials and request signing for the KunaPay API.

mod constants;
pub use constants::*;

mod credential;
pub use credential::{ApiKey, Credential, KeyPair};

mod sign_request;
pub use sign_request::{sign, RequestSigner};

mod provide_credential;
pub use provide_credential::{EnvCredentialProvider, StaticCredentialProvider};
