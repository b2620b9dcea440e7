// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use std::fmt::{Debug, Formatter};

use kunapay_core::{utils::Redact, Error, Result};

/// Credential for the KunaPay API.
///
/// Every request is authenticated in exactly one of the two modes.
#[derive(Clone, Debug)]
pub enum Credential {
    /// Public/private key pair. Requests carry a per-request HMAC-SHA384 signature.
    Signature(KeyPair),
    /// Static API key sent on every request.
    ApiKey(ApiKey),
}

impl Credential {
    /// Create a signature mode credential.
    ///
    /// Both keys must be non-empty.
    pub fn signature(public_key: impl Into<String>, private_key: impl Into<Vec<u8>>) -> Result<Self> {
        KeyPair::new(public_key, private_key).map(Credential::Signature)
    }

    /// Create a static API key credential.
    ///
    /// The key must be non-empty.
    pub fn api_key(api_key: impl Into<String>) -> Result<Self> {
        ApiKey::new(api_key).map(Credential::ApiKey)
    }
}

/// Key pair used in signature mode.
#[derive(Clone)]
pub struct KeyPair {
    public_key: String,
    private_key: Vec<u8>,
}

impl KeyPair {
    /// Create a new key pair, rejecting empty keys.
    pub fn new(public_key: impl Into<String>, private_key: impl Into<Vec<u8>>) -> Result<Self> {
        let public_key = public_key.into();
        let private_key = private_key.into();

        if public_key.is_empty() {
            return Err(Error::missing_credential("public key is empty"));
        }
        if private_key.is_empty() {
            return Err(Error::missing_credential("private key is empty"));
        }

        Ok(Self {
            public_key,
            private_key,
        })
    }

    /// Public key sent in the `public-key` header.
    pub fn public_key(&self) -> &str {
        &self.public_key
    }

    /// Raw private key bytes used as the HMAC key.
    pub fn private_key(&self) -> &[u8] {
        &self.private_key
    }
}

impl Debug for KeyPair {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyPair")
            .field("public_key", &Redact::from(&self.public_key))
            .field("private_key", &Redact::from(&self.private_key))
            .finish()
    }
}

/// Static API key.
#[derive(Clone)]
pub struct ApiKey(String);

impl ApiKey {
    /// Create a new API key, rejecting an empty one.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(Error::missing_credential("api key is empty"));
        }
        Ok(Self(api_key))
    }

    /// The key as sent in the `api-key` header.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Debug for ApiKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ApiKey").field(&Redact::from(&self.0)).finish()
    }
}
