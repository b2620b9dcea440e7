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

use async_trait::async_trait;
use kunapay_core::{Context, ProvideCredential, Result};

use crate::Credential;

/// StaticCredentialProvider always returns the credential it was built with.
#[derive(Debug, Clone)]
pub struct StaticCredentialProvider {
    credential: Credential,
}

impl StaticCredentialProvider {
    /// Create a provider for a signature mode credential.
    pub fn new_with_signature(
        public_key: impl Into<String>,
        private_key: impl Into<Vec<u8>>,
    ) -> Result<Self> {
        Ok(Self {
            credential: Credential::signature(public_key, private_key)?,
        })
    }

    /// Create a provider for a static API key credential.
    pub fn new_with_api_key(api_key: impl Into<String>) -> Result<Self> {
        Ok(Self {
            credential: Credential::api_key(api_key)?,
        })
    }
}

impl From<Credential> for StaticCredentialProvider {
    fn from(credential: Credential) -> Self {
        Self { credential }
    }
}

#[async_trait]
impl ProvideCredential for StaticCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
        Ok(Some(self.credential.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_credential_provider() -> anyhow::Result<()> {
        let ctx = Context::new();

        let provider = StaticCredentialProvider::new_with_signature("public", "private")?;
        let cred = provider.provide_credential(&ctx).await?;
        let Some(Credential::Signature(key)) = cred else {
            panic!("expected signature credential, got {cred:?}");
        };
        assert_eq!(key.public_key(), "public");
        assert_eq!(key.private_key(), b"private");

        let provider = StaticCredentialProvider::new_with_api_key("static")?;
        let cred = provider.provide_credential(&ctx).await?;
        let Some(Credential::ApiKey(key)) = cred else {
            panic!("expected api key credential, got {cred:?}");
        };
        assert_eq!(key.as_str(), "static");

        Ok(())
    }

    #[test]
    fn test_static_credential_provider_rejects_empty() {
        assert!(StaticCredentialProvider::new_with_signature("", "private").is_err());
        assert!(StaticCredentialProvider::new_with_api_key("").is_err());
    }
}
