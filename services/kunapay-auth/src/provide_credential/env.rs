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
use log::debug;

use crate::constants::*;
use crate::Credential;

/// EnvCredentialProvider loads KunaPay credentials from environment variables.
///
/// This provider looks for the following environment variables:
/// - `KUNAPAY_PUBLIC_KEY` and `KUNAPAY_PRIVATE_KEY`: signature mode key pair
/// - `KUNAPAY_API_KEY`: static API key, used only when the key pair is not set
///
/// Empty values are treated as unset.
#[derive(Debug, Default)]
pub struct EnvCredentialProvider;

impl EnvCredentialProvider {
    /// Create a new EnvCredentialProvider.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProvideCredential for EnvCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let get = |key: &str| ctx.env_var(key).filter(|v| !v.is_empty());

        if let (Some(public_key), Some(private_key)) =
            (get(KUNAPAY_PUBLIC_KEY), get(KUNAPAY_PRIVATE_KEY))
        {
            debug!("loaded signature credential from env");
            return Credential::signature(public_key, private_key).map(Some);
        }

        if let Some(api_key) = get(KUNAPAY_API_KEY) {
            debug!("loaded api key credential from env");
            return Credential::api_key(api_key).map(Some);
        }

        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kunapay_core::StaticEnv;
    use std::collections::HashMap;

    fn ctx(envs: &[(&str, &str)]) -> Context {
        let envs = envs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>();
        Context::new().with_env(StaticEnv { envs })
    }

    #[tokio::test]
    async fn test_env_credential_provider_signature() -> anyhow::Result<()> {
        let ctx = ctx(&[
            (KUNAPAY_PUBLIC_KEY, "public"),
            (KUNAPAY_PRIVATE_KEY, "private"),
            (KUNAPAY_API_KEY, "static"),
        ]);

        let cred = EnvCredentialProvider::new().provide_credential(&ctx).await?;
        let Some(Credential::Signature(key)) = cred else {
            panic!("expected signature credential, got {cred:?}");
        };
        assert_eq!(key.public_key(), "public");
        assert_eq!(key.private_key(), b"private");
        Ok(())
    }

    #[tokio::test]
    async fn test_env_credential_provider_api_key() -> anyhow::Result<()> {
        let ctx = ctx(&[(KUNAPAY_PUBLIC_KEY, "public"), (KUNAPAY_API_KEY, "static")]);

        let cred = EnvCredentialProvider::new().provide_credential(&ctx).await?;
        let Some(Credential::ApiKey(key)) = cred else {
            panic!("expected api key credential, got {cred:?}");
        };
        assert_eq!(key.as_str(), "static");
        Ok(())
    }

    #[tokio::test]
    async fn test_env_credential_provider_missing_credentials() -> anyhow::Result<()> {
        let ctx = ctx(&[(KUNAPAY_PRIVATE_KEY, "private"), (KUNAPAY_API_KEY, "")]);

        let cred = EnvCredentialProvider::new().provide_credential(&ctx).await?;
        assert!(cred.is_none());
        Ok(())
    }
}
