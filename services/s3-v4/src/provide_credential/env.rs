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

use crate::{constants::*, Credential};
use presign_core::{Context, ProvideCredential, Result};

/// EnvCredentialProvider reads the access key pair from the process env.
///
/// - [`AWS_ACCESS_KEY_ID`] and [`AWS_SECRET_ACCESS_KEY`] are both required.
/// - [`AWS_SESSION_TOKEN`] is attached when present.
///
/// A variable that is exported but empty counts as unset, so an empty key
/// yields no credential and the signer reports `ConfigInvalid`.
#[derive(Debug, Default, Clone)]
pub struct EnvCredentialProvider;

impl EnvCredentialProvider {
    /// Create a new EnvCredentialProvider.
    pub fn new() -> Self {
        Self
    }
}

impl ProvideCredential for EnvCredentialProvider {
    type Credential = Credential;

    fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let envs = ctx.env_vars();
        let get = |name: &str| envs.get(name).filter(|v| !v.is_empty()).cloned();

        let (Some(access_key_id), Some(secret_access_key)) =
            (get(AWS_ACCESS_KEY_ID), get(AWS_SECRET_ACCESS_KEY))
        else {
            return Ok(None);
        };

        Ok(Some(Credential {
            access_key_id,
            secret_access_key,
            session_token: get(AWS_SESSION_TOKEN),
        }))
    }
}
