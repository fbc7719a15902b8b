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

use crate::{Config, Credential};
use presign_core::{Context, ProvideCredential, Result};
use std::sync::Arc;

/// ConfigCredentialProvider takes the access key pair from a loaded [`Config`].
#[derive(Debug)]
pub struct ConfigCredentialProvider {
    config: Arc<Config>,
}

impl ConfigCredentialProvider {
    /// Create a new `ConfigCredentialProvider` instance.
    pub fn new(cfg: Arc<Config>) -> Self {
        Self { config: cfg }
    }
}

impl ProvideCredential for ConfigCredentialProvider {
    type Credential = Credential;

    fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
        let non_empty = |v: &Option<String>| v.clone().filter(|v| !v.is_empty());

        let (Some(access_key_id), Some(secret_access_key)) = (
            non_empty(&self.config.access_key_id),
            non_empty(&self.config.secret_access_key),
        ) else {
            return Ok(None);
        };

        Ok(Some(Credential {
            access_key_id,
            secret_access_key,
            session_token: non_empty(&self.config.session_token),
        }))
    }
}
