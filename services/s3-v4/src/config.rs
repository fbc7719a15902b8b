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

use presign_core::utils::Redact;
use presign_core::Context;
use serde::Deserialize;

use crate::constants::*;
use crate::AddressingStyle;

/// Config for the S3 presigner.
///
/// Every field is optional so the struct can be embedded in an application's
/// own config file and completed from the environment with [`Config::from_env`].
#[derive(Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// `endpoint` will be loaded from:
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AWS_ENDPOINT_URL`]
    pub endpoint: Option<String>,
    /// `region` will be loaded from:
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AWS_REGION`]
    /// - default to `auto`
    pub region: Option<String>,
    /// `access_key_id` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AWS_ACCESS_KEY_ID`]
    pub access_key_id: Option<String>,
    /// `secret_access_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AWS_SECRET_ACCESS_KEY`]
    pub secret_access_key: Option<String>,
    /// `session_token` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AWS_SESSION_TOKEN`]
    pub session_token: Option<String>,
    /// Where the bucket name goes, default to path style.
    pub addressing_style: AddressingStyle,
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("endpoint", &self.endpoint)
            .field("region", &self.region)
            .field("access_key_id", &Redact::from(&self.access_key_id))
            .field(
                "secret_access_key",
                &Redact::secret(
                    self.secret_access_key
                        .as_deref()
                        .unwrap_or_default()
                        .as_bytes(),
                ),
            )
            .field(
                "session_token",
                &Redact::secret(self.session_token.as_deref().unwrap_or_default().as_bytes()),
            )
            .field("addressing_style", &self.addressing_style)
            .finish()
    }
}

impl Config {
    /// Load config from env, keeping the fields that are already set.
    ///
    /// Variables that are exported but empty count as unset.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        let envs = ctx.env_vars();
        let get = |name: &str| envs.get(name).filter(|v| !v.is_empty()).cloned();

        self.endpoint = self.endpoint.or_else(|| get(AWS_ENDPOINT_URL));
        self.region = self.region.or_else(|| get(AWS_REGION));
        self.access_key_id = self.access_key_id.or_else(|| get(AWS_ACCESS_KEY_ID));
        self.secret_access_key = self
            .secret_access_key
            .or_else(|| get(AWS_SECRET_ACCESS_KEY));
        self.session_token = self.session_token.or_else(|| get(AWS_SESSION_TOKEN));
        self
    }
}
