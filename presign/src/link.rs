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

//! HMAC signed file links with convenience APIs.

pub use presign_link::*;

use crate::{default_context, Context, Result, Signer};

/// Default link signer type.
pub type DefaultSigner = Signer<LinkSigner>;

/// Create a signer reading `LINK_SIGNING_SECRET` from the process environment.
pub fn default_signer() -> DefaultSigner {
    signer_from_context(default_context())
}

/// Create a signer reading `LINK_SIGNING_SECRET` from the environment of `ctx`.
pub fn signer_from_context(ctx: Context) -> DefaultSigner {
    Signer::new(ctx, EnvCredentialProvider::new(), LinkSigner::new())
}

/// Create a verifier with the secret in `LINK_SIGNING_SECRET` of the process environment.
pub fn default_verifier() -> Result<LinkVerifier> {
    LinkVerifier::from_env(&default_context())
}
