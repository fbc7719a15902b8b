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

//! S3 presigned urls with convenience APIs.

pub use presign_s3_v4::*;

use crate::{default_context, Context, Result, Signer};

/// Default S3 signer type.
pub type DefaultSigner = Signer<Presigner>;

/// Create a signer configured from the process environment.
///
/// Reads `AWS_ENDPOINT_URL`, `AWS_REGION` and the access key pair, see
/// [`signer_from_context`].
pub fn default_signer() -> Result<DefaultSigner> {
    signer_from_context(default_context())
}

/// Create a signer configured from the environment of `ctx`.
///
/// The endpoint is required. Credentials are read again on every signing call,
/// so a missing access key only fails when a url is requested.
pub fn signer_from_context(ctx: Context) -> Result<DefaultSigner> {
    let config = Config::default().from_env(&ctx);
    let presigner = Presigner::from_config(&config)?;
    let loader = DefaultCredentialProvider::new(config.into());
    Ok(Signer::new(ctx, loader, presigner))
}
