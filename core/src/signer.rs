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

use crate::{Context, Error, ProvideCredential, Result, SignRequest, SigningCredential};
use std::fmt::Debug;
use std::sync::Arc;

/// Signer is the main struct used to sign.
///
/// The credential is loaded on every call and never cached, so a missing or
/// rotated secret is noticed immediately.
#[derive(Debug)]
pub struct Signer<S: SignRequest> {
    ctx: Context,
    loader: Arc<dyn ProvideCredential<Credential = S::Credential>>,
    builder: Arc<S>,
}

impl<S: SignRequest> Clone for Signer<S> {
    fn clone(&self) -> Self {
        Self {
            ctx: self.ctx.clone(),
            loader: self.loader.clone(),
            builder: self.builder.clone(),
        }
    }
}

impl<S> Signer<S>
where
    S: SignRequest,
    S::Credential: SigningCredential,
{
    /// Create a new signer.
    pub fn new(
        ctx: Context,
        loader: impl ProvideCredential<Credential = S::Credential>,
        builder: S,
    ) -> Self {
        Self {
            ctx,
            loader: Arc::new(loader),
            builder: Arc::new(builder),
        }
    }

    /// Get the context used by this signer.
    pub fn context(&self) -> &Context {
        &self.ctx
    }

    /// Load the credential, failing with `ConfigInvalid` if none is available.
    pub fn credential(&self) -> Result<S::Credential> {
        match self.loader.provide_credential(&self.ctx)? {
            Some(cred) if cred.is_valid() => Ok(cred),
            Some(_) => Err(Error::config_invalid(
                "loaded credential is not valid for signing",
            )),
            None => Err(Error::config_invalid("no credential is configured")),
        }
    }

    /// Sign the request.
    pub fn sign(&self, req: &S::Request) -> Result<S::Output> {
        let cred = self.credential()?;
        self.builder.sign_request(&self.ctx, req, &cred)
    }
}
