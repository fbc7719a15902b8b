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

use http::request::Parts;
use log::debug;
use percent_encoding::percent_decode_str;
use presign_core::{Context, Error, Result, SigningCredential};
use subtle::ConstantTimeEq;

use crate::constants::*;
use crate::sign_request::{normalize_prefix, sign};
use crate::LinkSecret;

/// Compare tags in constant time once their lengths match.
pub(crate) fn tag_eq(expected: &str, provided: &str) -> bool {
    if expected.len() != provided.len() {
        return false;
    }
    expected.as_bytes().ct_eq(provided.as_bytes()).into()
}

fn unauthorized() -> Error {
    Error::unauthorized("link signature is not valid")
}

/// LinkVerifier checks links minted by [`crate::LinkSigner`].
///
/// Every rejection is the same `Unauthorized` error. The reason is only
/// logged at debug level and never includes the expected tag.
#[derive(Debug, Clone)]
pub struct LinkVerifier {
    secret: LinkSecret,
    prefix: String,
}

impl LinkVerifier {
    /// Create a new verifier for `secret` using the `/files` prefix.
    pub fn new(secret: impl Into<LinkSecret>) -> Result<Self> {
        let secret = secret.into();
        if !secret.is_valid() {
            return Err(Error::config_invalid("link secret must not be empty"));
        }
        Ok(Self {
            secret,
            prefix: DEFAULT_PREFIX.to_string(),
        })
    }

    /// Create a new verifier with the secret in `LINK_SIGNING_SECRET`.
    pub fn from_env(ctx: &Context) -> Result<Self> {
        Self::new(ctx.env_var_required(LINK_SIGNING_SECRET)?)
    }

    /// Accept links under `prefix` instead.
    pub fn with_prefix(mut self, prefix: &str) -> Self {
        self.prefix = normalize_prefix(prefix);
        self
    }

    /// Check `tag` against the raw, decoded key.
    pub fn verify_key(&self, raw_key: &str, tag: &str) -> Result<()> {
        if raw_key.is_empty() {
            debug!("link rejected: empty key");
            return Err(unauthorized());
        }
        if !tag_eq(&sign(self.secret.as_bytes(), raw_key), tag) {
            debug!("link rejected: signature mismatch for key {raw_key:?}");
            return Err(unauthorized());
        }
        Ok(())
    }

    /// Check an inbound path and query string, returning the raw key.
    ///
    /// `path` is still percent encoded, `query` is the part after `?`.
    pub fn verify_path(&self, path: &str, query: Option<&str>) -> Result<String> {
        let Some(tag) = signature_from_query(query) else {
            debug!("link rejected: missing or repeated {SIGNATURE_QUERY} parameter");
            return Err(unauthorized());
        };
        let Some(encoded) = path
            .strip_prefix(self.prefix.as_str())
            .and_then(|v| v.strip_prefix('/'))
        else {
            debug!("link rejected: path {path:?} is outside {:?}", self.prefix);
            return Err(unauthorized());
        };

        let raw_key = decode_key(encoded).ok_or_else(|| {
            debug!("link rejected: path {path:?} is not valid utf-8 once decoded");
            unauthorized()
        })?;
        self.verify_key(&raw_key, &tag)?;
        Ok(raw_key)
    }

    /// Check an inbound request, returning the raw key.
    pub fn verify_request(&self, parts: &Parts) -> Result<String> {
        self.verify_path(parts.uri.path(), parts.uri.query())
    }
}

/// The single `signature` value, `None` if absent or given more than once.
fn signature_from_query(query: Option<&str>) -> Option<String> {
    let mut values = form_urlencoded::parse(query?.as_bytes())
        .filter(|(k, _)| k == SIGNATURE_QUERY)
        .map(|(_, v)| v.into_owned());
    let tag = values.next()?;
    match values.next() {
        Some(_) => None,
        None => Some(tag),
    }
}

/// Decode every segment on its own, `+` stays a literal `+`.
fn decode_key(encoded: &str) -> Option<String> {
    let segments = encoded
        .split('/')
        .map(|seg| {
            percent_decode_str(seg)
                .decode_utf8()
                .ok()
                .map(|v| v.into_owned())
        })
        .collect::<Option<Vec<_>>>()?;
    Some(segments.join("/"))
}
