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

use std::fmt::{Display, Formatter};

use percent_encoding::utf8_percent_encode;
use presign_core::hash::hex_hmac_sha256;
use presign_core::{Context, Error, Result, SignRequest, SigningCredential};

use crate::constants::*;
use crate::verify::tag_eq;
use crate::LinkSecret;

/// Compute the hex encoded HMAC-SHA256 tag of `raw_key` under `secret`.
///
/// The tag covers the key exactly as stored, never an encoded form of it.
pub fn sign(secret: &[u8], raw_key: &str) -> String {
    hex_hmac_sha256(secret, raw_key.as_bytes())
}

/// Check `tag` against the tag of `raw_key` in constant time.
pub fn verify(secret: &[u8], raw_key: &str, tag: &str) -> bool {
    tag_eq(&sign(secret, raw_key), tag)
}

/// Normalize a path prefix into `/segment[/segment]` or the empty root.
pub(crate) fn normalize_prefix(prefix: &str) -> String {
    let prefix = prefix.trim_matches('/');
    if prefix.is_empty() {
        String::new()
    } else {
        format!("/{prefix}")
    }
}

/// LinkSigner mints signed links served under a path prefix.
///
/// ```
/// use presign_link::{LinkSecret, LinkSigner};
///
/// let link = LinkSigner::new()
///     .sign(&LinkSecret::from("top-secret"), "reports/a b.png")
///     .unwrap();
/// assert!(link.to_string().starts_with("/files/reports/a%20b.png?signature="));
/// ```
#[derive(Debug, Clone)]
pub struct LinkSigner {
    prefix: String,
}

impl Default for LinkSigner {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
        }
    }
}

impl LinkSigner {
    /// Create a new signer using the `/files` prefix.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve links under `prefix` instead.
    pub fn with_prefix(mut self, prefix: &str) -> Self {
        self.prefix = normalize_prefix(prefix);
        self
    }

    /// Path prefix in use.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Sign `raw_key` into a link.
    pub fn sign(&self, secret: &LinkSecret, raw_key: &str) -> Result<SignedLink> {
        if !secret.is_valid() {
            return Err(Error::config_invalid("link secret must not be empty"));
        }
        if raw_key.is_empty() {
            return Err(Error::request_invalid("link key must not be empty"));
        }

        let encoded = raw_key
            .split('/')
            .map(|seg| utf8_percent_encode(seg, &LINK_SEGMENT_ENCODE_SET).to_string())
            .collect::<Vec<_>>()
            .join("/");

        Ok(SignedLink {
            path: format!("{}/{encoded}", self.prefix),
            signature: sign(secret.as_bytes(), raw_key),
        })
    }
}

impl SignRequest for LinkSigner {
    type Credential = LinkSecret;
    type Request = str;
    type Output = SignedLink;

    fn sign_request(
        &self,
        _: &Context,
        raw_key: &Self::Request,
        credential: &Self::Credential,
    ) -> Result<Self::Output> {
        self.sign(credential, raw_key)
    }
}

/// SignedLink is a path plus the tag that authorizes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedLink {
    path: String,
    signature: String,
}

impl SignedLink {
    /// Percent encoded path, prefix included.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Hex encoded tag.
    pub fn signature(&self) -> &str {
        &self.signature
    }

    /// Join the link onto `base_url` such as `https://cdn.example.com`.
    pub fn to_url(&self, base_url: &str) -> String {
        format!("{}{self}", base_url.trim_end_matches('/'))
    }
}

impl Display for SignedLink {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}?{SIGNATURE_QUERY}={}", self.path, self.signature)
    }
}
