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

use std::str::FromStr;

use http::uri::{Authority, Scheme};
use http::Uri;
use presign_core::{Error, Result};
use serde::Deserialize;

/// AddressingStyle decides where the bucket name goes in a presigned url.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddressingStyle {
    /// `https://<endpoint>/<bucket>/<key>`
    #[default]
    Path,
    /// `https://<bucket>.<endpoint>/<key>`
    VirtualHosted,
}

/// Endpoint is the scheme and authority of an S3 compatible object store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    scheme: Scheme,
    authority: Authority,
}

impl Endpoint {
    /// Parse an endpoint such as `https://acct.r2.example.com`.
    ///
    /// A bare host is treated as `https`. Paths, queries and user info are
    /// rejected, as are schemes other than `http` and `https`. The default port
    /// of the scheme is dropped, clients never send it in the `Host` header.
    pub fn parse(endpoint: &str) -> Result<Self> {
        let endpoint = endpoint.trim();
        if endpoint.is_empty() {
            return Err(Error::config_invalid("endpoint must not be empty"));
        }

        let uri = if endpoint.contains("://") {
            Uri::from_str(endpoint)
        } else {
            Uri::from_str(&format!("https://{endpoint}"))
        }
        .map_err(|e| {
            Error::config_invalid(format!("endpoint {endpoint:?} is not a valid url"))
                .with_source(e)
        })?;

        let parts = uri.into_parts();
        let scheme = match parts.scheme {
            Some(s) if s == Scheme::HTTPS || s == Scheme::HTTP => s,
            _ => {
                return Err(Error::config_invalid(format!(
                    "endpoint {endpoint:?} must use http or https"
                )))
            }
        };
        let authority = parts.authority.ok_or_else(|| {
            Error::config_invalid(format!("endpoint {endpoint:?} has no host"))
        })?;
        if authority.host().is_empty() || authority.as_str().contains('@') {
            return Err(Error::config_invalid(format!(
                "endpoint {endpoint:?} must be a plain host"
            )));
        }
        if let Some(paq) = parts.path_and_query {
            if paq.as_str() != "/" && !paq.as_str().is_empty() {
                return Err(Error::config_invalid(format!(
                    "endpoint {endpoint:?} must not carry a path or query"
                )));
            }
        }

        let default_port = if scheme == Scheme::HTTPS { 443 } else { 80 };
        let authority = if authority.port_u16() == Some(default_port) {
            Authority::from_str(authority.host())?
        } else {
            authority
        };

        Ok(Self { scheme, authority })
    }

    /// Scheme of the endpoint.
    pub fn scheme(&self) -> &Scheme {
        &self.scheme
    }

    /// Authority of the endpoint, `host[:port]`.
    pub fn authority(&self) -> &Authority {
        &self.authority
    }

    /// Host that receives requests for `bucket`, this is the value of the signed `host` header.
    pub(crate) fn host_for(&self, bucket: &str, style: AddressingStyle) -> String {
        match style {
            AddressingStyle::Path => self.authority.as_str().to_string(),
            AddressingStyle::VirtualHosted => format!("{bucket}.{}", self.authority),
        }
    }
}
