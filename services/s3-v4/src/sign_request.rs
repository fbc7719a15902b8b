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

use std::fmt::Write;

use chrono::TimeDelta;
use http::header::{CONTENT_TYPE, HOST};
use http::{HeaderMap, HeaderValue};
use log::debug;
use percent_encoding::utf8_percent_encode;
use presign_core::hash::{hex_hmac_sha256, hex_sha256, hmac_sha256};
use presign_core::time::{format_date, format_iso8601, DateTime};
use presign_core::{Context, Error, Result, SignRequest, SigningCredential};

use crate::constants::*;
use crate::{AddressingStyle, Config, Credential, Endpoint, PresignRequest, PresignedUrl};

const CONTENT_MD5: &str = "content-md5";

/// Presigner that implements AWS SigV4 query string authentication for S3
/// compatible object stores.
///
/// - [Authenticating Requests: Using Query Parameters](https://docs.aws.amazon.com/AmazonS3/latest/API/sigv4-query-string-auth.html)
///
/// Presigning is pure computation. The only input besides the arguments is
/// the signing time, taken from the [`Context`] clock or passed to
/// [`Presigner::presign_at`].
#[derive(Debug, Clone)]
pub struct Presigner {
    endpoint: Endpoint,
    region: String,
    style: AddressingStyle,
}

impl Presigner {
    /// Create a new presigner for `endpoint` in region `auto`.
    pub fn new(endpoint: &str) -> Result<Self> {
        Ok(Self {
            endpoint: Endpoint::parse(endpoint)?,
            region: DEFAULT_REGION.to_string(),
            style: AddressingStyle::default(),
        })
    }

    /// Create a new presigner from [`Config`].
    pub fn from_config(cfg: &Config) -> Result<Self> {
        let endpoint = cfg.endpoint.as_deref().ok_or_else(|| {
            Error::config_invalid(format!(
                "endpoint is not configured, set {AWS_ENDPOINT_URL}"
            ))
        })?;

        Ok(Self::new(endpoint)?
            .with_region(cfg.region.as_deref().unwrap_or_default())
            .with_addressing_style(cfg.addressing_style))
    }

    /// Set the region, empty means `auto`.
    pub fn with_region(mut self, region: &str) -> Self {
        let region = region.trim();
        self.region = if region.is_empty() {
            DEFAULT_REGION.to_string()
        } else {
            region.to_string()
        };
        self
    }

    /// Set the addressing style.
    pub fn with_addressing_style(mut self, style: AddressingStyle) -> Self {
        self.style = style;
        self
    }

    /// Endpoint requests are signed for.
    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Region baked into the credential scope.
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Addressing style in use.
    pub fn addressing_style(&self) -> AddressingStyle {
        self.style
    }

    /// Presign `req` at the current time of `ctx`.
    pub fn presign(
        &self,
        ctx: &Context,
        cred: &Credential,
        req: &PresignRequest,
    ) -> Result<PresignedUrl> {
        self.presign_at(ctx.now(), cred, req)
    }

    /// Presign `req` as if the current time were `now`.
    ///
    /// The same inputs always produce the same url.
    pub fn presign_at(
        &self,
        now: DateTime,
        cred: &Credential,
        req: &PresignRequest,
    ) -> Result<PresignedUrl> {
        if !cred.is_valid() {
            return Err(Error::config_invalid(
                "access key id and secret access key must not be empty",
            ));
        }
        let key = req.validate()?;
        let bucket = req.bucket();
        if self.style == AddressingStyle::VirtualHosted && !is_dns_compatible(bucket) {
            return Err(Error::request_invalid(format!(
                "bucket {bucket:?} can not be used as a host name"
            )));
        }

        let expires_in = req.expires_in().as_secs();
        let expires_at = i64::try_from(expires_in)
            .ok()
            .and_then(TimeDelta::try_seconds)
            .and_then(|d| now.checked_add_signed(d))
            .ok_or_else(|| {
                Error::request_invalid(format!("expires in {expires_in}s is out of range"))
            })?;

        let host = self.endpoint.host_for(bucket, self.style);
        let path = match self.style {
            AddressingStyle::Path => encode_path(&format!("/{bucket}/{key}")),
            AddressingStyle::VirtualHosted => encode_path(&format!("/{key}")),
        };

        let mut headers = HeaderMap::new();
        if let Some(v) = req.content_type() {
            headers.insert(CONTENT_TYPE, header_value(CONTENT_TYPE.as_str(), v)?);
        }
        if let Some(v) = req.content_md5() {
            headers.insert(CONTENT_MD5, header_value(CONTENT_MD5, v)?);
        }
        let canonical_headers = canonicalize_header(&host, &headers)?;
        let signed_headers = canonical_headers
            .iter()
            .map(|(k, _)| *k)
            .collect::<Vec<_>>()
            .join(";");

        let scope = format!(
            "{}/{}/{S3_SERVICE}/{AWS4_REQUEST}",
            format_date(now),
            self.region
        );
        debug!("calculated scope: {scope}");

        let query = canonicalize_query(cred, &scope, now, expires_in, &signed_headers);

        let creq = canonical_request_string(
            req.method().as_str(),
            &path,
            &query,
            &canonical_headers,
            &signed_headers,
        )?;
        debug!("calculated canonical request: {creq}");
        let encoded_req = hex_sha256(creq.as_bytes());

        let string_to_sign = {
            let mut f = String::new();
            writeln!(f, "{AWS4_HMAC_SHA256}")?;
            writeln!(f, "{}", format_iso8601(now))?;
            writeln!(f, "{scope}")?;
            write!(f, "{encoded_req}")?;
            f
        };
        debug!("calculated string to sign: {string_to_sign}");

        let signing_key =
            generate_signing_key(&cred.secret_access_key, now, &self.region, S3_SERVICE);
        let signature = hex_hmac_sha256(&signing_key, string_to_sign.as_bytes());

        let url = format!(
            "{}://{host}{path}?{query}&{X_AMZ_SIGNATURE}={signature}",
            self.endpoint.scheme()
        );

        Ok(PresignedUrl {
            method: req.method().clone(),
            url,
            headers,
            signed_at: now,
            expires_at,
        })
    }
}

impl SignRequest for Presigner {
    type Credential = Credential;
    type Request = PresignRequest;
    type Output = PresignedUrl;

    fn sign_request(
        &self,
        ctx: &Context,
        req: &Self::Request,
        credential: &Self::Credential,
    ) -> Result<Self::Output> {
        self.presign(ctx, credential, req)
    }
}

/// Encode every `/` separated segment on its own, keeping the separators.
fn encode_path(path: &str) -> String {
    path.split('/')
        .map(|seg| utf8_percent_encode(seg, &AWS_URI_ENCODE_SET).to_string())
        .collect::<Vec<_>>()
        .join("/")
}

fn is_dns_compatible(bucket: &str) -> bool {
    bucket
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || b == b'.' || b == b'-')
}

fn header_value(name: &str, value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value.trim()).map_err(|e| {
        Error::request_invalid(format!("{name} is not a valid header value")).with_source(e)
    })
}

/// Returns `(name, value)` pairs sorted by name, `host` included.
fn canonicalize_header<'a>(
    host: &'a str,
    headers: &'a HeaderMap,
) -> Result<Vec<(&'a str, &'a str)>> {
    let mut pairs = Vec::with_capacity(headers.len() + 1);
    pairs.push((HOST.as_str(), host));
    for (k, v) in headers {
        pairs.push((k.as_str(), v.to_str()?));
    }
    pairs.sort();
    Ok(pairs)
}

/// Build the sorted and encoded query, without the signature.
fn canonicalize_query(
    cred: &Credential,
    scope: &str,
    now: DateTime,
    expires_in: u64,
    signed_headers: &str,
) -> String {
    let mut query = vec![
        (X_AMZ_ALGORITHM, AWS4_HMAC_SHA256.to_string()),
        (
            X_AMZ_CREDENTIAL,
            format!("{}/{scope}", cred.access_key_id),
        ),
        (X_AMZ_DATE, format_iso8601(now)),
        (X_AMZ_EXPIRES, expires_in.to_string()),
        (X_AMZ_SIGNED_HEADERS, signed_headers.to_string()),
    ];
    if let Some(token) = cred.session_token.as_deref().filter(|v| !v.is_empty()) {
        query.push((X_AMZ_SECURITY_TOKEN, token.to_string()));
    }

    // Sort by param name
    query.sort();

    query
        .iter()
        .map(|(k, v)| {
            format!(
                "{}={}",
                utf8_percent_encode(k, &AWS_URI_ENCODE_SET),
                utf8_percent_encode(v, &AWS_URI_ENCODE_SET)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

fn canonical_request_string(
    method: &str,
    path: &str,
    query: &str,
    headers: &[(&str, &str)],
    signed_headers: &str,
) -> Result<String> {
    // 256 is specially chosen to avoid reallocation for most requests.
    let mut f = String::with_capacity(256);

    writeln!(f, "{method}")?;
    writeln!(f, "{path}")?;
    writeln!(f, "{query}")?;
    for (k, v) in headers {
        writeln!(f, "{k}:{v}")?;
    }
    writeln!(f)?;
    writeln!(f, "{signed_headers}")?;
    write!(f, "{UNSIGNED_PAYLOAD}")?;

    Ok(f)
}

fn generate_signing_key(secret: &str, time: DateTime, region: &str, service: &str) -> Vec<u8> {
    // Sign secret
    let secret = format!("AWS4{secret}");
    // Sign date
    let sign_date = hmac_sha256(secret.as_bytes(), format_date(time).as_bytes());
    // Sign region
    let sign_region = hmac_sha256(sign_date.as_slice(), region.as_bytes());
    // Sign service
    let sign_service = hmac_sha256(sign_region.as_slice(), service.as_bytes());
    // Sign request
    hmac_sha256(sign_service.as_slice(), AWS4_REQUEST.as_bytes())
}
