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
use std::str::FromStr;
use std::time::Duration;

use http::{HeaderMap, Method, Uri};
use presign_core::time::DateTime;
use presign_core::{Error, Result};

use crate::constants::{DEFAULT_EXPIRES_IN_SECS, X_AMZ_SIGNATURE};

/// PresignRequest describes the single object operation a presigned url grants.
///
/// Built once per call and never changed by signing.
///
/// ```
/// use presign_s3_v4::PresignRequest;
/// use std::time::Duration;
///
/// let req = PresignRequest::put("uploads", "applications/42/cv.pdf")
///     .with_expires_in(Duration::from_secs(600))
///     .with_content_type("application/pdf");
/// assert_eq!(req.key(), "applications/42/cv.pdf");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresignRequest {
    method: Method,
    bucket: String,
    key: String,
    expires_in: Duration,
    content_type: Option<String>,
    content_md5: Option<String>,
}

impl PresignRequest {
    /// Create a new request for `method` on `bucket`/`key`.
    pub fn new(method: Method, bucket: &str, key: &str) -> Self {
        Self {
            method,
            bucket: bucket.to_string(),
            key: key.to_string(),
            expires_in: Duration::from_secs(DEFAULT_EXPIRES_IN_SECS),
            content_type: None,
            content_md5: None,
        }
    }

    /// Create a new `PUT` request, used for direct uploads.
    pub fn put(bucket: &str, key: &str) -> Self {
        Self::new(Method::PUT, bucket, key)
    }

    /// Create a new `GET` request, used for direct downloads.
    pub fn get(bucket: &str, key: &str) -> Self {
        Self::new(Method::GET, bucket, key)
    }

    /// Parse an HTTP method name such as `"PUT"`.
    ///
    /// Names are case-insensitive, `"put"` yields `PUT`. Empty or malformed
    /// names are rejected as `RequestInvalid`.
    pub fn parse_method(method: &str) -> Result<Method> {
        let method = method.trim();
        if method.is_empty() {
            return Err(Error::request_invalid("http method must not be empty"));
        }
        Ok(Method::from_str(&method.to_ascii_uppercase())?)
    }

    /// Set how long the url stays valid.
    pub fn with_expires_in(mut self, expires_in: Duration) -> Self {
        self.expires_in = expires_in;
        self
    }

    /// Set how long the url stays valid in whole seconds.
    ///
    /// Zero and negative values are rejected as `RequestInvalid`.
    pub fn with_expires_in_secs(self, secs: i64) -> Result<Self> {
        if secs <= 0 {
            return Err(Error::request_invalid(format!(
                "expires in must be a positive number of seconds, got {secs}"
            )));
        }
        Ok(self.with_expires_in(Duration::from_secs(secs as u64)))
    }

    /// Require the upload to carry this `content-type`.
    pub fn with_content_type(mut self, content_type: &str) -> Self {
        self.content_type = Some(content_type.to_string());
        self
    }

    /// Require the upload to carry this `content-md5`.
    pub fn with_content_md5(mut self, content_md5: &str) -> Self {
        self.content_md5 = Some(content_md5.to_string());
        self
    }

    /// HTTP method.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Bucket name.
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Object key as given by the caller.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Expiry window.
    pub fn expires_in(&self) -> Duration {
        self.expires_in
    }

    /// Content type to sign, if any.
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// Content md5 to sign, if any.
    pub fn content_md5(&self) -> Option<&str> {
        self.content_md5.as_deref()
    }

    /// Check the request and return the object key with leading `/` stripped.
    pub(crate) fn validate(&self) -> Result<&str> {
        if self.bucket.is_empty() {
            return Err(Error::request_invalid("bucket must not be empty"));
        }
        if self.bucket.contains('/') {
            return Err(Error::request_invalid(format!(
                "bucket {:?} must not contain '/'",
                self.bucket
            )));
        }
        if self.expires_in.as_secs() == 0 {
            return Err(Error::request_invalid(
                "expires in must be at least one second",
            ));
        }

        let key = self.key.trim_start_matches('/');
        if key.is_empty() {
            return Err(Error::request_invalid("object key must not be empty"));
        }
        Ok(key)
    }
}

/// PresignedUrl is the output of presigning.
///
/// The url can be handed to any HTTP client as is. Headers returned by
/// [`PresignedUrl::headers`] were signed and must be sent unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresignedUrl {
    pub(crate) method: Method,
    pub(crate) url: String,
    pub(crate) headers: HeaderMap,
    pub(crate) signed_at: DateTime,
    pub(crate) expires_at: DateTime,
}

impl PresignedUrl {
    /// HTTP method the url is valid for.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// The absolute url.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The url parsed as [`Uri`].
    pub fn uri(&self) -> Result<Uri> {
        Ok(Uri::from_str(&self.url)?)
    }

    /// Signed headers (besides `host`) the client must send.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Time the url was signed at.
    pub fn signed_at(&self) -> DateTime {
        self.signed_at
    }

    /// Time after which the object store rejects the url.
    pub fn expires_at(&self) -> DateTime {
        self.expires_at
    }

    /// Hex encoded signature carried by the url.
    pub fn signature(&self) -> &str {
        let marker = format!("{X_AMZ_SIGNATURE}=");
        self.url
            .rfind(&marker)
            .map(|idx| &self.url[idx + marker.len()..])
            .unwrap_or_default()
    }

    /// Consume self and return the url.
    pub fn into_url(self) -> String {
        self.url
    }
}

impl Display for PresignedUrl {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.url)
    }
}
