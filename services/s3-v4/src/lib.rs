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

//! AWS SigV4 presigned urls for S3 compatible object stores.
//!
//! This crate turns a bucket, an object key and a long lived access key pair into
//! a url that lets an untrusted client upload or download that single object
//! directly, without the object store ever seeing the secret.
//!
//! ## Overview
//!
//! Presigning follows [Authenticating Requests: Using Query Parameters](https://docs.aws.amazon.com/AmazonS3/latest/API/sigv4-query-string-auth.html).
//! It is pure computation: no network call is made, and the same inputs signed
//! at the same second always produce the same url.
//!
//! ## Quick Start
//!
//! ```
//! use presign_core::{Context, Signer};
//! use presign_s3_v4::{PresignRequest, Presigner, StaticCredentialProvider};
//!
//! # fn main() -> presign_core::Result<()> {
//! let presigner = Presigner::new("https://acct.r2.example.com")?;
//! let loader = StaticCredentialProvider::new("access_key_id", "secret_access_key");
//! let signer = Signer::new(Context::new(), loader, presigner);
//!
//! let req = PresignRequest::put("uploads", "applications/42/cv.pdf")
//!     .with_expires_in_secs(600)?
//!     .with_content_type("application/pdf");
//! let url = signer.sign(&req)?;
//! assert!(url.url().starts_with("https://acct.r2.example.com/uploads/applications/42/cv.pdf?"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Credential Sources
//!
//! [`DefaultCredentialProvider`] tries, in order:
//!
//! 1. the access key pair in [`Config`]
//! 2. `AWS_ACCESS_KEY_ID`, `AWS_SECRET_ACCESS_KEY` and `AWS_SESSION_TOKEN`

mod constants;
pub use constants::{DEFAULT_EXPIRES_IN_SECS, DEFAULT_REGION};

mod config;
pub use config::Config;

mod credential;
pub use credential::Credential;

mod endpoint;
pub use endpoint::{AddressingStyle, Endpoint};

mod request;
pub use request::{PresignRequest, PresignedUrl};

mod sign_request;
pub use sign_request::Presigner;

mod provide_credential;
pub use provide_credential::{
    ConfigCredentialProvider, DefaultCredentialProvider, EnvCredentialProvider,
    ProvideCredentialChain, StaticCredentialProvider,
};
