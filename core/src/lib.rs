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

//! Core components for presigning object-store URLs and signing file links.
//!
//! This crate provides the foundational types and traits shared by the
//! presign services. Nothing in here performs I/O: every signing operation is
//! a pure function of its inputs, the configured environment and the clock.
//!
//! ## Overview
//!
//! The crate is built around several key concepts:
//!
//! - **Context**: A container that holds the environment and clock implementations
//! - **Traits**: Abstract interfaces for credential loading (`ProvideCredential`) and signing (`SignRequest`)
//! - **Signer**: Coordinates credential loading and signing, loading credentials fresh on every call
//!
//! ## Example
//!
//! ```
//! use presign_core::{Context, ProvideCredential, Result, SignRequest, Signer, SigningCredential};
//!
//! #[derive(Clone, Debug)]
//! struct MyCredential {
//!     secret: String,
//! }
//!
//! impl SigningCredential for MyCredential {
//!     fn is_valid(&self) -> bool {
//!         !self.secret.is_empty()
//!     }
//! }
//!
//! #[derive(Debug)]
//! struct MyLoader;
//!
//! impl ProvideCredential for MyLoader {
//!     type Credential = MyCredential;
//!
//!     fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
//!         Ok(Some(MyCredential {
//!             secret: "my-secret".to_string(),
//!         }))
//!     }
//! }
//!
//! #[derive(Debug)]
//! struct MyTagger;
//!
//! impl SignRequest for MyTagger {
//!     type Credential = MyCredential;
//!     type Request = str;
//!     type Output = String;
//!
//!     fn sign_request(
//!         &self,
//!         _: &Context,
//!         req: &str,
//!         cred: &MyCredential,
//!     ) -> Result<String> {
//!         Ok(presign_core::hash::hex_hmac_sha256(cred.secret.as_bytes(), req.as_bytes()))
//!     }
//! }
//!
//! # fn main() -> Result<()> {
//! let signer = Signer::new(Context::new(), MyLoader, MyTagger);
//! let tag = signer.sign("hello")?;
//! assert_eq!(tag.len(), 64);
//! # Ok(())
//! # }
//! ```
//!
//! ## Utilities
//!
//! - [`hash`]: Cryptographic hashing utilities
//! - [`time`]: Time formatting and the injectable [`time::Clock`]
//! - [`utils`]: General utilities including data redaction

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod context;
pub use context::Context;
pub use context::Env;
pub use context::NoopEnv;
pub use context::OsEnv;
pub use context::StaticEnv;

mod error;
pub use error::{Error, ErrorKind, Result};

mod api;
pub use api::{ProvideCredential, SignRequest, SigningCredential};
mod signer;
pub use signer::Signer;
