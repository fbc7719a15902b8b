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

//! Signed links for files served through an edge function.
//!
//! A link is `/files/<percent encoded key>?signature=<tag>` where the tag is the
//! hex encoded HMAC-SHA256 of the raw key under a shared secret. The verifier
//! decodes the path back to the raw key and recomputes the tag, so both sides
//! agree on the key as stored, never on an encoded form of it.
//!
//! ## Quick Start
//!
//! ```
//! use presign_core::{Context, Signer};
//! use presign_link::{LinkSigner, LinkVerifier, StaticCredentialProvider};
//!
//! # fn main() -> presign_core::Result<()> {
//! let signer = Signer::new(
//!     Context::new(),
//!     StaticCredentialProvider::new("top-secret"),
//!     LinkSigner::new(),
//! );
//! let link = signer.sign("daily-reports/a@b.com/2024-01-01/x.jpg")?;
//!
//! let verifier = LinkVerifier::new("top-secret")?;
//! let query = format!("signature={}", link.signature());
//! let key = verifier.verify_path(link.path(), Some(&query))?;
//! assert_eq!(key, "daily-reports/a@b.com/2024-01-01/x.jpg");
//! # Ok(())
//! # }
//! ```

mod constants;
pub use constants::{DEFAULT_PREFIX, LINK_SIGNING_SECRET, SIGNATURE_QUERY};

mod key;
pub use key::LinkSecret;

mod sign_request;
pub use sign_request::{sign, verify, LinkSigner, SignedLink};

mod verify;
pub use verify::LinkVerifier;

mod provide_credential;
pub use provide_credential::{EnvCredentialProvider, StaticCredentialProvider};
