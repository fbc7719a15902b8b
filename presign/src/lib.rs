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

//! Presigned object store urls and signed file links.
//!
//! This crate re-exports [`presign_core`] and puts every signing scheme behind
//! a cargo feature:
//!
//! - `s3`: AWS SigV4 presigned urls, see [`s3`]
//! - `link`: HMAC signed file links, see [`link`]
//!
//! Both are enabled by default.

pub use presign_core::*;

#[cfg(feature = "s3")]
pub mod s3;

#[cfg(feature = "link")]
pub mod link;

/// Create a context that reads the process environment and the system clock.
pub fn default_context() -> Context {
    Context::new().with_env(OsEnv)
}
