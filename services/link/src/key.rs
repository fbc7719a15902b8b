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

use std::fmt::{Debug, Formatter};

use presign_core::utils::Redact;
use presign_core::SigningCredential;

/// LinkSecret is the shared secret links are signed with.
///
/// The bytes never show up in `Debug` output.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct LinkSecret(Vec<u8>);

impl LinkSecret {
    /// Create a new secret from raw bytes.
    pub fn new(secret: impl Into<Vec<u8>>) -> Self {
        Self(secret.into())
    }

    /// Raw secret bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl From<&str> for LinkSecret {
    fn from(secret: &str) -> Self {
        Self::new(secret)
    }
}

impl From<String> for LinkSecret {
    fn from(secret: String) -> Self {
        Self::new(secret)
    }
}

impl Debug for LinkSecret {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("LinkSecret")
            .field(&Redact::secret(&self.0))
            .finish()
    }
}

impl SigningCredential for LinkSecret {
    fn is_valid(&self) -> bool {
        !self.0.is_empty()
    }
}
