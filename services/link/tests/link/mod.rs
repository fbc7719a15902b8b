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

use std::collections::HashMap;

use anyhow::Result;
use log::debug;
use presign_core::{Context, ErrorKind, Signer, StaticEnv};
use presign_link::{EnvCredentialProvider, LinkSigner, LinkVerifier, LINK_SIGNING_SECRET};

fn env_context(secret: Option<&str>) -> Context {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut envs = HashMap::new();
    if let Some(secret) = secret {
        envs.insert(LINK_SIGNING_SECRET.to_string(), secret.to_string());
    }
    Context::new().with_env(StaticEnv { envs })
}

#[test]
fn test_sign_and_verify_request() -> Result<()> {
    let ctx = env_context(Some("top-secret"));
    let signer = Signer::new(ctx.clone(), EnvCredentialProvider::new(), LinkSigner::new());
    let verifier = LinkVerifier::from_env(&ctx)?;

    for key in [
        "daily-reports/a@b.com/2024-01-01/x.jpg",
        "uploads/my file (1).pdf",
        "uploads/a+b=c.txt",
        "résumés/Zoë/简历.pdf",
    ] {
        let url = signer.sign(key)?.to_url("https://files.example.com");
        debug!("signed link: {url}");

        let (parts, _) = http::Request::get(url.as_str()).body(())?.into_parts();
        assert_eq!(verifier.verify_request(&parts)?, key);
    }
    Ok(())
}

#[test]
fn test_rotated_secret_is_rejected() -> Result<()> {
    let signer = Signer::new(
        env_context(Some("old-secret")),
        EnvCredentialProvider::new(),
        LinkSigner::new(),
    );
    let link = signer.sign("a/b.png")?;

    let verifier = LinkVerifier::from_env(&env_context(Some("new-secret")))?;
    let (parts, _) = http::Request::get(link.to_url("https://files.example.com"))
        .body(())?
        .into_parts();
    let err = verifier.verify_request(&parts).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unauthorized);
    Ok(())
}

#[test]
fn test_other_key_is_rejected() -> Result<()> {
    let ctx = env_context(Some("top-secret"));
    let signer = Signer::new(ctx.clone(), EnvCredentialProvider::new(), LinkSigner::new());
    let verifier = LinkVerifier::from_env(&ctx)?;

    let link = signer.sign("a/b.png")?;
    let query = format!("signature={}", link.signature());
    let err = verifier
        .verify_path("/files/a/B.png", Some(&query))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unauthorized);
    Ok(())
}

#[test]
fn test_missing_secret() {
    let ctx = env_context(None);
    let signer = Signer::new(ctx.clone(), EnvCredentialProvider::new(), LinkSigner::new());

    let err = signer.sign("a/b.png").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ConfigInvalid);

    let err = LinkVerifier::from_env(&ctx).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
}
