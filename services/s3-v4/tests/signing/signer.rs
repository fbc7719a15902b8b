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
use chrono::{TimeZone, Utc};
use presign_core::time::FixedClock;
use presign_core::{Context, ErrorKind, Signer, StaticEnv};
use presign_s3_v4::{
    Config, DefaultCredentialProvider, EnvCredentialProvider, PresignRequest, Presigner,
};

fn env_context(envs: &[(&str, &str)]) -> Context {
    Context::new()
        .with_env(StaticEnv {
            envs: envs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<HashMap<_, _>>(),
        })
        .with_clock(FixedClock::new(
            Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
        ))
}

#[test]
fn test_signer_reads_env_on_every_call() -> Result<()> {
    let ctx = env_context(&[
        ("AWS_ACCESS_KEY_ID", "AKID"),
        ("AWS_SECRET_ACCESS_KEY", "SECRET"),
    ]);
    let signer = Signer::new(
        ctx.clone(),
        EnvCredentialProvider::new(),
        Presigner::new("https://acct.r2.example.com")?,
    );

    let req = PresignRequest::put("b", "a/b c.png").with_expires_in_secs(600)?;
    let l = signer.sign(&req)?;
    let r = signer.sign(&req)?;
    assert_eq!(l, r);
    assert!(l
        .url()
        .starts_with("https://acct.r2.example.com/b/a/b%20c.png?X-Amz-Algorithm=AWS4-HMAC-SHA256&X-Amz-Credential=AKID%2F20250101%2Fauto%2Fs3%2Faws4_request&"));
    Ok(())
}

#[test]
fn test_signer_without_credential() -> Result<()> {
    let ctx = env_context(&[]);
    let signer = Signer::new(
        ctx,
        EnvCredentialProvider::new(),
        Presigner::new("https://acct.r2.example.com")?,
    );

    let err = signer.sign(&PresignRequest::get("b", "k")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
    Ok(())
}

#[test]
fn test_signer_from_config_and_env() -> Result<()> {
    let ctx = env_context(&[
        ("AWS_ENDPOINT_URL", "http://127.0.0.1:9000"),
        ("AWS_REGION", "us-east-1"),
        ("AWS_ACCESS_KEY_ID", "AKID"),
        ("AWS_SECRET_ACCESS_KEY", "SECRET"),
        ("AWS_SESSION_TOKEN", "TOKEN"),
    ]);
    let config = Config::default().from_env(&ctx);
    let presigner = Presigner::from_config(&config)?;
    let signer = Signer::new(ctx, DefaultCredentialProvider::new(config.into()), presigner);

    let url = signer.sign(&PresignRequest::get("b", "k"))?;
    assert!(url.url().starts_with("http://127.0.0.1:9000/b/k?"));
    assert!(url.url().contains("%2Fus-east-1%2Fs3%2Faws4_request"));
    assert!(url.url().contains("&X-Amz-Security-Token=TOKEN&"));
    Ok(())
}
