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

mod presigned;
mod reference;
mod signer;
mod special_chars;

use std::env;

use anyhow::Result;
use http::StatusCode;
use log::debug;
use presign_core::{Context, Signer, StaticEnv};
use presign_s3_v4::{Config, DefaultCredentialProvider, PresignedUrl, Presigner};
use reqwest::Client;

/// Initialize the live test environment.
///
/// Returns `None` unless `PRESIGN_S3_TEST` is `on`.
pub fn init_signing_test() -> Option<(Signer<Presigner>, String)> {
    let _ = env_logger::builder().is_test(true).try_init();
    let _ = dotenv::dotenv();

    if env::var("PRESIGN_S3_TEST").is_err() || env::var("PRESIGN_S3_TEST").unwrap() != "on" {
        return None;
    }

    let bucket = env::var("PRESIGN_S3_BUCKET").expect("PRESIGN_S3_BUCKET must be set");
    let ctx = Context::new().with_env(StaticEnv {
        envs: [
            (
                "AWS_ENDPOINT_URL",
                env::var("PRESIGN_S3_ENDPOINT").expect("PRESIGN_S3_ENDPOINT must be set"),
            ),
            ("AWS_REGION", env::var("PRESIGN_S3_REGION").unwrap_or_default()),
            (
                "AWS_ACCESS_KEY_ID",
                env::var("PRESIGN_S3_ACCESS_KEY").expect("PRESIGN_S3_ACCESS_KEY must be set"),
            ),
            (
                "AWS_SECRET_ACCESS_KEY",
                env::var("PRESIGN_S3_SECRET_KEY").expect("PRESIGN_S3_SECRET_KEY must be set"),
            ),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect(),
    });

    let config = Config::default().from_env(&ctx);
    let presigner = Presigner::from_config(&config).expect("presigner config must be valid");
    let loader = DefaultCredentialProvider::new(config.into());

    Some((Signer::new(ctx, loader, presigner), bucket))
}

/// Send a request to the presigned url and return status and body.
pub async fn send_presigned(
    url: &PresignedUrl,
    body: Option<Vec<u8>>,
) -> Result<(StatusCode, Vec<u8>)> {
    debug!("presigned url: {url}");

    let mut req = Client::new().request(url.method().clone(), url.url());
    for (k, v) in url.headers() {
        req = req.header(k, v);
    }
    if let Some(body) = body {
        req = req.body(body);
    }

    let resp = req.send().await?;
    let status = resp.status();
    let body = resp.bytes().await?.to_vec();
    debug!("got response: {status} {}", String::from_utf8_lossy(&body));

    Ok((status, body))
}
