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

use anyhow::Result;
use http::StatusCode;
use log::warn;
use presign_s3_v4::PresignRequest;

use super::{init_signing_test, send_presigned};

#[tokio::test]
async fn test_put_then_get_object() -> Result<()> {
    let Some((signer, bucket)) = init_signing_test() else {
        warn!("PRESIGN_S3_TEST is not set, skipped");
        return Ok(());
    };

    let key = "presign/put_then_get.txt";
    let content = b"Hello, World!".to_vec();

    let put = signer.sign(
        &PresignRequest::put(&bucket, key)
            .with_expires_in_secs(600)?
            .with_content_type("text/plain"),
    )?;
    let (status, _) = send_presigned(&put, Some(content.clone())).await?;
    assert_eq!(StatusCode::OK, status);

    let get = signer.sign(&PresignRequest::get(&bucket, key).with_expires_in_secs(600)?)?;
    let (status, body) = send_presigned(&get, None).await?;
    assert_eq!(StatusCode::OK, status);
    assert_eq!(content, body);
    Ok(())
}

#[tokio::test]
async fn test_get_not_exist_object() -> Result<()> {
    let Some((signer, bucket)) = init_signing_test() else {
        warn!("PRESIGN_S3_TEST is not set, skipped");
        return Ok(());
    };

    let get = signer.sign(&PresignRequest::get(&bucket, "presign/not_exist_file"))?;
    let (status, _) = send_presigned(&get, None).await?;
    assert_eq!(StatusCode::NOT_FOUND, status);
    Ok(())
}

#[tokio::test]
async fn test_put_with_other_content_type_is_rejected() -> Result<()> {
    let Some((signer, bucket)) = init_signing_test() else {
        warn!("PRESIGN_S3_TEST is not set, skipped");
        return Ok(());
    };

    let put = signer.sign(
        &PresignRequest::put(&bucket, "presign/content_type.txt").with_content_type("text/plain"),
    )?;

    let resp = reqwest::Client::new()
        .put(put.url())
        .header("content-type", "application/json")
        .body("{}")
        .send()
        .await?;
    assert_eq!(StatusCode::FORBIDDEN, resp.status());
    Ok(())
}
