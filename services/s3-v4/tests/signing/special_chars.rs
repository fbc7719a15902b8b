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
async fn test_put_then_get_with_special_characters() -> Result<()> {
    let Some((signer, bucket)) = init_signing_test() else {
        warn!("PRESIGN_S3_TEST is not set, skipped");
        return Ok(());
    };

    for key in [
        "presign/special/a b c.txt",
        "presign/special/!@#$%^&*()_+-=;:'><,?.txt",
        "presign/special/数据/文件.txt",
        "presign/special/tilde~and+plus.txt",
    ] {
        let put = signer.sign(&PresignRequest::put(&bucket, key))?;
        let (status, _) = send_presigned(&put, Some(key.as_bytes().to_vec())).await?;
        assert_eq!(StatusCode::OK, status, "put {key}");

        let get = signer.sign(&PresignRequest::get(&bucket, key))?;
        let (status, body) = send_presigned(&get, None).await?;
        assert_eq!(StatusCode::OK, status, "get {key}");
        assert_eq!(key.as_bytes(), body.as_slice());
    }
    Ok(())
}
