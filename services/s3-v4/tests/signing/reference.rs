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

//! Cross check presigned urls against the `aws-sigv4` crate.

use std::str::FromStr;
use std::time::{Duration, SystemTime};

use anyhow::Result;
use aws_credential_types::Credentials;
use aws_sigv4::http_request::{
    PayloadChecksumKind, PercentEncodingMode, SignableBody, SignableRequest, SignatureLocation,
    SigningSettings, UriPathNormalizationMode,
};
use aws_sigv4::sign::v4;
use chrono::{TimeZone, Utc};
use http::{Method, Request, Uri};
use pretty_assertions::assert_eq;
use presign_core::time::DateTime;
use presign_s3_v4::{AddressingStyle, Credential, PresignRequest, Presigner};
use test_case::test_case;

fn base_url(uri: &Uri) -> String {
    format!(
        "{}://{}{}",
        uri.scheme_str().unwrap_or_default(),
        uri.authority().map(|v| v.as_str()).unwrap_or_default(),
        uri.path()
    )
}

fn sorted_query(uri: &Uri) -> Vec<(String, String)> {
    let mut pairs = form_urlencoded::parse(uri.query().unwrap_or_default().as_bytes())
        .into_owned()
        .collect::<Vec<_>>();
    pairs.sort();
    pairs
}

/// Presign `req` with aws-sigv4 against the already encoded `url`.
fn presign_with_aws_sigv4(
    url: &str,
    req: &PresignRequest,
    cred: &Credential,
    region: &str,
    now: DateTime,
) -> Result<Uri> {
    let mut http_req = Request::new("");
    *http_req.method_mut() = req.method().clone();
    *http_req.uri_mut() = Uri::from_str(url)?;
    if let Some(v) = req.content_type() {
        http_req.headers_mut().insert("content-type", v.parse()?);
    }
    if let Some(v) = req.content_md5() {
        http_req.headers_mut().insert("content-md5", v.parse()?);
    }

    let mut ss = SigningSettings::default();
    ss.percent_encoding_mode = PercentEncodingMode::Single;
    ss.uri_path_normalization_mode = UriPathNormalizationMode::Disabled;
    ss.payload_checksum_kind = PayloadChecksumKind::NoHeader;
    ss.signature_location = SignatureLocation::QueryParams;
    ss.expires_in = Some(req.expires_in());

    let id = Credentials::new(
        cred.access_key_id.clone(),
        cred.secret_access_key.clone(),
        cred.session_token.clone(),
        None,
        "hardcoded-credentials",
    )
    .into();
    let sp = v4::SigningParams::builder()
        .identity(&id)
        .region(region)
        .name("s3")
        .time(SystemTime::from(now))
        .settings(ss)
        .build()
        .expect("signing params must be valid");

    let output = aws_sigv4::http_request::sign(
        SignableRequest::new(
            http_req.method().as_str(),
            http_req.uri().to_string(),
            http_req
                .headers()
                .iter()
                .map(|(k, v)| (k.as_str(), std::str::from_utf8(v.as_bytes()).unwrap())),
            SignableBody::UnsignedPayload,
        )?,
        &sp.into(),
    )?;
    let (aws_sig, _) = output.into_parts();
    aws_sig.apply_to_request_http1x(&mut http_req);

    Ok(http_req.uri().clone())
}

#[test_case(Method::GET, "b", "hello.txt", AddressingStyle::Path; "get")]
#[test_case(Method::PUT, "b", "a/b c.png", AddressingStyle::Path; "put with space")]
#[test_case(Method::PUT, "b", "dir/!@$&'()*+,;=:.txt", AddressingStyle::Path; "sub delims")]
#[test_case(Method::GET, "b", "数据/文件~.txt", AddressingStyle::Path; "non ascii")]
#[test_case(Method::GET, "my-bucket", "x/y/z", AddressingStyle::VirtualHosted; "virtual hosted")]
#[test_case(Method::HEAD, "b", "k", AddressingStyle::Path; "head")]
fn test_matches_aws_sigv4(
    method: Method,
    bucket: &str,
    key: &str,
    style: AddressingStyle,
) -> Result<()> {
    let _ = env_logger::builder().is_test(true).try_init();

    let now = Utc.with_ymd_and_hms(2024, 3, 15, 8, 30, 0).unwrap();
    let cred = Credential::new("access_key_id", "secret_access_key");
    let presigner = Presigner::new("http://127.0.0.1:9000")?
        .with_region("test")
        .with_addressing_style(style);
    let req = PresignRequest::new(method, bucket, key).with_expires_in(Duration::from_secs(600));

    let actual = presigner.presign_at(now, &cred, &req)?.uri()?;
    let expected = presign_with_aws_sigv4(&base_url(&actual), &req, &cred, "test", now)?;

    assert_eq!(expected.authority(), actual.authority());
    assert_eq!(expected.path(), actual.path());
    assert_eq!(sorted_query(&expected), sorted_query(&actual));
    Ok(())
}

#[test]
fn test_matches_aws_sigv4_with_token_and_headers() -> Result<()> {
    let _ = env_logger::builder().is_test(true).try_init();

    let now = Utc.with_ymd_and_hms(2024, 3, 15, 8, 30, 0).unwrap();
    let cred = Credential::new("access_key_id", "secret_access_key")
        .with_session_token("session/token+value=");
    let presigner = Presigner::new("https://acct.r2.example.com")?;
    let req = PresignRequest::put("uploads", "applications/42/cv.pdf")
        .with_expires_in(Duration::from_secs(900))
        .with_content_type("application/pdf")
        .with_content_md5("1B2M2Y8AsgTpgAmY7PhCfg==");

    let actual = presigner.presign_at(now, &cred, &req)?.uri()?;
    let expected = presign_with_aws_sigv4(&base_url(&actual), &req, &cred, "auto", now)?;

    assert_eq!(expected.path(), actual.path());
    assert_eq!(sorted_query(&expected), sorted_query(&actual));
    Ok(())
}
