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
use http::{Method, Request, StatusCode};
use paysign_core::{Context, ErrorKind, Signer, StaticEnv};
use paysign_rapyd::signature::{compute, SignatureData};
use paysign_rapyd::{Client, DefaultCredentialProvider, RequestSigner};
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::*;

const OK_BODY: &str = r#"{"status":{"status":"SUCCESS"},"data":{}}"#;

/// Recompute the signature of a recorded request from its own headers.
fn recompute(req: &RecordedRequest) -> String {
    let method = req.method.as_str().to_lowercase();
    let path = req.uri.path_and_query().map(|v| v.as_str()).unwrap();

    compute(
        &SignatureData {
            http_method: &method,
            path,
            salt: req.header("salt"),
            timestamp: req.header("timestamp"),
            body: &req.body,
        },
        &credential(),
    )
}

#[tokio::test]
async fn test_post_signed_is_reproducible() -> Result<()> {
    let mock = MockHttpSend::new(StatusCode::OK, OK_BODY);
    let client = mock_client(&mock);

    let payload = json!({"amount": 100, "currency": "USD", "description": "naïve café"});
    client.post_signed(&payload, "/v1/payments").await?;

    let req = mock.last_request();
    assert_eq!(req.method, Method::POST);
    assert_eq!(req.uri.to_string(), "https://api.example.com/v1/payments");
    assert_eq!(req.header("content-type"), "application/json");
    assert_eq!(req.header("access_key"), ACCESS_KEY);
    assert_eq!(req.body, serde_json::to_vec(&payload)?);
    assert_eq!(req.header("signature"), recompute(&req));
    Ok(())
}

#[tokio::test]
async fn test_get_signed_is_reproducible() -> Result<()> {
    let mock = MockHttpSend::new(StatusCode::OK, OK_BODY);
    let client = mock_client(&mock);

    client
        .get_signed("/v1/payment_methods/country?country=PH")
        .await?;

    let req = mock.last_request();
    assert_eq!(req.method, Method::GET);
    assert!(req.body.is_empty());
    assert_eq!(
        req.uri.path_and_query().unwrap().as_str(),
        "/v1/payment_methods/country?country=PH"
    );
    assert_eq!(req.header("signature"), recompute(&req));
    Ok(())
}

#[tokio::test]
async fn test_every_call_is_signed_afresh() -> Result<()> {
    let mock = MockHttpSend::new(StatusCode::OK, OK_BODY);
    let client = mock_client(&mock);

    client.get_signed("/v1/payments").await?;
    client.get_signed("/v1/payments").await?;

    let requests = mock.requests();
    assert_eq!(requests.len(), 2);
    assert_ne!(requests[0].header("salt"), requests[1].header("salt"));
    assert_ne!(
        requests[0].header("signature"),
        requests[1].header("signature")
    );
    for req in &requests {
        assert_eq!(req.header("signature"), recompute(req));
    }
    Ok(())
}

#[tokio::test]
async fn test_missing_credential_sends_nothing() -> Result<()> {
    let mock = MockHttpSend::new(StatusCode::OK, OK_BODY);
    let ctx = Context::new()
        .with_http_send(mock.clone())
        .with_env(StaticEnv {
            envs: HashMap::new(),
        });
    let signer = Signer::new(
        ctx.clone(),
        DefaultCredentialProvider::new(),
        RequestSigner::new(),
    );
    let client = Client::new(ctx, signer, BASE_URL)?;

    let err = client
        .post_signed(&json!({"amount": 1}), "/v1/payments")
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::CredentialInvalid);
    assert!(mock.requests().is_empty());
    Ok(())
}

#[tokio::test]
async fn test_signer_signs_exact_body_bytes() -> Result<()> {
    let ctx = Context::new();
    let signer = Signer::new(
        ctx,
        paysign_rapyd::StaticCredentialProvider::new(ACCESS_KEY, SECRET_KEY),
        RequestSigner::new(),
    );

    let body = br#"{ "amount" : 100 }"#;
    let (mut parts, _) = Request::post("https://api.example.com/v1/payments")
        .body(())?
        .into_parts();
    signer.sign(&mut parts, body).await?;

    let req = RecordedRequest {
        method: parts.method.clone(),
        uri: parts.uri.clone(),
        headers: parts.headers.clone(),
        body: bytes::Bytes::from_static(body),
    };
    assert_eq!(req.header("signature"), recompute(&req));

    let reformatted = RecordedRequest {
        body: bytes::Bytes::from_static(br#"{"amount":100}"#),
        ..req.clone()
    };
    assert_ne!(req.header("signature"), recompute(&reformatted));
    Ok(())
}
