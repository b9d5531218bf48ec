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

use bytes::Bytes;
use http::{Request, StatusCode};
use paysign_core::time::{now, timestamp};
use paysign_core::{Context, Signer, StaticEnv};
use paysign_rapyd::signature::{compute, SignatureData};
use paysign_rapyd::{Client, DefaultCredentialProvider, RequestSigner, WebhookValidator};
use pretty_assertions::assert_eq;

use crate::common::*;

const HOST: &str = "merchant.example.com";
const PATH: &str = "/hooks/rapyd?source=sandbox";
const BODY: &str = r#"{"id":"wh_1","type":"PAYMENT_COMPLETED","data":{"amount":100}}"#;

/// Build a webhook the way the remote API delivers it.
fn deliver(body: &str) -> Request<Bytes> {
    let salt = "q1w2e3r4t5y6u7i8";
    let ts = timestamp(now()).to_string();
    let url = format!("https://{HOST}{PATH}");

    let signature = compute(
        &SignatureData {
            http_method: "",
            path: &url,
            salt,
            timestamp: &ts,
            body: BODY.as_bytes(),
        },
        &credential(),
    );

    Request::post(PATH)
        .header("host", HOST)
        .header("access_key", ACCESS_KEY)
        .header("salt", salt)
        .header("timestamp", ts.as_str())
        .header("signature", signature)
        .body(Bytes::from(body.to_string()))
        .unwrap()
}

fn with_header(
    mut req: Request<Bytes>,
    name: &'static str,
    mutate: impl Fn(&str) -> String,
) -> Request<Bytes> {
    let value = mutate(req.headers()[name].to_str().unwrap());
    req.headers_mut().insert(name, value.parse().unwrap());
    req
}

/// Flip the lowest bit of the byte at `idx`.
fn flip(s: &str, idx: usize) -> String {
    let mut bytes = s.as_bytes().to_vec();
    bytes[idx] ^= 0x01;
    String::from_utf8(bytes).unwrap()
}

#[tokio::test]
async fn test_client_validates_delivered_webhook() {
    let client = mock_client(&MockHttpSend::new(StatusCode::OK, ""));

    assert!(client.validate_webhook(&deliver(BODY)).await);
}

#[tokio::test]
async fn test_duplicate_delivery_keeps_body() {
    let client = mock_client(&MockHttpSend::new(StatusCode::OK, ""));
    let req = deliver(BODY);

    assert!(client.validate_webhook(&req).await);
    assert!(client.validate_webhook(&req).await);

    let event: serde_json::Value = serde_json::from_slice(req.body()).unwrap();
    assert_eq!(event["type"], "PAYMENT_COMPLETED");
    assert_eq!(req.body().as_ref(), BODY.as_bytes());
}

#[test]
fn test_single_byte_mutations_are_rejected() {
    let validator = WebhookValidator::new(credential());
    assert!(validator.validate(&deliver(BODY)));

    for idx in 0..BODY.len() {
        assert!(
            !validator.validate(&deliver(&flip(BODY, idx))),
            "body mutation at {idx} must be rejected"
        );
    }

    for idx in 0..16 {
        let req = with_header(deliver(BODY), "salt", |v| flip(v, idx));
        assert!(!validator.validate(&req), "salt mutation at {idx} must be rejected");
    }

    let req = with_header(deliver(BODY), "timestamp", |v| {
        (v.parse::<i64>().unwrap() + 1).to_string()
    });
    assert!(!validator.validate(&req));

    let req = with_header(deliver(BODY), "timestamp", |v| format!("0{v}"));
    assert!(!validator.validate(&req));

    let req = with_header(deliver(BODY), "timestamp", |v| format!("+{v}"));
    assert!(!validator.validate(&req));

    let req = with_header(deliver(BODY), "signature", |v| flip(v, 0));
    assert!(!validator.validate(&req));

    let req = with_header(deliver(BODY), "host", |_| "attacker.example.com".to_string());
    assert!(!validator.validate(&req));
}

#[test]
fn test_missing_headers_are_rejected() {
    let validator = WebhookValidator::new(credential());

    for name in ["salt", "timestamp", "signature"] {
        let mut req = deliver(BODY);
        req.headers_mut().remove(name);
        assert!(!validator.validate(&req), "missing {name} must be rejected");
    }
}

#[test]
fn test_wrong_secret_is_rejected() {
    let validator = WebhookValidator::new(paysign_rapyd::Credential::new(ACCESS_KEY, "rsk_other"));
    assert!(!validator.validate(&deliver(BODY)));
}

#[tokio::test]
async fn test_outbound_signature_is_not_a_webhook_signature() -> anyhow::Result<()> {
    let signer = Signer::new(
        Context::new(),
        paysign_rapyd::StaticCredentialProvider::new(ACCESS_KEY, SECRET_KEY),
        RequestSigner::new(),
    );

    let (mut parts, _) = Request::post(format!("https://{HOST}{PATH}")).body(())?.into_parts();
    signer.sign(&mut parts, BODY.as_bytes()).await?;

    let validator = WebhookValidator::new(credential());
    assert!(!validator.validate_parts(&parts, BODY.as_bytes()));
    Ok(())
}

#[tokio::test]
async fn test_signer_output_in_webhook_form_validates() -> anyhow::Result<()> {
    let signer = Signer::new(
        Context::new(),
        paysign_rapyd::StaticCredentialProvider::new(ACCESS_KEY, SECRET_KEY),
        RequestSigner::new().for_webhook(),
    );

    let (mut parts, _) = Request::post(PATH).header("host", HOST).body(())?.into_parts();
    signer.sign(&mut parts, BODY.as_bytes()).await?;
    let req = Request::from_parts(parts, Bytes::from(BODY));

    let validator = WebhookValidator::new(credential());
    assert!(validator.validate(&req));

    let client = mock_client(&MockHttpSend::new(StatusCode::OK, ""));
    assert!(client.validate_webhook(&req).await);

    let tampered = with_header(req, "timestamp", |v| format!("0{v}"));
    assert!(!validator.validate(&tampered));
    Ok(())
}

#[tokio::test]
async fn test_missing_credential_is_rejected() -> anyhow::Result<()> {
    let ctx = Context::new().with_env(StaticEnv {
        envs: HashMap::new(),
    });
    let signer = Signer::new(
        ctx.clone(),
        DefaultCredentialProvider::new(),
        RequestSigner::new(),
    );
    let client = Client::new(ctx, signer, BASE_URL)?;

    assert!(!client.validate_webhook(&deliver(BODY)).await);
    Ok(())
}
