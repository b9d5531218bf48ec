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
use http::{Method, StatusCode};
use paysign_core::ErrorKind;
use paysign_rapyd::resources::*;
use pretty_assertions::assert_eq;
use serde_json::{json, Map};

use crate::common::*;

#[tokio::test]
async fn test_non_200_is_api_error() -> Result<()> {
    let body = r#"{"error":"invalid_request"}"#;

    for status in [
        StatusCode::BAD_REQUEST,
        StatusCode::CREATED,
        StatusCode::INTERNAL_SERVER_ERROR,
    ] {
        let mock = MockHttpSend::new(status, body);
        let client = mock_client(&mock);

        let err = client
            .post_signed(&json!({"amount": 1}), "/v1/payments")
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ApiError);
        assert_eq!(err.status(), Some(status));
        assert!(err.to_string().contains(status.as_str()));
        assert!(err.to_string().contains(body));

        let err = client.get_signed("/v1/payments").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ApiError);
        assert!(err.to_string().contains(body));
    }
    Ok(())
}

#[tokio::test]
async fn test_bad_request_message() -> Result<()> {
    let mock = MockHttpSend::new(StatusCode::BAD_REQUEST, r#"{"error":"invalid_request"}"#);
    let client = mock_client(&mock);

    let err = client
        .create_payment(&CreatePayment::default())
        .await
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        r#"api error: got status code 400, response {"error":"invalid_request"}"#
    );
    Ok(())
}

#[tokio::test]
async fn test_create_wallet() -> Result<()> {
    let mock = MockHttpSend::new(
        StatusCode::OK,
        r#"{
            "status": {"status": "SUCCESS", "operation_id": "op_1"},
            "data": {"id": "ewallet_1", "ewallet_reference_id": "jane-0001", "type": "person"}
        }"#,
    );
    let client = mock_client(&mock);

    let wallet = Wallet {
        ewallet_reference_id: "jane-0001".to_string(),
        wallet_type: Some("person".to_string()),
        ..Default::default()
    };
    let resp = client.create_wallet(&wallet).await?;

    assert!(resp.status.is_success());
    assert_eq!(resp.data.id, "ewallet_1");

    let req = mock.last_request();
    assert_eq!(req.method, Method::POST);
    assert_eq!(req.uri.path(), "/v1/user");
    assert_eq!(
        serde_json::from_slice::<serde_json::Value>(&req.body)?,
        json!({"ewallet_reference_id": "jane-0001", "type": "person"})
    );
    Ok(())
}

#[tokio::test]
async fn test_create_customer() -> Result<()> {
    let mock = MockHttpSend::new(
        StatusCode::OK,
        r#"{"status": {"status": "SUCCESS"}, "data": {"id": "cus_1", "name": "Juan"}}"#,
    );
    let client = mock_client(&mock);

    let customer = Customer {
        name: "Juan".to_string(),
        ..Default::default()
    };
    let resp = client.create_customer(&customer).await?;

    assert_eq!(resp.data.id, "cus_1");
    assert_eq!(mock.last_request().uri.path(), "/v1/customers");
    Ok(())
}

#[tokio::test]
async fn test_create_payment() -> Result<()> {
    let mock = MockHttpSend::new(
        StatusCode::OK,
        r#"{"status": {"status": "SUCCESS"}, "data": {"id": "payment_1", "status": "ACT"}}"#,
    );
    let client = mock_client(&mock);

    let payment = CreatePayment {
        amount: 100.0,
        currency: "JPY".to_string(),
        payment_method: Some(PaymentMethod::for_country(
            "JP",
            JP_BANK_TRANSFER,
            Map::new(),
        )?),
        ..Default::default()
    };
    let resp = client.create_payment(&payment).await?;

    assert_eq!(resp.data.id, "payment_1");
    assert_eq!(mock.last_request().uri.path(), "/v1/payments");
    Ok(())
}

#[tokio::test]
async fn test_get_payment_method_fields() -> Result<()> {
    let mock = MockHttpSend::new(
        StatusCode::OK,
        r#"{"status": {"status": "SUCCESS"}, "data": {"type": "ph_bancnet_bank", "fields": []}}"#,
    );
    let client = mock_client(&mock);

    let resp = client.get_payment_method_fields(PH_BANCNET_BANK).await?;
    assert_eq!(resp.data.payment_type, PH_BANCNET_BANK);

    let req = mock.last_request();
    assert_eq!(req.method, Method::GET);
    assert_eq!(
        req.uri.path(),
        "/v1/payment_methods/required_fields/ph_bancnet_bank"
    );
    Ok(())
}

#[tokio::test]
async fn test_get_payment_method_fields_encodes_segment() -> Result<()> {
    let mock = MockHttpSend::new(
        StatusCode::OK,
        r#"{"status": {"status": "SUCCESS"}, "data": {"type": "", "fields": []}}"#,
    );
    let client = mock_client(&mock);

    client.get_payment_method_fields("a/b c").await?;
    assert_eq!(
        mock.last_request().uri.path(),
        "/v1/payment_methods/required_fields/a%2Fb%20c"
    );
    Ok(())
}

#[tokio::test]
async fn test_get_country_payment_methods() -> Result<()> {
    let mock = MockHttpSend::new(
        StatusCode::OK,
        r#"{"status": {"status": "SUCCESS"}, "data": [{"type": "nz_poli_bank", "country": "nz"}]}"#,
    );
    let client = mock_client(&mock);

    let resp = client.get_country_payment_methods("NZ").await?;
    assert_eq!(resp.data[0].payment_type, NZ_POLI_BANK);

    let req = mock.last_request();
    assert_eq!(req.uri.path(), "/v1/payment_methods/country");
    assert_eq!(req.uri.query(), Some("country=NZ"));

    client.get_country_payment_methods("N&Z").await?;
    assert_eq!(mock.last_request().uri.query(), Some("country=N%26Z"));
    Ok(())
}

#[tokio::test]
async fn test_malformed_response_is_error() -> Result<()> {
    let mock = MockHttpSend::new(StatusCode::OK, "not json");
    let client = mock_client(&mock);

    let err = client
        .create_wallet(&Wallet::default())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unexpected);
    Ok(())
}

#[tokio::test]
async fn test_resolve() -> Result<()> {
    let client = mock_client(&MockHttpSend::new(StatusCode::OK, ""));

    assert_eq!(
        client.resolve("/v1/payments")?.as_str(),
        "https://api.example.com/v1/payments"
    );
    assert_eq!(
        client.resolve("https://other.example.com/v2/x")?.as_str(),
        "https://other.example.com/v2/x"
    );
    assert!(client.resolve("http://[::1").unwrap_err().is_config_error());
    Ok(())
}
