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

use bytes::Bytes;
use http::header::CONTENT_TYPE;
use http::{Method, Request, StatusCode};
use log::{debug, warn};
use paysign_core::{Context, Error, Result, Signer, SigningCredential};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::constants::*;
use crate::resources::*;
use crate::{Credential, HeaderNames, WebhookValidator};

/// Characters kept verbatim in a path segment: RFC 3986 unreserved.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Client sends signed requests to the Rapyd API.
///
/// It holds a signer and an http transport as separate capabilities taken
/// from the [`Context`]. No retries are performed: a failed call must be
/// issued again by the caller, which signs it afresh.
#[derive(Debug, Clone)]
pub struct Client {
    ctx: Context,
    signer: Signer<Credential>,
    base_url: Url,
    headers: HeaderNames,
}

impl Client {
    /// Create a client sending requests to `base_url`.
    ///
    /// Returns a `ConfigInvalid` error if `base_url` is not an absolute url.
    pub fn new(ctx: Context, signer: Signer<Credential>, base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url).map_err(|e| {
            Error::config_invalid(format!("invalid base url: {base_url}")).with_source(e)
        })?;

        Ok(Self {
            ctx,
            signer,
            base_url,
            headers: HeaderNames::default(),
        })
    }

    /// Use custom header names for webhook validation.
    ///
    /// They must match the names the signer was built with.
    pub fn with_header_names(mut self, headers: HeaderNames) -> Self {
        self.headers = headers;
        self
    }

    /// The base url paths are resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve `path` against the base url as an RFC 3986 reference.
    ///
    /// An absolute path replaces the base path and query entirely. Invalid
    /// syntax is a `ConfigInvalid` error.
    pub fn resolve(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| Error::config_invalid(format!("invalid path: {path}")).with_source(e))
    }

    /// Send a signed GET request and return the raw response body.
    pub async fn get_signed(&self, path: &str) -> Result<Bytes> {
        let url = self.resolve(path)?;
        debug!("sending GET request to {url}");

        let req = Request::builder()
            .method(Method::GET)
            .uri(url.as_str())
            .body(Bytes::new())?;
        self.send_signed(req).await
    }

    /// Serialize `data` to JSON, send it in a signed POST request and return
    /// the raw response body.
    pub async fn post_signed<T: Serialize + ?Sized>(&self, data: &T, path: &str) -> Result<Bytes> {
        let body = serde_json::to_vec(data).map_err(|e| {
            Error::request_invalid("failed to serialize request body").with_source(e)
        })?;

        let url = self.resolve(path)?;
        debug!("sending POST request to {url}, body_len={}", body.len());

        let req = Request::builder()
            .method(Method::POST)
            .uri(url.as_str())
            .header(CONTENT_TYPE, "application/json")
            .body(Bytes::from(body))?;
        self.send_signed(req).await
    }

    async fn send_signed(&self, req: Request<Bytes>) -> Result<Bytes> {
        let (mut parts, body) = req.into_parts();
        self.signer.sign(&mut parts, &body).await?;

        let resp = self
            .ctx
            .http_send(Request::from_parts(parts, body))
            .await
            .map_err(|e| Error::unexpected("failed to send request").with_source(e))?;

        let status = resp.status();
        debug!("got response with status {status}");
        if status != StatusCode::OK {
            let body = String::from_utf8_lossy(resp.body());
            return Err(Error::api_error(status, &body));
        }

        Ok(resp.into_body())
    }

    /// Create a wallet.
    pub async fn create_wallet(&self, wallet: &Wallet) -> Result<WalletResponse> {
        let content = self.post_signed(wallet, CREATE_WALLET_PATH).await?;
        parse_response(&content, "create wallet")
    }

    /// Create a customer.
    pub async fn create_customer(&self, customer: &Customer) -> Result<CustomerResponse> {
        let content = self.post_signed(customer, CREATE_CUSTOMER_PATH).await?;
        parse_response(&content, "create customer")
    }

    /// Create a payment.
    pub async fn create_payment(&self, payment: &CreatePayment) -> Result<CreatePaymentResponse> {
        let content = self.post_signed(payment, CREATE_PAYMENT_PATH).await?;
        parse_response(&content, "create payment")
    }

    /// List the fields a payment method type requires.
    pub async fn get_payment_method_fields(
        &self,
        method: &str,
    ) -> Result<PaymentMethodRequiredFieldsResponse> {
        let path = format!(
            "{PAYMENT_FIELDS_PATH}{}",
            utf8_percent_encode(method, PATH_SEGMENT)
        );

        let content = self.get_signed(&path).await?;
        parse_response(&content, "payment method fields")
    }

    /// List the payment methods available in `country`.
    pub async fn get_country_payment_methods(
        &self,
        country: &str,
    ) -> Result<CountryPaymentMethodsResponse> {
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair("country", country)
            .finish();
        let path = format!("{COUNTRY_PAYMENT_METHODS_PATH}?{query}");

        let content = self.get_signed(&path).await?;
        parse_response(&content, "country payment methods")
    }

    /// Check the signature of an inbound webhook.
    ///
    /// The credential is loaded through the signer. Any failure, including a
    /// missing credential, is reported as `false`.
    pub async fn validate_webhook<B: AsRef<[u8]>>(&self, req: &Request<B>) -> bool {
        let cred = match self.signer.credential().await {
            Ok(Some(cred)) if cred.is_valid() => cred,
            Ok(_) => {
                warn!("no valid credential available to validate webhook");
                return false;
            }
            Err(err) => {
                warn!("failed to load credential to validate webhook: {err}");
                return false;
            }
        };

        WebhookValidator::new(cred)
            .with_header_names(self.headers.clone())
            .validate(req)
    }
}

fn parse_response<T: DeserializeOwned>(content: &[u8], operation: &str) -> Result<T> {
    serde_json::from_slice(content).map_err(|e| {
        Error::unexpected(format!("failed to parse {operation} response")).with_source(e)
    })
}
