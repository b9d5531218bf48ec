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

//! Rapyd signing and client implementation for paysign.
//!
//! This crate signs requests to the [Rapyd](https://www.rapyd.net/) payment
//! API, sends them through the configured http transport and validates the
//! signature of inbound webhooks.
//!
//! ## Quick Start
//!
//! ```no_run
//! use paysign_core::{Context, OsEnv, Result, Signer};
//! use paysign_http_send_reqwest::ReqwestHttpSend;
//! use paysign_rapyd::resources::Wallet;
//! use paysign_rapyd::{Client, DefaultCredentialProvider, RequestSigner, SANDBOX_BASE_URL};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let ctx = Context::new()
//!         .with_http_send(ReqwestHttpSend::default())
//!         .with_env(OsEnv);
//!
//!     // Loads RAPYD_ACCESS_KEY and RAPYD_SECRET_KEY.
//!     let loader = DefaultCredentialProvider::new();
//!     let signer = Signer::new(ctx.clone(), loader, RequestSigner::new());
//!
//!     let client = Client::new(ctx, signer, SANDBOX_BASE_URL)?;
//!     let wallet = client
//!         .create_wallet(&Wallet {
//!             ewallet_reference_id: "jane-0001".to_string(),
//!             ..Default::default()
//!         })
//!         .await?;
//!     println!("created wallet {}", wallet.data.id);
//!     Ok(())
//! }
//! ```
//!
//! ## Signing
//!
//! Every request carries four headers: `access_key`, `salt`, `timestamp` and
//! `signature`. The signature covers the lowercase method, the path and
//! query, a fresh random salt, the current timestamp, both keys and the exact
//! body bytes. See [`signature`] for the format.
//!
//! A request must be signed again before it is retried.
//!
//! ## Webhooks
//!
//! ```no_run
//! use paysign_rapyd::{Credential, WebhookValidator};
//!
//! # fn handle(req: http::Request<bytes::Bytes>) {
//! let validator = WebhookValidator::new(Credential::new("access_key", "secret_key"));
//! if !validator.validate(&req) {
//!     return;
//! }
//! // The body is still available here.
//! let _body = req.body();
//! # }
//! ```
//!
//! ## Credential Sources
//!
//! ```bash
//! export RAPYD_ACCESS_KEY=rak_xxx
//! export RAPYD_SECRET_KEY=rsk_xxx
//! export RAPYD_BASE_URL=https://api.rapyd.net  # Optional
//! ```

mod constants;
pub use constants::{PRODUCTION_BASE_URL, SANDBOX_BASE_URL};

mod config;
pub use config::Config;

mod credential;
pub use credential::Credential;

mod headers;
pub use headers::HeaderNames;

pub mod signature;

mod sign_request;
pub use sign_request::RequestSigner;

mod webhook;
pub use webhook::WebhookValidator;

mod client;
pub use client::Client;

pub mod resources;

mod provide_credential;
pub use provide_credential::*;
