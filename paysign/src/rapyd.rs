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

//! Rapyd support with convenience APIs.
//!
//! This module re-exports everything from `paysign-rapyd` and adds
//! constructors wired to [`default_context`](crate::default_context).

pub use paysign_rapyd::*;

#[cfg(feature = "default-context")]
use crate::{default_context, Result, Signer};

/// Default Rapyd signer type.
#[cfg(feature = "default-context")]
pub type DefaultSigner = Signer<Credential>;

/// Create a Rapyd signer with the default context and credential chain.
///
/// Credentials are loaded on first use from `RAPYD_ACCESS_KEY` and
/// `RAPYD_SECRET_KEY`.
///
/// # Example
///
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> paysign::Result<()> {
/// let signer = paysign::rapyd::default_signer();
///
/// let url = "https://sandboxapi.rapyd.net/v1/payment_methods/country?country=PH";
/// let (mut parts, _) = http::Request::get(url)
///     .body(())
///     .unwrap()
///     .into_parts();
/// signer.sign(&mut parts, b"").await?;
/// # Ok(())
/// # }
/// ```
#[cfg(feature = "default-context")]
pub fn default_signer() -> DefaultSigner {
    let ctx = default_context();
    let provider = DefaultCredentialProvider::new();
    let signer = RequestSigner::new();
    Signer::new(ctx, provider, signer)
}

/// Create a Rapyd client with the default context.
///
/// The base url is taken from `RAPYD_BASE_URL` and falls back to the
/// sandbox endpoint. Returns a `ConfigInvalid` error if it is not a valid url.
#[cfg(feature = "default-context")]
pub fn default_client() -> Result<Client> {
    let ctx = default_context();
    let config = Config::new().from_env(&ctx);
    let signer = Signer::new(
        ctx.clone(),
        DefaultCredentialProvider::new(),
        RequestSigner::new(),
    );

    Client::new(ctx, signer, config.base_url())
}
