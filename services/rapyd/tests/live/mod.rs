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

use std::env;

use anyhow::Result;
use log::{debug, warn};
use paysign_core::{Context, ErrorKind, OsEnv, Signer};
use paysign_http_send_reqwest::ReqwestHttpSend;
use paysign_rapyd::{Client, Config, ConfigCredentialProvider, RequestSigner};

fn init_client() -> Option<Client> {
    let _ = env_logger::builder().is_test(true).try_init();
    let _ = dotenv::dotenv();

    if env::var("PAYSIGN_RAPYD_TEST").is_err() || env::var("PAYSIGN_RAPYD_TEST").unwrap() != "on"
    {
        return None;
    }

    let ctx = Context::new()
        .with_http_send(ReqwestHttpSend::default())
        .with_env(OsEnv);
    let config = Config::new().from_env(&ctx);
    let base_url = config.base_url().to_string();

    let loader = ConfigCredentialProvider::new(config.into());
    let signer = Signer::new(ctx.clone(), loader, RequestSigner::new());

    Some(Client::new(ctx, signer, &base_url).expect("RAPYD_BASE_URL must be a valid url"))
}

#[tokio::test]
async fn test_live_country_payment_methods() -> Result<()> {
    let Some(client) = init_client() else {
        warn!("PAYSIGN_RAPYD_TEST is not set, skipped");
        return Ok(());
    };

    let resp = client.get_country_payment_methods("PH").await?;
    debug!("got {} payment methods", resp.data.len());

    assert!(resp.status.is_success());
    Ok(())
}

#[tokio::test]
async fn test_live_unknown_payment_method_fields() -> Result<()> {
    let Some(client) = init_client() else {
        warn!("PAYSIGN_RAPYD_TEST is not set, skipped");
        return Ok(());
    };

    let err = client
        .get_payment_method_fields("paysign_not_exist")
        .await
        .unwrap_err();
    debug!("got error: {err}");

    assert_eq!(err.kind(), ErrorKind::ApiError);
    Ok(())
}
