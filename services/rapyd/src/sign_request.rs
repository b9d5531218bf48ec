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

use std::fmt::{Debug, Formatter};

use http::request::Parts;
use http::HeaderValue;
use log::debug;
use paysign_core::time::{now, timestamp, DateTime};
use paysign_core::{Context, Error, Result, SignRequest, SigningCredential};
use rand::distributions::Alphanumeric;
use rand::Rng;

use crate::constants::SALT_LENGTH;
use crate::signature::{compute, SignatureData};
use crate::webhook::webhook_url;
use crate::{Credential, HeaderNames};

/// RequestSigner that implements Rapyd request signatures.
///
/// Every call generates a fresh salt and timestamp, so signing the same
/// request twice yields two different valid signatures.
///
/// - [Request Signatures](https://docs.rapyd.net/en/request-signatures.html)
#[derive(Default)]
pub struct RequestSigner {
    headers: HeaderNames,
    webhook: bool,

    time: Option<DateTime>,
    salt: Option<String>,
}

impl Debug for RequestSigner {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestSigner")
            .field("headers", &self.headers)
            .field("webhook", &self.webhook)
            .finish_non_exhaustive()
    }
}

impl RequestSigner {
    /// Create a new signer with the default header names.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use custom header names.
    pub fn with_header_names(mut self, headers: HeaderNames) -> Self {
        self.headers = headers;
        self
    }

    /// Sign in the form Rapyd uses for webhook deliveries.
    ///
    /// The method is left out and the path becomes `https://{host}{request_uri}`,
    /// so the result is accepted by [`WebhookValidator`](crate::WebhookValidator).
    /// Useful to simulate deliveries against a local webhook endpoint.
    pub fn for_webhook(mut self) -> Self {
        self.webhook = true;
        self
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    #[cfg(test)]
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }

    /// Specify the salt.
    ///
    /// # Note
    ///
    /// Reusing a salt allows replaying signatures.
    /// Only use this function for testing.
    #[cfg(test)]
    pub fn with_salt(mut self, salt: &str) -> Self {
        self.salt = Some(salt.to_string());
        self
    }
}

#[async_trait::async_trait]
impl SignRequest for RequestSigner {
    type Credential = Credential;

    async fn sign_request(
        &self,
        _: &Context,
        req: &mut Parts,
        body: &[u8],
        credential: Option<&Self::Credential>,
    ) -> Result<()> {
        let Some(cred) = credential else {
            return Err(Error::credential_invalid("missing credential"));
        };
        if !cred.is_valid() {
            return Err(Error::credential_invalid(
                "credential must carry both access key and secret key",
            ));
        }

        let now = self.time.unwrap_or_else(now);
        let salt = self.salt.clone().unwrap_or_else(generate_salt);
        let timestamp = timestamp(now).to_string();
        let (method, path) = if self.webhook {
            let url = webhook_url(&req.uri, &req.headers).ok_or_else(|| {
                Error::request_invalid("webhook request must carry a host")
            })?;
            (String::new(), url)
        } else {
            let path = req
                .uri
                .path_and_query()
                .map(|v| v.as_str())
                .unwrap_or_default();
            (req.method.as_str().to_lowercase(), path.to_string())
        };

        let data = SignatureData {
            http_method: &method,
            path: &path,
            salt: &salt,
            timestamp: &timestamp,
            body,
        };
        let signature = compute(&data, cred);
        debug!(
            "signed request: method={method}, path={path}, timestamp={timestamp}, body_len={}",
            body.len()
        );

        req.headers
            .insert(self.headers.access_key.clone(), cred.access_key.parse()?);
        req.headers.insert(self.headers.salt.clone(), salt.parse()?);
        req.headers
            .insert(self.headers.timestamp.clone(), timestamp.parse()?);
        req.headers.insert(self.headers.signature.clone(), {
            let mut value: HeaderValue = signature.parse()?;
            value.set_sensitive(true);

            value
        });

        Ok(())
    }
}

/// Random alphanumeric salt from the thread-local CSPRNG.
fn generate_salt() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(SALT_LENGTH)
        .map(char::from)
        .collect()
}
