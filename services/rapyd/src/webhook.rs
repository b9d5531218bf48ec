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

use http::header::{HeaderName, HOST};
use http::request::Parts;
use http::{HeaderMap, Request, Uri};
use log::debug;

use crate::constants::WEBHOOK_SCHEME;
use crate::signature::{verify, SignatureData};
use crate::{Credential, HeaderNames};

/// WebhookValidator checks the signature of inbound webhook requests.
///
/// The request is only borrowed, so the body stays readable for downstream
/// handlers and validating the same delivery twice gives the same answer.
///
/// Webhooks are signed over `https://{host}{request_uri}` with an empty
/// method, which differs from the path-only form used for outbound requests.
#[derive(Debug, Clone)]
pub struct WebhookValidator {
    credential: Credential,
    headers: HeaderNames,
}

impl WebhookValidator {
    /// Create a validator for webhooks signed with `credential`.
    pub fn new(credential: Credential) -> Self {
        Self {
            credential,
            headers: HeaderNames::default(),
        }
    }

    /// Use custom header names.
    pub fn with_header_names(mut self, headers: HeaderNames) -> Self {
        self.headers = headers;
        self
    }

    /// Check whether the request carries a valid signature.
    ///
    /// Malformed requests are reported as `false`, same as a mismatch.
    pub fn validate<B: AsRef<[u8]>>(&self, req: &Request<B>) -> bool {
        self.check(req.uri(), req.headers(), req.body().as_ref())
            .unwrap_or(false)
    }

    /// Same as [`validate`](Self::validate) for a request already split into parts.
    pub fn validate_parts(&self, parts: &Parts, body: &[u8]) -> bool {
        self.check(&parts.uri, &parts.headers, body)
            .unwrap_or(false)
    }

    fn check(&self, uri: &Uri, headers: &HeaderMap, body: &[u8]) -> Option<bool> {
        let salt = header(headers, &self.headers.salt)?;
        // Signed as sent, so the header text is never re-encoded.
        let timestamp = header(headers, &self.headers.timestamp)?;
        if timestamp.is_empty() || !timestamp.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let claimed = header(headers, &self.headers.signature)?;
        let url = webhook_url(uri, headers)?;

        let data = SignatureData {
            http_method: "",
            path: &url,
            salt,
            timestamp,
            body,
        };
        let valid = verify(&data, &self.credential, claimed);
        if !valid {
            debug!("webhook signature mismatch for {url}");
        }
        Some(valid)
    }
}

/// Full url a webhook delivery is signed over.
///
/// The `Host` header wins over the uri authority. Returns `None` when
/// neither is present.
pub(crate) fn webhook_url(uri: &Uri, headers: &HeaderMap) -> Option<String> {
    let host = match header(headers, &HOST) {
        Some(host) => host,
        None => uri.authority()?.as_str(),
    };
    let request_uri = uri.path_and_query().map(|v| v.as_str()).unwrap_or("/");
    Some(format!("{WEBHOOK_SCHEME}://{host}{request_uri}"))
}

fn header<'a>(headers: &'a HeaderMap, name: &HeaderName) -> Option<&'a str> {
    headers.get(name)?.to_str().ok()
}
