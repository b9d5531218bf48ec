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

//! Canonical string construction and signature encoding.
//!
//! ## Format
//!
//! ```text
//! signature = BASE64(HEX(HMAC-SHA256(secret_key,
//!     http_method + path + salt + timestamp + access_key + secret_key + body)))
//! ```
//!
//! Fields are concatenated without separators. Outbound requests use the
//! lowercase method and the path-and-query of the request, webhooks use an
//! empty method and the full `https://host/uri` url.

use paysign_core::hash::{base64_encode, constant_time_eq, hmac_sha256};

use crate::Credential;

/// Everything that varies per signed message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignatureData<'a> {
    /// HTTP method, already in the casing the remote API expects.
    pub http_method: &'a str,
    /// Path (outbound) or full url (webhook).
    pub path: &'a str,
    /// Per-request random salt.
    pub salt: &'a str,
    /// Seconds since unix epoch, in the exact text carried by the header.
    pub timestamp: &'a str,
    /// Raw body bytes, empty when there is no body.
    pub body: &'a [u8],
}

/// Build the canonical byte string fed into the keyed hash.
///
/// The field order is part of the wire contract and must not change.
pub fn canonicalize(data: &SignatureData<'_>, cred: &Credential) -> Vec<u8> {
    let mut s = Vec::with_capacity(
        data.http_method.len()
            + data.path.len()
            + data.salt.len()
            + data.timestamp.len()
            + cred.access_key.len()
            + cred.secret_key.len()
            + data.body.len(),
    );
    s.extend_from_slice(data.http_method.as_bytes());
    s.extend_from_slice(data.path.as_bytes());
    s.extend_from_slice(data.salt.as_bytes());
    s.extend_from_slice(data.timestamp.as_bytes());
    s.extend_from_slice(cred.access_key.as_bytes());
    s.extend_from_slice(cred.secret_key.as_bytes());
    s.extend_from_slice(data.body);
    s
}

/// Keyed hash of the canonical string. Always 32 bytes.
pub fn sign(canonical: &[u8], secret_key: &str) -> Vec<u8> {
    hmac_sha256(secret_key.as_bytes(), canonical)
}

/// Encode a hash the way the signature header carries it.
///
/// The remote API expects base64 over the hex *text*, not over the raw hash.
pub fn encode(hash: &[u8]) -> String {
    base64_encode(hex::encode(hash).as_bytes())
}

/// Compute the header value for `data`.
pub fn compute(data: &SignatureData<'_>, cred: &Credential) -> String {
    let canonical = canonicalize(data, cred);
    encode(&sign(&canonical, &cred.secret_key))
}

/// Check a claimed signature header value in constant time.
pub fn verify(data: &SignatureData<'_>, cred: &Credential, claimed: &str) -> bool {
    let expected = compute(data, cred);
    constant_time_eq(expected.as_bytes(), claimed.as_bytes())
}
