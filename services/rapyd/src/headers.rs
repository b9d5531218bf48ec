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

use http::header::HeaderName;
use paysign_core::Result;

use crate::constants::*;

/// Names of the headers that carry signing material.
///
/// The same value is handed to [`RequestSigner`](crate::RequestSigner) and
/// [`WebhookValidator`](crate::WebhookValidator) so both directions agree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderNames {
    /// Header carrying the access key.
    pub access_key: HeaderName,
    /// Header carrying the per-request salt.
    pub salt: HeaderName,
    /// Header carrying the epoch-seconds timestamp.
    pub timestamp: HeaderName,
    /// Header carrying the encoded signature.
    pub signature: HeaderName,
}

impl Default for HeaderNames {
    fn default() -> Self {
        Self {
            access_key: HeaderName::from_static(ACCESS_KEY_HEADER),
            salt: HeaderName::from_static(SALT_HEADER),
            timestamp: HeaderName::from_static(TIMESTAMP_HEADER),
            signature: HeaderName::from_static(SIGNATURE_HEADER),
        }
    }
}

impl HeaderNames {
    /// Build header names from strings, failing on invalid header syntax.
    pub fn new(access_key: &str, salt: &str, timestamp: &str, signature: &str) -> Result<Self> {
        Ok(Self {
            access_key: access_key.parse()?,
            salt: salt.parse()?,
            timestamp: timestamp.parse()?,
            signature: signature.parse()?,
        })
    }
}
