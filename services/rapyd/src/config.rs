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

use crate::constants::*;
use paysign_core::{utils::Redact, Context};

/// Config carries all the configuration for the Rapyd API.
///
/// Values are read once at construction and never reloaded.
#[derive(Clone, Default)]
pub struct Config {
    /// `access_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`RAPYD_ACCESS_KEY`]
    pub access_key: Option<String>,
    /// `secret_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`RAPYD_SECRET_KEY`]
    pub secret_key: Option<String>,
    /// `base_url` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`RAPYD_BASE_URL`]
    /// - the sandbox endpoint otherwise
    pub base_url: Option<String>,
}

impl Config {
    /// Create a new Config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set access_key
    pub fn with_access_key(mut self, access_key: impl Into<String>) -> Self {
        self.access_key = Some(access_key.into());
        self
    }

    /// Set secret_key
    pub fn with_secret_key(mut self, secret_key: impl Into<String>) -> Self {
        self.secret_key = Some(secret_key.into());
        self
    }

    /// Set base_url
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Load config from env. Values already set take precedence.
    ///
    /// Empty env values are treated as unset.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        let var = |key: &str| ctx.env_var(key).filter(|v| !v.is_empty());

        if let Some(v) = var(RAPYD_ACCESS_KEY) {
            self.access_key.get_or_insert(v);
        }
        if let Some(v) = var(RAPYD_SECRET_KEY) {
            self.secret_key.get_or_insert(v);
        }
        if let Some(v) = var(RAPYD_BASE_URL) {
            self.base_url.get_or_insert(v);
        }

        self
    }

    /// The base url requests are resolved against.
    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(SANDBOX_BASE_URL)
    }
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("access_key", &Redact::from(&self.access_key))
            .field("secret_key", &Redact::from(&self.secret_key))
            .field("base_url", &self.base_url)
            .finish()
    }
}
