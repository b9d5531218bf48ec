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

use std::collections::BTreeMap;

use paysign_core::{Error, Result};
use serde::{Deserialize, Serialize};

const CATEGORY: &str = "category";
const COUNTRY: &str = "country";
const CURRENCY: &str = "currency";
const ENTITY_TYPE: &str = "entity_type";

/// Fields every beneficiary must carry, checked in this order.
const REQUIRED_FIELDS: [&str; 4] = [CATEGORY, COUNTRY, CURRENCY, ENTITY_TYPE];

/// Beneficiary of a payout, serialized as a flat JSON object.
///
/// Only constructed through [`Beneficiary::new`], which checks that the
/// fields the API always requires are present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Beneficiary(BTreeMap<String, String>);

impl Beneficiary {
    /// Build a beneficiary from `fields`.
    ///
    /// Fails with a `RequestInvalid` error naming the first missing field out of
    /// `category`, `country`, `currency` and `entity_type`.
    pub fn new<K, V>(fields: impl IntoIterator<Item = (K, V)>) -> Result<Self>
    where
        K: Into<String>,
        V: Into<String>,
    {
        let fields: BTreeMap<String, String> = fields
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();

        if let Some(missing) = REQUIRED_FIELDS
            .iter()
            .find(|key| !fields.contains_key(**key))
        {
            return Err(Error::request_invalid(format!(
                "required field {missing} is missing"
            )));
        }

        Ok(Self(fields))
    }

    /// Add a field required by the selected payout method.
    pub fn add_required_field(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// Get a field value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// All fields, sorted by name.
    pub fn fields(&self) -> &BTreeMap<String, String> {
        &self.0
    }
}
