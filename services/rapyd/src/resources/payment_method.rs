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

use paysign_core::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Bank transfer in Japan.
pub const JP_BANK_TRANSFER: &str = "jp_banktransfer_bank";
/// POLi bank redirect in New Zealand.
pub const NZ_POLI_BANK: &str = "nz_poli_bank";
/// Bancnet bank redirect in the Philippines.
pub const PH_BANCNET_BANK: &str = "ph_bancnet_bank";

/// A payment method type known to be available in one country.
struct KnownMethod {
    country: &'static str,
    method_type: &'static str,
    required_fields: &'static [&'static str],
}

const KNOWN_METHODS: &[KnownMethod] = &[
    KnownMethod {
        country: "JP",
        method_type: JP_BANK_TRANSFER,
        required_fields: &[],
    },
    KnownMethod {
        country: "NZ",
        method_type: NZ_POLI_BANK,
        required_fields: &[],
    },
    KnownMethod {
        country: "PH",
        method_type: PH_BANCNET_BANK,
        required_fields: &["description"],
    },
];

/// Payment method attached to a payment or customer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethod {
    #[serde(rename = "type")]
    pub payment_type: String,
    #[serde(default)]
    pub fields: Map<String, Value>,
}

impl PaymentMethod {
    /// Build a payment method of any type without checking its fields.
    pub fn custom(payment_type: impl Into<String>, fields: Map<String, Value>) -> Self {
        Self {
            payment_type: payment_type.into(),
            fields,
        }
    }

    /// Build a payment method known to be available in `country`.
    ///
    /// `country` is an ISO 3166-1 alpha-2 code, matched case-insensitively.
    /// Fails with a `RequestInvalid` error if the combination is unknown or a
    /// field the method requires is absent.
    pub fn for_country(country: &str, method_type: &str, fields: Map<String, Value>) -> Result<Self> {
        let known = KNOWN_METHODS
            .iter()
            .find(|m| m.country.eq_ignore_ascii_case(country) && m.method_type == method_type)
            .ok_or_else(|| {
                Error::request_invalid(format!(
                    "payment method {method_type} is not supported in country {country}"
                ))
            })?;

        if let Some(missing) = known
            .required_fields
            .iter()
            .find(|key| !fields.contains_key(**key))
        {
            return Err(Error::request_invalid(format!(
                "payment method {method_type} requires field {missing}"
            )));
        }

        Ok(Self::custom(known.method_type, fields))
    }
}

/// Fields a payment method type requires, as returned by the API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentMethodRequiredFields {
    #[serde(rename = "type")]
    pub payment_type: String,
    pub fields: Vec<RequiredField>,
    pub payment_method_options: Vec<RequiredField>,
    pub payment_options: Vec<RequiredField>,
}

/// One field of a payment method.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequiredField {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: String,
    pub regex: String,
    pub is_required: bool,
    pub instructions: String,
    pub description: String,
}

/// A payment method type available in a country.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CountryPaymentMethod {
    #[serde(rename = "type")]
    pub payment_type: String,
    pub name: String,
    pub category: String,
    pub image: String,
    pub country: String,
    pub payment_flow_type: String,
    pub currencies: Vec<String>,
    pub status: i64,
    pub is_cancelable: bool,
    pub is_refundable: bool,
    pub is_expirable: bool,
    pub is_online: bool,
}
