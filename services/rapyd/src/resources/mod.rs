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

//! Typed payloads exchanged with the Rapyd API.
//!
//! Fields the API may omit default to empty values instead of failing
//! deserialization. Unknown fields are ignored.

mod beneficiary;
pub use beneficiary::Beneficiary;

mod customer;
pub use customer::{Customer, CustomerData};

mod payment;
pub use payment::{CreatePayment, PaymentData};

mod payment_method;
pub use payment_method::{
    CountryPaymentMethod, PaymentMethod, PaymentMethodRequiredFields, RequiredField,
    JP_BANK_TRANSFER, NZ_POLI_BANK, PH_BANCNET_BANK,
};

mod wallet;
pub use wallet::{Wallet, WalletAccount, WalletData};

use serde::{Deserialize, Serialize};

/// Envelope wrapping every Rapyd response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Response<T> {
    /// Outcome reported by the API.
    #[serde(default)]
    pub status: Status,
    /// Payload of the response.
    pub data: T,
}

/// Status block of a Rapyd response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Status {
    pub error_code: String,
    pub status: String,
    pub message: String,
    pub response_code: String,
    pub operation_id: String,
}

impl Status {
    /// Whether the API reported success.
    pub fn is_success(&self) -> bool {
        self.status == "SUCCESS"
    }
}

/// Response returned when creating a wallet.
pub type WalletResponse = Response<WalletData>;
/// Response returned when creating a customer.
pub type CustomerResponse = Response<CustomerData>;
/// Response returned when creating a payment.
pub type CreatePaymentResponse = Response<PaymentData>;
/// Response listing the fields a payment method type requires.
pub type PaymentMethodRequiredFieldsResponse = Response<PaymentMethodRequiredFields>;
/// Response listing the payment methods available in a country.
pub type CountryPaymentMethodsResponse = Response<Vec<CountryPaymentMethod>>;
