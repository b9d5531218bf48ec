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

// Env values used in rapyd services.
pub const RAPYD_ACCESS_KEY: &str = "RAPYD_ACCESS_KEY";
pub const RAPYD_SECRET_KEY: &str = "RAPYD_SECRET_KEY";
pub const RAPYD_BASE_URL: &str = "RAPYD_BASE_URL";

// Endpoints.
pub const SANDBOX_BASE_URL: &str = "https://sandboxapi.rapyd.net";
pub const PRODUCTION_BASE_URL: &str = "https://api.rapyd.net";

// Headers shared by outbound signing and webhook validation.
pub const ACCESS_KEY_HEADER: &str = "access_key";
pub const SALT_HEADER: &str = "salt";
pub const TIMESTAMP_HEADER: &str = "timestamp";
pub const SIGNATURE_HEADER: &str = "signature";

// API paths, relative to the base url.
pub const CREATE_WALLET_PATH: &str = "/v1/user";
pub const CREATE_CUSTOMER_PATH: &str = "/v1/customers";
pub const CREATE_PAYMENT_PATH: &str = "/v1/payments";
pub const PAYMENT_FIELDS_PATH: &str = "/v1/payment_methods/required_fields/";
pub const COUNTRY_PAYMENT_METHODS_PATH: &str = "/v1/payment_methods/country";

// Webhooks are always delivered over https.
pub const WEBHOOK_SCHEME: &str = "https";

// 16 alphanumeric characters carry roughly 95 bits of entropy.
pub const SALT_LENGTH: usize = 16;
