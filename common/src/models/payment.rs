// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use serde::Deserialize;

use crate::models::account::SubaddressIndex;

/// An incoming payment matched by payment id.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Payment {
    pub payment_id: String,
    pub tx_hash: String,
    pub amount: u64,
    pub block_height: u64,
    pub unlock_time: u64,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub subaddr_index: Option<SubaddressIndex>,
}

/// Reply of `get_payments` and `get_bulk_payments`.
///
/// The server answers with an empty object when nothing matched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaymentList {
    #[serde(default)]
    pub payments: Vec<Payment>,
}
