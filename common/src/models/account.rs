// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # Account & Address Model
//!
//! A wallet holds one or more accounts; every account owns a list of
//! subaddresses. Index `0/0` is the primary address of the wallet.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Balance of an account, in atomic units.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Balance {
    pub balance: u64,
    pub unlocked_balance: u64,
    #[serde(default)]
    pub blocks_to_unlock: u64,
    #[serde(default)]
    pub per_subaddress: Vec<SubaddressBalance>,
}

impl Balance {
    /// Funds that are received but not yet spendable.
    pub fn locked(&self) -> u64 {
        self.balance.saturating_sub(self.unlocked_balance)
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct SubaddressBalance {
    pub address_index: u32,
    pub address: String,
    pub balance: u64,
    pub unlocked_balance: u64,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub num_unspent_outputs: u64,
}

/// Major/minor index pair identifying a subaddress.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct SubaddressIndex {
    pub major: u32,
    pub minor: u32,
}

impl fmt::Display for SubaddressIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.major, self.minor)
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct AddressInfo {
    /// The account's primary address.
    pub address: String,
    #[serde(default)]
    pub addresses: Vec<SubAddress>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct SubAddress {
    pub address: String,
    pub address_index: u32,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub used: bool,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Accounts {
    #[serde(default)]
    pub subaddress_accounts: Vec<AccountSummary>,
    #[serde(default)]
    pub total_balance: u64,
    #[serde(default)]
    pub total_unlocked_balance: u64,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct AccountSummary {
    pub account_index: u32,
    pub base_address: String,
    pub balance: u64,
    pub unlocked_balance: u64,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub tag: String,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct NewAccount {
    pub account_index: u32,
    pub address: String,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct NewAddress {
    pub address: String,
    pub address_index: u32,
}

/// A standard address fused with a payment id.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct IntegratedAddress {
    pub integrated_address: String,
    pub payment_id: String,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct SplitAddress {
    pub standard_address: String,
    pub payment_id: String,
    #[serde(default)]
    pub is_subaddress: bool,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown key type '{0}', expected 'mnemonic', 'view_key' or 'spend_key'")]
pub struct KeyTypeError(String);

/// Which secret `query_key` returns.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum KeyType {
    /// 25 word seed.
    #[default]
    Mnemonic,
    /// Private view key, hex.
    ViewKey,
    /// Private spend key, hex.
    SpendKey,
}

impl KeyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mnemonic => "mnemonic",
            Self::ViewKey => "view_key",
            Self::SpendKey => "spend_key",
        }
    }
}

impl fmt::Display for KeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for KeyType {
    type Err = KeyTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "mnemonic" | "seed" => Ok(Self::Mnemonic),
            "view_key" | "view" => Ok(Self::ViewKey),
            "spend_key" | "spend" => Ok(Self::SpendKey),
            _ => Err(KeyTypeError(s.to_string())),
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn balance_from_minimal_reply() {
        let balance: Balance = serde_json::from_value(json!({
            "balance": 2262265030000u64,
            "unlocked_balance": 2000000000000u64
        }))
        .unwrap();
        assert_eq!(balance.locked(), 262265030000);
        assert!(balance.per_subaddress.is_empty());
    }

    #[test]
    fn accounts_reply_parses_nested_summaries() {
        let accounts: Accounts = serde_json::from_value(json!({
            "subaddress_accounts": [
                {"account_index": 0, "balance": 10, "base_address": "44AF", "label": "Primary account", "tag": "", "unlocked_balance": 5},
                {"account_index": 1, "balance": 0, "base_address": "8Bc6", "unlocked_balance": 0}
            ],
            "total_balance": 10,
            "total_unlocked_balance": 5
        }))
        .unwrap();
        assert_eq!(accounts.subaddress_accounts.len(), 2);
        assert_eq!(accounts.subaddress_accounts[0].label, "Primary account");
        assert_eq!(accounts.subaddress_accounts[1].label, "");
    }

    #[test]
    fn key_type_uses_wire_names() {
        assert_eq!(serde_json::to_value(KeyType::ViewKey).unwrap(), json!("view_key"));
        assert_eq!("spend-key".parse::<KeyType>(), Ok(KeyType::SpendKey));
        assert_eq!("seed".parse::<KeyType>(), Ok(KeyType::Mnemonic));
        assert!("private".parse::<KeyType>().is_err());
    }

    #[test]
    fn subaddress_index_display() {
        let idx = SubaddressIndex { major: 1, minor: 4 };
        assert_eq!(idx.to_string(), "1/4");
    }
}
