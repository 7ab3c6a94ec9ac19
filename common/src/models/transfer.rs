// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # Transfer Model
//!
//! Outgoing payments (destinations, options, results) and the history the
//! wallet keeps about incoming and outgoing transfers.
//!
//! ## Input formats
//! * **Destination**: `ADDRESS:AMOUNT`, amount in XMR (`44AF...:0.25`).
//! * **Priority**: a name (`unimportant`, `normal`, `elevated`) or its number.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

use crate::models::account::SubaddressIndex;
use crate::utils::amount::{self, AmountError};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransferInputError {
    #[error("Destination '{0}' must look like ADDRESS:AMOUNT")]
    MalformedDestination(String),
    #[error("Destination amount must be greater than zero")]
    ZeroAmount,
    #[error(transparent)]
    Amount(#[from] AmountError),
    #[error("Unknown priority '{0}'")]
    UnknownPriority(String),
    #[error("Unknown transfer type '{0}', expected 'all', 'available' or 'unavailable'")]
    UnknownTransferType(String),
}

/// Recipient of an outgoing transfer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Destination {
    /// Atomic units.
    pub amount: u64,
    pub address: String,
}

impl Destination {
    pub fn new(address: impl Into<String>, amount: u64) -> Self {
        Self {
            amount,
            address: address.into(),
        }
    }
}

impl FromStr for Destination {
    type Err = TransferInputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((address, amount_str)) = s.trim().rsplit_once(':') else {
            return Err(TransferInputError::MalformedDestination(s.to_string()));
        };

        let address = address.trim();
        if address.is_empty() {
            return Err(TransferInputError::MalformedDestination(s.to_string()));
        }

        let amount = amount::parse_xmr(amount_str)?;
        if amount == 0 {
            return Err(TransferInputError::ZeroAmount);
        }

        Ok(Self::new(address, amount))
    }
}

/// Fee priority. Higher priorities pay more for faster inclusion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Priority {
    #[default]
    Default,
    Unimportant,
    Normal,
    Elevated,
}

impl Priority {
    pub fn as_u32(&self) -> u32 {
        match self {
            Self::Default => 0,
            Self::Unimportant => 1,
            Self::Normal => 2,
            Self::Elevated => 3,
        }
    }
}

impl Serialize for Priority {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.as_u32())
    }
}

impl FromStr for Priority {
    type Err = TransferInputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "0" | "default" => Ok(Self::Default),
            "1" | "unimportant" | "low" => Ok(Self::Unimportant),
            "2" | "normal" => Ok(Self::Normal),
            "3" | "elevated" | "priority" | "high" => Ok(Self::Elevated),
            _ => Err(TransferInputError::UnknownPriority(s.to_string())),
        }
    }
}

/// Knobs shared by `transfer` and `transfer_split`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferOptions {
    pub account_index: Option<u32>,
    pub priority: Option<Priority>,
    pub unlock_time: Option<u64>,
    /// Build and sign the transaction but keep it off the network.
    pub do_not_relay: bool,
    pub get_tx_hex: bool,
}

impl Default for TransferOptions {
    fn default() -> Self {
        Self {
            account_index: None,
            priority: None,
            unlock_time: None,
            do_not_relay: false,
            get_tx_hex: true,
        }
    }
}

impl TransferOptions {
    pub fn with_account(mut self, account_index: u32) -> Self {
        self.account_index = Some(account_index);
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_unlock_time(mut self, unlock_time: u64) -> Self {
        self.unlock_time = Some(unlock_time);
        self
    }

    pub fn without_relay(mut self) -> Self {
        self.do_not_relay = true;
        self
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct TransferResult {
    #[serde(default)]
    pub tx_hash: String,
    #[serde(default)]
    pub tx_key: String,
    #[serde(default)]
    pub amount: u64,
    #[serde(default)]
    pub fee: u64,
    #[serde(default)]
    pub tx_blob: String,
}

/// Outcome of `sweep_dust`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sweep {
    /// Hashes of the relayed transactions, possibly none.
    Hashes(Vec<String>),
    /// Unsigned multisig transaction set awaiting co-signers.
    Multisig(String),
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SweepDustReply {
    #[serde(default)]
    pub tx_hash_list: Option<Vec<String>>,
    #[serde(default)]
    pub multisig_txset: Option<String>,
}

impl From<SweepDustReply> for Sweep {
    fn from(reply: SweepDustReply) -> Self {
        match (reply.tx_hash_list, reply.multisig_txset) {
            (Some(hashes), _) => Sweep::Hashes(hashes),
            (None, Some(txset)) if !txset.is_empty() => Sweep::Multisig(txset),
            _ => Sweep::Hashes(Vec::new()),
        }
    }
}

/// Knobs for `sweep_all`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepAllOptions {
    pub account_index: Option<u32>,
    pub do_not_relay: bool,
    pub priority: Priority,
    /// Only sweep outputs below this amount, 0 sweeps everything.
    pub below_amount: u64,
}

impl Default for SweepAllOptions {
    fn default() -> Self {
        Self {
            account_index: None,
            do_not_relay: false,
            priority: Priority::Unimportant,
            below_amount: 0,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct SweepAllResult {
    #[serde(default)]
    pub tx_hash_list: Vec<String>,
    #[serde(default)]
    pub tx_key_list: Vec<String>,
    #[serde(default)]
    pub amount_list: Vec<u64>,
    #[serde(default)]
    pub fee_list: Vec<u64>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TransferKind {
    In,
    Out,
    Pending,
    Failed,
    Pool,
    Block,
    #[default]
    #[serde(other)]
    Unknown,
}

impl fmt::Display for TransferKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::In => "in",
            Self::Out => "out",
            Self::Pending => "pending",
            Self::Failed => "failed",
            Self::Pool => "pool",
            Self::Block => "block",
            Self::Unknown => "unknown",
        };
        f.write_str(label)
    }
}

/// One entry of the wallet's transfer history.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Transfer {
    pub txid: String,
    #[serde(default)]
    pub payment_id: String,
    #[serde(default)]
    pub height: u64,
    #[serde(default)]
    pub timestamp: u64,
    #[serde(default)]
    pub amount: u64,
    #[serde(default)]
    pub fee: u64,
    #[serde(default)]
    pub note: String,
    #[serde(rename = "type", default)]
    pub kind: TransferKind,
    #[serde(default)]
    pub unlock_time: u64,
    #[serde(default)]
    pub destinations: Vec<Destination>,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub double_spend_seen: bool,
    #[serde(default)]
    pub confirmations: u64,
    #[serde(default)]
    pub subaddr_index: Option<SubaddressIndex>,
}

/// Filter for `get_transfers`. Unset fields are left to the server's defaults.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct TransferFilter {
    #[serde(rename = "in", skip_serializing_if = "Option::is_none")]
    pub incoming: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub out: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pool: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_by_height: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_height: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_height: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_index: Option<u32>,
}

impl TransferFilter {
    /// Requests every category of transfer.
    pub fn everything() -> Self {
        Self {
            incoming: Some(true),
            out: Some(true),
            pending: Some(true),
            failed: Some(true),
            pool: Some(true),
            ..Self::default()
        }
    }

    pub fn with_height_range(mut self, min_height: Option<u64>, max_height: Option<u64>) -> Self {
        if min_height.is_some() || max_height.is_some() {
            self.filter_by_height = Some(true);
            self.min_height = min_height;
            self.max_height = max_height;
        }
        self
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Transfers {
    #[serde(rename = "in", default)]
    pub incoming: Vec<Transfer>,
    #[serde(default)]
    pub out: Vec<Transfer>,
    #[serde(default)]
    pub pending: Vec<Transfer>,
    #[serde(default)]
    pub failed: Vec<Transfer>,
    #[serde(default)]
    pub pool: Vec<Transfer>,
}

impl Transfers {
    pub fn iter(&self) -> impl Iterator<Item = &Transfer> {
        self.incoming
            .iter()
            .chain(&self.out)
            .chain(&self.pending)
            .chain(&self.failed)
            .chain(&self.pool)
    }

    pub fn len(&self) -> usize {
        self.incoming.len() + self.out.len() + self.pending.len() + self.failed.len() + self.pool.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Which outputs `incoming_transfers` reports.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransferType {
    #[default]
    All,
    Available,
    Unavailable,
}

impl FromStr for TransferType {
    type Err = TransferInputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "available" => Ok(Self::Available),
            "unavailable" => Ok(Self::Unavailable),
            _ => Err(TransferInputError::UnknownTransferType(s.to_string())),
        }
    }
}

/// An output received by the wallet.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct IncomingTransfer {
    pub amount: u64,
    #[serde(default)]
    pub global_index: u64,
    #[serde(default)]
    pub spent: bool,
    pub tx_hash: String,
    #[serde(default)]
    pub key_image: String,
    #[serde(default)]
    pub tx_size: u64,
    #[serde(default)]
    pub subaddr_index: Option<SubaddressIndex>,
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
