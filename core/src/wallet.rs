// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! Typed access to a running `monero-wallet-rpc` server.
//!
//! [`Wallet`] exposes one async method per RPC call. The operations are split
//! by concern:
//! - **Queries** (this module): balance, address, height, keys.
//! - **Transfers** ([`transfer`]): sending, splitting and sweeping funds.
//! - **History** ([`history`]): payments and transfer records.
//! - **Accounts** ([`accounts`]): accounts, subaddresses, integrated addresses.
//! - **Lifecycle** ([`lifecycle`]): creating, opening, saving and stopping wallets.
//!
//! Amounts are always atomic units. Optional parameters left as `None` are
//! omitted from the request so the server applies its own defaults.

mod accounts;
mod history;
mod lifecycle;
mod transfer;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use monerowallet_common::config::Config;
use monerowallet_common::debug;
use monerowallet_common::models::account::{AddressInfo, Balance, KeyType};

use crate::client::RpcClient;
use crate::error::{Result, WalletError};
use crate::transport::{HttpTransport, RpcTransport};

/// Client for a single wallet RPC server.
pub struct Wallet<T = HttpTransport> {
    client: RpcClient<T>,
}

impl Wallet<HttpTransport> {
    /// Builds an HTTP backed wallet for the endpoint in `cfg`.
    pub fn connect(cfg: &Config) -> Result<Self> {
        let transport = HttpTransport::new(cfg)?;
        debug!(verbosity = 1, "Wallet RPC endpoint is {}", transport.endpoint());
        Ok(Self::with_transport(transport))
    }
}

impl<T: RpcTransport> Wallet<T> {
    pub fn with_transport(transport: T) -> Self {
        Self {
            client: RpcClient::new(transport),
        }
    }

    pub fn client(&self) -> &RpcClient<T> {
        &self.client
    }

    /// Total and unlocked balance, optionally for one account.
    pub async fn balance(&self, account: Option<u32>) -> Result<Balance> {
        self.client
            .call("getbalance", Some(AccountParams::new(account)))
            .await
    }

    /// Primary address and subaddresses, optionally for one account.
    pub async fn address(&self, account: Option<u32>) -> Result<AddressInfo> {
        self.client
            .call("getaddress", Some(AccountParams::new(account)))
            .await
    }

    /// Block height the wallet has scanned up to.
    pub async fn height(&self) -> Result<u64> {
        let reply: HeightReply = self.client.call("getheight", None::<Value>).await?;
        Ok(reply.height)
    }

    /// Returns the mnemonic seed or one of the private keys.
    pub async fn query_key(&self, key_type: KeyType) -> Result<String> {
        let reply: KeyReply = self
            .client
            .call("query_key", Some(QueryKeyParams { key_type }))
            .await?;
        Ok(reply.key)
    }

    /// Sends any method with free-form parameters and returns the raw result.
    pub async fn call_raw(&self, method: &str, params: Value) -> Result<Value> {
        if method.trim().is_empty() {
            return Err(WalletError::InvalidArgument(
                "method name cannot be empty".into(),
            ));
        }
        self.client.call_raw(method, params).await
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct AccountParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    account_index: Option<u32>,
}

impl AccountParams {
    pub(crate) fn new(account_index: Option<u32>) -> Self {
        Self { account_index }
    }
}

#[derive(Debug, Serialize)]
struct QueryKeyParams {
    key_type: KeyType,
}

#[derive(Debug, Deserialize)]
struct HeightReply {
    height: u64,
}

#[derive(Debug, Deserialize)]
struct KeyReply {
    key: String,
}

pub(crate) fn require(condition: bool, message: &str) -> Result<()> {
    if condition {
        Ok(())
    } else {
        Err(WalletError::InvalidArgument(message.to_string()))
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
