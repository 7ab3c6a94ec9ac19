// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use serde::Serialize;
use serde_json::json;

use monerowallet_common::models::account::{
    Accounts, IntegratedAddress, NewAccount, NewAddress, SplitAddress,
};
use monerowallet_common::success;

use super::{Wallet, require};
use crate::error::Result;
use crate::transport::RpcTransport;

impl<T: RpcTransport> Wallet<T> {
    /// All accounts of the wallet with their balances.
    pub async fn accounts(&self) -> Result<Accounts> {
        self.client.call("get_accounts", Some(json!({}))).await
    }

    pub async fn create_account(&self, label: Option<&str>) -> Result<NewAccount> {
        let account: NewAccount = self
            .client
            .call("create_account", Some(LabelParams { label }))
            .await?;
        success!(verbosity = 1, "Created account #{}", account.account_index);
        Ok(account)
    }

    /// Creates a new subaddress. Account 0 is used when none is given.
    pub async fn create_address(&self, account: Option<u32>, label: Option<&str>) -> Result<NewAddress> {
        let params = CreateAddressParams {
            account_index: account.unwrap_or(0),
            label,
        };
        let address: NewAddress = self.client.call("create_address", Some(params)).await?;
        success!(verbosity = 1, "Created subaddress #{}", address.address_index);
        Ok(address)
    }

    /// Fuses the wallet's address with a payment id.
    ///
    /// Without a payment id the server generates a random one.
    pub async fn make_integrated_address(&self, payment_id: Option<&str>) -> Result<IntegratedAddress> {
        let payment_id = payment_id.map(str::trim).filter(|id| !id.is_empty());
        self.client
            .call("make_integrated_address", Some(IntegratedParams { payment_id }))
            .await
    }

    /// Recovers the standard address and payment id of an integrated address.
    pub async fn split_integrated_address(&self, integrated_address: &str) -> Result<SplitAddress> {
        require(
            !integrated_address.trim().is_empty(),
            "integrated address cannot be empty",
        )?;
        self.client
            .call(
                "split_integrated_address",
                Some(SplitParams { integrated_address }),
            )
            .await
    }
}

#[derive(Debug, Serialize)]
struct LabelParams<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    label: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct CreateAddressParams<'a> {
    account_index: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    label: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct IntegratedParams<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    payment_id: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct SplitParams<'a> {
    integrated_address: &'a str,
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
