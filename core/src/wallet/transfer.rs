// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use serde::{Deserialize, Serialize};

use monerowallet_common::models::transfer::{
    Destination, Priority, Sweep, SweepAllOptions, SweepAllResult, SweepDustReply,
    TransferOptions, TransferResult,
};
use monerowallet_common::utils::amount;
use monerowallet_common::{debug, info};

use super::{AccountParams, Wallet, require};
use crate::error::Result;
use crate::transport::RpcTransport;

impl<T: RpcTransport> Wallet<T> {
    /// Sends funds to one or more recipients in a single transaction.
    pub async fn transfer(
        &self,
        destinations: &[Destination],
        opts: &TransferOptions,
    ) -> Result<TransferResult> {
        validate_destinations(destinations)?;
        log_outgoing("transfer", destinations, opts.do_not_relay);

        self.client
            .call("transfer", Some(TransferParams::new(destinations, opts)))
            .await
    }

    /// Like [`Wallet::transfer`], but lets the wallet split the payment over
    /// several transactions when one would be too large.
    pub async fn transfer_split(
        &self,
        destinations: &[Destination],
        opts: &TransferOptions,
    ) -> Result<Vec<String>> {
        validate_destinations(destinations)?;
        log_outgoing("transfer_split", destinations, opts.do_not_relay);

        let reply: TxHashList = self
            .client
            .call("transfer_split", Some(TransferParams::new(destinations, opts)))
            .await?;
        Ok(reply.tx_hash_list)
    }

    /// Sends all dust outputs back to the wallet, to make them easier to spend.
    pub async fn sweep_dust(&self, account: Option<u32>) -> Result<Sweep> {
        let reply: SweepDustReply = self
            .client
            .call("sweep_dust", Some(AccountParams::new(account)))
            .await?;
        Ok(reply.into())
    }

    /// Sends every unlocked output of an account to `address`.
    pub async fn sweep_all(&self, address: &str, opts: &SweepAllOptions) -> Result<SweepAllResult> {
        require(!address.trim().is_empty(), "sweep address cannot be empty")?;
        info!(verbosity = 1, "Sweeping all unlocked funds");

        let params = SweepAllParams {
            address,
            account_index: opts.account_index,
            do_not_relay: opts.do_not_relay,
            priority: opts.priority,
            below_amount: opts.below_amount,
        };
        self.client.call("sweep_all", Some(params)).await
    }
}

fn validate_destinations(destinations: &[Destination]) -> Result<()> {
    require(!destinations.is_empty(), "at least one destination is required")?;
    for dest in destinations {
        require(
            !dest.address.trim().is_empty(),
            "destination address cannot be empty",
        )?;
        require(dest.amount > 0, "destination amount must be greater than zero")?;
    }
    Ok(())
}

fn log_outgoing(method: &str, destinations: &[Destination], do_not_relay: bool) {
    let total: u64 = destinations
        .iter()
        .fold(0u64, |acc, d| acc.saturating_add(d.amount));
    info!(
        verbosity = 1,
        "Requesting {method} of {} XMR to {} destination(s)",
        amount::format_xmr(total),
        destinations.len()
    );
    if do_not_relay {
        debug!("Transaction will not be relayed to the network");
    }
}

#[derive(Debug, Serialize)]
struct TransferParams<'a> {
    destinations: &'a [Destination],
    #[serde(skip_serializing_if = "Option::is_none")]
    account_index: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    priority: Option<Priority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    unlock_time: Option<u64>,
    do_not_relay: bool,
    get_tx_hex: bool,
}

impl<'a> TransferParams<'a> {
    fn new(destinations: &'a [Destination], opts: &TransferOptions) -> Self {
        Self {
            destinations,
            account_index: opts.account_index,
            priority: opts.priority,
            unlock_time: opts.unlock_time,
            do_not_relay: opts.do_not_relay,
            get_tx_hex: opts.get_tx_hex,
        }
    }
}

#[derive(Debug, Serialize)]
struct SweepAllParams<'a> {
    address: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    account_index: Option<u32>,
    do_not_relay: bool,
    priority: Priority,
    below_amount: u64,
}

#[derive(Debug, Deserialize)]
struct TxHashList {
    #[serde(default)]
    tx_hash_list: Vec<String>,
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
