// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # Wallet Overview Service
//!
//! Implements the "wallet info" use case.
//!
//! This service acts as a facade that gathers the figures a user usually
//! wants first: which address the wallet answers to, how far it has synced
//! and how much it holds.

use monerowallet_common::models::account::Balance;

use crate::error::Result;
use crate::transport::RpcTransport;
use crate::wallet::Wallet;

/// Application Service for the wallet overview.
pub struct WalletService<'a, T> {
    wallet: &'a Wallet<T>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletSnapshot {
    pub address: String,
    pub height: u64,
    pub balance: Balance,
}

impl<'a, T: RpcTransport> WalletService<'a, T> {
    pub fn new(wallet: &'a Wallet<T>) -> Self {
        Self { wallet }
    }

    /// Retrieves address, height and balance in one go.
    ///
    /// The three requests run concurrently; the first failure wins.
    pub async fn snapshot(&self, account: Option<u32>) -> Result<WalletSnapshot> {
        let (address, height, balance) = tokio::try_join!(
            self.wallet.address(account),
            self.wallet.height(),
            self.wallet.balance(account),
        )?;

        Ok(WalletSnapshot {
            address: address.address,
            height,
            balance,
        })
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
