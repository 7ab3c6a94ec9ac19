// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use colored::*;
use monerowallet_common::models::account::{Accounts, NewAccount, NewAddress};
use monerowallet_core::Wallet;

use crate::terminal::{
    format,
    print::{self, Print},
};

pub async fn accounts(wallet: &Wallet) -> anyhow::Result<()> {
    let accounts: Accounts = wallet.accounts().await?;
    let redact = Print::redact();

    if Print::quiet() > 1 {
        for a in &accounts.subaddress_accounts {
            Print::raw(format!(
                "{} {} {}",
                a.account_index,
                format::address(&a.base_address, redact),
                a.balance
            ));
        }
        return Ok(());
    }

    Print::header("accounts");
    print::trees(accounts.subaddress_accounts.iter().map(|a| {
        (
            format!("account {}", a.account_index),
            format::account_details(a, redact),
        )
    }));
    print::summary(&format!(
        "Total {} ({} unlocked)",
        format::xmr(accounts.total_balance).bold(),
        format::xmr(accounts.total_unlocked_balance)
    ));
    Ok(())
}

pub async fn create_account(wallet: &Wallet, label: Option<&str>) -> anyhow::Result<()> {
    let account: NewAccount = wallet.create_account(label).await?;
    let redact = Print::redact();

    if Print::quiet() > 1 {
        Print::raw(account.account_index);
        return Ok(());
    }

    Print::header("new account");
    print::aligned_line("Index", account.account_index.to_string());
    print::aligned_line("Address", format::address(&account.address, redact));
    Ok(())
}

pub async fn create_address(
    wallet: &Wallet,
    account: Option<u32>,
    label: Option<&str>,
) -> anyhow::Result<()> {
    let address: NewAddress = wallet.create_address(account, label).await?;
    Print::value("Address", format::address(&address.address, Print::redact()));
    if Print::quiet() < 2 {
        print::aligned_line("Index", address.address_index.to_string());
    }
    Ok(())
}
