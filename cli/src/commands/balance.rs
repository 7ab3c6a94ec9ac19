// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use colored::*;
use monerowallet_common::models::account::{AddressInfo, Balance};
use monerowallet_core::Wallet;

use crate::terminal::{
    colors, format,
    print::{self, Detail, Print},
};

pub async fn balance(wallet: &Wallet, account: Option<u32>) -> anyhow::Result<()> {
    let balance: Balance = wallet.balance(account).await?;

    if Print::quiet() > 1 {
        Print::raw(balance.balance);
        return Ok(());
    }

    Print::header("balance");
    print::aligned_line("Total", format::xmr(balance.balance));
    print::aligned_line("Unlocked", format::xmr(balance.unlocked_balance));
    if balance.locked() > 0 {
        print::aligned_line("Locked", format::xmr_locked(balance.locked()));
        print::aligned_line("Blocks", balance.blocks_to_unlock.to_string());
    }

    if balance.per_subaddress.is_empty() {
        return Ok(());
    }

    let redact = Print::redact();
    Print::header("per subaddress");
    print::trees(balance.per_subaddress.iter().map(|sub| {
        let mut details: Vec<Detail> = vec![
            ("Address".to_string(), format::address(&sub.address, redact)),
            ("Balance".to_string(), format::xmr(sub.balance)),
            ("Unlocked".to_string(), format::xmr(sub.unlocked_balance)),
            ("Outputs".to_string(), sub.num_unspent_outputs.to_string().normal()),
        ];
        if !sub.label.is_empty() {
            details.push(("Label".to_string(), sub.label.italic()));
        }
        (format!("subaddress {}", sub.address_index), details)
    }));
    Ok(())
}

pub async fn address(wallet: &Wallet, account: Option<u32>) -> anyhow::Result<()> {
    let info: AddressInfo = wallet.address(account).await?;
    let redact = Print::redact();

    if Print::quiet() > 1 {
        Print::raw(format::address(&info.address, redact));
        return Ok(());
    }

    Print::header("address");
    print::aligned_line("Primary", format::address(&info.address, redact));

    for sub in info.addresses.iter().filter(|sub| sub.address_index > 0) {
        let used = if sub.used {
            "used".color(colors::SECONDARY)
        } else {
            "unused".color(colors::SEPARATOR)
        };
        let label = if sub.label.is_empty() {
            String::new()
        } else {
            format!(" ({})", sub.label)
        };
        print::aligned_line(
            &format!("#{}", sub.address_index),
            format!("{} {used}{label}", format::address(&sub.address, redact)),
        );
    }
    Ok(())
}

pub async fn height(wallet: &Wallet) -> anyhow::Result<()> {
    let height: u64 = wallet.height().await?;
    Print::value("Height", height.to_string());
    Ok(())
}
