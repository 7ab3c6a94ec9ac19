// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use colored::*;
use monerowallet_common::config::Config;
use monerowallet_core::Wallet;
use monerowallet_core::info::{WalletService, WalletSnapshot};

use crate::{
    mprint,
    terminal::{
        colors, format,
        print::{self, GLOBAL_KEY_WIDTH, Print},
        spinner,
    },
};

pub async fn info(wallet: &Wallet, cfg: &Config, account: Option<u32>) -> anyhow::Result<()> {
    GLOBAL_KEY_WIDTH.set(10);

    if Print::quiet() < 2 {
        print_about_the_tool(cfg);
    }

    let snapshot: WalletSnapshot = {
        let _spinner = spinner::spin("Asking the wallet for an overview...");
        WalletService::new(wallet).snapshot(account).await?
    };

    print_snapshot(&snapshot);
    Ok(())
}

fn print_about_the_tool(cfg: &Config) {
    Print::header("about the tool");
    mprint!(
        "{}",
        "monerowallet talks to a running monero-wallet-rpc server.".color(colors::TEXT_DEFAULT)
    );
    mprint!();
    print::aligned_line("Version", env!("CARGO_PKG_VERSION"));
    print::aligned_line("License", "MPL-2.0");
    print::aligned_line("Endpoint", cfg.endpoint());
    print::aligned_line("Timeout", format!("{}s", cfg.timeout.as_secs()));
}

fn print_snapshot(snapshot: &WalletSnapshot) {
    if Print::quiet() > 1 {
        Print::raw(&snapshot.address);
        Print::raw(snapshot.height);
        Print::raw(snapshot.balance.balance);
        return;
    }

    let redact = Print::redact();
    Print::header("wallet");
    print::aligned_line("Address", format::address(&snapshot.address, redact));
    print::aligned_line("Height", snapshot.height.to_string());
    print::aligned_line("Balance", format::xmr(snapshot.balance.balance));
    print::aligned_line("Unlocked", format::xmr(snapshot.balance.unlocked_balance));

    let locked = snapshot.balance.locked();
    if locked > 0 {
        print::aligned_line("Locked", format::xmr_locked(locked));
    }
}
