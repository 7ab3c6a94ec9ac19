// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use colored::*;
use monerowallet_common::models::transfer::{
    Destination, Priority, Sweep, SweepAllOptions, SweepAllResult, TransferOptions,
    TransferResult,
};
use monerowallet_common::utils::amount;
use monerowallet_common::{success, warn};
use monerowallet_core::Wallet;

use crate::terminal::{
    format,
    print::{self, Detail, GLOBAL_KEY_WIDTH, Print},
    spinner,
};

pub struct TransferArgs<'a> {
    pub destinations: &'a [Destination],
    pub split: bool,
    pub account: Option<u32>,
    pub priority: Option<Priority>,
    pub unlock_time: Option<u64>,
    pub do_not_relay: bool,
}

pub async fn transfer(wallet: &Wallet, args: TransferArgs<'_>) -> anyhow::Result<()> {
    let opts = TransferOptions {
        account_index: args.account,
        priority: args.priority,
        unlock_time: args.unlock_time,
        do_not_relay: args.do_not_relay,
        ..TransferOptions::default()
    };

    print_destinations(args.destinations);

    if args.split {
        let hashes: Vec<String> = {
            let _spinner = spinner::spin("Building and relaying transactions...");
            wallet.transfer_split(args.destinations, &opts).await?
        };
        print_hashes(&hashes);
        success!("Created {} transaction(s)", hashes.len());
        return Ok(());
    }

    let result: TransferResult = {
        let _spinner = spinner::spin("Building and relaying transaction...");
        wallet.transfer(args.destinations, &opts).await?
    };
    print_transfer(&result, args.do_not_relay);
    Ok(())
}

fn print_destinations(destinations: &[Destination]) {
    if Print::quiet() > 0 {
        return;
    }
    let redact = Print::redact();
    Print::header("sending");
    for dest in destinations {
        print::print_status(format!(
            "{} → {}",
            format::xmr(dest.amount),
            format::address(&dest.address, redact)
        ));
    }
}

fn print_transfer(result: &TransferResult, not_relayed: bool) {
    let redact = Print::redact();
    if Print::quiet() > 1 {
        Print::raw(format::hash(&result.tx_hash, redact));
        if not_relayed && !result.tx_blob.is_empty() {
            Print::raw(format::secret(&result.tx_blob, redact));
        }
        return;
    }

    GLOBAL_KEY_WIDTH.set(10);
    Print::header("transaction");
    for (key, value) in format::transfer_result_details(result, not_relayed, redact) {
        print::aligned_line(&key, value);
    }
    if not_relayed {
        warn!("Transaction was not relayed; broadcast the blob yourself");
    }
}

fn print_hashes(hashes: &[String]) {
    let redact = Print::redact();
    if Print::quiet() > 1 {
        hashes.iter().for_each(|h| Print::raw(format::hash(h, redact)));
        return;
    }
    Print::header("transactions");
    for hash in hashes {
        print::print_status(format::hash(hash, redact).to_string());
    }
}

pub async fn sweep_dust(wallet: &Wallet, account: Option<u32>) -> anyhow::Result<()> {
    let sweep: Sweep = {
        let _spinner = spinner::spin("Collecting dust...");
        wallet.sweep_dust(account).await?
    };

    match sweep {
        Sweep::Hashes(hashes) if hashes.is_empty() => Print::no_results("dust to sweep"),
        Sweep::Hashes(hashes) => print_hashes(&hashes),
        Sweep::Multisig(txset) => {
            warn!("Wallet is multisig; the unsigned transaction set needs cosigning");
            Print::raw(txset);
        }
    }
    Ok(())
}

pub async fn sweep_all(
    wallet: &Wallet,
    address: &str,
    opts: &SweepAllOptions,
) -> anyhow::Result<()> {
    let result: SweepAllResult = {
        let _spinner = spinner::spin("Sweeping unlocked outputs...");
        wallet.sweep_all(address, opts).await?
    };

    if result.tx_hash_list.is_empty() {
        Print::no_results("outputs to sweep");
        return Ok(());
    }

    let redact = Print::redact();
    if Print::quiet() > 1 {
        print_hashes(&result.tx_hash_list);
        return Ok(());
    }

    Print::header("sweep");
    print::trees(result.tx_hash_list.iter().enumerate().map(|(i, hash)| {
        let mut details: Vec<Detail> = Vec::new();
        if let Some(amount) = result.amount_list.get(i) {
            details.push(("Amount".to_string(), format::xmr(*amount)));
        }
        if let Some(fee) = result.fee_list.get(i) {
            details.push(("Fee".to_string(), format::xmr(*fee)));
        }
        if let Some(key) = result.tx_key_list.get(i).filter(|k| !k.is_empty()) {
            details.push(("Tx key".to_string(), format::secret(key, redact)));
        }
        (format::hash(hash, redact).to_string(), details)
    }));

    let total: u64 = amount::total(result.amount_list.iter().copied());
    print::summary(
        &format!(
            "Swept {} in {} transaction(s)",
            format::xmr(total).bold(),
            result.tx_hash_list.len()
        ),
    );
    Ok(())
}
