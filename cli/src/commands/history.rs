// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use colored::*;
use monerowallet_common::models::payment::Payment;
use monerowallet_common::models::transfer::{
    IncomingTransfer, Transfer, TransferFilter, TransferType, Transfers,
};
use monerowallet_common::utils::amount;
use monerowallet_core::Wallet;

use crate::terminal::{
    format,
    print::{self, Print},
    spinner,
};

pub async fn payments(
    wallet: &Wallet,
    payment_ids: &[String],
    min_height: u64,
) -> anyhow::Result<()> {
    let payments: Vec<Payment> = {
        let _spinner = spinner::spin("Looking up payments...");
        match payment_ids {
            [single] => wallet.payments(single).await?,
            many => wallet.bulk_payments(many, min_height).await?,
        }
    };

    if payments.is_empty() {
        Print::no_results("payments");
        return Ok(());
    }

    let redact = Print::redact();
    if Print::quiet() > 1 {
        for p in &payments {
            Print::raw(format!("{} {}", format::hash(&p.tx_hash, redact), p.amount));
        }
        return Ok(());
    }

    Print::header("payments");
    print::trees(
        payments
            .iter()
            .map(|p| (format::hash(&p.tx_hash, redact).to_string(), format::payment_details(p, redact))),
    );

    let total: u64 = amount::total(payments.iter().map(|p| p.amount));
    print::summary(&format!(
        "{} payment(s) totalling {} XMR",
        payments.len(),
        amount::format_xmr(total).bold()
    ));
    Ok(())
}

/// Categories to request. With no category flag set, all of them.
pub fn transfer_filter(
    categories: [bool; 5],
    min_height: Option<u64>,
    max_height: Option<u64>,
    account: Option<u32>,
) -> TransferFilter {
    let [incoming, out, pending, failed, pool] = categories;
    let mut filter = if categories.iter().any(|c| *c) {
        let flag = |on: bool| on.then_some(true);
        TransferFilter {
            incoming: flag(incoming),
            out: flag(out),
            pending: flag(pending),
            failed: flag(failed),
            pool: flag(pool),
            ..TransferFilter::default()
        }
    } else {
        TransferFilter::everything()
    };
    filter.account_index = account;
    filter.with_height_range(min_height, max_height)
}

pub async fn transfers(wallet: &Wallet, filter: &TransferFilter) -> anyhow::Result<()> {
    let transfers: Transfers = {
        let _spinner = spinner::spin("Reading transfer history...");
        wallet.transfers(filter).await?
    };

    if transfers.is_empty() {
        Print::no_results("transfers");
        return Ok(());
    }

    let mut all: Vec<&Transfer> = transfers.iter().collect();
    all.sort_by_key(|t| (t.height, t.timestamp));
    print_transfers(&all);
    Ok(())
}

fn print_transfers(transfers: &[&Transfer]) {
    let redact = Print::redact();
    if Print::quiet() > 1 {
        for t in transfers {
            Print::raw(format!("{} {} {}", t.kind, format::hash(&t.txid, redact), t.amount));
        }
        return;
    }

    Print::header("transfers");
    print::trees(
        transfers
            .iter()
            .map(|t| (format::hash(&t.txid, redact).to_string(), format::transfer_details(t, redact))),
    );
    print::summary(&format!("{} transfer(s)", transfers.len()));
}

pub async fn tx(wallet: &Wallet, txid: &str, account: Option<u32>) -> anyhow::Result<()> {
    let transfer: Transfer = wallet.transfer_by_txid(txid, account).await?;
    print_transfers(&[&transfer]);
    Ok(())
}

pub async fn incoming(
    wallet: &Wallet,
    transfer_type: TransferType,
    account: Option<u32>,
) -> anyhow::Result<()> {
    let outputs: Vec<IncomingTransfer> = {
        let _spinner = spinner::spin("Collecting received outputs...");
        wallet.incoming_transfers(transfer_type, account).await?
    };

    if outputs.is_empty() {
        Print::no_results("incoming transfers");
        return Ok(());
    }

    let redact = Print::redact();
    if Print::quiet() > 1 {
        for o in &outputs {
            Print::raw(format!("{} {}", format::hash(&o.tx_hash, redact), o.amount));
        }
        return Ok(());
    }

    Print::header("incoming transfers");
    print::trees(
        outputs
            .iter()
            .map(|o| (format::hash(&o.tx_hash, redact).to_string(), format::incoming_details(o, redact))),
    );

    let unspent: u64 = amount::total(outputs.iter().filter(|o| !o.spent).map(|o| o.amount));
    print::summary(&format!(
        "{} output(s), {} XMR unspent",
        outputs.len(),
        amount::format_xmr(unspent).bold()
    ));
    Ok(())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
