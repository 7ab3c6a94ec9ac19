// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use monerowallet_common::models::account::{IntegratedAddress, KeyType, SplitAddress};
use monerowallet_common::warn;
use monerowallet_core::Wallet;

use crate::terminal::{
    format,
    print::{self, GLOBAL_KEY_WIDTH, Print},
};

pub async fn query_key(wallet: &Wallet, key_type: KeyType) -> anyhow::Result<()> {
    let key: String = wallet.query_key(key_type).await?;
    let redact = Print::redact();

    if Print::quiet() > 1 {
        Print::raw(format::secret(&key, redact));
        return Ok(());
    }

    warn!("Anyone holding this {key_type} can spend or watch your funds");
    Print::header(&key_type.to_string());
    if key_type == KeyType::Mnemonic && !redact {
        for (i, words) in key.split_whitespace().collect::<Vec<_>>().chunks(5).enumerate() {
            print::print_status(format!("{:>2}. {}", i * 5 + 1, words.join(" ")));
        }
    } else {
        print::print_status(format::secret(&key, redact).to_string());
    }
    Ok(())
}

pub async fn integrated(wallet: &Wallet, payment_id: Option<&str>) -> anyhow::Result<()> {
    let integrated: IntegratedAddress = wallet.make_integrated_address(payment_id).await?;
    let redact = Print::redact();

    if Print::quiet() > 1 {
        Print::raw(format::address(&integrated.integrated_address, redact));
        return Ok(());
    }

    GLOBAL_KEY_WIDTH.set(10);
    Print::header("integrated address");
    print::aligned_line(
        "Address",
        format::address(&integrated.integrated_address, redact),
    );
    print::aligned_line("Payment ID", format::hash(&integrated.payment_id, redact));
    Ok(())
}

pub async fn split(wallet: &Wallet, integrated_address: &str) -> anyhow::Result<()> {
    let split: SplitAddress = wallet.split_integrated_address(integrated_address).await?;
    let redact = Print::redact();

    if Print::quiet() > 1 {
        Print::raw(format::address(&split.standard_address, redact));
        Print::raw(format::hash(&split.payment_id, redact));
        return Ok(());
    }

    GLOBAL_KEY_WIDTH.set(10);
    Print::header("split address");
    print::aligned_line("Address", format::address(&split.standard_address, redact));
    print::aligned_line("Payment ID", format::hash(&split.payment_id, redact));
    if split.is_subaddress {
        print::aligned_line("Kind", "subaddress");
    }
    Ok(())
}
