// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use monerowallet_common::success;
use monerowallet_core::Wallet;

use crate::terminal::spinner;

pub async fn store(wallet: &Wallet) -> anyhow::Result<()> {
    let _spinner = spinner::spin("Writing wallet file...");
    wallet.store().await?;
    Ok(())
}

pub async fn create_wallet(
    wallet: &Wallet,
    filename: &str,
    password: &str,
    language: Option<&str>,
) -> anyhow::Result<()> {
    {
        let _spinner = spinner::spin("Generating keys...");
        wallet.create_wallet(filename, password, language).await?;
    }
    success!("Wallet '{filename}' created and opened");
    Ok(())
}

pub async fn open_wallet(wallet: &Wallet, filename: &str, password: &str) -> anyhow::Result<()> {
    {
        let _spinner = spinner::spin("Opening wallet...");
        wallet.open_wallet(filename, password).await?;
    }
    success!("Wallet '{filename}' opened");
    Ok(())
}

pub async fn stop(wallet: &Wallet) -> anyhow::Result<()> {
    wallet.stop_wallet().await?;
    success!("Wallet server is shutting down");
    Ok(())
}
