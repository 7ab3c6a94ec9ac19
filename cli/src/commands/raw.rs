// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use anyhow::Context;
use serde_json::Value;

use monerowallet_core::Wallet;

use crate::terminal::print::Print;

/// Sends `method` with optional JSON params and prints the result as JSON.
pub async fn call(wallet: &Wallet, method: &str, params: Option<&str>) -> anyhow::Result<()> {
    let params: Value = parse_params(params)?;
    let result: Value = wallet.call_raw(method, params).await?;

    if Print::quiet() > 1 {
        Print::raw(result);
        return Ok(());
    }

    Print::header(method);
    Print::raw(serde_json::to_string_pretty(&result)?);
    Ok(())
}

fn parse_params(params: Option<&str>) -> anyhow::Result<Value> {
    match params.map(str::trim).filter(|p| !p.is_empty()) {
        None => Ok(Value::Null),
        Some(json) => serde_json::from_str(json).context("params are not valid JSON"),
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
