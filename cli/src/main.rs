// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # monerowallet CLI Entry Point
//!
//! Bootstraps the runtime and owns the global lifecycle of the process.
//!
//! ## Responsibilities
//!
//! 1.  **Runtime Initialization**: `#[tokio::main]` sets up the async runtime the
//!     HTTP client runs on.
//! 2.  **Global State Setup**: Initializes the `tracing` subscriber and the terminal
//!     output modes (verbosity, quiet mode, banners, redaction).
//! 3.  **Configuration Mapping**: Converts the parsed command line into the `Config`
//!     used by the core library.
//! 4.  **Command Dispatch**: Routes execution to the matching module in `commands/`.
//! 5.  **Error Boundary**: Errors from any subcommand end up here, are logged, and
//!     turn into a non-zero `ExitCode`.

mod commands;
mod terminal;

use std::process::ExitCode;

use monerowallet_common::models::transfer::SweepAllOptions;
use monerowallet_common::{config::Config, error};
use monerowallet_core::Wallet;

use crate::{
    commands::{
        CommandLine, Commands, accounts, balance, history, info, keys, lifecycle, raw,
        transfer::{self, TransferArgs},
    },
    terminal::{print::Print, spinner},
};

#[tokio::main]
async fn main() -> ExitCode {
    let commands = CommandLine::parse_args();
    spinner::init_logging(commands.verbosity);

    let cfg = match Config::try_from(&commands) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Invalid configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    let _ = Print::init(&cfg);
    Print::banner();

    let exit_code = match run(&commands.command, &cfg).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Critical failure: {e:#}");
            ExitCode::FAILURE
        }
    };

    Print::end_of_program();

    exit_code
}

async fn run(command: &Commands, cfg: &Config) -> anyhow::Result<()> {
    let wallet = Wallet::connect(cfg)?;

    match command {
        Commands::Info { account } => info::info(&wallet, cfg, *account).await,
        Commands::Balance { account } => balance::balance(&wallet, *account).await,
        Commands::Address { account } => balance::address(&wallet, *account).await,
        Commands::Height => balance::height(&wallet).await,
        Commands::Transfer {
            destinations,
            split,
            account,
            priority,
            unlock_time,
            do_not_relay,
        } => {
            let args = TransferArgs {
                destinations,
                split: *split,
                account: *account,
                priority: *priority,
                unlock_time: *unlock_time,
                do_not_relay: *do_not_relay,
            };
            transfer::transfer(&wallet, args).await
        }
        Commands::SweepDust { account } => transfer::sweep_dust(&wallet, *account).await,
        Commands::SweepAll {
            address,
            account,
            priority,
            below,
            do_not_relay,
        } => {
            let opts = SweepAllOptions {
                account_index: *account,
                do_not_relay: *do_not_relay,
                priority: *priority,
                below_amount: below.unwrap_or(0),
            };
            transfer::sweep_all(&wallet, address, &opts).await
        }
        Commands::Store => lifecycle::store(&wallet).await,
        Commands::Payments {
            payment_ids,
            min_height,
        } => history::payments(&wallet, payment_ids, *min_height).await,
        Commands::Transfers {
            incoming,
            out,
            pending,
            failed,
            pool,
            min_height,
            max_height,
            account,
        } => {
            let filter = history::transfer_filter(
                [*incoming, *out, *pending, *failed, *pool],
                *min_height,
                *max_height,
                *account,
            );
            history::transfers(&wallet, &filter).await
        }
        Commands::Tx { txid, account } => history::tx(&wallet, txid, *account).await,
        Commands::Incoming {
            transfer_type,
            account,
        } => history::incoming(&wallet, *transfer_type, *account).await,
        Commands::QueryKey { key_type } => keys::query_key(&wallet, *key_type).await,
        Commands::Integrated { payment_id } => {
            keys::integrated(&wallet, payment_id.as_deref()).await
        }
        Commands::Split { integrated_address } => keys::split(&wallet, integrated_address).await,
        Commands::CreateWallet {
            filename,
            password,
            language,
        } => lifecycle::create_wallet(&wallet, filename, password, language.as_deref()).await,
        Commands::OpenWallet { filename, password } => {
            lifecycle::open_wallet(&wallet, filename, password).await
        }
        Commands::Accounts => accounts::accounts(&wallet).await,
        Commands::CreateAccount { label } => {
            accounts::create_account(&wallet, label.as_deref()).await
        }
        Commands::CreateAddress { account, label } => {
            accounts::create_address(&wallet, *account, label.as_deref()).await
        }
        Commands::Stop => lifecycle::stop(&wallet).await,
        Commands::Call { method, params } => raw::call(&wallet, method, params.as_deref()).await,
    }
}
