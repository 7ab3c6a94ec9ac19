// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # Command Line Interface Definitions
//!
//! The arguments, flags and help text of every subcommand live here; the
//! execution logic lives in one submodule per concern.
//!
//! * [`CommandLine`]: global flags, which select the wallet server and
//!   shape the output (banner, quiet levels, verbosity, redaction).
//! * [`Commands`]: the operation to run. Exactly one per invocation.
//!
//! `TryFrom<&CommandLine> for Config` turns the flags into the `Config` the
//! core library consumes, so the library never sees `clap` types.

pub mod accounts;
pub mod balance;
pub mod history;
pub mod info;
pub mod keys;
pub mod lifecycle;
pub mod raw;
pub mod transfer;

use std::time::Duration;

use clap::{ArgAction, Parser, Subcommand};
use monerowallet_common::config::{self, Config, ConfigError, Protocol};
use monerowallet_common::models::account::KeyType;
use monerowallet_common::models::transfer::{Destination, Priority, TransferType};
use monerowallet_common::utils::amount;

#[derive(Parser)]
#[command(name = "monerowallet")]
#[command(about = "Talk to a running monero-wallet-rpc server.")]
#[command(version)]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Scheme of the wallet RPC endpoint (http or https)
    #[arg(long, default_value = "http", env = "MONEROWALLET_PROTOCOL", global = true)]
    pub protocol: Protocol,

    /// Host of the wallet RPC server
    #[arg(long, default_value = config::DEFAULT_HOST, env = "MONEROWALLET_HOST", global = true)]
    pub host: String,

    /// Port of the wallet RPC server
    #[arg(long, default_value_t = config::DEFAULT_PORT, env = "MONEROWALLET_PORT", global = true)]
    pub port: u16,

    /// Request path of the JSON-RPC endpoint
    #[arg(long, default_value = config::DEFAULT_PATH, env = "MONEROWALLET_PATH", global = true)]
    pub path: String,

    /// Seconds to wait for the server before giving up
    #[arg(long, value_name = "SECS", default_value_t = config::DEFAULT_TIMEOUT.as_secs(), global = true)]
    pub timeout: u64,

    /// Keep logs and colors but hide the ASCII art
    #[arg(long = "no-banner", global = true)]
    pub no_banner: bool,

    /// Reduce UI visual density (-q: reduce styling, -qq: bare values)
    #[arg(short = 'q', long = "quiet", action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Redact sensitive info (addresses, keys, transaction ids)
    #[arg(long = "redact", global = true)]
    pub redact: bool,

    /// Increase logging detail (-v: request logs, -vv: timings)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbosity: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Overview of the wallet: endpoint, address, height and balance
    #[command(alias = "i")]
    Info {
        #[arg(long)]
        account: Option<u32>,
    },

    /// Total and unlocked balance
    #[command(alias = "b")]
    Balance {
        #[arg(long)]
        account: Option<u32>,
    },

    /// Primary address and subaddresses
    #[command(alias = "a")]
    Address {
        #[arg(long)]
        account: Option<u32>,
    },

    /// Block height the wallet has synced to
    Height,

    /// Send XMR to one or more recipients
    #[command(alias = "t")]
    Transfer {
        /// Recipient as ADDRESS:AMOUNT, amount in XMR. Repeatable.
        #[arg(long = "to", value_name = "ADDR:XMR", required = true)]
        destinations: Vec<Destination>,

        /// Allow the wallet to split the payment over several transactions
        #[arg(long)]
        split: bool,

        /// Account to spend from
        #[arg(long)]
        account: Option<u32>,

        /// default, unimportant, normal or elevated
        #[arg(long)]
        priority: Option<Priority>,

        /// Block height (or timestamp) before which the outputs stay locked
        #[arg(long)]
        unlock_time: Option<u64>,

        /// Build and sign, but do not broadcast
        #[arg(long)]
        do_not_relay: bool,
    },

    /// Send dust outputs back to the wallet
    SweepDust {
        #[arg(long)]
        account: Option<u32>,
    },

    /// Send all unlocked funds of an account to one address
    SweepAll {
        #[arg(value_name = "ADDRESS")]
        address: String,

        #[arg(long)]
        account: Option<u32>,

        #[arg(long, default_value = "unimportant")]
        priority: Priority,

        /// Only sweep outputs below this amount, in XMR
        #[arg(long, value_name = "XMR", value_parser = amount::parse_xmr)]
        below: Option<u64>,

        #[arg(long)]
        do_not_relay: bool,
    },

    /// Save the wallet file
    Store,

    /// Incoming payments for one or more payment ids
    #[command(alias = "p")]
    Payments {
        #[arg(value_name = "PAYMENT_ID", num_args(1..), required = true)]
        payment_ids: Vec<String>,

        /// Starting height, only used with several payment ids
        #[arg(long, default_value_t = 0)]
        min_height: u64,
    },

    /// Transfer history
    Transfers {
        #[arg(long = "in")]
        incoming: bool,
        #[arg(long)]
        out: bool,
        #[arg(long)]
        pending: bool,
        #[arg(long)]
        failed: bool,
        #[arg(long)]
        pool: bool,
        #[arg(long)]
        min_height: Option<u64>,
        #[arg(long)]
        max_height: Option<u64>,
        #[arg(long)]
        account: Option<u32>,
    },

    /// Details of a single transaction
    Tx {
        #[arg(value_name = "TXID")]
        txid: String,

        #[arg(long)]
        account: Option<u32>,
    },

    /// Outputs received by the wallet
    Incoming {
        /// all, available or unavailable
        #[arg(long = "type", default_value = "all")]
        transfer_type: TransferType,

        #[arg(long)]
        account: Option<u32>,
    },

    /// Show the mnemonic seed or a private key
    QueryKey {
        /// mnemonic, view_key or spend_key
        #[arg(value_name = "KEY_TYPE", default_value = "mnemonic")]
        key_type: KeyType,
    },

    /// Build an integrated address
    Integrated {
        /// 16 hex characters. The server picks one when omitted.
        #[arg(long)]
        payment_id: Option<String>,
    },

    /// Split an integrated address into address and payment id
    Split {
        #[arg(value_name = "INTEGRATED_ADDRESS")]
        integrated_address: String,
    },

    /// Create a new wallet file on the server and open it
    CreateWallet {
        filename: String,

        #[arg(long, default_value = "", env = "MONEROWALLET_PASSWORD", hide_env_values = true)]
        password: String,

        #[arg(long)]
        language: Option<String>,
    },

    /// Open an existing wallet file on the server
    OpenWallet {
        filename: String,

        #[arg(long, default_value = "", env = "MONEROWALLET_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// List accounts with their balances
    Accounts,

    /// Create a new account
    CreateAccount {
        #[arg(long)]
        label: Option<String>,
    },

    /// Create a new subaddress
    CreateAddress {
        #[arg(long)]
        account: Option<u32>,

        #[arg(long)]
        label: Option<String>,
    },

    /// Store the wallet and stop the RPC server
    Stop,

    /// Send any method with JSON params and print the raw result
    Call {
        method: String,

        /// JSON object with the parameters
        #[arg(value_name = "JSON")]
        params: Option<String>,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

impl TryFrom<&CommandLine> for Config {
    type Error = ConfigError;

    fn try_from(cmd: &CommandLine) -> Result<Self, Self::Error> {
        let server = Config::for_server(cmd.protocol, &cmd.host, cmd.port, &cmd.path)?;
        Ok(Self {
            timeout: Duration::from_secs(cmd.timeout),
            no_banner: cmd.no_banner,
            quiet: cmd.quiet,
            redact: cmd.redact,
            ..server
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

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> CommandLine {
        CommandLine::try_parse_from(std::iter::once("monerowallet").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn cli_definition_is_consistent() {
        CommandLine::command().debug_assert();
    }

    #[test]
    fn defaults_target_local_wallet() {
        let cmd = parse(&["balance"]);
        let cfg = Config::try_from(&cmd).unwrap();

        assert_eq!(cfg.endpoint(), "http://127.0.0.1:18082/json_rpc");
        assert_eq!(cfg.timeout, config::DEFAULT_TIMEOUT);
    }

    #[test]
    fn server_flags_build_endpoint() {
        let cmd = parse(&[
            "--protocol", "https", "--host", "node.example", "--port", "28088", "--path", "rpc",
            "-qq", "--redact", "height",
        ]);
        let cfg = Config::try_from(&cmd).unwrap();

        assert_eq!(cfg.endpoint(), "https://node.example:28088/rpc");
        assert_eq!(cfg.quiet, 2);
        assert!(cfg.redact);
    }

    #[test]
    fn blank_host_is_rejected() {
        let cmd = parse(&["--host", " ", "height"]);
        assert_eq!(Config::try_from(&cmd).unwrap_err(), ConfigError::EmptyHost);
    }

    #[test]
    fn transfer_collects_destinations() {
        let cmd = parse(&[
            "transfer", "--to", "44AFFq:1.5", "--to", "9wNgSY:0.25", "--priority", "elevated",
        ]);

        let Commands::Transfer {
            destinations,
            priority,
            split,
            ..
        } = cmd.command
        else {
            panic!("expected transfer");
        };
        assert_eq!(destinations.len(), 2);
        assert_eq!(destinations[0].amount, 1_500_000_000_000);
        assert_eq!(destinations[1].address, "9wNgSY");
        assert_eq!(priority, Some(Priority::Elevated));
        assert!(!split);
    }

    #[test]
    fn transfer_rejects_bad_amount() {
        let res = CommandLine::try_parse_from(["monerowallet", "transfer", "--to", "44AF:abc"]);
        assert!(res.is_err());
    }

    #[test]
    fn sweep_all_parses_threshold_in_xmr() {
        let cmd = parse(&["sweep-all", "44AFFq", "--below", "0.001"]);
        let Commands::SweepAll {
            below, priority, ..
        } = cmd.command
        else {
            panic!("expected sweep-all");
        };
        assert_eq!(below, Some(1_000_000_000));
        assert_eq!(priority, Priority::Unimportant);
    }

    #[test]
    fn query_key_accepts_short_names() {
        let cmd = parse(&["query-key", "view"]);
        assert!(matches!(
            cmd.command,
            Commands::QueryKey {
                key_type: KeyType::ViewKey
            }
        ));
    }
}
