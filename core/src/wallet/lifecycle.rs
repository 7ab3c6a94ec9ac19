// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use serde::Serialize;
use serde_json::Value;

use monerowallet_common::{info, success};

use super::{Wallet, require};
use crate::error::Result;
use crate::transport::RpcTransport;

/// Seed language used when none is requested.
pub const DEFAULT_LANGUAGE: &str = "English";

impl<T: RpcTransport> Wallet<T> {
    /// Saves the wallet file.
    pub async fn store(&self) -> Result<()> {
        self.client.call_unit("store", None::<Value>).await?;
        success!(verbosity = 1, "Wallet state stored");
        Ok(())
    }

    /// Creates a new wallet file in the server's wallet directory and opens it.
    pub async fn create_wallet(
        &self,
        filename: &str,
        password: &str,
        language: Option<&str>,
    ) -> Result<()> {
        require(!filename.trim().is_empty(), "wallet filename cannot be empty")?;

        let params = CreateWalletParams {
            filename,
            password,
            language: language.unwrap_or(DEFAULT_LANGUAGE),
        };
        info!(verbosity = 1, "Creating wallet '{filename}'");
        self.client.call_unit("create_wallet", Some(params)).await
    }

    /// Opens an existing wallet file, closing the current one.
    pub async fn open_wallet(&self, filename: &str, password: &str) -> Result<()> {
        require(!filename.trim().is_empty(), "wallet filename cannot be empty")?;

        let params = OpenWalletParams { filename, password };
        info!(verbosity = 1, "Opening wallet '{filename}'");
        self.client.call_unit("open_wallet", Some(params)).await
    }

    /// Stores the wallet and shuts the RPC server down.
    pub async fn stop_wallet(&self) -> Result<()> {
        self.client.call_unit("stop_wallet", None::<Value>).await
    }
}

#[derive(Serialize)]
struct CreateWalletParams<'a> {
    filename: &'a str,
    password: &'a str,
    language: &'a str,
}

#[derive(Serialize)]
struct OpenWalletParams<'a> {
    filename: &'a str,
    password: &'a str,
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
    use crate::error::WalletError;
    use crate::testing::scripted_wallet;
    use serde_json::json;

    #[tokio::test]
    async fn store_and_stop_send_no_params() {
        let w = scripted_wallet([json!({}), json!({})]);

        w.store().await.unwrap();
        w.stop_wallet().await.unwrap();

        let sent = w.client().transport().sent();
        assert_eq!(sent[0], json!({"jsonrpc": "2.0", "id": "0", "method": "store"}));
        assert_eq!(sent[1]["method"], "stop_wallet");
        assert!(sent[1].get("params").is_none());
    }

    #[tokio::test]
    async fn create_wallet_defaults_language() {
        let w = scripted_wallet([json!({})]);
        w.create_wallet("mytestwallet", "secret", None).await.unwrap();

        assert_eq!(
            w.client().transport().sent()[0]["params"],
            json!({"filename": "mytestwallet", "password": "secret", "language": "English"})
        );
    }

    #[tokio::test]
    async fn open_wallet_surfaces_server_error() {
        let w = crate::Wallet::with_transport(crate::testing::ScriptedTransport::with_replies([
            crate::transport::RawReply::ok(
                r#"{"id":"0","jsonrpc":"2.0","error":{"code":-1,"message":"Failed to open wallet"}}"#,
            ),
        ]));

        let err = w.open_wallet("missing", "").await.unwrap_err();
        assert_eq!(err.rpc_code(), Some(-1));
    }

    #[tokio::test]
    async fn wallet_filename_is_required() {
        let w = scripted_wallet(Vec::new());
        assert!(matches!(
            w.open_wallet("", "pw").await,
            Err(WalletError::InvalidArgument(_))
        ));
        assert!(matches!(
            w.create_wallet(" ", "pw", Some("Deutsch")).await,
            Err(WalletError::InvalidArgument(_))
        ));
    }
}
