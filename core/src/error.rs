// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Everything that can go wrong while talking to the wallet RPC server.
#[derive(Debug, Error)]
pub enum WalletError {
    /// The HTTP layer answered with something other than 200.
    #[error("Unexpected returned status code: {0}")]
    StatusCode(u16),

    /// The server does not know the requested method.
    #[error("Unexpected method while requesting the server: {method}")]
    MethodNotFound { method: String },

    /// The server understood the request but refused or failed it.
    #[error("Wallet RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Malformed reply: {0}")]
    Decode(#[from] serde_json::Error),

    /// Rejected locally, nothing was sent.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl WalletError {
    /// The RPC error code, if the server produced one.
    pub fn rpc_code(&self) -> Option<i64> {
        match self {
            Self::Rpc { code, .. } => Some(*code),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, WalletError>;
