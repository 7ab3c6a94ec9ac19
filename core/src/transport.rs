// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # RPC Transport
//!
//! Moves an already serialized JSON-RPC body to the server and hands back the
//! raw reply. Interpreting the reply is the job of [`crate::client`].
//!
//! The [`RpcTransport`] trait is the seam between the wallet logic and the
//! network. [`HttpTransport`] is the production implementation; tests plug in
//! canned replies instead.

use std::time::Instant;

use async_trait::async_trait;
use monerowallet_common::config::Config;
use monerowallet_common::debug;
use reqwest::header::{CONTENT_TYPE, HeaderValue};

use crate::error::Result;

/// What came back over the wire, before any JSON-RPC interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawReply {
    pub status: u16,
    pub body: String,
}

impl RawReply {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }
}

/// Defines the contract for delivering JSON-RPC requests.
#[async_trait]
pub trait RpcTransport: Send + Sync {
    /// Sends `body` and returns the server's reply, whatever its status.
    async fn post(&self, body: String) -> Result<RawReply>;
}

/// Sends requests to `monero-wallet-rpc` over HTTP(S).
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpTransport {
    pub fn new(cfg: &Config) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(cfg.timeout).build()?;

        Ok(Self {
            http,
            endpoint: cfg.endpoint(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl RpcTransport for HttpTransport {
    async fn post(&self, body: String) -> Result<RawReply> {
        let start = Instant::now();

        let response = self
            .http
            .post(&self.endpoint)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .body(body)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        debug!(
            verbosity = 2,
            "HTTP {status} from {} in {}ms ({} bytes)",
            self.endpoint,
            start.elapsed().as_millis(),
            body.len()
        );

        Ok(RawReply { status, body })
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
    use monerowallet_common::config::Protocol;

    #[test]
    fn endpoint_follows_config() {
        let cfg = Config::for_server(Protocol::Https, "node.local", 28088, "rpc").unwrap();
        let transport = HttpTransport::new(&cfg).unwrap();
        assert_eq!(transport.endpoint(), "https://node.local:28088/rpc");

        let local = HttpTransport::new(&Config::default()).unwrap();
        assert_eq!(local.endpoint(), "http://127.0.0.1:18082/json_rpc");
    }
}
