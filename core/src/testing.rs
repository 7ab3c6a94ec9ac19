// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! In-memory transport replaying canned replies.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{Value, json};

use crate::error::Result;
use crate::transport::{RawReply, RpcTransport};

#[derive(Default)]
pub struct ScriptedTransport {
    replies: Mutex<VecDeque<RawReply>>,
    sent: Mutex<Vec<Value>>,
}

impl ScriptedTransport {
    pub fn with_replies(replies: impl IntoIterator<Item = RawReply>) -> Self {
        Self {
            replies: Mutex::new(replies.into_iter().collect()),
            sent: Mutex::new(Vec::new()),
        }
    }

    /// Wraps every value in a successful JSON-RPC envelope.
    pub fn with_results(results: impl IntoIterator<Item = Value>) -> Self {
        Self::with_replies(results.into_iter().map(|result| {
            RawReply::ok(json!({"id": "0", "jsonrpc": "2.0", "result": result}).to_string())
        }))
    }

    /// Request bodies seen so far, parsed back into JSON.
    pub fn sent(&self) -> Vec<Value> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl RpcTransport for ScriptedTransport {
    async fn post(&self, body: String) -> Result<RawReply> {
        self.sent
            .lock()
            .unwrap()
            .push(serde_json::from_str(&body).unwrap());

        Ok(self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .expect("no scripted reply left"))
    }
}

pub fn scripted_wallet(results: impl IntoIterator<Item = Value>) -> crate::Wallet<ScriptedTransport> {
    crate::Wallet::with_transport(ScriptedTransport::with_results(results))
}
