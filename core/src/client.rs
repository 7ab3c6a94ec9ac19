// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! JSON-RPC 2.0 client.
//!
//! Wraps a [`RpcTransport`] and turns raw replies into either a typed result
//! or a [`WalletError`]. A reply is judged in this order:
//!
//! 1. HTTP status other than 200 fails with [`WalletError::StatusCode`].
//! 2. A non-null `error` member fails with [`WalletError::MethodNotFound`] or
//!    [`WalletError::Rpc`], whatever its shape.
//! 3. The `result` member is the value, `null` included; a reply without one
//!    is taken whole.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use monerowallet_common::debug;
use monerowallet_common::models::rpc::{RpcErrorObject, RpcRequest};

use crate::error::{Result, WalletError};
use crate::transport::{RawReply, RpcTransport};

pub struct RpcClient<T> {
    transport: T,
}

impl<T: RpcTransport> RpcClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Calls `method` and decodes the result into `R`.
    pub async fn call<P, R>(&self, method: &str, params: Option<P>) -> Result<R>
    where
        P: Serialize + Send,
        R: DeserializeOwned,
    {
        let value = self.request(method, params).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Calls a method whose result carries no information.
    pub async fn call_unit<P>(&self, method: &str, params: Option<P>) -> Result<()>
    where
        P: Serialize + Send,
    {
        self.request(method, params).await.map(|_| ())
    }

    /// Calls any method with free-form parameters.
    ///
    /// `Value::Null` parameters are left out of the request.
    pub async fn call_raw(&self, method: &str, params: Value) -> Result<Value> {
        let params = (!params.is_null()).then_some(params);
        self.request(method, params).await
    }

    async fn request<P>(&self, method: &str, params: Option<P>) -> Result<Value>
    where
        P: Serialize + Send,
    {
        let body = serde_json::to_string(&RpcRequest::new(method, params))?;
        debug!(verbosity = 1, "Calling '{method}'");

        let reply = self.transport.post(body).await?;
        interpret(method, reply)
    }
}

/// Maps a raw reply onto the JSON-RPC result value or an error.
pub fn interpret(method: &str, reply: RawReply) -> Result<Value> {
    if reply.status != 200 {
        return Err(WalletError::StatusCode(reply.status));
    }

    let mut body: Value = serde_json::from_str(&reply.body)?;

    if let Some(error) = body.get("error").filter(|e| !e.is_null()) {
        let err = RpcErrorObject::from_value(error);
        if err.is_method_not_found() {
            return Err(WalletError::MethodNotFound {
                method: method.to_string(),
            });
        }
        return Err(WalletError::Rpc {
            code: err.code,
            message: err.message,
        });
    }

    // A present `result` wins even when it is null.
    let result = body.get_mut("result").map(Value::take);
    Ok(result.unwrap_or(body))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
