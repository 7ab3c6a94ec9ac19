// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # JSON-RPC Envelope
//!
//! The wallet server speaks JSON-RPC 2.0 over HTTP POST. Every request uses
//! the same fixed `id`, since calls are strictly one request per round trip.

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const JSONRPC_VERSION: &str = "2.0";
pub const REQUEST_ID: &str = "0";

/// Error code defined by JSON-RPC 2.0 for unknown methods.
pub const METHOD_NOT_FOUND_CODE: i64 = -32601;
/// Message `monero-wallet-rpc` sends alongside [`METHOD_NOT_FOUND_CODE`].
pub const METHOD_NOT_FOUND_MESSAGE: &str = "Method not found";

#[derive(Debug, Serialize)]
pub struct RpcRequest<'a, P> {
    pub jsonrpc: &'static str,
    pub id: &'static str,
    pub method: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<P>,
}

impl<'a, P: Serialize> RpcRequest<'a, P> {
    pub fn new(method: &'a str, params: Option<P>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            id: REQUEST_ID,
            method,
            params,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct RpcErrorObject {
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub message: String,
}

impl RpcErrorObject {
    /// Reads the `error` member of a reply.
    ///
    /// Anything that is not a `{code, message}` object becomes code 0 with
    /// the raw member as message, so a malformed error still reads as an error.
    pub fn from_value(value: &Value) -> Self {
        serde_json::from_value(value.clone()).unwrap_or_else(|_| Self {
            code: 0,
            message: value
                .as_str()
                .map(String::from)
                .unwrap_or_else(|| value.to_string()),
        })
    }

    pub fn is_method_not_found(&self) -> bool {
        self.code == METHOD_NOT_FOUND_CODE || self.message == METHOD_NOT_FOUND_MESSAGE
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
    use serde_json::json;

    #[test]
    fn request_without_params_omits_the_field() {
        let req: RpcRequest<'_, Value> = RpcRequest::new("getheight", None);
        let body = serde_json::to_value(&req).unwrap();
        assert_eq!(
            body,
            json!({"jsonrpc": "2.0", "id": "0", "method": "getheight"})
        );
    }

    #[test]
    fn request_with_params_is_nested() {
        let req = RpcRequest::new("query_key", Some(json!({"key_type": "view_key"})));
        let body = serde_json::to_value(&req).unwrap();
        assert_eq!(body["params"]["key_type"], "view_key");
        assert_eq!(body["method"], "query_key");
    }

    #[test]
    fn method_not_found_is_detected_by_code_or_message() {
        let by_code = RpcErrorObject {
            code: -32601,
            message: String::new(),
        };
        let by_message = RpcErrorObject {
            code: 0,
            message: "Method not found".to_string(),
        };
        let other = RpcErrorObject {
            code: -1,
            message: "Not enough money".to_string(),
        };
        assert!(by_code.is_method_not_found());
        assert!(by_message.is_method_not_found());
        assert!(!other.is_method_not_found());
    }

    #[test]
    fn malformed_error_member_keeps_its_text() {
        let plain = RpcErrorObject::from_value(&json!("wallet locked"));
        assert_eq!(plain.code, 0);
        assert_eq!(plain.message, "wallet locked");

        let string_code = RpcErrorObject::from_value(&json!({"code": "-13", "message": "No wallet file"}));
        assert_eq!(string_code.code, 0);
        assert!(string_code.message.contains("No wallet file"));

        let missing = RpcErrorObject::from_value(&json!("Method not found"));
        assert!(missing.is_method_not_found());
    }

    #[test]
    fn well_formed_error_member_is_decoded() {
        let err = RpcErrorObject::from_value(&json!({"code": -4, "message": "not enough money"}));
        assert_eq!(err.code, -4);
        assert_eq!(err.message, "not enough money");
    }
}
