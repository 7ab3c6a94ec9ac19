// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

#![cfg(test)]
use std::time::Duration;

use monerowallet_common::config::Config;
use monerowallet_common::models::transfer::{Destination, TransferFilter, TransferOptions};
use monerowallet_core::info::WalletService;
use monerowallet_core::{Wallet, WalletError};
use serde_json::json;

use crate::utils::MockWalletRpc;

const ADDR: &str = "94EJSG4URLDFfzSxvRBUxTLftcMM76DT3MvFp3JNJRih2icqrjVJiY5Jr2YF1atXN7UFBDx4vKq4s3ozUpkwrEAuEioqyrP";

#[tokio::test]
async fn test_balance_over_http() {
    let server = MockWalletRpc::start().await;
    server.respond(
        "getbalance",
        json!({"balance": 2262265030000u64, "unlocked_balance": 2262265030000u64}),
    );

    let wallet = Wallet::connect(&server.config()).unwrap();
    let balance = wallet.balance(None).await.unwrap();

    assert_eq!(balance.balance, 2_262_265_030_000);
    assert_eq!(balance.locked(), 0);

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0],
        json!({"jsonrpc": "2.0", "id": "0", "method": "getbalance", "params": {}})
    );
    assert_eq!(server.paths(), vec!["/json_rpc".to_string()]);
}

#[tokio::test]
async fn test_requests_are_sent_as_json() {
    let server = MockWalletRpc::start().await;
    server
        .respond("getheight", json!({"height": 1}))
        .respond("store", json!({}));

    let wallet = Wallet::connect(&server.config()).unwrap();
    wallet.height().await.unwrap();
    wallet.store().await.unwrap();

    assert_eq!(
        server.content_types(),
        vec!["application/json".to_string(); 2]
    );
}

#[tokio::test]
async fn test_malformed_error_reply_fails_the_call() {
    let server = MockWalletRpc::start().await;
    server
        .respond_body("store", r#"{"id":"0","jsonrpc":"2.0","error":"wallet locked"}"#)
        .respond_body(
            "stop_wallet",
            r#"{"id":"0","jsonrpc":"2.0","error":{"code":"-13","message":"No wallet file"}}"#,
        );

    let wallet = Wallet::connect(&server.config()).unwrap();

    let err = wallet.store().await.unwrap_err();
    assert!(matches!(err, WalletError::Rpc { code: 0, .. }), "got {err:?}");
    assert!(err.to_string().contains("wallet locked"));

    let err = wallet.stop_wallet().await.unwrap_err();
    assert!(err.to_string().contains("No wallet file"));
}

#[tokio::test]
async fn test_request_goes_to_configured_path() {
    let server = MockWalletRpc::start().await;
    server.respond("getheight", json!({"height": 1146043}));

    let cfg = Config {
        path: "/custom".to_string(),
        ..server.config()
    };
    let wallet = Wallet::connect(&cfg).unwrap();

    assert_eq!(wallet.height().await.unwrap(), 1146043);
    assert_eq!(server.paths(), vec!["/custom".to_string()]);
    assert!(server.requests()[0].get("params").is_none());
}

#[tokio::test]
async fn test_non_200_status_is_reported() {
    let server = MockWalletRpc::start().await;
    server.respond_status("getheight", 500, "internal error");

    let wallet = Wallet::connect(&server.config()).unwrap();
    let err = wallet.height().await.unwrap_err();

    assert!(matches!(err, WalletError::StatusCode(500)), "got {err:?}");
    assert_eq!(err.to_string(), "Unexpected returned status code: 500");
}

#[tokio::test]
async fn test_unknown_method_is_method_not_found() {
    let server = MockWalletRpc::start().await;

    let wallet = Wallet::connect(&server.config()).unwrap();
    let err = wallet.call_raw("no_such_method", json!({})).await.unwrap_err();

    match err {
        WalletError::MethodNotFound { method } => assert_eq!(method, "no_such_method"),
        other => panic!("expected MethodNotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn test_server_error_keeps_code_and_message() {
    let server = MockWalletRpc::start().await;
    server.respond_error("transfer", -4, "not enough money");

    let wallet = Wallet::connect(&server.config()).unwrap();
    let err = wallet
        .transfer(
            &[Destination::new(ADDR, 1_000_000_000_000)],
            &TransferOptions::default(),
        )
        .await
        .unwrap_err();

    assert_eq!(err.rpc_code(), Some(-4));
    assert!(err.to_string().contains("not enough money"));
}

#[tokio::test]
async fn test_transfer_round_trip() {
    let server = MockWalletRpc::start().await;
    server.respond(
        "transfer",
        json!({
            "amount": 1_000_000_000_000u64,
            "fee": 48_958_481_211u64,
            "tx_hash": "985180f468637bc6d2f72ee054e1e34b8d5097988bb29a2e0cb763e4464db23c",
            "tx_key": "8d62e5637f1fcc9a8904057d6bed6c697618507b193e956f77c31ce662b2ee07"
        }),
    );

    let wallet = Wallet::connect(&server.config()).unwrap();
    let result = wallet
        .transfer(
            &[Destination::new(ADDR, 1_000_000_000_000)],
            &TransferOptions::default().with_account(0),
        )
        .await
        .unwrap();

    assert_eq!(result.fee, 48_958_481_211);
    let params = &server.requests()[0]["params"];
    assert_eq!(params["destinations"][0]["address"], ADDR);
    assert_eq!(params["destinations"][0]["amount"], 1_000_000_000_000u64);
    assert_eq!(params["account_index"], 0);
    assert_eq!(params["get_tx_hex"], true);
}

#[tokio::test]
async fn test_transfers_and_snapshot() {
    let server = MockWalletRpc::start().await;
    server
        .respond(
            "get_transfers",
            json!({
                "in": [{"txid": "c36258a2", "type": "in", "amount": 300000000000u64, "height": 10}],
                "pool": [{"txid": "aa11", "type": "pool", "amount": 5}]
            }),
        )
        .respond("getaddress", json!({"address": ADDR, "addresses": []}))
        .respond("getheight", json!({"height": 42}))
        .respond("getbalance", json!({"balance": 7, "unlocked_balance": 3}));

    let wallet = Wallet::connect(&server.config()).unwrap();

    let transfers = wallet.transfers(&TransferFilter::everything()).await.unwrap();
    assert_eq!(transfers.len(), 2);
    assert_eq!(transfers.incoming[0].amount, 300_000_000_000);

    let snapshot = WalletService::new(&wallet).snapshot(None).await.unwrap();
    assert_eq!(snapshot.address, ADDR);
    assert_eq!(snapshot.height, 42);
    assert_eq!(snapshot.balance.locked(), 4);
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    let port = {
        let server = MockWalletRpc::start().await;
        server.config().port
    };
    tokio::time::sleep(Duration::from_millis(50)).await;

    let cfg = Config {
        timeout: Duration::from_secs(2),
        port,
        ..Config::default()
    };
    let wallet = Wallet::connect(&cfg).unwrap();

    assert!(matches!(
        wallet.height().await,
        Err(WalletError::Transport(_))
    ));
}
