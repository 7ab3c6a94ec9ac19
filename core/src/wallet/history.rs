// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use serde::{Deserialize, Serialize};

use monerowallet_common::models::payment::{Payment, PaymentList};
use monerowallet_common::models::transfer::{
    IncomingTransfer, Transfer, TransferFilter, TransferType, Transfers,
};

use super::{Wallet, require};
use crate::error::Result;
use crate::transport::RpcTransport;

impl<T: RpcTransport> Wallet<T> {
    /// Incoming payments carrying the given payment id.
    pub async fn payments(&self, payment_id: &str) -> Result<Vec<Payment>> {
        require(!payment_id.trim().is_empty(), "payment id cannot be empty")?;

        let reply: PaymentList = self
            .client
            .call("get_payments", Some(PaymentsParams { payment_id }))
            .await?;
        Ok(reply.payments)
    }

    /// Incoming payments for any of `payment_ids`, starting at `min_block_height`.
    ///
    /// Prefer this over [`Wallet::payments`] when watching many ids.
    pub async fn bulk_payments(
        &self,
        payment_ids: &[String],
        min_block_height: u64,
    ) -> Result<Vec<Payment>> {
        require(!payment_ids.is_empty(), "at least one payment id is required")?;

        let params = BulkPaymentsParams {
            payment_ids,
            min_block_height,
        };
        let reply: PaymentList = self.client.call("get_bulk_payments", Some(params)).await?;
        Ok(reply.payments)
    }

    pub async fn transfer_by_txid(&self, txid: &str, account: Option<u32>) -> Result<Transfer> {
        require(!txid.trim().is_empty(), "transaction id cannot be empty")?;

        let params = TxidParams {
            txid,
            account_index: account,
        };
        let reply: TransferReply = self
            .client
            .call("get_transfer_by_txid", Some(params))
            .await?;
        Ok(reply.transfer)
    }

    pub async fn transfers(&self, filter: &TransferFilter) -> Result<Transfers> {
        self.client.call("get_transfers", Some(filter)).await
    }

    /// Outputs received by the wallet. The server omits the list when there
    /// are none, which is reported as an empty vector.
    pub async fn incoming_transfers(
        &self,
        transfer_type: TransferType,
        account: Option<u32>,
    ) -> Result<Vec<IncomingTransfer>> {
        let params = IncomingParams {
            transfer_type,
            account_index: account,
        };
        let reply: IncomingReply = self
            .client
            .call("incoming_transfers", Some(params))
            .await?;
        Ok(reply.transfers)
    }
}

#[derive(Debug, Serialize)]
struct PaymentsParams<'a> {
    payment_id: &'a str,
}

#[derive(Debug, Serialize)]
struct BulkPaymentsParams<'a> {
    payment_ids: &'a [String],
    min_block_height: u64,
}

#[derive(Debug, Serialize)]
struct TxidParams<'a> {
    txid: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    account_index: Option<u32>,
}

#[derive(Debug, Serialize)]
struct IncomingParams {
    transfer_type: TransferType,
    #[serde(skip_serializing_if = "Option::is_none")]
    account_index: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct TransferReply {
    transfer: Transfer,
}

#[derive(Debug, Deserialize)]
struct IncomingReply {
    #[serde(default)]
    transfers: Vec<IncomingTransfer>,
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
    use monerowallet_common::models::transfer::TransferKind;
    use serde_json::json;

    fn payment_json() -> serde_json::Value {
        json!({
            "unlock_time": 0,
            "amount": 1000000000,
            "tx_hash": "db3870905ce3c8ca349e224688c344371addca7be4eb36d5dbc61600c8f75726",
            "block_height": 1157951,
            "payment_id": "fdfcfd993482b58b"
        })
    }

    #[tokio::test]
    async fn payments_empty_reply_is_empty_list() {
        let w = scripted_wallet([json!({})]);
        assert!(w.payments("fdfcfd993482b58b").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn payments_returns_entries() {
        let w = scripted_wallet([json!({"payments": [payment_json()]})]);
        let payments = w.payments("fdfcfd993482b58b").await.unwrap();

        assert_eq!(payments[0].amount, 1_000_000_000);
        assert_eq!(
            w.client().transport().sent()[0]["params"],
            json!({"payment_id": "fdfcfd993482b58b"})
        );
    }

    #[tokio::test]
    async fn bulk_payments_sends_ids_and_height() {
        let w = scripted_wallet([json!({"payments": [payment_json()]})]);
        let ids = vec!["fdfcfd993482b58b".to_string()];

        let payments = w.bulk_payments(&ids, 1157950).await.unwrap();

        assert_eq!(payments.len(), 1);
        assert_eq!(
            w.client().transport().sent()[0]["params"],
            json!({"payment_ids": ["fdfcfd993482b58b"], "min_block_height": 1157950})
        );
    }

    #[tokio::test]
    async fn bulk_payments_requires_ids() {
        let w = scripted_wallet(Vec::new());
        assert!(matches!(
            w.bulk_payments(&[], 0).await,
            Err(WalletError::InvalidArgument(_))
        ));
    }

    #[tokio::test]
    async fn transfer_by_txid_unwraps_transfer() {
        let w = scripted_wallet([json!({"transfer": {
            "txid": "c36258a276018c3a4bc1f195a7fb530f50cd63a4fa765fb7c6f7f49fc051762a",
            "amount": 300000000000u64,
            "fee": 21650200000u64,
            "height": 153624,
            "type": "in",
            "confirmations": 3
        }})]);

        let transfer = w.transfer_by_txid("c36258a2", Some(0)).await.unwrap();

        assert_eq!(transfer.kind, TransferKind::In);
        assert_eq!(transfer.confirmations, 3);
        assert_eq!(
            w.client().transport().sent()[0]["params"],
            json!({"txid": "c36258a2", "account_index": 0})
        );
    }

    #[tokio::test]
    async fn transfers_passes_filter_through() {
        let w = scripted_wallet([json!({"out": [{"txid": "aa", "type": "out", "amount": 1}]})]);
        let filter = TransferFilter {
            out: Some(true),
            ..TransferFilter::default()
        };

        let transfers = w.transfers(&filter).await.unwrap();

        assert_eq!(transfers.out.len(), 1);
        assert!(transfers.incoming.is_empty());
        assert_eq!(
            w.client().transport().sent()[0]["params"],
            json!({"out": true})
        );
    }

    #[tokio::test]
    async fn incoming_transfers_missing_list_is_empty() {
        let w = scripted_wallet([json!({})]);
        let transfers = w
            .incoming_transfers(TransferType::Available, None)
            .await
            .unwrap();

        assert!(transfers.is_empty());
        assert_eq!(
            w.client().transport().sent()[0]["params"],
            json!({"transfer_type": "available"})
        );
    }

    #[tokio::test]
    async fn incoming_transfers_parses_outputs() {
        let w = scripted_wallet([json!({"transfers": [{
            "amount": 30000,
            "global_index": 4593,
            "spent": false,
            "tx_hash": "0a4562f0bfc4c5e7123e0ff212b1ca810c76a95fa45b18a7d7c4f123456caa12",
            "tx_size": 606
        }]})]);

        let transfers = w.incoming_transfers(TransferType::All, None).await.unwrap();
        assert_eq!(transfers[0].global_index, 4593);
        assert!(!transfers[0].spent);
    }
}
