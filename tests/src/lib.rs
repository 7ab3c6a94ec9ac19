// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

mod docs;
mod rpc;

pub mod utils {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use axum::Router;
    use axum::extract::State;
    use axum::http::{HeaderMap, StatusCode, Uri, header};
    use axum::response::IntoResponse;
    use monerowallet_common::config::{Config, Protocol};
    use serde_json::{Value, json};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Canned HTTP reply: status code and body.
    #[derive(Clone)]
    struct Reply {
        status: u16,
        body: String,
    }

    #[derive(Default)]
    struct Recorded {
        replies: Mutex<HashMap<String, Reply>>,
        requests: Mutex<Vec<Value>>,
        paths: Mutex<Vec<String>>,
        content_types: Mutex<Vec<String>>,
    }

    /// A stand-in for `monero-wallet-rpc` on a random local port.
    ///
    /// Answers every POST by its `method`, whatever the path. Methods nobody
    /// registered get the server's "Method not found" error. The listener
    /// stops on drop.
    pub struct MockWalletRpc {
        port: u16,
        state: Arc<Recorded>,
        handle: JoinHandle<()>,
    }

    impl MockWalletRpc {
        pub async fn start() -> Self {
            let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
            let port = listener.local_addr().unwrap().port();
            let state = Arc::new(Recorded::default());

            let app = Router::new()
                .fallback(handle_rpc)
                .with_state(state.clone());
            let handle = tokio::spawn(async move {
                let _ = axum::serve(listener, app).await;
            });

            Self {
                port,
                state,
                handle,
            }
        }

        /// Replies to `method` with `result` wrapped in a JSON-RPC envelope.
        pub fn respond(&self, method: &str, result: Value) -> &Self {
            let body = json!({"id": "0", "jsonrpc": "2.0", "result": result});
            self.reply(method, 200, body.to_string())
        }

        pub fn respond_error(&self, method: &str, code: i64, message: &str) -> &Self {
            let body = json!({
                "id": "0",
                "jsonrpc": "2.0",
                "error": {"code": code, "message": message}
            });
            self.reply(method, 200, body.to_string())
        }

        pub fn respond_status(&self, method: &str, status: u16, body: &str) -> &Self {
            self.reply(method, status, body.to_string())
        }

        /// Replies to `method` with `body` verbatim.
        pub fn respond_body(&self, method: &str, body: &str) -> &Self {
            self.reply(method, 200, body.to_string())
        }

        fn reply(&self, method: &str, status: u16, body: String) -> &Self {
            self.state
                .replies
                .lock()
                .unwrap()
                .insert(method.to_string(), Reply { status, body });
            self
        }

        /// Configuration pointing at this server.
        pub fn config(&self) -> Config {
            Config::for_server(Protocol::Http, "127.0.0.1", self.port, "/json_rpc").unwrap()
        }

        /// JSON bodies received so far, in arrival order.
        pub fn requests(&self) -> Vec<Value> {
            self.state.requests.lock().unwrap().clone()
        }

        pub fn paths(&self) -> Vec<String> {
            self.state.paths.lock().unwrap().clone()
        }

        /// `Content-Type` header of every request, empty when it was missing.
        pub fn content_types(&self) -> Vec<String> {
            self.state.content_types.lock().unwrap().clone()
        }
    }

    impl Drop for MockWalletRpc {
        fn drop(&mut self) {
            self.handle.abort();
        }
    }

    async fn handle_rpc(
        State(state): State<Arc<Recorded>>,
        uri: Uri,
        headers: HeaderMap,
        body: String,
    ) -> impl IntoResponse {
        let request: Value = serde_json::from_str(&body).unwrap_or(Value::Null);
        let method = request["method"].as_str().unwrap_or_default().to_string();
        let content_type = headers
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();

        state.paths.lock().unwrap().push(uri.path().to_string());
        state.content_types.lock().unwrap().push(content_type);
        state.requests.lock().unwrap().push(request);

        let reply = state.replies.lock().unwrap().get(&method).cloned();
        let reply = reply.unwrap_or_else(|| Reply {
            status: 200,
            body: json!({
                "id": "0",
                "jsonrpc": "2.0",
                "error": {"code": -32601, "message": "Method not found"}
            })
            .to_string(),
        });

        let status = StatusCode::from_u16(reply.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, [(header::CONTENT_TYPE, "application/json")], reply.body)
    }
}
