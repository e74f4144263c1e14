//! Stub of the countryinfo service used by the integration tests.
//!
//! Every request is recorded as its path plus query. Unless a reply was
//! registered for the exact path-and-query (or, failing that, the bare path)
//! the stub echoes the request target back as `{"path": ...}`.

#![allow(dead_code)]

use axum::{
    extract::State,
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Response},
    Router,
};
use countryinfo_client::{FormAdapter, HttpTransport, MemoryPage};
use reqwest::Url;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;

#[derive(Debug, Clone)]
pub struct Reply {
    status: u16,
    body: String,
    delay: Option<Duration>,
}

impl Reply {
    pub fn json(value: Value) -> Self {
        Self {
            status: 200,
            body: value.to_string(),
            delay: None,
        }
    }

    pub fn raw(body: &str) -> Self {
        Self {
            status: 200,
            body: body.to_string(),
            delay: None,
        }
    }

    pub fn status(status: u16) -> Self {
        Self {
            status,
            body: json!({ "error": "stubbed failure" }).to_string(),
            delay: None,
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

#[derive(Clone, Default)]
struct StubState {
    requests: Arc<Mutex<Vec<String>>>,
    replies: Arc<Mutex<HashMap<String, Reply>>>,
}

pub struct StubBackend {
    pub base_url: Url,
    state: StubState,
}

impl StubBackend {
    pub async fn start() -> Self {
        let state = StubState::default();
        let app = Router::new().fallback(answer).with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: Url::parse(&format!("http://{}", addr)).unwrap(),
            state,
        }
    }

    /// Registers `reply` for an exact path-and-query, or for a bare path.
    pub fn reply(&self, target: &str, reply: Reply) {
        self.state
            .replies
            .lock()
            .unwrap()
            .insert(target.to_string(), reply);
    }

    pub fn requests(&self) -> Vec<String> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn adapter(&self, page: Arc<MemoryPage>) -> Arc<FormAdapter<HttpTransport, MemoryPage>> {
        Arc::new(FormAdapter::new(
            HttpTransport::new(self.base_url.clone()),
            page,
        ))
    }
}

async fn answer(State(state): State<StubState>, uri: Uri) -> Response {
    let target = uri
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string());
    state.requests.lock().unwrap().push(target.clone());

    let reply = {
        let replies = state.replies.lock().unwrap();
        replies
            .get(&target)
            .or_else(|| replies.get(uri.path()))
            .cloned()
    }
    .unwrap_or_else(|| Reply::json(json!({ "path": target })));

    if let Some(delay) = reply.delay {
        tokio::time::sleep(delay).await;
    }

    (
        StatusCode::from_u16(reply.status).unwrap(),
        [(header::CONTENT_TYPE, "application/json")],
        reply.body,
    )
        .into_response()
}

/// Base URL of a port nothing listens on.
pub async fn unreachable_base_url() -> Url {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    Url::parse(&format!("http://{}", addr)).unwrap()
}
