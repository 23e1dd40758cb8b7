//! Mock 1inch aggregator served over HTTP
//!
//! Answers `GET /{chain_id}/swap` with a configurable status and body and
//! records every request it receives.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Path, RawQuery, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use tokio::task::JoinHandle;

/// A request seen by the mock server
#[derive(Debug, Clone)]
pub struct RecordedRequest {
	pub chain_id: u64,
	/// Raw query string, in the order the client sent it
	pub raw_query: String,
	pub authorization: Option<String>,
}

#[allow(dead_code)]
impl RecordedRequest {
	/// Query parameters in order, percent-decoded
	pub fn params(&self) -> Vec<(String, String)> {
		url::form_urlencoded::parse(self.raw_query.as_bytes())
			.into_owned()
			.collect()
	}

	pub fn param(&self, name: &str) -> Option<String> {
		self.params()
			.into_iter()
			.find(|(key, _)| key == name)
			.map(|(_, value)| value)
	}

	pub fn param_map(&self) -> HashMap<String, String> {
		self.params().into_iter().collect()
	}
}

#[derive(Debug)]
struct ServerState {
	status: StatusCode,
	body: String,
	hits: AtomicUsize,
	requests: Mutex<Vec<RecordedRequest>>,
}

pub struct MockOneInchServer {
	pub base_url: String,
	state: Arc<ServerState>,
	handle: JoinHandle<()>,
}

#[allow(dead_code)]
impl MockOneInchServer {
	/// Serve `body` with `200 OK`
	pub async fn with_body(body: impl Into<String>) -> Self {
		Self::spawn(StatusCode::OK, body.into()).await
	}

	/// Serve `body` with a given status code
	pub async fn spawn(status: StatusCode, body: String) -> Self {
		let state = Arc::new(ServerState {
			status,
			body,
			hits: AtomicUsize::new(0),
			requests: Mutex::new(Vec::new()),
		});

		let app = Router::new()
			.route("/{chain_id}/swap", get(swap_handler))
			.with_state(state.clone());

		let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
			.await
			.expect("bind test port");
		let addr = listener.local_addr().unwrap();
		let base_url = format!("http://{}:{}/", addr.ip(), addr.port());

		let handle = tokio::spawn(async move {
			let _ = axum::serve(listener, app).await;
		});

		Self {
			base_url,
			state,
			handle,
		}
	}

	pub fn hits(&self) -> usize {
		self.state.hits.load(Ordering::SeqCst)
	}

	pub fn requests(&self) -> Vec<RecordedRequest> {
		self.state.requests.lock().unwrap().clone()
	}

	pub fn last_request(&self) -> RecordedRequest {
		self.requests()
			.pop()
			.expect("mock 1inch server received no request")
	}

	pub fn abort(self) {
		self.handle.abort();
	}
}

async fn swap_handler(
	State(state): State<Arc<ServerState>>,
	Path(chain_id): Path<u64>,
	RawQuery(raw_query): RawQuery,
	headers: HeaderMap,
) -> impl IntoResponse {
	state.hits.fetch_add(1, Ordering::SeqCst);
	state.requests.lock().unwrap().push(RecordedRequest {
		chain_id,
		raw_query: raw_query.unwrap_or_default(),
		authorization: headers
			.get("authorization")
			.and_then(|value| value.to_str().ok())
			.map(str::to_string),
	});

	(
		state.status,
		[("content-type", "application/json")],
		state.body.clone(),
	)
}
