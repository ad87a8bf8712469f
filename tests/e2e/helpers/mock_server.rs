use axum::{
    extract::State,
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Response},
    Router,
};
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

/// What the mock joke service answers with
#[derive(Clone)]
struct CannedResponse {
    status: StatusCode,
    body: String,
    delay: Option<Duration>,
}

#[derive(Default)]
struct MockState {
    response: Mutex<Option<CannedResponse>>,
    requests: Mutex<Vec<String>>,
}

/// Stand-in for the remote joke service, listening on an OS-assigned port
pub struct MockJokeServer {
    pub base_url: String,
    state: Arc<MockState>,
}

impl MockJokeServer {
    pub async fn start() -> Self {
        let state = Arc::new(MockState::default());

        let app = Router::new()
            .fallback(serve_canned_response)
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind listener");
        let addr = listener.local_addr().expect("Failed to get local addr");

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}", addr),
            state,
        }
    }

    /// Answer every request with `body` and the given status
    pub fn respond_with(&self, status: StatusCode, body: impl Into<String>) {
        *self.state.response.lock() = Some(CannedResponse {
            status,
            body: body.into(),
            delay: None,
        });
    }

    pub fn respond_json(&self, body: serde_json::Value) {
        self.respond_with(StatusCode::OK, body.to_string());
    }

    /// Wait before answering, to exercise client timeouts
    pub fn delay_responses(&self, delay: Duration) {
        if let Some(response) = self.state.response.lock().as_mut() {
            response.delay = Some(delay);
        }
    }

    /// Paths requested so far, in order
    pub fn requested_paths(&self) -> Vec<String> {
        self.state.requests.lock().clone()
    }
}

async fn serve_canned_response(State(state): State<Arc<MockState>>, uri: Uri) -> Response {
    state.requests.lock().push(uri.path().to_string());

    let canned = state.response.lock().clone();
    let Some(canned) = canned else {
        return (StatusCode::NOT_FOUND, "no canned response").into_response();
    };

    if let Some(delay) = canned.delay {
        tokio::time::sleep(delay).await;
    }

    (
        canned.status,
        [(header::CONTENT_TYPE, "application/json")],
        canned.body,
    )
        .into_response()
}
