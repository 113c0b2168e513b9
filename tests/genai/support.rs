use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};
use slow_listen::genai::GeminiClient;
use slow_listen::GenAiConfig;

pub const API_KEY: &str = "test-key";

/// A request the mock received.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub call: String,
    pub api_key: Option<String>,
    pub body: Value,
}

/// Scripted stand-in for the generateContent endpoint.
#[derive(Default)]
pub struct Mock {
    replies: Mutex<VecDeque<(StatusCode, Value)>>,
    requests: Mutex<Vec<Recorded>>,
}

impl Mock {
    pub fn reply(&self, status: StatusCode, body: Value) {
        self.replies.lock().unwrap().push_back((status, body));
    }

    pub fn reply_text(&self, text: &str) {
        self.reply(StatusCode::OK, text_response(text));
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }
}

pub fn text_response(text: &str) -> Value {
    json!({
        "candidates": [
            { "content": { "role": "model", "parts": [{ "text": text }] } }
        ]
    })
}

pub fn error_response(code: u16, message: &str, status: &str) -> Value {
    json!({ "error": { "code": code, "message": message, "status": status } })
}

async fn generate(
    State(mock): State<Arc<Mock>>,
    Path(call): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let api_key = headers
        .get("x-goog-api-key")
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    mock.requests.lock().unwrap().push(Recorded {
        call,
        api_key,
        body,
    });

    let (status, body) = mock
        .replies
        .lock()
        .unwrap()
        .pop_front()
        .unwrap_or((StatusCode::OK, json!({ "candidates": [] })));
    (status, Json(body))
}

/// Bind to port 0 and return a client pointed at the mock.
pub async fn start_mock() -> (Arc<Mock>, GeminiClient) {
    let mock = Arc::new(Mock::default());
    let app = Router::new()
        .route("/v1beta/models/:call", post(generate))
        .with_state(mock.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let config = GenAiConfig::default()
        .with_api_key(API_KEY)
        .with_base_url(format!("http://{addr}"));
    (mock, GeminiClient::new(config))
}
