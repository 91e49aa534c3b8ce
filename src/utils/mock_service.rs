//! In-process stand-in for the prediction service, shared by the client and
//! submission tests.

use super::client::REQUEST_ID_HEADER;
use super::{PredictionClient, Settings};
use axum::extract::{Multipart, State};
use axum::http::HeaderMap;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
pub(crate) struct MockService {
    pub(crate) hits: Arc<AtomicUsize>,
    pub(crate) last_upload: Arc<Mutex<Option<(String, Option<String>, Vec<u8>)>>>,
    pub(crate) last_text: Arc<Mutex<Option<Value>>>,
    pub(crate) last_request_id: Arc<Mutex<Option<String>>>,
}

impl MockService {
    pub(crate) fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

pub(crate) fn blight_json() -> Value {
    json!({
        "predicted_class": "Blight",
        "confidence": 0.8734,
        "recommendation": "Apply fungicide"
    })
}

async fn image_handler(
    State(mock): State<MockService>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Json<Value> {
    mock.hits.fetch_add(1, Ordering::SeqCst);
    *mock.last_request_id.lock().unwrap() = headers
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    while let Some(field) = multipart.next_field().await.unwrap() {
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field.file_name().map(str::to_string);
        let bytes = field.bytes().await.unwrap().to_vec();
        *mock.last_upload.lock().unwrap() = Some((name, file_name, bytes));
    }

    let mut body = blight_json();
    body["filename"] = json!("leaf.png");
    Json(body)
}

async fn text_handler(State(mock): State<MockService>, Json(body): Json<Value>) -> Json<Value> {
    mock.hits.fetch_add(1, Ordering::SeqCst);
    *mock.last_text.lock().unwrap() = Some(body);
    Json(blight_json())
}

pub(crate) async fn spawn_service(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

pub(crate) async fn healthy_service() -> (MockService, PredictionClient) {
    let mock = MockService::default();
    let router = Router::new()
        .route("/", get(|| async { Json(json!({ "message": "Welcome" })) }))
        .route("/image-prediction/", post(image_handler))
        .route("/text-prediction/", post(text_handler))
        .with_state(mock.clone());
    let base = spawn_service(router).await;
    (mock, client_for(&base, 60))
}

pub(crate) fn client_for(base: &str, timeout_secs: u64) -> PredictionClient {
    let settings = Settings {
        api_base: base.to_string(),
        request_timeout_secs: timeout_secs,
        ..Settings::default()
    };
    PredictionClient::new(&settings).unwrap()
}
