#![allow(dead_code)]

use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::{HeaderMap, Method, StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};
use shortlink_console::domain::gateways::SessionStore;
use shortlink_console::infrastructure::http::HttpApiClient;
use std::sync::{Arc, Mutex};
use url::Url;

pub const EMAIL: &str = "user@example.com";
pub const PASSWORD: &str = "secret1";
pub const TOKEN: &str = "tok-123";
pub const TAKEN_EMAIL: &str = "taken@example.com";

/// One request as seen by the fake service.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub authorization: Option<String>,
    pub body: Option<Value>,
}

#[derive(Default)]
struct BackendState {
    records: Mutex<Vec<Value>>,
    requests: Mutex<Vec<RecordedRequest>>,
    generated: Mutex<u32>,
}

/// In-process stand-in for the shortener service, bound to a random port.
pub struct TestBackend {
    pub base_url: Url,
    state: Arc<BackendState>,
}

impl TestBackend {
    pub async fn spawn() -> Self {
        let state = Arc::new(BackendState::default());
        let app = Router::new().fallback(handle).with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: Url::parse(&format!("http://{}", addr)).unwrap(),
            state,
        }
    }

    pub fn client(&self, session: Arc<dyn SessionStore>) -> HttpApiClient {
        HttpApiClient::new(self.base_url.clone(), session).unwrap()
    }

    /// Adds a record owned by the test user.
    pub fn seed(&self, short_code: &str, original_url: &str, title: Option<&str>) {
        self.state.records.lock().unwrap().push(record_json(
            short_code,
            original_url,
            title.map(|t| json!(t)).unwrap_or(Value::Null),
            Value::Null,
        ));
    }

    pub fn seed_with_expiry(&self, short_code: &str, original_url: &str, expires_at: &str) {
        self.state.records.lock().unwrap().push(record_json(
            short_code,
            original_url,
            Value::Null,
            json!(expires_at),
        ));
    }

    pub fn stored(&self, short_code: &str) -> Option<Value> {
        self.state
            .records
            .lock()
            .unwrap()
            .iter()
            .find(|r| r["short_code"] == short_code)
            .cloned()
    }

    pub fn stored_count(&self) -> usize {
        self.state.records.lock().unwrap().len()
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> RecordedRequest {
        self.requests().last().cloned().unwrap()
    }

    /// Requests matching `method` and `path`.
    pub fn requests_to(&self, method: &str, path: &str) -> Vec<RecordedRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.method == method && r.path == path)
            .collect()
    }
}

fn record_json(short_code: &str, original_url: &str, title: Value, expires_at: Value) -> Value {
    json!({
        "short_code": short_code,
        "original_url": original_url,
        "title": title,
        "created_at": "2030-01-01T00:00:00Z",
        "expires_at": expires_at,
        "click_count": 0,
    })
}

async fn handle(
    State(state): State<Arc<BackendState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let authorization = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let body: Option<Value> = serde_json::from_slice(&body).ok();

    state.requests.lock().unwrap().push(RecordedRequest {
        method: method.to_string(),
        path: uri.path().to_string(),
        authorization: authorization.clone(),
        body: body.clone(),
    });

    let segments: Vec<&str> = uri.path().trim_start_matches('/').split('/').collect();
    let expected = format!("Bearer {}", TOKEN);
    let authorized = authorization.as_deref() == Some(expected.as_str());
    let body = body.unwrap_or(Value::Null);

    match (method.as_str(), segments.as_slice()) {
        ("POST", ["api", "login"]) => login(&body),
        ("POST", ["api", "register"]) => register(&body),
        (_, ["api", ..]) if !authorized => {
            (StatusCode::UNAUTHORIZED, "Unauthorized\n").into_response()
        }
        ("GET", ["api", "urls"]) => list(&state),
        ("POST", ["api", "add-url"]) => add(&state, &body),
        ("PUT", ["api", "url", code]) => update(&state, code, &body),
        ("DELETE", ["api", "url", code]) => delete(&state, code),
        ("GET", ["api", "stats", code]) => stats(&state, code),
        _ => (StatusCode::NOT_FOUND, "404 page not found\n").into_response(),
    }
}

fn login(body: &Value) -> Response {
    if body["email"] == EMAIL && body["password"] == PASSWORD {
        Json(json!({
            "token": TOKEN,
            "message": "Login successful",
            "user": { "id": "u-1", "email": EMAIL, "name": "Test User" },
        }))
        .into_response()
    } else {
        (StatusCode::UNAUTHORIZED, "Invalid credentials\n").into_response()
    }
}

fn register(body: &Value) -> Response {
    if body["email"] == TAKEN_EMAIL {
        return (StatusCode::CONFLICT, "User already exists\n").into_response();
    }
    (
        StatusCode::CREATED,
        Json(json!({ "message": "User registered successfully" })),
    )
        .into_response()
}

fn list(state: &BackendState) -> Response {
    let records = state.records.lock().unwrap();
    if records.is_empty() {
        return ([(header::CONTENT_TYPE, "application/json")], "null").into_response();
    }
    Json(Value::Array(records.clone())).into_response()
}

fn add(state: &BackendState, body: &Value) -> Response {
    let Some(original_url) = body["original_url"].as_str() else {
        return (StatusCode::BAD_REQUEST, "Invalid request body\n").into_response();
    };

    let mut records = state.records.lock().unwrap();
    let short_code = match body["custom_alias"].as_str() {
        Some(alias) => {
            if records.iter().any(|r| r["short_code"] == alias) {
                return (StatusCode::CONFLICT, "Custom alias already taken\n").into_response();
            }
            alias.to_string()
        }
        None => {
            let mut generated = state.generated.lock().unwrap();
            *generated += 1;
            format!("gen{:03}", *generated)
        }
    };

    let record = record_json(
        &short_code,
        original_url,
        body.get("title").cloned().unwrap_or(Value::Null),
        body.get("expires_at").cloned().unwrap_or(Value::Null),
    );
    records.push(record.clone());

    (
        StatusCode::CREATED,
        Json(json!({
            "short_code": short_code,
            "short_url": format!("http://sho.rt/{}", short_code),
            "original_url": original_url,
            "title": record["title"],
            "created_at": record["created_at"],
            "expires_at": record["expires_at"],
        })),
    )
        .into_response()
}

fn update(state: &BackendState, code: &str, body: &Value) -> Response {
    let mut records = state.records.lock().unwrap();
    let Some(record) = records.iter_mut().find(|r| r["short_code"] == code) else {
        return (StatusCode::NOT_FOUND, "URL not found or not owned by you\n").into_response();
    };

    for field in ["original_url", "title", "expires_at"] {
        if let Some(value) = body.get(field) {
            record[field] = value.clone();
        }
    }

    Json(json!({ "message": "URL updated successfully" })).into_response()
}

fn delete(state: &BackendState, code: &str) -> Response {
    let mut records = state.records.lock().unwrap();
    let before = records.len();
    records.retain(|r| r["short_code"] != code);
    if records.len() == before {
        return (StatusCode::NOT_FOUND, "URL not found or not owned by you\n").into_response();
    }
    Json(json!({ "message": "URL deleted successfully" })).into_response()
}

fn stats(state: &BackendState, code: &str) -> Response {
    let records = state.records.lock().unwrap();
    match records.iter().find(|r| r["short_code"] == code) {
        Some(record) => Json(json!({
            "short_code": record["short_code"],
            "original_url": record["original_url"],
            "title": record["title"],
            "click_count": 42,
            "created_at": record["created_at"],
            "expires_at": record["expires_at"],
        }))
        .into_response(),
        None => (StatusCode::NOT_FOUND, "URL not found or not owned by you\n").into_response(),
    }
}
