//! In-process fake of the portfolio REST API.
//!
//! Serves every collection from memory with axum on an ephemeral port. Tests
//! seed collections, switch on failures for specific records or lists, and
//! inspect the requests the client actually sent.
#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard};

use app::api::ApiClient;
use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

pub const COLLECTIONS: [&str; 8] = [
    "/projects/",
    "/experiences/",
    "/skills/categories",
    "/skills/",
    "/about/content",
    "/about/stats",
    "/social-links/",
    "/contacts/",
];

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

#[derive(Default)]
struct ApiState {
    collections: HashMap<&'static str, Vec<Value>>,
    next_id: i64,
    failing_ids: HashSet<i64>,
    failing_lists: HashSet<String>,
    overrides: HashMap<String, (StatusCode, String)>,
    resume: Option<Value>,
    requests: Vec<RecordedRequest>,
}

enum Target {
    Collection(&'static str),
    Member(&'static str, i64),
}

fn resolve(path: &str) -> Option<Target> {
    if let Some(collection) = COLLECTIONS.iter().find(|collection| **collection == path) {
        return Some(Target::Collection(*collection));
    }
    COLLECTIONS.iter().find_map(|collection| {
        let prefix = format!("{}/", collection.trim_end_matches('/'));
        let id = path.strip_prefix(&prefix)?.parse().ok()?;
        Some(Target::Member(*collection, id))
    })
}

fn order_key(record: &Value) -> (i64, i64) {
    (
        record["order_index"].as_i64().unwrap_or(i64::MAX),
        record["id"].as_i64().unwrap_or_default(),
    )
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Json(json!({ "detail": "Not found" }))).into_response()
}

async fn handle(
    State(state): State<Arc<Mutex<ApiState>>>,
    method: Method,
    uri: Uri,
    body: Bytes,
) -> Response {
    let path = uri.path().to_owned();
    let body: Option<Value> = serde_json::from_slice(&body).ok();

    let mut state = state.lock().unwrap();
    state.requests.push(RecordedRequest {
        method: method.clone(),
        path: path.clone(),
        body: body.clone(),
    });

    if let Some((status, raw)) = state.overrides.get(&path) {
        return (*status, raw.clone()).into_response();
    }

    if path == "/resume/latest" && method == Method::GET {
        return Json(state.resume.clone().unwrap_or(Value::Null)).into_response();
    }

    match resolve(&path) {
        Some(Target::Collection(collection)) if method == Method::GET => {
            if state.failing_lists.contains(collection) {
                return (StatusCode::INTERNAL_SERVER_ERROR, "list unavailable").into_response();
            }
            let mut records = state.collections.get(collection).cloned().unwrap_or_default();
            records.sort_by_key(order_key);
            Json(records).into_response()
        }
        Some(Target::Collection(collection)) if method == Method::POST => {
            let Some(Value::Object(fields)) = body else {
                return (StatusCode::UNPROCESSABLE_ENTITY, Json(json!({ "detail": "expected an object" })))
                    .into_response();
            };
            state.next_id += 1;
            let mut record = Value::Object(fields);
            record["id"] = json!(state.next_id);
            record["created_at"] = json!("2024-05-01T12:00:00");
            if collection == "/contacts/" {
                record["status"] = json!("new");
            }
            state.collections.entry(collection).or_default().push(record.clone());
            (StatusCode::CREATED, Json(record)).into_response()
        }
        Some(Target::Member(collection, id)) if method == Method::PUT => {
            if state.failing_ids.contains(&id) {
                return (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "detail": "write rejected" })))
                    .into_response();
            }
            let records = state.collections.entry(collection).or_default();
            let Some(record) = records.iter_mut().find(|record| record["id"] == json!(id)) else {
                return not_found();
            };
            if let (Value::Object(target), Some(Value::Object(changes))) = (record, body) {
                target.extend(changes);
                target.insert("updated_at".to_owned(), json!("2024-05-02T08:30:00"));
                return Json(Value::Object(target.clone())).into_response();
            }
            (StatusCode::UNPROCESSABLE_ENTITY, Json(json!({ "detail": "expected an object" }))).into_response()
        }
        Some(Target::Member(collection, id)) if method == Method::DELETE => {
            if state.failing_ids.contains(&id) {
                return (StatusCode::INTERNAL_SERVER_ERROR, "delete rejected").into_response();
            }
            let records = state.collections.entry(collection).or_default();
            let before = records.len();
            records.retain(|record| record["id"] != json!(id));
            if records.len() == before {
                return not_found();
            }
            StatusCode::NO_CONTENT.into_response()
        }
        Some(_) => StatusCode::METHOD_NOT_ALLOWED.into_response(),
        None => not_found(),
    }
}

pub struct FakeApi {
    base_url: String,
    state: Arc<Mutex<ApiState>>,
    server: JoinHandle<()>,
}

impl FakeApi {
    pub async fn start() -> Self {
        let state = Arc::new(Mutex::new(ApiState {
            next_id: 1000,
            ..ApiState::default()
        }));
        let router = Router::new().fallback(handle).with_state(Arc::clone(&state));

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let server = tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}"),
            state,
            server,
        }
    }

    fn state(&self) -> MutexGuard<'_, ApiState> {
        self.state.lock().unwrap()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn client(&self) -> ApiClient {
        ApiClient::new(&self.base_url)
    }

    /// Replaces the contents of `collection` with `records`.
    pub fn seed<T: Serialize>(&self, collection: &'static str, records: &[T]) {
        let records = records.iter().map(|record| serde_json::to_value(record).unwrap()).collect();
        self.state().collections.insert(collection, records);
    }

    /// Stored records of `collection`, in server order.
    pub fn records(&self, collection: &'static str) -> Vec<Value> {
        let mut records = self.state().collections.get(collection).cloned().unwrap_or_default();
        records.sort_by_key(order_key);
        records
    }

    /// Writes and deletes addressed to `id` answer 500 until cleared.
    pub fn fail_writes_to(&self, id: i64) {
        self.state().failing_ids.insert(id);
    }

    /// Listing `collection` answers 500 until cleared.
    pub fn fail_lists_of(&self, collection: &str) {
        self.state().failing_lists.insert(collection.to_owned());
    }

    pub fn clear_failures(&self) {
        let mut state = self.state();
        state.failing_ids.clear();
        state.failing_lists.clear();
    }

    /// Answers every request to `path` with a fixed status and raw body.
    pub fn respond_raw(&self, path: &str, status: StatusCode, body: &str) {
        self.state().overrides.insert(path.to_owned(), (status, body.to_owned()));
    }

    pub fn set_resume(&self, resume: Option<Value>) {
        self.state().resume = resume;
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state().requests.clone()
    }

    pub fn clear_requests(&self) {
        self.state().requests.clear();
    }

    /// Recorded `PUT` requests, as `(path, body)` pairs.
    pub fn writes(&self) -> Vec<(String, Value)> {
        self.requests()
            .into_iter()
            .filter(|request| request.method == Method::PUT)
            .map(|request| (request.path, request.body.unwrap_or(Value::Null)))
            .collect()
    }
}

impl Drop for FakeApi {
    fn drop(&mut self) {
        self.server.abort();
    }
}

/// A project record as the API stores it.
pub fn project(id: i64, title: &str, order_index: i32) -> Value {
    json!({
        "id": id,
        "title": title,
        "description": format!("{title} description"),
        "image": null,
        "tags": ["rust"],
        "live_url": null,
        "github_url": null,
        "featured": "true",
        "order_index": order_index,
        "created_at": "2024-01-01T00:00:00",
        "updated_at": null,
    })
}
