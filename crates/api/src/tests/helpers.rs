// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use awards_domain::{FieldValue, FormData, Registration, fields};
use axum::Json;
use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::{AUTHORIZATION, HeaderName, LOCATION};
use axum::http::{HeaderMap, StatusCode, Uri};
use serde_json::{Value, json};

use crate::{ClientConfig, RetryPolicy, SubmissionClient};

/// A request as the mock backend saw it.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub path: String,
    pub authorization: Option<String>,
    pub body: Value,
}

#[derive(Clone)]
struct MockState {
    hits: Arc<AtomicUsize>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    slow_hits: usize,
    stall: Duration,
    status: StatusCode,
    body: Value,
}

/// An in-process backend on an ephemeral port.
///
/// The first `slow_hits` requests stall for longer than any test client
/// waits; every request is then answered with the configured status and body.
pub struct MockBackend {
    pub base_url: String,
    hits: Arc<AtomicUsize>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockBackend {
    pub async fn start(status: StatusCode, body: Value, slow_hits: usize) -> Self {
        let hits: Arc<AtomicUsize> = Arc::new(AtomicUsize::new(0));
        let requests: Arc<Mutex<Vec<RecordedRequest>>> = Arc::new(Mutex::new(Vec::new()));
        let state: MockState = MockState {
            hits: Arc::clone(&hits),
            requests: Arc::clone(&requests),
            slow_hits,
            stall: Duration::from_secs(5),
            status,
            body,
        };
        let app: Router = Router::new().fallback(handle).with_state(state);

        let listener: tokio::net::TcpListener =
            tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr: std::net::SocketAddr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}"),
            hits,
            requests,
        }
    }

    /// Redirects every request to `/loop`, which redirects to itself.
    pub async fn redirecting_forever() -> Self {
        let hits: Arc<AtomicUsize> = Arc::new(AtomicUsize::new(0));
        let requests: Arc<Mutex<Vec<RecordedRequest>>> = Arc::new(Mutex::new(Vec::new()));
        let state: MockState = MockState {
            hits: Arc::clone(&hits),
            requests: Arc::clone(&requests),
            slow_hits: 0,
            stall: Duration::ZERO,
            status: StatusCode::TEMPORARY_REDIRECT,
            body: Value::Null,
        };
        let app: Router = Router::new().fallback(redirect).with_state(state);

        let listener: tokio::net::TcpListener =
            tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr: std::net::SocketAddr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}"),
            hits,
            requests,
        }
    }

    /// Answers every request with `{"success": true, ...}`.
    pub async fn accepting() -> Self {
        Self::start(
            StatusCode::OK,
            json!({"success": true, "message": "Welcome aboard", "data": {"id": "usr_1"}}),
            0,
        )
        .await
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

async fn handle(
    State(state): State<MockState>,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> (StatusCode, Json<Value>) {
    let hit: usize = state.hits.fetch_add(1, Ordering::SeqCst);
    state.requests.lock().unwrap().push(RecordedRequest {
        path: uri.path().to_string(),
        authorization: headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .map(String::from),
        body: serde_json::from_slice(&body).unwrap_or(Value::Null),
    });
    if hit < state.slow_hits {
        tokio::time::sleep(state.stall).await;
    }
    (state.status, Json(state.body))
}

async fn redirect(State(state): State<MockState>, uri: Uri) -> (StatusCode, [(HeaderName, &'static str); 1]) {
    state.hits.fetch_add(1, Ordering::SeqCst);
    state.requests.lock().unwrap().push(RecordedRequest {
        path: uri.path().to_string(),
        authorization: None,
        body: Value::Null,
    });
    (state.status, [(LOCATION, "/loop")])
}

/// A base URL nothing listens on.
pub async fn create_unreachable_url() -> String {
    let listener: tokio::net::TcpListener =
        tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: std::net::SocketAddr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

/// Short timeout and near-zero backoff so retry tests run quickly.
pub fn create_fast_config(base_url: &str, max_attempts: u32) -> ClientConfig {
    ClientConfig::new(base_url)
        .with_timeout(Duration::from_millis(200))
        .with_retry(
            RetryPolicy::default()
                .with_max_attempts(max_attempts)
                .with_base_delay(Duration::from_millis(5)),
        )
}

pub fn create_client(base_url: &str, max_attempts: u32) -> SubmissionClient {
    SubmissionClient::new(create_fast_config(base_url, max_attempts)).unwrap()
}

/// Wizard answers for a school that wants to vote and judge.
pub fn create_school_judge_answers() -> FormData {
    let pairs: Vec<(&str, FieldValue)> = vec![
        (fields::ACCOUNT_TYPE, "school".into()),
        (fields::FIRST_NAME, "Ada".into()),
        (fields::LAST_NAME, "Obi".into()),
        (fields::EMAIL, "ada@lakeside.example".into()),
        (fields::COUNTRY, "Ghana".into()),
        (fields::ORGANIZATION_NAME, "Lakeside Academy".into()),
        (fields::ORGANIZATION_SIZE, "51-200".into()),
        (fields::INTENTS, vec!["vote_nominate", "judge"].into()),
        (
            fields::JUDGE_EXPERTISE,
            "Curriculum design for rural schools".into(),
        ),
        (fields::PASSWORD, "s3cure-enough".into()),
        (fields::CONFIRM_PASSWORD, "s3cure-enough".into()),
        (fields::AGREE_TERMS, true.into()),
    ];
    pairs.into_iter().collect()
}

pub fn create_judge_registration() -> Registration {
    Registration::from_form(&create_school_judge_answers()).unwrap()
}
