//! Test helpers: a scripted in-memory lookup and an axum stub of the verse
//! service.
//!
//! Enabled for this crate's own tests and, through the `test-helpers`
//! feature, for downstream crates.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{header, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Router;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use verse_core::{Commentary, VerseId, VerseQuery, VerseRecord};

use crate::{LookupError, VerseLookup};

/// Build a record for `chapter`/`verse` with the given commentaries
pub fn sample_record(chapter: u32, verse: u32, commentaries: Vec<Commentary>) -> VerseRecord {
    VerseRecord {
        id: VerseId::Text(format!("BG{}.{}", chapter, verse)),
        chapter,
        verse,
        slok: format!("slok {}.{}", chapter, verse),
        transliteration: format!("transliteration {}.{}", chapter, verse),
        commentaries,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// FakeLookup
// ─────────────────────────────────────────────────────────────────────────────

/// In-memory [`VerseLookup`] answering from a script.
///
/// Unscripted queries fail with [`LookupError::NotFound`]. Every query is
/// recorded so tests can assert on what was requested.
#[derive(Debug, Clone, Default)]
pub struct FakeLookup {
    responses: Arc<Mutex<HashMap<VerseQuery, Result<VerseRecord, LookupError>>>>,
    requests: Arc<Mutex<Vec<VerseQuery>>>,
}

impl FakeLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_verse(self, record: VerseRecord) -> Self {
        let query = VerseQuery::new(record.chapter.to_string(), record.verse.to_string());
        self.responses
            .lock()
            .unwrap()
            .insert(query, Ok(record));
        self
    }

    pub fn with_error(self, query: VerseQuery, error: LookupError) -> Self {
        self.responses.lock().unwrap().insert(query, Err(error));
        self
    }

    pub fn requests(&self) -> Vec<VerseQuery> {
        self.requests.lock().unwrap().clone()
    }
}

impl VerseLookup for FakeLookup {
    async fn fetch_verse(&self, query: &VerseQuery) -> Result<VerseRecord, LookupError> {
        self.requests.lock().unwrap().push(query.clone());
        self.responses
            .lock()
            .unwrap()
            .get(query)
            .cloned()
            .unwrap_or(Err(LookupError::NotFound))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// StubServer
// ─────────────────────────────────────────────────────────────────────────────

/// Canned responses keyed by request path, served by an axum fallback on
/// `127.0.0.1:0`. Unknown paths get `404` with an empty body.
#[derive(Debug, Default)]
pub struct StubServer {
    routes: HashMap<String, (StatusCode, String)>,
}

#[derive(Clone)]
struct StubState {
    routes: Arc<HashMap<String, (StatusCode, String)>>,
    requests: Arc<Mutex<Vec<String>>>,
}

impl StubServer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `path` with `status` and a JSON `body`
    pub fn with_route(mut self, path: &str, status: u16, body: impl Into<String>) -> Self {
        let status = StatusCode::from_u16(status).unwrap();
        self.routes.insert(path.to_string(), (status, body.into()));
        self
    }

    /// Bind and start serving in the background
    pub async fn start(self) -> std::io::Result<RunningStub> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let requests = Arc::new(Mutex::new(Vec::new()));

        let router = Router::new().fallback(canned_response).with_state(StubState {
            routes: Arc::new(self.routes),
            requests: requests.clone(),
        });

        let task = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, router).await {
                tracing::debug!("stub server stopped: {}", e);
            }
        });

        Ok(RunningStub {
            addr,
            requests,
            task,
        })
    }
}

async fn canned_response(State(stub): State<StubState>, uri: Uri) -> Response {
    let path = uri.path().to_string();
    stub.requests.lock().unwrap().push(path.clone());

    let (status, body) = stub
        .routes
        .get(&path)
        .cloned()
        .unwrap_or((StatusCode::NOT_FOUND, String::new()));

    (status, [(header::CONTENT_TYPE, "application/json")], body).into_response()
}

/// Handle to a started [`StubServer`]; stops serving on drop
#[derive(Debug)]
pub struct RunningStub {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<String>>>,
    task: JoinHandle<()>,
}

impl RunningStub {
    /// Base URL with the same `/api` prefix the real service uses
    pub fn base_url(&self) -> String {
        format!("http://{}/api", self.addr)
    }

    /// Request paths received so far, in arrival order
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

impl Drop for RunningStub {
    fn drop(&mut self) {
        self.task.abort();
    }
}
