//! In-process mock backend for tests.
//!
//! [`MockApi`] runs a `tiny_http` server on a random local port, answers
//! each request from the first live route whose method and path match, and
//! records every request it saw. A route marked [`MockRoute::once`] is
//! retired after its first answer.

use std::io::Read;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::Duration;

use crate::ApiClient;

/// A canned response for `METHOD /path` (query string ignored).
#[derive(Debug, Clone)]
pub struct MockRoute {
    method: String,
    path: String,
    status: u16,
    body: String,
    once: bool,
}

impl MockRoute {
    #[must_use]
    pub fn new(method: &str, path: &str) -> Self {
        Self {
            method: method.to_ascii_uppercase(),
            path: path.to_string(),
            status: 200,
            body: String::new(),
            once: false,
        }
    }

    /// Answer only the first matching request.
    #[must_use]
    pub const fn once(mut self) -> Self {
        self.once = true;
        self
    }

    #[must_use]
    pub const fn status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    #[must_use]
    pub fn json(mut self, body: &serde_json::Value) -> Self {
        self.body = body.to_string();
        self
    }

    #[must_use]
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }
}

/// One request as the mock server received it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub body: String,
    pub authorization: Option<String>,
}

impl RecordedRequest {
    /// Body parsed as JSON, `Null` when empty or invalid.
    #[must_use]
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).unwrap_or(serde_json::Value::Null)
    }
}

pub struct MockApi {
    server: Arc<tiny_http::Server>,
    base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    worker: Option<JoinHandle<()>>,
}

impl MockApi {
    /// Start serving `routes`. Unmatched requests get a 404 JSON body.
    ///
    /// # Panics
    ///
    /// Panics if no local port can be bound.
    #[must_use]
    pub fn start(routes: Vec<MockRoute>) -> Self {
        let server = Arc::new(tiny_http::Server::http("127.0.0.1:0").expect("bind mock api"));
        let port = server
            .server_addr()
            .to_ip()
            .expect("mock api listens on an ip address")
            .port();
        let requests = Arc::new(Mutex::new(Vec::new()));

        let worker = {
            let server = Arc::clone(&server);
            let requests = Arc::clone(&requests);
            let mut routes: Vec<(MockRoute, bool)> = routes.into_iter().map(|r| (r, false)).collect();
            std::thread::spawn(move || {
                for mut request in server.incoming_requests() {
                    let url = request.url().to_string();
                    let (path, query) = match url.split_once('?') {
                        Some((p, q)) => (p.to_string(), Some(q.to_string())),
                        None => (url, None),
                    };
                    let method = request.method().to_string().to_ascii_uppercase();
                    let authorization = request
                        .headers()
                        .iter()
                        .find(|h| h.field.equiv("Authorization"))
                        .map(|h| h.value.as_str().to_string());
                    let mut body = String::new();
                    let _ = request.as_reader().read_to_string(&mut body);

                    let route = routes.iter_mut().find(|(r, used)| {
                        r.method == method && r.path == path && !(r.once && *used)
                    });
                    let (status, payload) = match route {
                        Some((r, used)) => {
                            *used = true;
                            (r.status, r.body.clone())
                        }
                        None => (404, r#"{"message":"no mock route"}"#.to_string()),
                    };

                    if let Ok(mut log) = requests.lock() {
                        log.push(RecordedRequest {
                            method,
                            path,
                            query,
                            body,
                            authorization,
                        });
                    }

                    let header = tiny_http::Header::from_bytes("Content-Type", "application/json")
                        .expect("static header is valid");
                    let response = tiny_http::Response::from_string(payload)
                        .with_status_code(status)
                        .with_header(header);
                    let _ = request.respond(response);
                }
            })
        };

        Self {
            server,
            base_url: format!("http://127.0.0.1:{port}"),
            requests,
            worker: Some(worker),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Client pointed at this server with a test token.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client cannot be built.
    #[must_use]
    pub fn client(&self) -> ApiClient {
        ApiClient::new(&self.base_url, Duration::from_secs(5))
            .expect("client builds")
            .with_token("test-token")
    }

    /// Every request received so far, in arrival order.
    #[must_use]
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }

    /// Number of requests received for `METHOD /path`.
    #[must_use]
    pub fn count(&self, method: &str, path: &str) -> usize {
        self.requests()
            .iter()
            .filter(|r| r.method.eq_ignore_ascii_case(method) && r.path == path)
            .count()
    }
}

impl Drop for MockApi {
    fn drop(&mut self) {
        self.server.unblock();
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}
