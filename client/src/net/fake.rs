//! Scripted in-memory transport for unit tests.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};

use super::session::{ApiRequest, ApiResponse, Method, SessionClient, Transport};

pub(crate) const FAKE_BASE_URL: &str = "http://portal.test";

type Reply = Result<ApiResponse, String>;

/// Replies are scripted per `(method, path)`. Queued replies are consumed in
/// order; the last one repeats. Unscripted routes answer 404.
#[derive(Default)]
pub(crate) struct FakeTransport {
    replies: RefCell<HashMap<(Method, String), VecDeque<Reply>>>,
    calls: RefCell<Vec<ApiRequest>>,
}

impl FakeTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn respond(self, method: Method, path: &str, status: u16, body: &str) -> Self {
        self.push(method, path, Ok(ApiResponse { status, body: body.to_owned() }));
        self
    }

    pub(crate) fn fail(self, method: Method, path: &str, text: &str) -> Self {
        self.push(method, path, Err(text.to_owned()));
        self
    }

    pub(crate) fn calls(&self) -> Vec<ApiRequest> {
        self.calls.borrow().clone()
    }

    pub(crate) fn called(&self, method: Method, path: &str) -> bool {
        let url = format!("{FAKE_BASE_URL}{path}");
        self.calls.borrow().iter().any(|c| c.method == method && c.url == url)
    }

    fn push(&self, method: Method, path: &str, reply: Reply) {
        self.replies
            .borrow_mut()
            .entry((method, path.to_owned()))
            .or_default()
            .push_back(reply);
    }
}

impl Transport for FakeTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, String> {
        self.calls.borrow_mut().push(request.clone());
        let path = request.url.strip_prefix(FAKE_BASE_URL).unwrap_or(&request.url).to_owned();
        let mut replies = self.replies.borrow_mut();
        let Some(queue) = replies.get_mut(&(request.method, path)) else {
            return Ok(ApiResponse { status: 404, body: r#"{"message":"not found"}"#.to_owned() });
        };
        if queue.len() > 1 {
            return queue.pop_front().unwrap_or_else(|| Err("empty".to_owned()));
        }
        queue.front().cloned().unwrap_or_else(|| Err("empty".to_owned()))
    }
}

pub(crate) fn fake_client(transport: FakeTransport) -> SessionClient<FakeTransport> {
    SessionClient::new(FAKE_BASE_URL, transport)
}
