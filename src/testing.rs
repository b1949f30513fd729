//! In-process stand-in for the gateway, for tests.
//!
//! [`MockTransport`] implements [`HttpTransport`] without opening sockets. Queue
//! the responses you expect with [`MockTransport::add_response`]; each incoming
//! request is matched to the first unconsumed response with the same method.
//! Call [`MockTransport::verify`] at the end of a test to check that every
//! expectation was consumed and no request went unanswered.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::client::{BoxError, BoxFuture, FORM_CONTENT_TYPE, HttpResponse, HttpTransport};

/// Status returned for requests that match no queued response.
pub const UNMATCHED_STATUS: u16 = 418;

type CheckFn = Arc<dyn Fn(&RecordedRequest) + Send + Sync>;

#[derive(Debug, Clone, PartialEq, Eq)]
/// A request as seen by the mock.
pub struct RecordedRequest {
    pub method: String,
    pub url: String,
    pub content_type: String,
    pub body: String,
}

#[derive(Clone)]
/// A canned answer to one matching request.
pub struct MockResponse {
    method: String,
    status: u16,
    body: String,
    check: Option<CheckFn>,
    persistent: bool,
    hits: usize,
}

impl MockResponse {
    pub fn new(method: impl Into<String>, status: u16, body: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            status,
            body: body.into(),
            check: None,
            persistent: false,
            hits: 0,
        }
    }

    /// Run `check` against every request this response answers.
    ///
    /// Assertions inside `check` fail the calling test.
    pub fn check<F>(mut self, check: F) -> Self
    where
        F: Fn(&RecordedRequest) + Send + Sync + 'static,
    {
        self.check = Some(Arc::new(check));
        self
    }

    /// Keep answering after the first match. Persistent responses are never
    /// reported as unmet.
    pub fn persistent(mut self) -> Self {
        self.persistent = true;
        self
    }

    fn is_available(&self, method: &str) -> bool {
        self.method.eq_ignore_ascii_case(method) && (self.persistent || self.hits == 0)
    }
}

impl std::fmt::Debug for MockResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockResponse")
            .field("method", &self.method)
            .field("status", &self.status)
            .field("body", &self.body)
            .field("persistent", &self.persistent)
            .field("hits", &self.hits)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, thiserror::Error)]
#[error(
    "mock transport has {} unmet response(s) and {} unmatched request(s): {unmet:?} {unmatched:?}",
    .unmet.len(),
    .unmatched.len()
)]
pub struct UnmetExpectations {
    pub unmet: Vec<MockResponse>,
    pub unmatched: Vec<RecordedRequest>,
}

#[derive(Debug, Default)]
struct MockState {
    responses: Vec<MockResponse>,
    requests: Vec<RecordedRequest>,
    unmatched: Vec<RecordedRequest>,
}

#[derive(Debug, Clone, Default)]
/// Queue-driven [`HttpTransport`]. Clones share the same queue.
pub struct MockTransport {
    state: Arc<Mutex<MockState>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response.
    pub fn add_response(&self, response: MockResponse) {
        self.lock().responses.push(response);
    }

    /// Every request received so far, matched or not.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.lock().requests.clone()
    }

    /// Check that all non-persistent responses were consumed and every
    /// request found a response.
    pub fn verify(&self) -> Result<(), UnmetExpectations> {
        let state = self.lock();
        let unmet = state
            .responses
            .iter()
            .filter(|response| !response.persistent && response.hits == 0)
            .cloned()
            .collect::<Vec<_>>();
        if unmet.is_empty() && state.unmatched.is_empty() {
            return Ok(());
        }
        Err(UnmetExpectations {
            unmet,
            unmatched: state.unmatched.clone(),
        })
    }

    fn lock(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn answer(&self, request: RecordedRequest) -> HttpResponse {
        let matched = {
            let mut state = self.lock();
            state.requests.push(request.clone());
            let found = state
                .responses
                .iter_mut()
                .find(|response| response.is_available(&request.method));
            match found {
                Some(response) => {
                    response.hits += 1;
                    Some((response.status, response.body.clone(), response.check.clone()))
                }
                None => {
                    state.unmatched.push(request.clone());
                    None
                }
            }
        };

        match matched {
            Some((status, body, check)) => {
                if let Some(check) = check {
                    check(&request);
                }
                HttpResponse { status, body }
            }
            None => HttpResponse {
                status: UNMATCHED_STATUS,
                body: format!(
                    "no matching response to request for {}:{}",
                    request.method, request.url
                ),
            },
        }
    }
}

impl HttpTransport for MockTransport {
    fn post_form<'a>(
        &'a self,
        url: &'a str,
        body: String,
    ) -> BoxFuture<'a, Result<HttpResponse, BoxError>> {
        let request = RecordedRequest {
            method: "POST".to_owned(),
            url: url.to_owned(),
            content_type: FORM_CONTENT_TYPE.to_owned(),
            body,
        };
        Box::pin(async move { Ok(self.answer(request)) })
    }
}
