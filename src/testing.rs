//! In-memory `Transport`, `Navigator` and `Dom` fakes for unit tests.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use crate::host::{Dom, MessageElement, Navigator};
use crate::net::transport::{HttpRequest, HttpResponse, Transport, TransportError, TransportResponse};

// =============================================================
// Transport
// =============================================================

/// One scripted outcome for the next `send`.
pub enum Reply {
    Respond(HttpResponse),
    BrokenBody { status: u16 },
    Fail(TransportError),
}

impl Reply {
    pub fn json(status: u16, body: &serde_json::Value) -> Self {
        Self::Respond(HttpResponse::new(status, body.to_string()))
    }

    pub fn raw(status: u16, body: &str) -> Self {
        Self::Respond(HttpResponse::new(status, body))
    }
}

/// Buffered response that counts body reads.
pub struct FakeResponse {
    status: u16,
    body: Result<HttpResponse, TransportError>,
    reads: Rc<Cell<usize>>,
}

impl TransportResponse for FakeResponse {
    fn status_code(&self) -> u16 {
        self.status
    }

    async fn read_body(self) -> Result<String, TransportError> {
        self.reads.set(self.reads.get() + 1);
        self.body?.read_body().await
    }
}

/// Replays queued replies in order and records every request.
#[derive(Default)]
pub struct FakeTransport {
    replies: RefCell<VecDeque<Reply>>,
    requests: RefCell<Vec<HttpRequest>>,
    reads: Rc<Cell<usize>>,
}

impl FakeTransport {
    pub fn replying(replies: impl IntoIterator<Item = Reply>) -> Self {
        Self { replies: RefCell::new(replies.into_iter().collect()), ..Self::default() }
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }

    /// Number of response bodies read so far.
    pub fn body_reads(&self) -> usize {
        self.reads.get()
    }
}

impl Transport for FakeTransport {
    type Response = FakeResponse;

    async fn send(&self, request: HttpRequest) -> Result<FakeResponse, TransportError> {
        self.requests.borrow_mut().push(request);
        let reply = self
            .replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Reply::Fail(TransportError::Network("no reply scripted".to_owned())));
        let reads = Rc::clone(&self.reads);
        match reply {
            Reply::Respond(response) => Ok(FakeResponse { status: response.status, body: Ok(response), reads }),
            Reply::BrokenBody { status } => {
                Ok(FakeResponse { status, body: Err(TransportError::Body("stream aborted".to_owned())), reads })
            }
            Reply::Fail(e) => Err(e),
        }
    }
}

// =============================================================
// Navigator
// =============================================================

#[derive(Default)]
pub struct RecordingNavigator {
    redirects: RefCell<Vec<String>>,
}

impl RecordingNavigator {
    pub fn redirects(&self) -> Vec<String> {
        self.redirects.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn redirect(&self, path: &str) {
        self.redirects.borrow_mut().push(path.to_owned());
    }
}

// =============================================================
// Dom
// =============================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ElementState {
    pub text: String,
    pub class: String,
}

#[derive(Clone)]
pub struct FakeElement(Rc<RefCell<ElementState>>);

impl MessageElement for FakeElement {
    fn set_text(&self, text: &str) {
        text.clone_into(&mut self.0.borrow_mut().text);
    }

    fn set_class(&self, class_name: &str) {
        class_name.clone_into(&mut self.0.borrow_mut().class);
    }
}

#[derive(Default)]
pub struct FakeDom {
    elements: HashMap<String, Rc<RefCell<ElementState>>>,
}

impl FakeDom {
    pub fn with_element(mut self, id: &str, text: &str, class: &str) -> Self {
        let state = ElementState { text: text.to_owned(), class: class.to_owned() };
        self.elements.insert(id.to_owned(), Rc::new(RefCell::new(state)));
        self
    }

    pub fn element(&self, id: &str) -> Option<ElementState> {
        self.elements.get(id).map(|e| e.borrow().clone())
    }
}

impl Dom for FakeDom {
    type Element = FakeElement;

    fn get_element_by_id(&self, id: &str) -> Option<FakeElement> {
        self.elements.get(id).map(|e| FakeElement(Rc::clone(e)))
    }
}
