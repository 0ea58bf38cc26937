//! In-memory [`Transport`] for tests.
//!
//! Routes are matched on method and resource path; the most recently
//! registered route wins, so a test can override an earlier answer.
//! Every request is recorded.

use std::cell::RefCell;
use std::rc::Rc;

use async_trait::async_trait;
use serde_json::{Value, json};

use crate::credentials::NoCredentials;
use crate::error::TransportError;
use crate::http::ResourceClient;
use crate::transport::{HttpRequest, HttpResponse, Method, Transport};

type Handler = Rc<dyn Fn(&HttpRequest) -> Result<HttpResponse, TransportError>>;

struct Route {
    method: Method,
    path: String,
    handler: Handler,
}

#[derive(Default)]
pub struct MockTransport {
    routes: RefCell<Vec<Route>>,
    requests: RefCell<Vec<HttpRequest>>,
}

impl MockTransport {
    pub const BASE_URL: &'static str = "http://mock.local/api/v1";

    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Client against this transport without credentials.
    pub fn client(self: &Rc<Self>) -> ResourceClient {
        ResourceClient::new(Self::BASE_URL, self.clone(), Rc::new(NoCredentials))
    }

    pub fn on(
        &self,
        method: Method,
        path: &str,
        handler: impl Fn(&HttpRequest) -> HttpResponse + 'static,
    ) {
        self.routes.borrow_mut().push(Route {
            method,
            path: path.to_string(),
            handler: Rc::new(move |request: &HttpRequest| Ok(handler(request))),
        });
    }

    pub fn on_json(&self, method: Method, path: &str, status: u16, body: Value) {
        let body = body.to_string();
        self.on(method, path, move |_| HttpResponse::new(status, body.clone()));
    }

    /// Answers with a success envelope around `data`.
    pub fn on_data(&self, method: Method, path: &str, data: Value) {
        self.on_json(method, path, 200, json!({"status": "success", "message": "OK", "data": data}));
    }

    /// Answers with a success envelope around `data` and list `meta`.
    pub fn on_page(&self, method: Method, path: &str, data: Value, meta: Value) {
        self.on_json(
            method,
            path,
            200,
            json!({"status": "success", "message": "OK", "data": data, "meta": meta}),
        );
    }

    /// No response at all, as when the server is unreachable.
    pub fn fail(&self, method: Method, path: &str, message: &str) {
        let message = message.to_string();
        self.routes.borrow_mut().push(Route {
            method,
            path: path.to_string(),
            handler: Rc::new(move |_: &HttpRequest| Err(TransportError::new(message.clone()))),
        });
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }

    pub fn last_request(&self) -> Option<HttpRequest> {
        self.requests.borrow().last().cloned()
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }

    /// Requests sent with `method` to `path`.
    pub fn count(&self, method: Method, path: &str) -> usize {
        self.requests
            .borrow()
            .iter()
            .filter(|r| r.method == method && r.path == path)
            .count()
    }
}

#[async_trait(?Send)]
impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.borrow_mut().push(request.clone());

        // handlers may register routes, so release the table before calling
        let handler = self
            .routes
            .borrow()
            .iter()
            .rev()
            .find(|route| route.method == request.method && route.path == request.path)
            .map(|route| route.handler.clone());
        match handler {
            Some(handler) => handler(&request),
            None => Ok(HttpResponse::new(
                404,
                json!({"status": "error", "message": "Not Found"}).to_string(),
            )),
        }
    }
}
