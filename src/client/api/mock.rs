//! In-memory [`Transport`] double for tests.

use std::{cell::RefCell, rc::Rc};

use async_trait::async_trait;

use crate::client::{
    api::{
        client::ApiClient,
        transport::{HttpRequest, HttpResponse, Method, Transport},
    },
    config::ClientConfig,
    model::error::ApiError,
    store::{MemoryStorage, TokenStore},
};

pub const BASE_URL: &str = "http://clara.test";

struct Route {
    method: Method,
    path: String,
    response: Result<HttpResponse, ApiError>,
}

/// Answers requests from registered routes, each consumed once in the order
/// registered. Unmatched requests get a 404.
#[derive(Default)]
pub struct MockTransport {
    routes: RefCell<Vec<Route>>,
    requests: RefCell<Vec<HttpRequest>>,
}

impl MockTransport {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn on(&self, method: Method, path: &str, status: u16, body: &str) -> &Self {
        self.routes.borrow_mut().push(Route {
            method,
            path: path.to_string(),
            response: Ok(HttpResponse::new(status, body)),
        });
        self
    }

    pub fn fail(&self, method: Method, path: &str, error: ApiError) -> &Self {
        self.routes.borrow_mut().push(Route {
            method,
            path: path.to_string(),
            response: Err(error),
        });
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }

    /// Number of requests sent to `path` with `method`.
    pub fn count(&self, method: Method, path: &str) -> usize {
        let url = format!("{}{}", BASE_URL, path);
        self.requests
            .borrow()
            .iter()
            .filter(|r| r.method == method && r.url == url)
            .count()
    }
}

#[async_trait(?Send)]
impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.requests.borrow_mut().push(request.clone());

        let path = request
            .url
            .strip_prefix(BASE_URL)
            .unwrap_or(&request.url)
            .to_string();

        let mut routes = self.routes.borrow_mut();
        match routes
            .iter()
            .position(|r| r.method == request.method && r.path == path)
        {
            Some(index) => routes.remove(index).response,
            None => Ok(HttpResponse::new(404, r#"{"detail":"Not Found"}"#)),
        }
    }
}

/// Client against a fresh mock, plus the mock and its storage.
pub fn client() -> (ApiClient, Rc<MockTransport>, MemoryStorage) {
    let transport = MockTransport::new();
    let storage = MemoryStorage::new();
    let config = ClientConfig {
        api_url: BASE_URL.to_string(),
        ..Default::default()
    };
    let client = ApiClient::new(&config, transport.clone(), Rc::new(storage.clone()));
    (client, transport, storage)
}

pub fn client_with_token(token: &str) -> (ApiClient, Rc<MockTransport>, MemoryStorage) {
    let (client, transport, storage) = client();
    TokenStore::new(Rc::new(storage.clone())).set(token);
    (client, transport, storage)
}
