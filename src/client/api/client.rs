use std::rc::Rc;

use dioxus_logger::tracing;
use serde::{de::DeserializeOwned, Serialize};

use crate::client::{
    api::{
        helper::{parse_empty_response, parse_response, serialize_json},
        transport::{HttpRequest, HttpResponse, Method, Transport},
    },
    config::ClientConfig,
    model::error::ApiError,
    store::{SharedStorage, TokenStore},
};

/// Handle to the backend. Cheap to clone; every clone shares the transport and
/// the token store.
#[derive(Clone)]
pub struct ApiClient {
    base_url: Rc<str>,
    timeout_ms: u32,
    transport: Rc<dyn Transport>,
    tokens: TokenStore,
}

impl ApiClient {
    pub fn new(config: &ClientConfig, transport: Rc<dyn Transport>, storage: SharedStorage) -> Self {
        Self {
            base_url: Rc::from(config.api_url.trim_end_matches('/')),
            timeout_ms: config.timeout_ms,
            transport,
            tokens: TokenStore::new(storage),
        }
    }

    /// Client wired to the platform transport.
    pub fn from_config(config: &ClientConfig, storage: SharedStorage) -> Self {
        #[cfg(feature = "web")]
        let transport: Rc<dyn Transport> = Rc::new(crate::client::api::fetch::FetchTransport);

        #[cfg(not(feature = "web"))]
        let transport: Rc<dyn Transport> =
            Rc::new(crate::client::api::transport::UnavailableTransport);

        Self::new(config, transport, storage)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn tokens(&self) -> &TokenStore {
        &self.tokens
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Sends one request through the interceptors: JSON content type, bearer
    /// token when stored, logging, and token removal on 401.
    pub async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
    ) -> Result<HttpResponse, ApiError> {
        let mut headers = vec![("Content-Type".to_string(), "application/json".to_string())];
        if let Some(token) = self.tokens.get() {
            headers.push(("Authorization".to_string(), format!("Bearer {}", token)));
        }

        let request = HttpRequest {
            method,
            url: self.url(path),
            headers,
            body,
            timeout_ms: self.timeout_ms,
        };

        tracing::debug!("API request: {} {}", method, path);

        let response = match self.transport.send(request).await {
            Ok(response) => response,
            Err(err) => {
                tracing::error!("API error: {} {} failed: {}", method, path, err);
                return Err(err);
            }
        };

        tracing::debug!("API response: {} {} -> {}", method, path, response.status);

        if response.status == 401 {
            tracing::warn!("Unauthorized response from {}; removing stored token", path);
            self.tokens.clear();
        }
        if !response.is_success() {
            tracing::error!(
                "API error: {} {} returned {}",
                method,
                path,
                response.status
            );
        }

        Ok(response)
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.send(Method::Get, path, None).await?;
        parse_response(response)
    }

    pub async fn send_json<B, T>(&self, method: Method, path: &str, payload: &B) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let body = serialize_json(payload)?;
        let response = self.send(method, path, Some(body)).await?;
        parse_response(response)
    }

    /// Like `send_json`, but only the status of the response matters.
    pub async fn send_json_empty<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        payload: &B,
    ) -> Result<(), ApiError> {
        let body = serialize_json(payload)?;
        let response = self.send(method, path, Some(body)).await?;
        parse_empty_response(response)
    }

    pub async fn send_empty(&self, method: Method, path: &str) -> Result<(), ApiError> {
        let response = self.send(method, path, None).await?;
        parse_empty_response(response)
    }
}

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url && Rc::ptr_eq(&self.transport, &other.transport)
    }
}
