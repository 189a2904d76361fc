use async_trait::async_trait;
use futures::future::{select, Either};
use gloo_timers::future::TimeoutFuture;
use reqwasm::http::Request;

use crate::client::{
    api::transport::{HttpRequest, HttpResponse, Method, Transport},
    model::error::ApiError,
};

/// Browser `fetch` through `reqwasm`, raced against the request timeout.
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchTransport;

#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let HttpRequest {
            method,
            url,
            headers,
            body,
            timeout_ms,
        } = request;

        let mut builder = match method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Delete => Request::delete(&url),
        };
        for (name, value) in &headers {
            builder = builder.header(name, value);
        }
        if let Some(body) = body {
            builder = builder.body(body);
        }

        let exchange = async move {
            let response = builder.send().await.map_err(ApiError::network)?;
            let status = response.status();
            let body = response.text().await.map_err(ApiError::decode)?;
            Ok(HttpResponse { status, body })
        };

        match select(Box::pin(exchange), Box::pin(TimeoutFuture::new(timeout_ms))).await {
            Either::Left((result, _)) => result,
            Either::Right(_) => Err(ApiError::timeout(timeout_ms)),
        }
    }
}
