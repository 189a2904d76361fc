use serde::de::DeserializeOwned;

use crate::{
    client::{api::transport::HttpResponse, model::error::ApiError},
    model::api::ErrorDto,
};

/// Helper function to parse API responses with consistent error handling
pub fn parse_response<T: DeserializeOwned>(response: HttpResponse) -> Result<T, ApiError> {
    if response.is_success() {
        serde_json::from_str::<T>(&response.body).map_err(ApiError::decode)
    } else {
        Err(error_from_response(response))
    }
}

/// Helper function to check success responses whose body is ignored
pub fn parse_empty_response(response: HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        Ok(())
    } else {
        Err(error_from_response(response))
    }
}

/// Builds the error for a non-2xx response.
///
/// The message is the first non-blank of `detail`, `message` and `error` in
/// a JSON body, then the raw body text, then a status line.
pub fn error_from_response(response: HttpResponse) -> ApiError {
    let status = response.status as u64;

    let message = serde_json::from_str::<ErrorDto>(&response.body)
        .ok()
        .and_then(ErrorDto::into_message)
        .or_else(|| {
            let raw = response.body.trim();
            (!raw.is_empty()).then(|| raw.to_string())
        })
        .unwrap_or_else(|| format!("Request failed with status {}", status));

    ApiError { status, message }
}

/// Serialize a payload to JSON string
pub fn serialize_json<T: serde::Serialize>(payload: &T) -> Result<String, ApiError> {
    serde_json::to_string(payload).map_err(|e| ApiError {
        status: 0,
        message: format!("Failed to serialize request: {}", e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::api::HealthCheckDto;

    #[test]
    fn error_prefers_detail_then_raw_then_status() {
        let err = error_from_response(HttpResponse::new(
            400,
            r#"{"detail":"Server not found","error":"not_found"}"#,
        ));
        assert_eq!(err.status, 400);
        assert_eq!(err.message, "Server not found");

        let err = error_from_response(HttpResponse::new(502, "Bad gateway"));
        assert_eq!(err.message, "Bad gateway");

        let err = error_from_response(HttpResponse::new(500, ""));
        assert_eq!(err.message, "Request failed with status 500");
    }

    #[test]
    fn success_body_that_does_not_decode_is_transport_error() {
        let result = parse_response::<HealthCheckDto>(HttpResponse::new(200, "<html>"));
        assert!(result.unwrap_err().is_transport());
    }
}
