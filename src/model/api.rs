use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Error body returned by the backend. Different routes fill different fields.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ErrorDto {
    #[serde(default)]
    pub detail: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorDto {
    /// The human-readable part of the body, preferring `detail` over `message`
    /// over `error`.
    pub fn into_message(self) -> Option<String> {
        [self.detail, self.message, self.error]
            .into_iter()
            .flatten()
            .find(|m| !m.trim().is_empty())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct HealthCheckDto {
    pub status: String,
    #[serde(default)]
    pub database: Option<String>,
    #[serde(default)]
    pub bot: Option<String>,
    #[serde(default)]
    pub ai: Option<String>,
}

impl HealthCheckDto {
    pub fn is_operational(&self) -> bool {
        matches!(self.status.as_str(), "healthy" | "operational" | "ok")
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AnalyzeRequestDto {
    pub content: String,
    pub content_type: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct AnalyzeResponseDto {
    #[serde(default)]
    pub flagged: bool,
    #[serde(default)]
    pub confidence: f64,
    #[serde(default)]
    pub violation_type: Option<String>,
    #[serde(default)]
    pub categories: BTreeMap<String, f64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ContactMessageDto {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Generic acknowledgement for mutations that return `{ "success": .., "message": .. }`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct AckDto {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_message_prefers_detail() {
        let dto: ErrorDto =
            serde_json::from_str(r#"{"detail":"Server not found","message":"nope"}"#).unwrap();
        assert_eq!(dto.into_message().as_deref(), Some("Server not found"));

        let dto: ErrorDto = serde_json::from_str(r#"{"message":"Bad threshold"}"#).unwrap();
        assert_eq!(dto.into_message().as_deref(), Some("Bad threshold"));

        let dto: ErrorDto =
            serde_json::from_str(r#"{"detail":"  ","error":"Forbidden"}"#).unwrap();
        assert_eq!(dto.into_message().as_deref(), Some("Forbidden"));

        let dto: ErrorDto = serde_json::from_str("{}").unwrap();
        assert_eq!(dto.into_message(), None);
    }
}
