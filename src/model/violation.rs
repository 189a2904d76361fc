use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{
    date::parse_timestamp,
    serde_helper::{deserialize_optional_snowflake, null_as_default},
};

/// Category assigned by the moderation model. Unknown categories are kept
/// verbatim so new backend types still render.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(from = "String", into = "String")]
pub enum ViolationType {
    Toxicity,
    Spam,
    Nsfw,
    Harassment,
    HateSpeech,
    Threats,
    SelfHarm,
    Other(String),
}

impl From<String> for ViolationType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "toxicity" => ViolationType::Toxicity,
            "spam" => ViolationType::Spam,
            "nsfw" => ViolationType::Nsfw,
            "harassment" => ViolationType::Harassment,
            "hate_speech" => ViolationType::HateSpeech,
            "threats" => ViolationType::Threats,
            "self_harm" => ViolationType::SelfHarm,
            _ => ViolationType::Other(value),
        }
    }
}

impl From<ViolationType> for String {
    fn from(value: ViolationType) -> Self {
        value.as_str().to_string()
    }
}

impl Default for ViolationType {
    fn default() -> Self {
        ViolationType::Other("unknown".to_string())
    }
}

impl ViolationType {
    pub fn as_str(&self) -> &str {
        match self {
            ViolationType::Toxicity => "toxicity",
            ViolationType::Spam => "spam",
            ViolationType::Nsfw => "nsfw",
            ViolationType::Harassment => "harassment",
            ViolationType::HateSpeech => "hate_speech",
            ViolationType::Threats => "threats",
            ViolationType::SelfHarm => "self_harm",
            ViolationType::Other(raw) => raw,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ViolationType::Toxicity => "🤬",
            ViolationType::Spam => "📧",
            ViolationType::Nsfw => "🔞",
            ViolationType::Harassment => "😠",
            ViolationType::HateSpeech => "💀",
            ViolationType::Threats => "⚔️",
            ViolationType::SelfHarm => "🩹",
            ViolationType::Other(_) => "⚠️",
        }
    }

    /// daisyUI badge class used for the type chip.
    pub fn badge_class(&self) -> &'static str {
        match self {
            ViolationType::Toxicity => "badge-warning",
            ViolationType::Nsfw | ViolationType::HateSpeech | ViolationType::Threats => {
                "badge-error"
            }
            ViolationType::Harassment => "badge-secondary",
            ViolationType::Spam => "badge-accent",
            ViolationType::SelfHarm => "badge-info",
            ViolationType::Other(_) => "badge-ghost",
        }
    }
}

impl fmt::Display for ViolationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str().replace('_', " "))
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ViolationDto {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub violation_type: ViolationType,
    #[serde(default, deserialize_with = "null_as_default")]
    pub confidence_score: f64,
    #[serde(default)]
    pub action_taken: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(default, deserialize_with = "deserialize_optional_snowflake")]
    pub user_id: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_snowflake")]
    pub channel_id: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    /// `None` until a moderator has given feedback.
    #[serde(default)]
    pub false_positive: Option<bool>,
}

impl ViolationDto {
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.created_at)
    }

    /// Confidence as a whole percentage clamped to 0..=100.
    pub fn confidence_percent(&self) -> u8 {
        (self.confidence_score * 100.0).round().clamp(0.0, 100.0) as u8
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ViolationListDto {
    #[serde(default, deserialize_with = "null_as_default")]
    pub violations: Vec<ViolationDto>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ViolationFeedbackDto {
    pub is_false_positive: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_violation_with_null_feedback() {
        let v: ViolationDto = serde_json::from_str(
            r#"{
                "id": 7,
                "violation_type": "hate_speech",
                "confidence_score": 1.07,
                "action_taken": "deleted",
                "created_at": "2025-08-12T10:00:00",
                "user_id": 936677346449170493,
                "channel_id": "123",
                "false_positive": null
            }"#,
        )
        .unwrap();

        assert_eq!(v.violation_type, ViolationType::HateSpeech);
        assert_eq!(v.violation_type.to_string(), "hate speech");
        assert_eq!(v.confidence_percent(), 100);
        assert_eq!(v.user_id.as_deref(), Some("936677346449170493"));
        assert!(v.false_positive.is_none());
        assert!(v.created_at().is_some());
    }

    #[test]
    fn unknown_type_round_trips_verbatim() {
        let t = ViolationType::from("doxxing".to_string());
        assert_eq!(t, ViolationType::Other("doxxing".to_string()));
        assert_eq!(String::from(t), "doxxing");
    }
}
