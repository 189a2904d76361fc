use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{
    date::parse_timestamp,
    serde_helper::{deserialize_snowflake, null_as_default},
};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(from = "String", into = "String")]
pub enum NotificationKind {
    Violation,
    DailyReport,
    SystemUpdate,
    Other(String),
}

impl From<String> for NotificationKind {
    fn from(value: String) -> Self {
        match value.as_str() {
            "violation" => NotificationKind::Violation,
            "daily_report" => NotificationKind::DailyReport,
            "system_update" => NotificationKind::SystemUpdate,
            _ => NotificationKind::Other(value),
        }
    }
}

impl From<NotificationKind> for String {
    fn from(value: NotificationKind) -> Self {
        match value {
            NotificationKind::Violation => "violation".to_string(),
            NotificationKind::DailyReport => "daily_report".to_string(),
            NotificationKind::SystemUpdate => "system_update".to_string(),
            NotificationKind::Other(raw) => raw,
        }
    }
}

impl Default for NotificationKind {
    fn default() -> Self {
        NotificationKind::Other("general".to_string())
    }
}

impl NotificationKind {
    pub fn default_icon(&self) -> &'static str {
        match self {
            NotificationKind::Violation => "🚨",
            NotificationKind::DailyReport => "📊",
            NotificationKind::SystemUpdate => "🔄",
            NotificationKind::Other(_) => "🔔",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Severity::High => "HIGH",
            Severity::Medium => "MEDIUM",
            Severity::Low => "LOW",
        }
    }

    pub fn text_class(&self) -> &'static str {
        match self {
            Severity::High => "text-error",
            Severity::Medium => "text-warning",
            Severity::Low => "text-info",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct NotificationDto {
    #[serde(deserialize_with = "deserialize_snowflake")]
    pub id: String,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: NotificationKind,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub read: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub timestamp: String,
    // Unknown severities are dropped rather than failing the whole list
    #[serde(default, deserialize_with = "lenient_severity")]
    pub severity: Option<Severity>,
    #[serde(default)]
    pub server: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
}

fn lenient_severity<'de, D>(deserializer: D) -> Result<Option<Severity>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|s| match s.to_ascii_lowercase().as_str() {
        "high" => Some(Severity::High),
        "medium" => Some(Severity::Medium),
        "low" => Some(Severity::Low),
        _ => None,
    }))
}

impl NotificationDto {
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.timestamp)
    }

    pub fn icon(&self) -> &str {
        self.icon
            .as_deref()
            .filter(|i| !i.is_empty())
            .unwrap_or(self.kind.default_icon())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct NotificationListDto {
    #[serde(default, deserialize_with = "null_as_default")]
    pub notifications: Vec<NotificationDto>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub unread_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_notification_list() {
        let list: NotificationListDto = serde_json::from_str(
            r#"{
                "notifications": [
                    {"id": 1, "type": "violation", "message": "Toxic message removed",
                     "read": false, "timestamp": "2025-08-13T17:00:00", "severity": "HIGH",
                     "server": "Clara HQ"},
                    {"id": "n-2", "type": "welcome", "message": "Hi", "read": true,
                     "timestamp": "2025-08-13T17:00:00", "severity": "critical"}
                ],
                "unread_count": 1
            }"#,
        )
        .unwrap();

        assert_eq!(list.unread_count, 1);
        assert_eq!(list.notifications[0].id, "1");
        assert_eq!(list.notifications[0].kind, NotificationKind::Violation);
        assert_eq!(list.notifications[0].severity, Some(Severity::High));
        assert_eq!(list.notifications[0].icon(), "🚨");
        assert_eq!(
            list.notifications[1].kind,
            NotificationKind::Other("welcome".to_string())
        );
        assert_eq!(list.notifications[1].severity, None);
    }
}
