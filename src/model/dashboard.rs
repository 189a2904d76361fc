use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::{
    serde_helper::null_as_default, server::ServerStatsDto, violation::ViolationDto,
};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(from = "String", into = "String")]
pub enum HealthStatus {
    Excellent,
    Good,
    Fair,
    Poor,
    #[default]
    Unknown,
}

impl From<String> for HealthStatus {
    fn from(value: String) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "excellent" => HealthStatus::Excellent,
            "good" => HealthStatus::Good,
            "fair" => HealthStatus::Fair,
            "poor" => HealthStatus::Poor,
            _ => HealthStatus::Unknown,
        }
    }
}

impl From<HealthStatus> for String {
    fn from(value: HealthStatus) -> Self {
        value.label().to_ascii_lowercase()
    }
}

impl HealthStatus {
    /// Bucket used when the backend sends a score without a status.
    pub fn from_score(score: f64) -> Self {
        match score {
            s if s >= 0.9 => HealthStatus::Excellent,
            s if s >= 0.75 => HealthStatus::Good,
            s if s >= 0.6 => HealthStatus::Fair,
            s if s >= 0.0 => HealthStatus::Poor,
            _ => HealthStatus::Unknown,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            HealthStatus::Excellent => "Excellent",
            HealthStatus::Good => "Good",
            HealthStatus::Fair => "Fair",
            HealthStatus::Poor => "Poor",
            HealthStatus::Unknown => "Unknown",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            HealthStatus::Excellent => "🟢",
            HealthStatus::Good => "🔵",
            HealthStatus::Fair => "🟡",
            HealthStatus::Poor => "🔴",
            HealthStatus::Unknown => "⚪",
        }
    }

    /// Stroke colour of the gauge arc.
    pub fn stroke(&self) -> &'static str {
        match self {
            HealthStatus::Excellent => "#22c55e",
            HealthStatus::Good => "#3b82f6",
            HealthStatus::Fair => "#f59e0b",
            HealthStatus::Poor | HealthStatus::Unknown => "#ef4444",
        }
    }

    pub fn text_class(&self) -> &'static str {
        match self {
            HealthStatus::Excellent => "text-success",
            HealthStatus::Good => "text-info",
            HealthStatus::Fair => "text-warning",
            HealthStatus::Poor => "text-error",
            HealthStatus::Unknown => "opacity-60",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct HealthScoreDto {
    #[serde(default, deserialize_with = "null_as_default")]
    pub health_score: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: HealthStatus,
    #[serde(default, deserialize_with = "null_as_default")]
    pub recommendations: Vec<String>,
}

/// One day of aggregated analytics. The backend uses two naming schemes for
/// the same counters depending on the route.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct AnalyticsPointDto {
    #[serde(default, deserialize_with = "null_as_default")]
    pub date: String,
    #[serde(default, alias = "messages", deserialize_with = "null_as_default")]
    pub messages_processed: u64,
    #[serde(default, alias = "violations", deserialize_with = "null_as_default")]
    pub violations_detected: u64,
    #[serde(default, alias = "health_score", deserialize_with = "null_as_default")]
    pub community_health_score: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub false_positives: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct AnalyticsDto {
    #[serde(default, deserialize_with = "null_as_default")]
    pub analytics: Vec<AnalyticsPointDto>,
}

/// Aggregate payload behind the dashboard page.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct DashboardDto {
    #[serde(default)]
    pub server_stats: Option<ServerStatsDto>,
    #[serde(default)]
    pub health_score: Option<HealthScoreDto>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub recent_analytics: Vec<AnalyticsPointDto>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub recent_violations: Vec<ViolationDto>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct LearningInsightsDto {
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_violations: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub average_confidence: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub false_positive_rate: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub health_score: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub current_thresholds: BTreeMap<String, f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub violation_types: BTreeMap<String, u64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub recommendations: Vec<String>,
}
