use crate::{
    client::{
        api::{client::ApiClient, transport::Method},
        constant::{DEFAULT_ANALYTICS_DAYS, DEFAULT_VIOLATION_LIMIT},
        model::error::ApiError,
    },
    model::{
        dashboard::{AnalyticsDto, DashboardDto, HealthScoreDto, LearningInsightsDto},
        server::{ServerListDto, ServerStatsDto, UpdateServerNameDto},
        settings::{BotConfigDto, ServerSettingsDto},
        violation::{ViolationFeedbackDto, ViolationListDto},
    },
};

fn server_path(server_id: &str, rest: &str) -> String {
    format!("/api/v1/servers/{}{}", server_id, rest)
}

impl ApiClient {
    pub async fn get_servers(&self) -> Result<ServerListDto, ApiError> {
        self.get_json("/api/v1/servers").await
    }

    pub async fn get_server_stats(&self, server_id: &str) -> Result<ServerStatsDto, ApiError> {
        self.get_json(&server_path(server_id, "/stats")).await
    }

    /// `days` defaults to 7 when `None`.
    pub async fn get_server_analytics(
        &self,
        server_id: &str,
        days: Option<u32>,
    ) -> Result<AnalyticsDto, ApiError> {
        let days = days.unwrap_or(DEFAULT_ANALYTICS_DAYS);
        self.get_json(&server_path(server_id, &format!("/analytics?days={}", days)))
            .await
    }

    /// `limit` defaults to 50 when `None`.
    pub async fn get_server_violations(
        &self,
        server_id: &str,
        limit: Option<u32>,
    ) -> Result<ViolationListDto, ApiError> {
        let limit = limit.unwrap_or(DEFAULT_VIOLATION_LIMIT);
        self.get_json(&server_path(server_id, &format!("/violations?limit={}", limit)))
            .await
    }

    pub async fn get_server_health(&self, server_id: &str) -> Result<HealthScoreDto, ApiError> {
        self.get_json(&server_path(server_id, "/health")).await
    }

    pub async fn get_dashboard_data(&self, server_id: &str) -> Result<DashboardDto, ApiError> {
        self.get_json(&server_path(server_id, "/dashboard")).await
    }

    pub async fn get_learning_insights(
        &self,
        server_id: &str,
    ) -> Result<LearningInsightsDto, ApiError> {
        self.get_json(&server_path(server_id, "/insights")).await
    }

    pub async fn get_server_settings(
        &self,
        server_id: &str,
    ) -> Result<ServerSettingsDto, ApiError> {
        self.get_json(&server_path(server_id, "/settings")).await
    }

    /// Replaces the stored settings. `escalation_threshold` is raised to 1 if lower.
    pub async fn update_server_settings(
        &self,
        server_id: &str,
        settings: &ServerSettingsDto,
    ) -> Result<(), ApiError> {
        self.send_json_empty(
            Method::Post,
            &server_path(server_id, "/settings"),
            &settings.clamped(),
        )
        .await
    }

    /// Replaces the bot configuration after clamping thresholds and timeout.
    pub async fn update_server_config(
        &self,
        server_id: &str,
        config: &BotConfigDto,
    ) -> Result<(), ApiError> {
        self.send_json_empty(
            Method::Post,
            &server_path(server_id, "/config"),
            &config.clamped(),
        )
        .await
    }

    pub async fn update_server_name(&self, server_id: &str, name: &str) -> Result<(), ApiError> {
        let payload = UpdateServerNameDto {
            name: name.to_string(),
        };
        self.send_json_empty(Method::Put, &server_path(server_id, "/name"), &payload)
            .await
    }

    pub async fn report_violation_feedback(
        &self,
        server_id: &str,
        violation_id: i64,
        is_false_positive: bool,
    ) -> Result<(), ApiError> {
        let payload = ViolationFeedbackDto { is_false_positive };
        self.send_json_empty(
            Method::Post,
            &server_path(
                server_id,
                &format!("/violations/{}/feedback", violation_id),
            ),
            &payload,
        )
        .await
    }

    /// Asks the backend to synthesize analytics history for a new server.
    pub async fn generate_analytics_data(&self, server_id: &str) -> Result<(), ApiError> {
        self.send_empty(Method::Post, &server_path(server_id, "/analytics/generate"))
            .await
    }
}
