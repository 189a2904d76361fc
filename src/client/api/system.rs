use crate::{
    client::{
        api::{client::ApiClient, transport::Method},
        model::error::ApiError,
    },
    model::api::{AckDto, AnalyzeRequestDto, AnalyzeResponseDto, ContactMessageDto, HealthCheckDto},
};

impl ApiClient {
    pub async fn health(&self) -> Result<HealthCheckDto, ApiError> {
        self.get_json("/health").await
    }

    pub async fn analyze_content(
        &self,
        content: &str,
        content_type: &str,
    ) -> Result<AnalyzeResponseDto, ApiError> {
        let payload = AnalyzeRequestDto {
            content: content.to_string(),
            content_type: content_type.to_string(),
        };
        self.send_json(Method::Post, "/api/v1/analyze", &payload)
            .await
    }

    pub async fn send_contact_message(
        &self,
        message: &ContactMessageDto,
    ) -> Result<AckDto, ApiError> {
        self.send_json(Method::Post, "/api/contact/send", message)
            .await
    }
}
