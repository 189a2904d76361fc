use crate::{
    client::{
        api::{client::ApiClient, transport::Method},
        model::error::ApiError,
    },
    model::notification::NotificationListDto,
};

impl ApiClient {
    pub async fn get_user_notifications(&self) -> Result<NotificationListDto, ApiError> {
        self.get_json("/api/v1/user/notifications").await
    }

    pub async fn mark_all_notifications_read(&self) -> Result<(), ApiError> {
        self.send_empty(Method::Put, "/api/v1/user/notifications/mark-all-read")
            .await
    }
}
