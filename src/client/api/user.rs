use crate::{
    client::{
        api::{client::ApiClient, transport::Method},
        model::error::ApiError,
    },
    model::user::UserPreferencesDto,
};

impl ApiClient {
    pub async fn update_user_preferences(
        &self,
        preferences: &UserPreferencesDto,
    ) -> Result<(), ApiError> {
        self.send_json_empty(Method::Put, "/api/v1/user/preferences", preferences)
            .await
    }
}
