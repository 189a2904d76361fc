use crate::{
    client::{
        api::{client::ApiClient, transport::Method},
        model::error::ApiError,
    },
    model::user::{
        AuthResponseDto, CurrentUserDto, DiscordCallbackDto, GoogleAuthDto, UpdateProfileDto,
    },
};

impl ApiClient {
    /// Exchanges a Google ID-token credential for a backend session.
    pub async fn google_auth(&self, credential: &str) -> Result<AuthResponseDto, ApiError> {
        let payload = GoogleAuthDto {
            token: credential.to_string(),
        };
        self.send_json(Method::Post, "/api/v1/auth/google", &payload)
            .await
    }

    pub async fn discord_callback(
        &self,
        code: &str,
        state: Option<&str>,
    ) -> Result<AuthResponseDto, ApiError> {
        let payload = DiscordCallbackDto {
            code: code.to_string(),
            state: state.map(str::to_string),
        };
        self.send_json(Method::Post, "/api/v1/auth/discord/callback", &payload)
            .await
    }

    pub async fn get_current_user(&self) -> Result<CurrentUserDto, ApiError> {
        self.get_json("/api/v1/auth/me").await
    }

    pub async fn update_profile(
        &self,
        profile: &UpdateProfileDto,
    ) -> Result<CurrentUserDto, ApiError> {
        self.send_json(Method::Put, "/api/v1/auth/profile", profile)
            .await
    }

    pub async fn logout(&self) -> Result<(), ApiError> {
        self.send_empty(Method::Post, "/api/v1/auth/logout").await
    }
}
