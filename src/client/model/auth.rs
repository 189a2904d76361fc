use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{api::ApiClient, model::session},
    model::user::{UpdateProfileDto, UserDto},
};

#[derive(Clone, Debug, PartialEq)]
pub enum AuthState {
    /// Initial state - stored token not checked yet
    Loading,
    /// No usable session
    Unauthenticated,
    /// User is authenticated
    Authenticated(UserDto),
}

impl AuthState {
    pub fn is_loading(&self) -> bool {
        matches!(self, AuthState::Loading)
    }

    /// Check if the user is authenticated
    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthState::Authenticated(_))
    }

    /// Get the authenticated user, if any
    pub fn user(&self) -> Option<&UserDto> {
        match self {
            AuthState::Authenticated(user) => Some(user),
            _ => None,
        }
    }
}

/// Root-provided container for the signed-in user.
#[derive(Clone, Copy, PartialEq)]
pub struct AuthContext {
    inner: Signal<AuthState>,
}

impl AuthContext {
    pub fn new() -> Self {
        Self {
            inner: Signal::new(AuthState::Loading),
        }
    }

    pub fn read(&self) -> impl std::ops::Deref<Target = AuthState> + '_ {
        self.inner.read()
    }

    pub fn user(&self) -> Option<UserDto> {
        self.inner.read().user().cloned()
    }

    pub async fn restore(&mut self, api: &ApiClient) {
        let state = session::restore(api).await;
        self.inner.set(state);
    }

    pub async fn login_with_google(&mut self, api: &ApiClient, credential: &str) -> Result<(), String> {
        let result = session::login_with_google(api, credential).await;
        self.apply_login(result)
    }

    pub async fn login_with_discord(
        &mut self,
        api: &ApiClient,
        code: &str,
        state: Option<&str>,
    ) -> Result<(), String> {
        let result = session::login_with_discord(api, code, state).await;
        self.apply_login(result)
    }

    fn apply_login(&mut self, result: Result<UserDto, String>) -> Result<(), String> {
        match result {
            Ok(user) => {
                self.inner.set(AuthState::Authenticated(user));
                Ok(())
            }
            Err(message) => {
                self.inner.set(AuthState::Unauthenticated);
                Err(message)
            }
        }
    }

    pub async fn logout(&mut self, api: &ApiClient) {
        session::logout(api).await;
        self.inner.set(AuthState::Unauthenticated);
    }

    pub async fn update_profile(
        &mut self,
        api: &ApiClient,
        profile: &UpdateProfileDto,
    ) -> Result<(), String> {
        let Some(current) = self.user() else {
            return Err(session::UPDATE_FAILED.to_string());
        };
        let user = session::update_profile(api, &current, profile).await?;
        self.inner.set(AuthState::Authenticated(user));
        Ok(())
    }

    pub async fn refresh_servers(&mut self, api: &ApiClient) {
        let Some(current) = self.user() else {
            tracing::debug!("Skipping server refresh without a signed-in user");
            return;
        };
        let user = session::refresh_servers(api, current).await;
        // Ignore the result if the user signed out meanwhile
        if self.inner.read().is_authenticated() {
            self.inner.set(AuthState::Authenticated(user));
        }
    }
}
