use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{
    api::ApiClient,
    component::Page,
    constant::SITE_NAME,
    model::{
        auth::AuthContext,
        oauth::{take_and_verify_state, OAuthCallback},
    },
    router::Route,
    store::SharedStorage,
};

/// Landing point of the Discord redirect. Exchanges the code once per mount.
#[component]
pub fn AuthCallback(query: String) -> Element {
    let api = use_context::<ApiClient>();
    let storage = use_context::<SharedStorage>();
    let mut auth = use_context::<AuthContext>();
    let nav = navigator();
    let mut error = use_signal(|| None::<String>);

    use_hook(move || {
        let callback = OAuthCallback::from_query(&query);
        spawn(async move {
            let result = match callback {
                OAuthCallback::Error(reason) => Err(format!("Discord denied the request: {}", reason)),
                OAuthCallback::Missing => Err("No authorization code was received".to_string()),
                OAuthCallback::Code { code, state } => {
                    if take_and_verify_state(&storage, state.as_deref()) {
                        auth.login_with_discord(&api, &code, state.as_deref()).await
                    } else {
                        tracing::warn!("Discord callback state did not match");
                        Err("Login request could not be verified. Please try again.".to_string())
                    }
                }
            };

            match result {
                Ok(()) => {
                    nav.replace(Route::Dashboard {});
                }
                Err(message) => error.set(Some(message)),
            }
        });
    });

    rsx! {
        Title { "Signing in | {SITE_NAME}" }
        Page {
            class: "flex items-center justify-center",
            match error() {
                None => rsx! {
                    div {
                        class: "flex flex-col items-center gap-4",
                        span { class: "loading loading-spinner loading-lg" }
                        p { "Completing sign-in..." }
                    }
                },
                Some(message) => rsx! {
                    div {
                        class: "flex flex-col items-center gap-4 text-center",
                        p { class: "text-5xl", "⚠️" }
                        h1 { class: "text-2xl font-bold", "Sign-in failed" }
                        p { class: "opacity-70 max-w-md", "{message}" }
                        Link { to: Route::Login {}, class: "btn btn-primary", "Back to Login" }
                    }
                },
            }
        }
    }
}
