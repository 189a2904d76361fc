use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_brands_icons::FaDiscord, Icon};
use dioxus_logger::tracing;

use crate::client::{
    api::ApiClient,
    browser,
    component::{page::LoadingPage, Page},
    config::ClientConfig,
    constant::SITE_NAME,
    model::{
        auth::{AuthContext, AuthState},
        oauth::{discord_authorize_url, new_state, remember_state},
    },
    router::Route,
    store::SharedStorage,
};

/// Loads Google Identity Services, renders its button into
/// `#google-signin` and sends each credential back to Rust.
const GOOGLE_SIGN_IN_SCRIPT: &str = r#"
const clientId = await dioxus.recv();
const init = () => {
    const target = document.getElementById("google-signin");
    if (!target) { return; }
    google.accounts.id.initialize({
        client_id: clientId,
        callback: (response) => dioxus.send(response.credential),
    });
    google.accounts.id.renderButton(target, { theme: "outline", size: "large", width: 280 });
};
if (window.google && window.google.accounts) {
    setTimeout(init, 0);
} else {
    const script = document.createElement("script");
    script.src = "https://accounts.google.com/gsi/client";
    script.async = true;
    script.onload = init;
    document.head.appendChild(script);
}
"#;

#[component]
pub fn Login() -> Element {
    let auth_context = use_context::<AuthContext>();
    let nav = navigator();

    // Handle redirect for authenticated users
    use_effect(move || {
        if auth_context.read().is_authenticated() {
            nav.replace(Route::Dashboard {});
        }
    });

    let state = auth_context.read();

    rsx! {
        Title { "Login | {SITE_NAME}" }
        match &*state {
            AuthState::Loading | AuthState::Authenticated(_) => rsx!(LoadingPage {}),
            AuthState::Unauthenticated => rsx!(LoginCard {}),
        }
    }
}

#[component]
fn LoginCard() -> Element {
    let api = use_context::<ApiClient>();
    let config = use_context::<ClientConfig>();
    let storage = use_context::<SharedStorage>();
    let mut auth = use_context::<AuthContext>();
    let nav = navigator();
    let mut error = use_signal(|| None::<String>);
    let mut busy = use_signal(|| false);

    let google_enabled = config.google_client_id.is_some();
    let discord_enabled = config.discord_client_id.is_some();

    use_future({
        let config = config.clone();
        move || {
            let api = api.clone();
            let client_id = config.google_client_id.clone();
            async move {
                let Some(client_id) = client_id else {
                    return;
                };
                let mut eval = document::eval(GOOGLE_SIGN_IN_SCRIPT);
                if let Err(err) = eval.send(client_id) {
                    tracing::error!("Failed to start Google sign-in: {:?}", err);
                    return;
                }
                loop {
                    match eval.recv::<String>().await {
                        Ok(credential) => {
                            busy.set(true);
                            error.set(None);
                            match auth.login_with_google(&api, &credential).await {
                                Ok(()) => {
                                    nav.replace(Route::Dashboard {});
                                }
                                Err(message) => error.set(Some(message)),
                            }
                            busy.set(false);
                        }
                        Err(err) => {
                            tracing::warn!("Google sign-in channel closed: {:?}", err);
                            break;
                        }
                    }
                }
            }
        }
    });

    let discord_login = move |_| {
        let Some(origin) = browser::page_origin() else {
            error.set(Some("Discord login is only available in the browser".to_string()));
            return;
        };
        let state = new_state();
        let redirect_uri = config.redirect_uri(&origin);
        match discord_authorize_url(&config, &redirect_uri, &state) {
            Some(url) => {
                remember_state(&storage, &state);
                busy.set(true);
                if !browser::redirect_to(&url) {
                    busy.set(false);
                    error.set(Some("Could not open Discord".to_string()));
                }
            }
            None => error.set(Some("Discord login is not configured".to_string())),
        }
    };

    rsx!(Page {
        class: "flex items-center justify-center",
        div {
            class: "card bg-base-200 shadow-xl w-full max-w-md",
            div {
                class: "card-body items-center text-center gap-6",
                div {
                    class: "w-20 h-20 rounded-3xl bg-primary flex items-center justify-center text-4xl",
                    "🛡️"
                }
                div {
                    h1 { class: "text-3xl font-bold", "Welcome to {SITE_NAME}" }
                    p { class: "opacity-70", "Sign in to manage your server moderation" }
                }
                ul {
                    class: "flex flex-col gap-2 text-sm self-start",
                    li { span { class: "text-success mr-2", "✓" } "AI-powered content moderation" }
                    li { span { class: "text-success mr-2", "✓" } "Real-time analytics and insights" }
                    li { span { class: "text-success mr-2", "✓" } "Privacy-first community learning" }
                }
                if let Some(message) = error() {
                    div { role: "alert", class: "alert alert-error w-full", "{message}" }
                }
                if busy() {
                    span { class: "loading loading-spinner loading-lg" }
                }
                if google_enabled {
                    div { id: "google-signin", class: "flex justify-center" }
                }
                if discord_enabled {
                    button {
                        class: "btn btn-outline w-full flex gap-2 items-center",
                        disabled: busy(),
                        onclick: discord_login,
                        Icon { width: 24, height: 24, icon: FaDiscord }
                        "Login with Discord"
                    }
                }
                if !google_enabled && !discord_enabled {
                    p {
                        class: "text-sm text-warning",
                        "No sign-in provider is configured for this deployment."
                    }
                }
                p {
                    class: "text-xs opacity-60",
                    "By signing in, you agree to our "
                    Link { to: Route::Terms {}, class: "link", "Terms of Service" }
                    " and "
                    Link { to: Route::Privacy {}, class: "link", "Privacy Policy" }
                }
            }
        }
    })
}
