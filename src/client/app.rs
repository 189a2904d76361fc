use dioxus::prelude::*;

use crate::client::{
    api::ApiClient,
    config::ClientConfig,
    constant::{SITE_NAME, SITE_TAGLINE},
    model::{
        auth::AuthContext, notification::NotificationStore, query::QueryClient,
        selection::SelectedServer, theme::ThemeContext,
    },
    router::Route,
    store::default_storage,
};

const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");
const FAVICON: &str = "data:image/svg+xml,<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 100 100'><text y='.9em' font-size='90'>🛡️</text></svg>";

#[component]
pub fn App() -> Element {
    let storage = use_context_provider(default_storage);
    let config = use_context_provider(ClientConfig::from_env);
    let api = {
        let storage = storage.clone();
        use_context_provider(move || ApiClient::from_config(&config, storage))
    };
    let mut auth = use_context_provider(AuthContext::new);
    use_context_provider(QueryClient::new);
    use_context_provider(NotificationStore::new);
    use_context_provider(SelectedServer::new);
    use_context_provider(move || ThemeContext::new(storage));

    // Resolve the stored token once on startup
    use_hook(move || {
        spawn(async move {
            auth.restore(&api).await;
        })
    });

    rsx! {
        Title { "{SITE_NAME}" }
        document::Link { rel: "icon", href: FAVICON }
        document::Meta {
            name: "description",
            content: "{SITE_NAME}: {SITE_TAGLINE}"
        }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        Router::<Route> {}
    }
}
