use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaBell, FaMoon, FaSun},
    Icon,
};

use crate::client::{
    api::ApiClient,
    constant::SITE_NAME,
    hook::use_notification_sync,
    model::{auth::AuthContext, notification::NotificationStore, theme::ThemeContext},
    router::Route,
    store::Theme,
};

#[component]
pub fn Header() -> Element {
    let auth = use_context::<AuthContext>();
    let loading = auth.read().is_loading();
    let user = auth.user();

    rsx!(div {
        class: "fixed flex justify-between gap-4 w-full h-20 py-2 px-4 bg-base-200 z-20",
        div {
            class: "flex items-center gap-6",
            Link {
                to: Route::Home {},
                div {
                    class: "flex items-center gap-3",
                    span { class: "text-3xl", "🛡️" }
                    p {
                        class: "md:text-xl font-semibold text-wrap",
                        {SITE_NAME}
                    }
                }
            }
            if user.is_some() {
                nav {
                    class: "hidden md:flex items-center gap-1",
                    Link { to: Route::Dashboard {}, class: "btn btn-ghost btn-sm", "Dashboard" }
                    Link { to: Route::Settings {}, class: "btn btn-ghost btn-sm", "Settings" }
                    Link { to: Route::HelpCenter {}, class: "btn btn-ghost btn-sm", "Help" }
                }
            }
        }
        div {
            class: "flex items-center gap-2",
            ThemeToggle {  }
            if let Some(user) = user {
                NotificationBell {  }
                UserMenu {
                    name: user.name().to_string(),
                    initial: user.initial(),
                    avatar: user.avatar.clone(),
                }
            } else if !loading {
                Link {
                    to: Route::Login {},
                    class: "btn btn-outline",
                    "Login"
                }
            }
        }
    })
}

#[component]
fn ThemeToggle() -> Element {
    let mut theme = use_context::<ThemeContext>();
    let dark = theme.current() == Theme::Dark;

    rsx!(button {
        class: "btn btn-ghost btn-circle",
        title: if dark { "Switch to light mode" } else { "Switch to dark mode" },
        onclick: move |_| theme.toggle(),
        if dark {
            Icon { width: 18, height: 18, icon: FaSun }
        } else {
            Icon { width: 18, height: 18, icon: FaMoon }
        }
    })
}

/// Unread badge. Owns the notification polling; the notification center
/// reads the same store, so an optimistic mark-all-read clears the badge too.
#[component]
fn NotificationBell() -> Element {
    let store = use_context::<NotificationStore>();
    use_notification_sync();

    let unread = store.unread_count();

    rsx!(Link {
        to: Route::Notifications {},
        class: "btn btn-ghost btn-circle",
        div {
            class: "indicator",
            Icon { width: 18, height: 18, icon: FaBell }
            if unread > 0 {
                span {
                    class: "badge badge-xs badge-error indicator-item",
                    if unread > 9 { "9+" } else { "{unread}" }
                }
            }
        }
    })
}

#[component]
fn UserMenu(name: String, initial: char, avatar: Option<String>) -> Element {
    let api = use_context::<ApiClient>();
    let mut auth = use_context::<AuthContext>();
    let nav = navigator();

    let logout = move |_| {
        let api = api.clone();
        spawn(async move {
            auth.logout(&api).await;
            nav.push(Route::Home {});
        });
    };

    rsx!(div {
        class: "dropdown dropdown-end",
        div {
            tabindex: "0",
            role: "button",
            class: "btn btn-ghost gap-2",
            if let Some(avatar) = avatar.filter(|a| a.starts_with("http")) {
                img { src: "{avatar}", alt: "{name}", class: "w-8 h-8 rounded-full" }
            } else {
                div {
                    class: "w-8 h-8 rounded-full bg-primary text-primary-content flex items-center justify-center font-bold",
                    "{initial}"
                }
            }
            span { class: "hidden sm:inline", "{name}" }
        }
        ul {
            tabindex: "0",
            class: "dropdown-content menu bg-base-100 rounded-box z-30 w-48 p-2 shadow",
            li { Link { to: Route::Dashboard {}, "Dashboard" } }
            li { Link { to: Route::Notifications {}, "Notifications" } }
            li { Link { to: Route::Profile {}, "Profile" } }
            li { button { onclick: logout, "Logout" } }
        }
    })
}
