use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        api::ApiClient,
        component::{page::LoadingPage, Flash, Page},
        constant::SITE_NAME,
        hook::dismiss_later,
        model::{auth::AuthContext, settings::FlashMessage},
    },
    model::user::{UpdateProfileDto, UserDto, UserPreferencesDto},
};

#[component]
pub fn Profile() -> Element {
    let auth = use_context::<AuthContext>();

    let Some(user) = auth.user() else {
        return rsx!(LoadingPage {});
    };

    rsx! {
        Title { "Profile | {SITE_NAME}" }
        Page {
            class: "max-w-3xl mx-auto flex flex-col gap-6",
            ProfileHeader { user: user.clone() }
            ProfileForm { key: "{user.id}", user: user.clone() }
            PreferencesForm {}
            if !user.servers.is_empty() {
                div {
                    class: "card bg-base-200",
                    div {
                        class: "card-body",
                        h2 { class: "card-title", "Your servers" }
                        ul {
                            class: "flex flex-col gap-2",
                            for server in user.servers.iter() {
                                li {
                                    key: "{server.id}",
                                    class: "flex items-center gap-3",
                                    if let Some(icon) = server.icon_url() {
                                        img { src: "{icon}", alt: "", class: "w-8 h-8 rounded-full" }
                                    } else {
                                        div {
                                            class: "w-8 h-8 rounded-full bg-base-300 flex items-center justify-center",
                                            "{server.initial()}"
                                        }
                                    }
                                    span { "{server.name}" }
                                    if server.owner {
                                        span { class: "badge badge-sm badge-outline", "Owner" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ProfileHeader(user: UserDto) -> Element {
    rsx!(div {
        class: "flex items-center gap-4",
        if let Some(avatar) = user.avatar.clone().filter(|a| a.starts_with("http")) {
            img { src: "{avatar}", alt: "", class: "w-20 h-20 rounded-full" }
        } else {
            div {
                class: "w-20 h-20 rounded-full bg-primary text-primary-content flex items-center justify-center text-3xl",
                "{user.initial()}"
            }
        }
        div {
            h1 { class: "text-3xl font-bold", "{user.name()}" }
            p { class: "opacity-70", "@{user.username}" }
            if user.verified {
                span { class: "badge badge-success badge-sm", "Verified" }
            }
        }
    })
}

#[component]
fn ProfileForm(user: UserDto) -> Element {
    let api = use_context::<ApiClient>();
    let mut auth = use_context::<AuthContext>();
    let mut display_name = use_signal(|| user.display_name.clone().unwrap_or_default());
    let mut email = use_signal(|| user.email.clone().unwrap_or_default());
    let mut flash = use_signal(|| None::<FlashMessage>);
    let mut saving = use_signal(|| false);

    let save = move |evt: FormEvent| {
        evt.prevent_default();
        let profile = UpdateProfileDto {
            display_name: display_name().trim().to_string(),
            email: email().trim().to_string(),
        };
        let api = api.clone();
        saving.set(true);
        spawn(async move {
            let message = match auth.update_profile(&api, &profile).await {
                Ok(()) => FlashMessage::success("Profile updated"),
                Err(err) => FlashMessage::error(err),
            };
            let after_ms = message.dismiss_after_ms();
            flash.set(Some(message));
            dismiss_later(flash, after_ms);
            saving.set(false);
        });
    };

    rsx!(form {
        class: "card bg-base-200",
        onsubmit: save,
        div {
            class: "card-body gap-2",
            h2 { class: "card-title", "Profile" }
            if let Some(message) = flash() {
                Flash { message }
            }
            fieldset {
                class: "fieldset",
                legend { class: "fieldset-legend", "Display name" }
                input {
                    r#type: "text",
                    class: "input input-bordered w-full",
                    value: "{display_name}",
                    oninput: move |evt| display_name.set(evt.value()),
                }
            }
            fieldset {
                class: "fieldset",
                legend { class: "fieldset-legend", "Email" }
                input {
                    r#type: "email",
                    class: "input input-bordered w-full",
                    value: "{email}",
                    oninput: move |evt| email.set(evt.value()),
                }
            }
            div {
                class: "card-actions justify-end",
                button {
                    r#type: "submit",
                    class: "btn btn-primary",
                    disabled: saving(),
                    if saving() {
                        span { class: "loading loading-spinner loading-sm" }
                    }
                    "Save Profile"
                }
            }
        }
    })
}

#[component]
fn PreferencesForm() -> Element {
    let api = use_context::<ApiClient>();
    let mut preferences = use_signal(UserPreferencesDto::default);
    let mut flash = use_signal(|| None::<FlashMessage>);
    let mut saving = use_signal(|| false);

    let save = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        let current = preferences();
        saving.set(true);
        spawn(async move {
            let message = match api.update_user_preferences(&current).await {
                Ok(()) => FlashMessage::success("Preferences saved"),
                Err(err) => {
                    tracing::error!("Failed to save preferences: {}", err);
                    FlashMessage::error(format!("Failed to save preferences: {}", err.user_message()))
                }
            };
            let after_ms = message.dismiss_after_ms();
            flash.set(Some(message));
            dismiss_later(flash, after_ms);
            saving.set(false);
        });
    };

    let current = preferences();

    rsx!(form {
        class: "card bg-base-200",
        onsubmit: save,
        div {
            class: "card-body gap-2",
            h2 { class: "card-title", "Notification preferences" }
            if let Some(message) = flash() {
                Flash { message }
            }
            PreferenceToggle {
                label: "Email notifications",
                checked: current.email_notifications,
                on_change: move |v| preferences.with_mut(|p| p.email_notifications = v),
            }
            PreferenceToggle {
                label: "Violation alerts",
                checked: current.violation_alerts,
                on_change: move |v| preferences.with_mut(|p| p.violation_alerts = v),
            }
            PreferenceToggle {
                label: "Daily reports",
                checked: current.daily_reports,
                on_change: move |v| preferences.with_mut(|p| p.daily_reports = v),
            }
            PreferenceToggle {
                label: "System updates",
                checked: current.system_updates,
                on_change: move |v| preferences.with_mut(|p| p.system_updates = v),
            }
            div {
                class: "card-actions justify-end",
                button {
                    r#type: "submit",
                    class: "btn btn-primary",
                    disabled: saving(),
                    "Save Preferences"
                }
            }
        }
    })
}

#[component]
fn PreferenceToggle(label: &'static str, checked: bool, on_change: EventHandler<bool>) -> Element {
    rsx!(label {
        class: "flex items-center justify-between cursor-pointer py-1",
        span { "{label}" }
        input {
            r#type: "checkbox",
            class: "toggle toggle-primary",
            checked,
            onchange: move |evt| on_change.call(evt.checked()),
        }
    })
}
