use dioxus::prelude::*;

use crate::client::{
    component::page::LoadingPage,
    model::auth::{AuthContext, AuthState},
    router::Route,
};

#[component]
pub fn RequiresLoggedIn() -> Element {
    let auth = use_context::<AuthContext>();
    let nav = navigator();

    // Redirect once the session check has finished without a user
    use_effect(move || {
        if matches!(*auth.read(), AuthState::Unauthenticated) {
            nav.replace(Route::Login {});
        }
    });

    let state = (*auth.read()).clone();

    rsx! {
        match state {
            AuthState::Authenticated(_) => rsx! { Outlet::<Route> {} },
            // Loading, or rendering nothing while the redirect happens
            _ => rsx! { LoadingPage {} },
        }
    }
}
