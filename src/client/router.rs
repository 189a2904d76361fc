use dioxus::prelude::*;

use crate::client::component::{Layout, RequiresLoggedIn};
use crate::client::route::{
    ApiDocs, AuthCallback, Dashboard, Documentation, HelpCenter, Home, Login, NotFound,
    Notifications, Privacy, Profile, Settings, Terms,
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    #[route("/")]
    Home {},

    #[route("/login")]
    Login {},

    #[route("/auth/callback?:..query")]
    AuthCallback { query: String },

    #[layout(RequiresLoggedIn)]
        #[route("/dashboard")]
        Dashboard {},

        #[route("/settings")]
        Settings {},

        #[route("/notifications")]
        Notifications {},

        #[route("/profile")]
        Profile {},
    #[end_layout]

    #[route("/help")]
    HelpCenter {},

    #[route("/docs")]
    Documentation {},

    #[route("/api-docs")]
    ApiDocs {},

    #[route("/terms")]
    Terms {},

    #[route("/privacy")]
    Privacy {},

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
