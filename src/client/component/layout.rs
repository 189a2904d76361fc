use dioxus::prelude::*;

use crate::client::{
    component::Header,
    constant::{SITE_NAME, SUPPORT_EMAIL},
    router::Route,
};

#[component]
pub fn Layout() -> Element {
    rsx!(div {
        class: "flex flex-col min-h-screen",
        Header {  }
        main {
            class: "flex-1",
            Outlet::<Route> {}
        }
        Footer {  }
    })
}

#[component]
fn Footer() -> Element {
    let year = chrono::Utc::now().format("%Y").to_string();

    rsx!(footer {
        class: "footer footer-center gap-4 p-6 bg-base-200 text-base-content",
        nav {
            class: "flex flex-wrap justify-center gap-4",
            Link { to: Route::HelpCenter {}, class: "link link-hover", "Help" }
            Link { to: Route::Documentation {}, class: "link link-hover", "Docs" }
            Link { to: Route::ApiDocs {}, class: "link link-hover", "API" }
            Link { to: Route::Terms {}, class: "link link-hover", "Terms" }
            Link { to: Route::Privacy {}, class: "link link-hover", "Privacy" }
            a { href: "mailto:{SUPPORT_EMAIL}", class: "link link-hover", "Contact" }
        }
        p {
            class: "text-sm opacity-60",
            "© {year} {SITE_NAME}"
        }
    })
}
