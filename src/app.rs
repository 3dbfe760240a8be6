use dioxus::prelude::*;

use crate::components::ProfileDashboard;
use crate::{FAVICON, MAIN_CSS};

#[allow(non_snake_case)]
#[component]
pub fn App() -> Element {
    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Stylesheet { href: MAIN_CSS }
        document::Meta { name: "theme-color", content: "#020618" } // slate-950
        document::Meta { name: "color-scheme", content: "dark" }
        // The widget binds against window.FB once the SDK script has loaded
        document::Script { src: "https://connect.facebook.net/en_US/sdk.js" }
        div { class: "page-shell",
            ProfileDashboard {}
        }
    }
}
