use dioxus::prelude::*;

#[cfg(feature = "web")]
use dioxus::logger::tracing::error;

/// Login affordance wrapping the third-party OAuth widget. On a successful
/// handshake `on_login` fires exactly once with the bearer token; a denied
/// or failed handshake is logged and nothing else happens. Every click is an
/// independent attempt.
#[allow(non_snake_case)]
#[component]
pub fn AuthWidget(on_login: EventHandler<String>) -> Element {
    rsx! {
        div { class: "login-panel",
            h1 { class: "login-title", "Page Insights" }
            button {
                class: "facebook-button",
                onclick: move |_| {
                    #[cfg(feature = "web")]
                    crate::fb::login(crate::fb::LOGIN_SCOPES, move |result| match result {
                        Ok(token) => on_login.call(token),
                        Err(e) => error!("facebook login failed: {e}"),
                    });
                    #[cfg(not(feature = "web"))]
                    let _ = &on_login;
                },
                "Login with Facebook"
            }
        }
    }
}
