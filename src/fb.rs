#![cfg(feature = "web")]
//! Bindings to the Facebook JS SDK (`window.FB`). The SDK script is loaded
//! from `app.rs`; everything here assumes it may not have finished loading
//! yet and reports failures instead of panicking.

use std::cell::Cell;

use js_sys::{Function, Object, Reflect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

pub const APP_ID: &str = "498205042625757";
pub const GRAPH_VERSION: &str = "v20.0";
pub const LOGIN_SCOPES: &str = "public_profile,email,pages_show_list,pages_read_engagement,pages_read_user_content,pages_manage_metadata";

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = FB, js_name = init, catch)]
    fn fb_init(params: &JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(js_namespace = FB, js_name = login, catch)]
    fn fb_login(callback: &Function, params: &JsValue) -> Result<(), JsValue>;
}

thread_local! {
    static INITIALIZED: Cell<bool> = const { Cell::new(false) };
}

fn ensure_init() -> Result<(), JsValue> {
    if INITIALIZED.with(|c| c.get()) {
        return Ok(());
    }
    let params = Object::new();
    Reflect::set(&params, &"appId".into(), &APP_ID.into())?;
    Reflect::set(&params, &"version".into(), &GRAPH_VERSION.into())?;
    fb_init(&params)?;
    INITIALIZED.with(|c| c.set(true));
    Ok(())
}

/// Extract the bearer token from a login response of shape
/// `{authResponse: {accessToken}}`. Denied logins carry a null authResponse.
fn access_token(response: &JsValue) -> Option<String> {
    let auth = Reflect::get(response, &"authResponse".into()).ok()?;
    if auth.is_null() || auth.is_undefined() {
        return None;
    }
    let token = Reflect::get(&auth, &"accessToken".into()).ok()?;
    token.as_string().filter(|t| !t.is_empty())
}

/// Run the login handshake. `done` fires at most once per call: `Ok(token)`
/// on success, `Err` when the handshake was denied or the SDK is missing.
pub fn login(scopes: &str, done: impl FnOnce(Result<String, String>) + 'static) {
    if let Err(e) = ensure_init() {
        done(Err(format!("FB.init failed: {e:?}")));
        return;
    }
    let callback = Closure::once_into_js(move |response: JsValue| {
        match access_token(&response) {
            Some(token) => done(Ok(token)),
            None => done(Err("login response carried no access token".into())),
        }
    });
    let params = Object::new();
    let _ = Reflect::set(&params, &"scope".into(), &scopes.into());
    if let Err(e) = fb_login(callback.unchecked_ref(), &params) {
        // the once-closure already consumed `done`; just report
        dioxus::logger::tracing::error!("FB.login call failed: {e:?}");
    }
}
