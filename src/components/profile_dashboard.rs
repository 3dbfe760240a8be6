use dioxus::logger::tracing::error;
use dioxus::prelude::*;

use crate::api::{fetch_page_info, fetch_page_insights, fetch_pages, fetch_user_identity};
use crate::components::{AuthWidget, MetricCard};
use crate::state::{find_page_token, non_empty, AuthSession, PageSelection, Session};

/// Owns the whole dashboard state and sequences the Graph calls:
/// login -> page list + identity, selection -> token resolution + page info
/// + insights, date change -> insights only. Every remote failure is logged
/// and swallowed; the affected state keeps its previous value.
#[allow(non_snake_case)]
#[component]
pub fn ProfileDashboard() -> Element {
    let session = use_signal(|| Session::Unauthenticated);
    let since = use_signal(String::new);
    let until = use_signal(String::new);
    // Request generations per fetch slot. A response only lands if no newer
    // request has been issued for the same slot, so late arrivals from an
    // abandoned selection cannot overwrite fresher data.
    let info_gen = use_signal(|| 0u64);
    let metrics_gen = use_signal(|| 0u64);

    let current = session();

    rsx! {
        div { class: "profile-dashboard",
            {
                match current {
                    Session::Unauthenticated => rsx! {
                        AuthWidget {
                            on_login: move |credential: String| start_session(session, credential),
                        }
                    },
                    Session::Authenticated(auth) => {
                        let selected_id = auth
                            .selected
                            .as_ref()
                            .map(|sel| sel.page_id.clone())
                            .unwrap_or_default();
                        let AuthSession { user, pages, selected, .. } = auth;
                        let welcome = match &user {
                            Some(user) => format!("Welcome, {}", user.name),
                            None => "Welcome".to_string(),
                        };
                        rsx! {
                            header { class: "identity-header",
                                h2 { "{welcome}" }
                                if let Some(user) = &user {
                                    img {
                                        class: "identity-avatar",
                                        src: "{user.picture_url}",
                                        alt: "Profile",
                                    }
                                }
                            }
                            div { class: "controls",
                                div { class: "page-picker",
                                    label { r#for: "page-select", "Select Page:" }
                                    select {
                                        id: "page-select",
                                        value: "{selected_id}",
                                        onchange: move |evt| {
                                            select_page(
                                                session,
                                                info_gen,
                                                metrics_gen,
                                                non_empty(since()),
                                                non_empty(until()),
                                                evt.value(),
                                            );
                                        },
                                        option { value: "", "Select a page" }
                                        for page in pages {
                                            option { key: "{page.id}", value: "{page.id}", "{page.name}" }
                                        }
                                    }
                                }
                                div { class: "date-range",
                                    div { class: "date-field",
                                        label { r#for: "since-date", "Since Date:" }
                                        input {
                                            id: "since-date",
                                            r#type: "date",
                                            value: "{since}",
                                            onchange: move |evt| {
                                                let mut since = since;
                                                since.set(evt.value());
                                                refresh_insights(
                                                    session,
                                                    metrics_gen,
                                                    non_empty(since()),
                                                    non_empty(until()),
                                                );
                                            },
                                        }
                                    }
                                    div { class: "date-field",
                                        label { r#for: "until-date", "Until Date:" }
                                        input {
                                            id: "until-date",
                                            r#type: "date",
                                            value: "{until}",
                                            onchange: move |evt| {
                                                let mut until = until;
                                                until.set(evt.value());
                                                refresh_insights(
                                                    session,
                                                    metrics_gen,
                                                    non_empty(since()),
                                                    non_empty(until()),
                                                );
                                            },
                                        }
                                    }
                                }
                            }
                            if let Some(sel) = selected {
                                if let Some(info) = &sel.info {
                                    section { class: "page-card",
                                        h3 { "Page Info" }
                                        p { "Name: {info.name}" }
                                        img {
                                            class: "page-avatar",
                                            src: "{info.picture_url}",
                                            alt: "Page profile",
                                        }
                                    }
                                }
                                if let Some(metrics) = &sel.metrics {
                                    section { class: "page-insights",
                                        h3 { "Page Insights" }
                                        div { class: "metrics-grid",
                                            MetricCard { label: "Followers", value: metrics.followers }
                                            MetricCard { label: "Engagement", value: metrics.engagement }
                                            MetricCard { label: "Impressions", value: metrics.impressions }
                                            MetricCard { label: "Reactions", value: metrics.reactions }
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
}

/// Transition to the authenticated state, then run exactly one page-list
/// fetch and one identity fetch. The two are independent: either can fail
/// without touching what the other produced.
fn start_session(mut session: Signal<Session>, credential: String) {
    session.set(Session::Authenticated(AuthSession::new(credential.clone())));
    spawn(async move {
        match fetch_pages(credential.clone()).await {
            Ok(pages) => {
                if let Session::Authenticated(s) = &mut *session.write() {
                    s.pages = pages;
                }
            }
            Err(e) => error!("fetching user pages: {e}"),
        }
        match fetch_user_identity(credential).await {
            Ok(user) => {
                if let Session::Authenticated(s) = &mut *session.write() {
                    s.user = Some(user);
                }
            }
            Err(e) => error!("fetching user identity: {e}"),
        }
    });
}

fn select_page(
    mut session: Signal<Session>,
    mut info_gen: Signal<u64>,
    mut metrics_gen: Signal<u64>,
    since: Option<String>,
    until: Option<String>,
    page_id: String,
) {
    let credential = {
        let mut guard = session.write();
        let Session::Authenticated(s) = &mut *guard else {
            return;
        };
        s.select(&page_id);
        s.credential.clone()
    };
    if page_id.is_empty() {
        return;
    }
    let my_info = info_gen() + 1;
    info_gen.set(my_info);
    let my_metrics = metrics_gen() + 1;
    metrics_gen.set(my_metrics);
    spawn(async move {
        // The page token is re-derived from a fresh account list on every
        // selection instead of reusing the copy fetched at login.
        let pages = match fetch_pages(credential).await {
            Ok(pages) => pages,
            Err(e) => {
                error!("fetching page list to resolve token for {page_id}: {e}");
                return;
            }
        };
        let Some(token) = find_page_token(&pages, &page_id).map(str::to_string) else {
            // The id stays selected; previous page info and metrics remain
            // on screen until some later fetch replaces them.
            error!("selected page {page_id} not found in freshly fetched page list");
            return;
        };
        if info_gen() == my_info {
            let token = token.clone();
            with_selection(session, |sel| sel.token = Some(token));
        }
        match fetch_page_info(page_id.clone(), token.clone()).await {
            Ok(info) => {
                if info_gen() == my_info {
                    with_selection(session, |sel| sel.info = Some(info));
                }
            }
            Err(e) => error!("fetching page info for {page_id}: {e}"),
        }
        match fetch_page_insights(page_id.clone(), token, since, until).await {
            Ok(metrics) => {
                if metrics_gen() == my_metrics {
                    with_selection(session, |sel| sel.metrics = Some(metrics));
                }
            }
            Err(e) => error!("fetching insights for {page_id}: {e}"),
        }
    });
}

/// Date-range edits re-issue the insights query only, for the token already
/// resolved for the current selection. Page info and identity are untouched.
fn refresh_insights(
    session: Signal<Session>,
    mut metrics_gen: Signal<u64>,
    since: Option<String>,
    until: Option<String>,
) {
    let (page_id, token) = {
        let guard = session.read();
        let Session::Authenticated(s) = &*guard else {
            return;
        };
        let Some(sel) = &s.selected else {
            return;
        };
        let Some(token) = &sel.token else {
            // Token resolution never completed for this selection, so there
            // is nothing valid to query with.
            return;
        };
        (sel.page_id.clone(), token.clone())
    };
    let my_metrics = metrics_gen() + 1;
    metrics_gen.set(my_metrics);
    spawn(async move {
        match fetch_page_insights(page_id.clone(), token, since, until).await {
            Ok(metrics) => {
                if metrics_gen() == my_metrics {
                    with_selection(session, |sel| sel.metrics = Some(metrics));
                }
            }
            Err(e) => error!("refreshing insights for {page_id}: {e}"),
        }
    });
}

fn with_selection(mut session: Signal<Session>, apply: impl FnOnce(&mut PageSelection)) {
    if let Session::Authenticated(s) = &mut *session.write() {
        if let Some(sel) = s.selected.as_mut() {
            apply(sel);
        }
    }
}
