//! Session state for the dashboard.
//!
//! The state is a tagged enum rather than a bag of optional fields, so
//! combinations like "page info present but nothing selected" are not
//! representable. Within a selection, `info` and `metrics` stay at their
//! previous values until the next fetch lands (or fails, in which case they
//! keep showing the last good data).

use crate::shared::types::{InsightMetricsDto, PageDto, PageInfoDto, UserIdentityDto};

#[derive(Debug, Clone, PartialEq)]
pub enum Session {
    Unauthenticated,
    Authenticated(AuthSession),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AuthSession {
    pub credential: String,
    pub user: Option<UserIdentityDto>,
    pub pages: Vec<PageDto>,
    pub selected: Option<PageSelection>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageSelection {
    pub page_id: String,
    /// Page token resolved from a fresh account-list fetch for this
    /// selection. `None` until resolution succeeds.
    pub token: Option<String>,
    pub info: Option<PageInfoDto>,
    pub metrics: Option<InsightMetricsDto>,
}

impl AuthSession {
    pub fn new(credential: String) -> Self {
        AuthSession {
            credential,
            user: None,
            pages: Vec::new(),
            selected: None,
        }
    }

    /// Record a new selection. The id updates immediately even if it later
    /// turns out not to exist; prior info/metrics are carried over and stay
    /// on screen until a fetch replaces them. An empty id means "no page
    /// chosen" and clears the selection.
    pub fn select(&mut self, page_id: &str) {
        if page_id.is_empty() {
            self.selected = None;
            return;
        }
        let (info, metrics) = match self.selected.take() {
            Some(prev) => (prev.info, prev.metrics),
            None => (None, None),
        };
        self.selected = Some(PageSelection {
            page_id: page_id.to_string(),
            token: None,
            info,
            metrics,
        });
    }
}

/// Resolve the page-specific access token for `page_id` from a freshly
/// fetched page list.
pub fn find_page_token<'a>(pages: &'a [PageDto], page_id: &str) -> Option<&'a str> {
    pages
        .iter()
        .find(|p| p.id == page_id)
        .map(|p| p.access_token.as_str())
}

/// Date inputs yield empty strings when unset; an unset bound is dropped
/// from the insights query entirely.
pub fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(id: &str, name: &str, token: &str) -> PageDto {
        PageDto {
            id: id.to_string(),
            name: name.to_string(),
            access_token: token.to_string(),
        }
    }

    #[test]
    fn token_resolves_for_a_listed_page() {
        let pages = vec![page("P1", "Shop", "A1")];
        assert_eq!(find_page_token(&pages, "P1"), Some("A1"));
    }

    #[test]
    fn token_resolution_fails_for_an_unlisted_page() {
        let pages = vec![page("P1", "Shop", "A1")];
        assert_eq!(find_page_token(&pages, "P9"), None);
    }

    #[test]
    fn selecting_updates_the_id_and_carries_over_prior_data() {
        let mut s = AuthSession::new("T1".into());
        s.select("P1");
        let sel = s.selected.as_mut().unwrap();
        sel.info = Some(PageInfoDto {
            id: "P1".into(),
            name: "Shop".into(),
            picture_url: "u".into(),
        });
        sel.metrics = Some(InsightMetricsDto {
            followers: Some(120),
            ..Default::default()
        });

        // An id missing from the page list still lands in state; the old
        // info/metrics remain displayed until some later fetch replaces them.
        s.select("P9");
        let sel = s.selected.as_ref().unwrap();
        assert_eq!(sel.page_id, "P9");
        assert_eq!(sel.token, None);
        assert_eq!(sel.info.as_ref().unwrap().id, "P1");
        assert_eq!(sel.metrics.as_ref().unwrap().followers, Some(120));
    }

    #[test]
    fn selecting_the_placeholder_clears_the_selection() {
        let mut s = AuthSession::new("T1".into());
        s.select("P1");
        s.select("");
        assert_eq!(s.selected, None);
    }

    #[test]
    fn unset_date_bounds_are_dropped() {
        assert_eq!(non_empty(String::new()), None);
        assert_eq!(non_empty("2024-01-01".into()), Some("2024-01-01".into()));
    }
}
