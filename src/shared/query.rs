//! Request paths for the Graph API, relative to the versioned base URL.
//!
//! Kept as pure string builders so the exact query shape (parameter order,
//! since/until omitted entirely when unset) is pinned by tests.

pub fn accounts_path(token: &str) -> String {
    format!("/me/accounts?access_token={token}")
}

pub fn user_path(token: &str) -> String {
    format!("/me?fields=name,picture.type(large)&access_token={token}")
}

pub fn page_info_path(page_id: &str, token: &str) -> String {
    format!("/{page_id}?fields=id,name,picture&access_token={token}")
}

/// Insights ask for a single named metric totalled over the given range.
/// `since`/`until` are optional; an absent bound is left out of the query,
/// no default range is substituted.
pub fn insights_path(
    page_id: &str,
    token: &str,
    since: Option<&str>,
    until: Option<&str>,
) -> String {
    let mut path = format!("/{page_id}/insights/page_impressions_unique?access_token={token}");
    if let Some(since) = since {
        path.push_str(&format!("&since={since}"));
    }
    if let Some(until) = until {
        path.push_str(&format!("&until={until}"));
    }
    path.push_str("&period=total_over_range");
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insights_path_appends_both_bounds() {
        let path = insights_path("P1", "A1", Some("2024-01-01"), Some("2024-02-01"));
        assert_eq!(
            path,
            "/P1/insights/page_impressions_unique?access_token=A1\
             &since=2024-01-01&until=2024-02-01&period=total_over_range"
        );
    }

    #[test]
    fn insights_path_omits_absent_bounds() {
        let path = insights_path("P1", "A1", None, None);
        assert!(!path.contains("since="));
        assert!(!path.contains("until="));
        assert!(path.ends_with("&period=total_over_range"));
    }

    #[test]
    fn insights_path_omits_only_the_missing_bound() {
        let path = insights_path("P1", "A1", Some("2024-01-01"), None);
        assert!(path.contains("&since=2024-01-01"));
        assert!(!path.contains("until="));
    }

    #[test]
    fn insights_path_is_idempotent() {
        let a = insights_path("P1", "A1", Some("2024-01-01"), Some("2024-02-01"));
        let b = insights_path("P1", "A1", Some("2024-01-01"), Some("2024-02-01"));
        assert_eq!(a, b);
    }

    #[test]
    fn other_paths_carry_the_token_as_query_param() {
        assert_eq!(accounts_path("T"), "/me/accounts?access_token=T");
        assert_eq!(
            user_path("T"),
            "/me?fields=name,picture.type(large)&access_token=T"
        );
        assert_eq!(
            page_info_path("P1", "A1"),
            "/P1?fields=id,name,picture&access_token=A1"
        );
    }
}
