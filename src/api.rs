use dioxus::prelude::*;

use crate::shared::types::{InsightMetricsDto, PageDto, PageInfoDto, UserIdentityDto};

#[server(FetchPages)]
pub async fn fetch_pages(access_token: String) -> Result<Vec<PageDto>, ServerFnError> {
    #[cfg(feature = "server")]
    {
        use crate::backend::graph;
        graph::get_accounts(&access_token)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))
    }
    #[cfg(not(feature = "server"))]
    {
        let _ = access_token;
        Ok(vec![])
    }
}

#[server(FetchUserIdentity)]
pub async fn fetch_user_identity(access_token: String) -> Result<UserIdentityDto, ServerFnError> {
    #[cfg(feature = "server")]
    {
        use crate::backend::graph;
        graph::get_user_identity(&access_token)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))
    }
    #[cfg(not(feature = "server"))]
    {
        let _ = access_token;
        Err(ServerFnError::new("server feature disabled"))
    }
}

#[server(FetchPageInfo)]
pub async fn fetch_page_info(
    page_id: String,
    page_token: String,
) -> Result<PageInfoDto, ServerFnError> {
    #[cfg(feature = "server")]
    {
        use crate::backend::graph;
        graph::get_page_info(&page_id, &page_token)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))
    }
    #[cfg(not(feature = "server"))]
    {
        let _ = (page_id, page_token);
        Err(ServerFnError::new("server feature disabled"))
    }
}

#[server(FetchPageInsights)]
pub async fn fetch_page_insights(
    page_id: String,
    page_token: String,
    since: Option<String>,
    until: Option<String>,
) -> Result<InsightMetricsDto, ServerFnError> {
    #[cfg(feature = "server")]
    {
        use crate::backend::graph;
        graph::get_page_insights(&page_id, &page_token, since.as_deref(), until.as_deref())
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))
    }
    #[cfg(not(feature = "server"))]
    {
        let _ = (page_id, page_token, since, until);
        Err(ServerFnError::new("server feature disabled"))
    }
}
