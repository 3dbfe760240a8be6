#![cfg(feature = "server")]
use anyhow::{anyhow, Context, Result};
use once_cell::sync::Lazy;
use reqwest::Client;
use serde::Deserialize;
use std::env;
use std::error::Error as _;

use crate::shared::query::{accounts_path, insights_path, page_info_path, user_path};
use crate::shared::types::{
    AccountsEnvelope, InsightMetricsDto, InsightsEnvelope, PageDto, PageInfoDto, PageInfoEnvelope,
    UserEnvelope, UserIdentityDto,
};

static CLIENT: Lazy<Client> = Lazy::new(|| {
    Client::builder()
        .connect_timeout(std::time::Duration::from_secs(2))
        .timeout(std::time::Duration::from_secs(10))
        .build()
        .expect("client")
});

fn base_url() -> String {
    env::var("GRAPH_BASE_URL").unwrap_or_else(|_| "https://graph.facebook.com/v20.0".to_string())
}

pub async fn fetch_graph<T: for<'de> Deserialize<'de> + Send + 'static>(path: &str) -> Result<T> {
    let url = format!("{}{}", base_url(), path);
    // tokens ride in the query string, so only the path is logged
    let display = url.split('?').next().unwrap_or(&url).to_string();
    eprintln!("[graph] GET {}", display);
    let res = match CLIENT
        .get(&url)
        .header("Cache-Control", "no-store")
        .send()
        .await
    {
        Ok(r) => r,
        Err(e) => {
            eprintln!("[graph] request error on GET {}: {}", display, e);
            if e.is_timeout() {
                eprintln!("[graph] hint: request timed out (client timeout ~10s)");
            }
            if e.is_connect() {
                eprintln!("[graph] hint: connection failed (DNS/route/refused/TLS)");
            }
            let mut chain = Vec::new();
            let mut src: Option<&dyn std::error::Error> = e.source();
            while let Some(s) = src {
                chain.push(s.to_string());
                src = s.source();
            }
            if !chain.is_empty() {
                eprintln!("[graph] error chain: {}", chain.join(" -> "));
            }
            return Err(anyhow!("sending GET {}: {}", display, e));
        }
    };
    if !res.status().is_success() {
        let status = res.status();
        let text = res.text().await.unwrap_or_default();
        eprintln!("[graph] request failed: status={} body=\n{}", status, text);
        return Err(anyhow!("GET {} failed with status {}", display, status));
    }
    let bytes = res
        .bytes()
        .await
        .with_context(|| format!("reading body from GET {}", display))?;
    let data: T = serde_json::from_slice(&bytes).map_err(|e| {
        let snip = String::from_utf8_lossy(&bytes);
        let snip = snip.chars().take(300).collect::<String>();
        anyhow!(
            "decoding JSON from GET {} failed: {}\nBody snippet: {}",
            display,
            e,
            snip
        )
    })?;
    Ok(data)
}

pub async fn get_accounts(token: &str) -> Result<Vec<PageDto>> {
    let envelope: AccountsEnvelope = fetch_graph(&accounts_path(token)).await?;
    Ok(envelope.data)
}

pub async fn get_user_identity(token: &str) -> Result<UserIdentityDto> {
    let envelope: UserEnvelope = fetch_graph(&user_path(token)).await?;
    Ok(envelope.into())
}

pub async fn get_page_info(page_id: &str, token: &str) -> Result<PageInfoDto> {
    let envelope: PageInfoEnvelope = fetch_graph(&page_info_path(page_id, token)).await?;
    Ok(envelope.into())
}

/// The insights endpoint answers with a `data` array; the four counters all
/// live on its first record. An empty array maps to an all-empty record.
pub async fn get_page_insights(
    page_id: &str,
    token: &str,
    since: Option<&str>,
    until: Option<&str>,
) -> Result<InsightMetricsDto> {
    let envelope: InsightsEnvelope =
        fetch_graph(&insights_path(page_id, token, since, until)).await?;
    Ok(envelope
        .data
        .into_iter()
        .next()
        .map(InsightMetricsDto::from)
        .unwrap_or_default())
}
