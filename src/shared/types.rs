use serde::{Deserialize, Serialize};

/// One managed page from `/me/accounts`. Carries its own page access token,
/// which is what page-info and insights calls authenticate with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageDto {
    pub id: String,
    pub name: String,
    pub access_token: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserIdentityDto {
    pub name: String,
    #[serde(rename = "pictureUrl")]
    pub picture_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageInfoDto {
    pub id: String,
    pub name: String,
    #[serde(rename = "pictureUrl")]
    pub picture_url: String,
}

/// The four displayed counters. Fields the API left out stay `None` and
/// render as empty, never as zero.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InsightMetricsDto {
    pub followers: Option<i64>,
    pub engagement: Option<i64>,
    pub impressions: Option<i64>,
    pub reactions: Option<i64>,
}

// ---- Graph API wire shapes ----

#[derive(Debug, Clone, Deserialize)]
pub struct AccountsEnvelope {
    pub data: Vec<PageDto>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PictureData {
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PictureEnvelope {
    pub data: PictureData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserEnvelope {
    pub name: String,
    pub picture: PictureEnvelope,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PageInfoEnvelope {
    pub id: String,
    pub name: String,
    pub picture: PictureEnvelope,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct InsightRecord {
    #[serde(default)]
    pub page_fans: Option<i64>,
    #[serde(default)]
    pub page_engaged_users: Option<i64>,
    #[serde(default)]
    pub page_impressions: Option<i64>,
    #[serde(default)]
    pub page_actions_post_reactions_total: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InsightsEnvelope {
    pub data: Vec<InsightRecord>,
}

impl From<UserEnvelope> for UserIdentityDto {
    fn from(u: UserEnvelope) -> Self {
        UserIdentityDto {
            name: u.name,
            picture_url: u.picture.data.url,
        }
    }
}

impl From<PageInfoEnvelope> for PageInfoDto {
    fn from(p: PageInfoEnvelope) -> Self {
        PageInfoDto {
            id: p.id,
            name: p.name,
            picture_url: p.picture.data.url,
        }
    }
}

impl From<InsightRecord> for InsightMetricsDto {
    fn from(r: InsightRecord) -> Self {
        InsightMetricsDto {
            followers: r.page_fans,
            engagement: r.page_engaged_users,
            impressions: r.page_impressions,
            reactions: r.page_actions_post_reactions_total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accounts_envelope_keeps_page_tokens() {
        let json = r#"{"data":[{"id":"P1","name":"Shop","access_token":"A1"}]}"#;
        let env: AccountsEnvelope = serde_json::from_str(json).unwrap();
        assert_eq!(env.data.len(), 1);
        assert_eq!(env.data[0].id, "P1");
        assert_eq!(env.data[0].access_token, "A1");
    }

    #[test]
    fn user_envelope_flattens_nested_picture_url() {
        let json = r#"{"name":"Ada","picture":{"data":{"url":"https://cdn/x.jpg"}}}"#;
        let env: UserEnvelope = serde_json::from_str(json).unwrap();
        let dto: UserIdentityDto = env.into();
        assert_eq!(dto.name, "Ada");
        assert_eq!(dto.picture_url, "https://cdn/x.jpg");
    }

    #[test]
    fn insight_record_maps_fields_verbatim() {
        let json = r#"{"page_fans":120,"page_engaged_users":7,"page_impressions":300,"page_actions_post_reactions_total":9}"#;
        let rec: InsightRecord = serde_json::from_str(json).unwrap();
        let dto: InsightMetricsDto = rec.into();
        assert_eq!(dto.followers, Some(120));
        assert_eq!(dto.engagement, Some(7));
        assert_eq!(dto.impressions, Some(300));
        assert_eq!(dto.reactions, Some(9));
    }

    #[test]
    fn missing_reactions_stays_none_not_zero() {
        let json = r#"{"page_fans":120,"page_engaged_users":7,"page_impressions":300}"#;
        let rec: InsightRecord = serde_json::from_str(json).unwrap();
        let dto: InsightMetricsDto = rec.into();
        assert_eq!(dto.reactions, None);
    }

    #[test]
    fn empty_insights_data_yields_all_none() {
        let json = r#"{"data":[]}"#;
        let env: InsightsEnvelope = serde_json::from_str(json).unwrap();
        let dto = env
            .data
            .into_iter()
            .next()
            .map(InsightMetricsDto::from)
            .unwrap_or_default();
        assert_eq!(dto, InsightMetricsDto::default());
    }
}
