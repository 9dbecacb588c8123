//! Q&A site (Stack Exchange) reputation adapter

use anyhow::Result;
use serde::Deserialize;
use std::collections::BTreeMap;
use tracing::{debug, warn};
use url::Url;

use super::endpoint;
use super::http::{UpstreamHttpClient, UpstreamReply};
use crate::models::{QaProfile, SourceResult};

pub const DEFAULT_STACKEXCHANGE_API_URL: &str = "https://api.stackexchange.com";
pub const DEFAULT_STACKEXCHANGE_SITE: &str = "stackoverflow";

#[derive(Debug, Deserialize)]
struct UsersResponse {
    #[serde(default)]
    items: Vec<UserItem>,
}

#[derive(Debug, Deserialize)]
struct UserItem {
    #[serde(default)]
    reputation: Option<i64>,
    #[serde(default)]
    badge_counts: Option<BTreeMap<String, u64>>,
}

#[derive(Debug, Clone)]
pub struct StackExchangeClient {
    http: UpstreamHttpClient,
    base_url: Url,
    site: String,
}

impl StackExchangeClient {
    pub fn new(http: UpstreamHttpClient, base_url: Url, site: impl Into<String>) -> Self {
        Self {
            http,
            base_url,
            site: site.into(),
        }
    }

    /// Look up a user by id; no call is made when `user_id` is `None`
    pub async fn fetch_profile(&self, user_id: Option<&str>) -> SourceResult<QaProfile> {
        let Some(user_id) = user_id else {
            return SourceResult::Absent;
        };

        match self.lookup(user_id).await {
            Ok(Some(profile)) => SourceResult::Present(profile),
            Ok(None) => SourceResult::Unavailable,
            Err(e) => {
                warn!(user_id = %user_id, error = %format!("{:#}", e), "StackOverflow API error");
                SourceResult::Unavailable
            }
        }
    }

    async fn lookup(&self, user_id: &str) -> Result<Option<QaProfile>> {
        let mut url = endpoint(
            &self.base_url,
            &format!("2.3/users/{}", urlencoding::encode(user_id)),
        )?;
        url.query_pairs_mut().append_pair("site", &self.site);

        let response: UsersResponse = match self.http.get_json(url).await? {
            UpstreamReply::Success(response) => response,
            UpstreamReply::Rejected(status) => {
                debug!(user_id = %user_id, status = %status.as_u16(), "StackOverflow user not available");
                return Ok(None);
            }
        };

        let Some(user) = response.items.into_iter().next() else {
            debug!(user_id = %user_id, "StackOverflow user not found");
            return Ok(None);
        };

        Ok(Some(QaProfile {
            user_id: user_id.to_string(),
            reputation: user.reputation,
            badge_counts: user.badge_counts,
        }))
    }
}
