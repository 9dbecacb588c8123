//! Code-host (GitHub) profile adapter

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::{debug, warn};
use url::Url;

use super::endpoint;
use super::http::{UpstreamHttpClient, UpstreamReply};
use crate::models::{CodeHostProfile, SourceResult};
use crate::reputation::age::{account_age_years, parse_code_host_timestamp};

pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";

/// Subset of the `/users/{username}` payload we read
#[derive(Debug, Deserialize)]
struct GithubUser {
    created_at: String,
    #[serde(default)]
    public_repos: Option<u64>,
    #[serde(default)]
    followers: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct GithubClient {
    http: UpstreamHttpClient,
    base_url: Url,
}

impl GithubClient {
    pub fn new(http: UpstreamHttpClient, base_url: Url) -> Self {
        Self { http, base_url }
    }

    /// Look up a profile; no call is made when `username` is `None`
    pub async fn fetch_profile(&self, username: Option<&str>) -> SourceResult<CodeHostProfile> {
        let Some(username) = username else {
            return SourceResult::Absent;
        };

        match self.lookup(username, Utc::now()).await {
            Ok(Some(profile)) => SourceResult::Present(profile),
            Ok(None) => SourceResult::Unavailable,
            Err(e) => {
                warn!(username = %username, error = %format!("{:#}", e), "GitHub API error");
                SourceResult::Unavailable
            }
        }
    }

    async fn lookup(
        &self,
        username: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<CodeHostProfile>> {
        let url = endpoint(
            &self.base_url,
            &format!("users/{}", urlencoding::encode(username)),
        )?;

        let user: GithubUser = match self.http.get_json(url).await? {
            UpstreamReply::Success(user) => user,
            UpstreamReply::Rejected(status) => {
                debug!(username = %username, status = %status.as_u16(), "GitHub user not available");
                return Ok(None);
            }
        };

        let created_at = parse_code_host_timestamp(&user.created_at)
            .context("GitHub returned an unexpected created_at")?;

        Ok(Some(CodeHostProfile {
            username: username.to_string(),
            account_age_years: account_age_years(created_at, now),
            public_repos: user.public_repos,
            followers: user.followers,
        }))
    }
}
