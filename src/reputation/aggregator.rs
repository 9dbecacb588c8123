//! Reputation Aggregator - fans one query out to every upstream source
//!
//! The three adapters run concurrently and are always awaited to completion;
//! none of them can fail the request, so the join has no early exit.

use anyhow::Result;
use chrono::Utc;
use std::time::Instant;
use tracing::info;

use crate::config::GatewayConfig;
use crate::models::{AggregateReport, ReportData, ReputationQuery, SocialPlaceholder};
use crate::sources::{GithubClient, HeliusClient, StackExchangeClient, UpstreamHttpClient};

#[derive(Debug, Clone)]
pub struct ReputationAggregator {
    github: GithubClient,
    stackexchange: StackExchangeClient,
    helius: HeliusClient,
}

impl ReputationAggregator {
    pub fn new(
        github: GithubClient,
        stackexchange: StackExchangeClient,
        helius: HeliusClient,
    ) -> Self {
        Self {
            github,
            stackexchange,
            helius,
        }
    }

    /// Build all adapters over one shared HTTP client
    pub fn from_config(config: &GatewayConfig) -> Result<Self> {
        let upstream = &config.upstream;
        let http = UpstreamHttpClient::new(upstream.http_client_config())?;

        Ok(Self::new(
            GithubClient::new(http.clone(), upstream.github_url()?),
            StackExchangeClient::new(
                http.clone(),
                upstream.stackexchange_url()?,
                upstream.stackexchange_site.clone(),
            ),
            HeliusClient::new(http, upstream.helius_url()?, upstream.helius_api_key.clone()),
        ))
    }

    pub async fn aggregate(&self, query: &ReputationQuery) -> AggregateReport {
        let started = Instant::now();

        let (github, stackoverflow, solana) = tokio::join!(
            self.github.fetch_profile(query.github_username()),
            self.stackexchange.fetch_profile(query.stackoverflow_id()),
            self.helius.check_reputation(query.solana_address()),
        );

        info!(
            requested = query.requested_sources(),
            github = github.status(),
            stackoverflow = stackoverflow.status(),
            solana_verified = solana.is_verified,
            solana_failed = solana.is_failed(),
            duration_ms = %started.elapsed().as_millis(),
            "Reputation aggregated"
        );

        AggregateReport::assemble(
            ReportData {
                github,
                stackoverflow,
                solana,
                social_media: SocialPlaceholder::default(),
            },
            Utc::now(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LedgerReputation, SourceResult};

    #[tokio::test]
    async fn test_empty_query_makes_no_calls() {
        let mut config = GatewayConfig::default();
        // Unroutable upstreams: any call would come back Unavailable
        config.upstream.github_api_url = "http://127.0.0.1:1".to_string();
        config.upstream.stackexchange_api_url = "http://127.0.0.1:1".to_string();
        config.upstream.helius_rpc_url = "http://127.0.0.1:1".to_string();
        let aggregator = ReputationAggregator::from_config(&config).unwrap();

        let report = aggregator.aggregate(&ReputationQuery::default()).await;

        assert_eq!(report.data.github, SourceResult::Absent);
        assert_eq!(report.data.stackoverflow, SourceResult::Absent);
        assert_eq!(report.data.solana, LedgerReputation::not_requested());
        assert_eq!(report.data.social_media, SocialPlaceholder::default());
    }

    #[test]
    fn test_from_config_rejects_bad_url() {
        let mut config = GatewayConfig::default();
        config.upstream.stackexchange_api_url = "::::".to_string();
        assert!(ReputationAggregator::from_config(&config).is_err());
    }
}
