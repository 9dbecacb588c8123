//! Ledger (Solana via Helius RPC) reputation adapter
//!
//! Two JSON-RPC calls run concurrently against the same endpoint: the SOL
//! balance and the owned non-fungible asset listing. Their results feed the
//! wallet verification rule in [`crate::reputation::web3`].
//!
//! Outcome mapping:
//! - no address: zeroed record ([`LedgerReputation::not_requested`])
//! - a sub-call answered with an error status or no value: that metric is 0
//! - a sub-call failed outright (transport, timeout, bad JSON), or the pair
//!   overran the shared timeout: [`LedgerReputation::failed`]

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, warn};
use url::Url;

use super::http::{UpstreamHttpClient, UpstreamReply};
use crate::models::LedgerReputation;
use crate::reputation::web3::lamports_to_sol;

pub const DEFAULT_HELIUS_RPC_URL: &str = "https://mainnet.helius-rpc.com";

/// Page size for the asset listing; only `total` is read
pub const ASSET_PAGE_LIMIT: u32 = 10;

#[derive(Debug, Deserialize)]
struct RpcResponse<T> {
    result: Option<T>,
}

#[derive(Debug, Deserialize)]
struct BalanceResult {
    #[serde(default)]
    value: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct AssetsResult {
    #[serde(default)]
    total: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct HeliusClient {
    http: UpstreamHttpClient,
    rpc_url: Url,
    api_key: Option<String>,
}

impl HeliusClient {
    pub fn new(http: UpstreamHttpClient, rpc_url: Url, api_key: Option<String>) -> Self {
        Self {
            http,
            rpc_url,
            api_key: api_key.filter(|key| !key.trim().is_empty()),
        }
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Assess a wallet; returns a zeroed record when `address` is `None`
    pub async fn check_reputation(&self, address: Option<&str>) -> LedgerReputation {
        let Some(address) = address else {
            return LedgerReputation::not_requested();
        };

        let Some(api_key) = self.api_key.as_deref() else {
            warn!(address = %address, "Helius API key not configured, skipping ledger lookup");
            return LedgerReputation::failed("ledger API key not configured");
        };

        let url = self.rpc_endpoint(api_key);
        let lookup = async {
            tokio::join!(
                self.fetch_balance(&url, address),
                self.fetch_asset_count(&url, address)
            )
        };

        let (balance, assets) = match tokio::time::timeout(self.http.timeout(), lookup).await {
            Ok(pair) => pair,
            Err(_) => {
                warn!(address = %address, "Helius lookup timed out");
                return LedgerReputation::failed(format!(
                    "ledger lookup timed out after {}s",
                    self.http.timeout().as_secs()
                ));
            }
        };

        match (balance, assets) {
            (Ok(lamports), Ok(nft_count)) => {
                let sol = lamports_to_sol(lamports.unwrap_or(0));
                let nft_count = nft_count.unwrap_or(0);
                debug!(address = %address, sol, nft_count, "Helius lookup complete");
                LedgerReputation::assessed(sol, nft_count)
            }
            (Err(e), _) | (_, Err(e)) => {
                let message = scrub_secret(&format!("{:#}", e), api_key);
                warn!(address = %address, error = %message, "Helius API error");
                LedgerReputation::failed(message)
            }
        }
    }

    fn rpc_endpoint(&self, api_key: &str) -> Url {
        let mut url = self.rpc_url.clone();
        url.query_pairs_mut().append_pair("api-key", api_key);
        url
    }

    /// Lamport balance; `None` when the RPC answered without a value
    async fn fetch_balance(&self, url: &Url, address: &str) -> Result<Option<u64>> {
        let body = balance_request(address);
        let reply: UpstreamReply<RpcResponse<BalanceResult>> = self
            .http
            .post_json(url.clone(), &body)
            .await
            .context("getBalance call failed")?;

        Ok(reply
            .success()
            .and_then(|response| response.result)
            .and_then(|result| result.value))
    }

    /// Non-fungible asset total; `None` when the RPC answered without one
    async fn fetch_asset_count(&self, url: &Url, address: &str) -> Result<Option<u64>> {
        let body = assets_request(address);
        let reply: UpstreamReply<RpcResponse<AssetsResult>> = self
            .http
            .post_json(url.clone(), &body)
            .await
            .context("getAssetsByOwner call failed")?;

        Ok(reply
            .success()
            .and_then(|response| response.result)
            .and_then(|result| result.total))
    }
}

/// Error text reaches callers and logs; it must never echo the API key
fn scrub_secret(message: &str, secret: &str) -> String {
    message.replace(secret, "<redacted>")
}

fn balance_request(address: &str) -> serde_json::Value {
    json!({
        "jsonrpc": "2.0",
        "id": "1",
        "method": "getBalance",
        "params": [address]
    })
}

fn assets_request(address: &str) -> serde_json::Value {
    json!({
        "jsonrpc": "2.0",
        "id": "2",
        "method": "getAssetsByOwner",
        "params": {
            "ownerAddress": address,
            "page": 1,
            "limit": ASSET_PAGE_LIMIT,
            "displayOptions": {"showFungible": false}
        }
    })
}
