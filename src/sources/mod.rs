//! Upstream client adapters
//!
//! One adapter per external platform. Each turns an optional identifier into
//! the request(s) that platform needs and normalizes the reply. Adapters
//! never return errors to their caller: failures are logged and folded into
//! [`SourceResult`](crate::models::SourceResult) (or the ledger's own error
//! shape) at this boundary.

pub mod github;
pub mod helius;
pub mod http;
pub mod stackexchange;

pub use github::GithubClient;
pub use helius::HeliusClient;
pub use http::{HttpClientConfig, UpstreamHttpClient, UpstreamReply};
pub use stackexchange::StackExchangeClient;

use anyhow::{Context, Result};
use url::Url;

/// Append `path` to an API base URL, keeping any path prefix on the base
pub(crate) fn endpoint(base: &Url, path: &str) -> Result<Url> {
    let joined = format!(
        "{}/{}",
        base.as_str().trim_end_matches('/'),
        path.trim_start_matches('/')
    );
    Url::parse(&joined).with_context(|| format!("Invalid endpoint URL: {}", joined))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_join() {
        let base = Url::parse("https://api.github.com").unwrap();
        assert_eq!(
            endpoint(&base, "users/octocat").unwrap().as_str(),
            "https://api.github.com/users/octocat"
        );

        let prefixed = Url::parse("http://127.0.0.1:9000/proxy/").unwrap();
        assert_eq!(
            endpoint(&prefixed, "/2.3/users/1").unwrap().as_str(),
            "http://127.0.0.1:9000/proxy/2.3/users/1"
        );
    }
}
