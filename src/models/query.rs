use serde::{Deserialize, Serialize};

/// Identifiers for one person across the supported platforms.
///
/// Any subset may be supplied, including none at all. Blank strings are
/// treated the same as a missing field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReputationQuery {
    #[serde(default)]
    pub github_username: Option<String>,
    #[serde(default)]
    pub stackoverflow_id: Option<String>,
    #[serde(default)]
    pub solana_address: Option<String>,
}

impl ReputationQuery {
    pub fn github_username(&self) -> Option<&str> {
        non_blank(&self.github_username)
    }

    pub fn stackoverflow_id(&self) -> Option<&str> {
        non_blank(&self.stackoverflow_id)
    }

    pub fn solana_address(&self) -> Option<&str> {
        non_blank(&self.solana_address)
    }

    /// Number of identifiers that will trigger an upstream lookup
    pub fn requested_sources(&self) -> usize {
        [
            self.github_username(),
            self.stackoverflow_id(),
            self.solana_address(),
        ]
        .iter()
        .filter(|id| id.is_some())
        .count()
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty())
}
