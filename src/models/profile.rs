//! Normalized per-source documents

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::reputation::web3::{Web3Verdict, round_to};

/// Decimal places kept for the SOL balance
pub const SOL_DECIMALS: u32 = 4;

/// Code-host (GitHub) profile summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeHostProfile {
    pub username: String,
    /// Whole years plus remaining whole months / 12, two decimals
    pub account_age_years: f64,
    pub public_repos: Option<u64>,
    pub followers: Option<u64>,
}

/// Q&A site (Stack Overflow) profile summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QaProfile {
    pub user_id: String,
    pub reputation: Option<i64>,
    /// Badge tier -> count, ordered so serialization is stable
    pub badge_counts: Option<BTreeMap<String, u64>>,
}

/// Ledger (Solana) activity assessment.
///
/// Unlike the other sources this is always rendered as an object. It comes
/// in three shapes, see the constructors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerReputation {
    pub is_verified: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sol_balance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nft_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trust_signal: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl LedgerReputation {
    /// No wallet address supplied: zeroed record, no trust signal
    pub fn not_requested() -> Self {
        Self {
            is_verified: false,
            sol_balance: Some(0.0),
            nft_count: Some(0),
            trust_signal: None,
            error: None,
        }
    }

    /// Lookup completed; `raw_sol` is the unrounded display-unit balance
    pub fn assessed(raw_sol: f64, nft_count: u64) -> Self {
        let verdict = Web3Verdict::evaluate(raw_sol, nft_count);
        Self {
            is_verified: verdict.is_verified,
            sol_balance: Some(round_to(raw_sol, SOL_DECIMALS)),
            nft_count: Some(nft_count),
            trust_signal: Some(verdict.trust_signal().to_string()),
            error: None,
        }
    }

    /// Lookup aborted as a whole; balance and count are omitted
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            is_verified: false,
            sol_balance: None,
            nft_count: None,
            trust_signal: None,
            error: Some(message.into()),
        }
    }

    pub fn is_failed(&self) -> bool {
        self.error.is_some()
    }
}

/// Hardcoded social block; never fetched from a live source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialPlaceholder {
    pub linkedin_verified: bool,
    pub connections: String,
}

impl Default for SocialPlaceholder {
    fn default() -> Self {
        Self {
            linkedin_verified: true,
            connections: "500+".to_string(),
        }
    }
}
