//! Wallet verification from balance and asset counts

/// Lamports per SOL
pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

pub const TRUST_SIGNAL_VERIFIED: &str = "Verified Web3 Human";
pub const TRUST_SIGNAL_LOW_ACTIVITY: &str = "Low Web3 Activity";

pub fn lamports_to_sol(lamports: u64) -> f64 {
    lamports as f64 / LAMPORTS_PER_SOL as f64
}

/// Round half away from zero to `places` decimals
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}

/// Verification outcome for one wallet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Web3Verdict {
    pub is_verified: bool,
}

impl Web3Verdict {
    /// A wallet is verified only when it holds SOL and at least one
    /// non-fungible asset. Evaluated on the unrounded balance.
    pub fn evaluate(sol_balance: f64, nft_count: u64) -> Self {
        Self {
            is_verified: sol_balance > 0.0 && nft_count > 0,
        }
    }

    pub fn trust_signal(&self) -> &'static str {
        if self.is_verified {
            TRUST_SIGNAL_VERIFIED
        } else {
            TRUST_SIGNAL_LOW_ACTIVITY
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lamports_conversion() {
        assert_eq!(lamports_to_sol(0), 0.0);
        assert_eq!(lamports_to_sol(LAMPORTS_PER_SOL), 1.0);
        assert_eq!(round_to(lamports_to_sol(1_234_567_800), 4), 1.2346);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(2.416_666, 2), 2.42);
        assert_eq!(round_to(0.000_04, 4), 0.0);
        assert_eq!(round_to(3.0, 4), 3.0);
    }

    #[test]
    fn test_verdict_requires_both() {
        assert!(Web3Verdict::evaluate(1.2345678, 3).is_verified);
        assert!(!Web3Verdict::evaluate(0.0, 5).is_verified);
        assert!(!Web3Verdict::evaluate(4.0, 0).is_verified);
        assert!(!Web3Verdict::evaluate(0.0, 0).is_verified);
    }

    #[test]
    fn test_dust_balance_still_counts() {
        // One lamport rounds to 0.0000 but is still a positive balance
        assert!(Web3Verdict::evaluate(lamports_to_sol(1), 1).is_verified);
    }

    #[test]
    fn test_trust_signal_labels() {
        assert_eq!(
            Web3Verdict::evaluate(1.0, 1).trust_signal(),
            "Verified Web3 Human"
        );
        assert_eq!(
            Web3Verdict::evaluate(0.0, 5).trust_signal(),
            "Low Web3 Activity"
        );
    }
}
