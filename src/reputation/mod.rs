//! Reputation scoring and aggregation
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────┐     ┌──────────────────────┐     ┌─────────────────┐
//! │ GithubClient     │────►│                      │     │ age.rs          │
//! │ StackExchange... │────►│ ReputationAggregator │     │ (account age)   │
//! │ HeliusClient     │────►│ (fan-out / fan-in)   │     │ web3.rs         │
//! └──────────────────┘     └──────────────────────┘     │ (verification)  │
//!                                   │                   └─────────────────┘
//!                                   ▼
//!                          ┌──────────────────┐
//!                          │ AggregateReport  │
//!                          └──────────────────┘
//! ```
//!
//! The calculators are pure; adapters call them on the raw upstream values.

pub mod age;
pub mod aggregator;
pub mod web3;

pub use age::{account_age_years, parse_code_host_timestamp, whole_months_between};
pub use aggregator::ReputationAggregator;
pub use web3::{Web3Verdict, lamports_to_sol, round_to};
