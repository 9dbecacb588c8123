//! Web2 Reputation Gateway
//!
//! Aggregates a person's public reputation across platforms (GitHub,
//! Stack Overflow, Solana wallet activity) into one composite document.
//! Upstream lookups run concurrently and any subset of them may fail without
//! failing the request.
//!
//! ## Module Structure
//!
//! ```text
//! src/
//! ├── lib.rs         - Crate root with re-exports
//! ├── main.rs        - Server entrypoint
//! ├── config.rs      - Configuration management
//! ├── models/        - Request/response contract
//! │   ├── query.rs   - Inbound identifiers
//! │   ├── profile.rs - Per-source documents
//! │   └── report.rs  - SourceResult and the aggregate envelope
//! ├── sources/       - Upstream client adapters
//! │   ├── http.rs    - Shared JSON HTTP client
//! │   ├── github.rs  - Code-host profile lookup
//! │   ├── stackexchange.rs - Q&A reputation lookup
//! │   └── helius.rs  - Ledger balance + asset lookup
//! ├── reputation/    - Derived metrics and orchestration
//! │   ├── age.rs     - Account age in years
//! │   ├── web3.rs    - Wallet verification
//! │   └── aggregator.rs - Fan-out / fan-in orchestrator
//! └── api/           - HTTP API endpoints and middleware
//! ```

pub mod api;
pub mod config;
pub mod models;
pub mod reputation;
pub mod sources;

pub use config::{GatewayConfig, mask_secret};
pub use models::{
    AggregateReport, CodeHostProfile, LedgerReputation, QaProfile, ReportData, ReputationQuery,
    SocialPlaceholder, SourceResult,
};
pub use reputation::{ReputationAggregator, Web3Verdict, account_age_years};
pub use sources::{
    GithubClient, HeliusClient, HttpClientConfig, StackExchangeClient, UpstreamHttpClient,
};
