//! Request/response contract for the reputation gateway
//!
//! Everything here is request-scoped: built fresh for one inbound call and
//! dropped once the response is serialized.

pub mod profile;
pub mod query;
pub mod report;

pub use profile::{CodeHostProfile, LedgerReputation, QaProfile, SocialPlaceholder};
pub use query::ReputationQuery;
pub use report::{AggregateReport, ReportData, SourceResult};
