//! Aggregate response envelope

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize, Serializer};

use super::profile::{CodeHostProfile, LedgerReputation, QaProfile, SocialPlaceholder};

/// Outcome of one adapter call.
///
/// Both `Absent` and `Unavailable` render as `null` on the wire; the
/// distinction is kept in-process for logging.
#[derive(Debug, Clone, PartialEq)]
pub enum SourceResult<T> {
    Present(T),
    /// Identifier not supplied, no call made
    Absent,
    /// Identifier supplied but the upstream call failed
    Unavailable,
}

impl<T> SourceResult<T> {
    pub fn is_present(&self) -> bool {
        matches!(self, SourceResult::Present(_))
    }

    pub fn as_present(&self) -> Option<&T> {
        match self {
            SourceResult::Present(value) => Some(value),
            _ => None,
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            SourceResult::Present(value) => Some(value),
            _ => None,
        }
    }

    pub fn status(&self) -> &'static str {
        match self {
            SourceResult::Present(_) => "present",
            SourceResult::Absent => "absent",
            SourceResult::Unavailable => "unavailable",
        }
    }
}

impl<T: Serialize> Serialize for SourceResult<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.as_present().serialize(serializer)
    }
}

/// Per-source sub-documents
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportData {
    pub github: SourceResult<CodeHostProfile>,
    pub stackoverflow: SourceResult<QaProfile>,
    pub solana: LedgerReputation,
    pub social_media: SocialPlaceholder,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateReport {
    pub status: ReportStatus,
    pub data: ReportData,
    /// ISO-8601 UTC assembly time
    pub timestamp: String,
}

/// Always `"success"`; upstream failures never fail the envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    #[default]
    Success,
}

impl AggregateReport {
    pub fn assemble(data: ReportData, assembled_at: DateTime<Utc>) -> Self {
        Self {
            status: ReportStatus::Success,
            data,
            timestamp: format_timestamp(assembled_at),
        }
    }
}

/// RFC 3339 with a `+00:00` offset; the fraction is omitted at whole seconds
fn format_timestamp(at: DateTime<Utc>) -> String {
    let precision = if at.timestamp_subsec_micros() == 0 {
        SecondsFormat::Secs
    } else {
        SecondsFormat::Micros
    };
    at.to_rfc3339_opts(precision, false)
}
