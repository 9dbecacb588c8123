//! Account age from a code-host creation timestamp
//!
//! Age is calendar-aware: whole months elapsed (month arithmetic clamps to
//! the end of shorter months) folded into `years + months / 12`.

use anyhow::{Context, Result};
use chrono::{DateTime, Datelike, Months, NaiveDateTime, Utc};

use super::web3::round_to;

/// Creation timestamp format used by the code-host API
pub const CODE_HOST_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

pub fn parse_code_host_timestamp(raw: &str) -> Result<DateTime<Utc>> {
    let naive = NaiveDateTime::parse_from_str(raw, CODE_HOST_TIMESTAMP_FORMAT)
        .with_context(|| format!("Invalid creation timestamp: {}", raw))?;
    Ok(naive.and_utc())
}

/// Whole calendar months from `start` to `end`, 0 if `end` is not after `start`
pub fn whole_months_between(start: DateTime<Utc>, end: DateTime<Utc>) -> u32 {
    if end <= start {
        return 0;
    }

    let mut months = (end.year() - start.year()) * 12 + end.month() as i32
        - start.month() as i32;

    // The naive month difference overshoots when the anniversary has not
    // been reached yet in the final month.
    while months > 0 {
        match start.checked_add_months(Months::new(months as u32)) {
            Some(anniversary) if anniversary <= end => break,
            _ => months -= 1,
        }
    }

    months.max(0) as u32
}

/// Account age in fractional years, two decimals
pub fn account_age_years(created_at: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    let months = whole_months_between(created_at, now);
    let years = months / 12;
    let remainder = months % 12;
    round_to(years as f64 + remainder as f64 / 12.0, 2)
}
