//! Date criterion parsing: one calendar day or a relative duration back
//! from now.

use std::sync::OnceLock;

use chrono::{Days, Local, Months, NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;

use crate::error::FindError;
use crate::types::DateRange;

fn day_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap())
}

fn delta_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(\d+)([ymd])$").unwrap())
}

/// Parse a date criterion against the local clock. Two grammars, tried in
/// order:
///
/// 1. `YYYY-MM-DD` — that day, 00:00:00 through 23:59:59 inclusive, no
///    timezone normalization.
/// 2. `<N>y` | `<N>m` | `<N>d` — stop = now, start = now minus N
///    years/months/days with calendar-aware subtraction (end-of-month
///    clamping, not naive day counting).
///
/// Anything else fails with [`FindError::InvalidDateExpression`].
pub fn parse_date_range(input: &str) -> Result<DateRange, FindError> {
    parse_date_range_at(input, Local::now().naive_local())
}

/// [`parse_date_range`] with an injected "now", so relative durations are
/// reproducible.
pub fn parse_date_range_at(input: &str, now: NaiveDateTime) -> Result<DateRange, FindError> {
    if day_re().is_match(input) {
        // Shape matched; a calendar-invalid day (month 13 etc.) still fails.
        let day = NaiveDate::parse_from_str(input, "%Y-%m-%d")
            .map_err(|_| FindError::InvalidDateExpression(input.to_string()))?;
        return Ok(DateRange {
            start: day.and_time(NaiveTime::MIN),
            stop: day.and_hms_opt(23, 59, 59).unwrap(),
        });
    }
    if let Some(caps) = delta_re().captures(input) {
        // A magnitude too large for the integer type counts as zero rather
        // than failing; permissive on purpose.
        let n: u64 = caps[1].parse().unwrap_or(0);
        let start = match &caps[2] {
            "y" => now.checked_sub_months(Months::new(saturating_months(n, 12))),
            "m" => now.checked_sub_months(Months::new(saturating_months(n, 1))),
            "d" => now.checked_sub_days(Days::new(n)),
            _ => unreachable!("delta regex only captures y/m/d"),
        };
        let start = start.ok_or_else(|| FindError::InvalidDateExpression(input.to_string()))?;
        return Ok(DateRange { start, stop: now });
    }
    Err(FindError::InvalidDateExpression(input.to_string()))
}

/// `n * per_unit` as months, clamped so absurd magnitudes fail range checks
/// in `checked_sub_months` instead of overflowing here.
fn saturating_months(n: u64, per_unit: u64) -> u32 {
    u32::try_from(n.saturating_mul(per_unit)).unwrap_or(u32::MAX)
}
