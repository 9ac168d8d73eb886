// Rust guideline compliant 2026-02-06

//! Parsing of user-facing filter expressions.
//!
//! Sizes accept a decimal count with an optional binary suffix
//! (`b`, `k`, `m`, `g`). Timestamps accept RFC 3339 dates and datetimes,
//! a plain `YYYY-MM-DD` day, or a relative age such as `30s`, `15m`,
//! `2h`, `7d` or `1w` measured back from now. Type codes follow the
//! conventional single-letter scheme.

use anyhow::{anyhow, bail, Result};
use chrono::{DateTime, Duration, NaiveDate, Utc};
use trawl_core::FileKind;

/// Parses a size expression into bytes.
///
/// # Errors
///
/// Returns an error if the number is missing, malformed, or carries an
/// unknown suffix.
pub fn parse_size(input: &str) -> Result<u64> {
    let s = input.trim().to_lowercase();
    if s.is_empty() {
        bail!("empty size");
    }

    let (digits, multiplier) = match s.strip_suffix(|c: char| c.is_ascii_alphabetic()) {
        Some(rest) => {
            let suffix = s.chars().last().unwrap_or_default();
            let multiplier: u64 = match suffix {
                'b' => 1,
                'k' => 1024,
                'm' => 1024 * 1024,
                'g' => 1024 * 1024 * 1024,
                _ => bail!("unknown size suffix {:?} in {:?}", suffix, input),
            };
            (rest, multiplier)
        }
        None => (s.as_str(), 1),
    };

    let count: u64 = digits
        .parse()
        .map_err(|_| anyhow!("invalid size {:?}", input))?;
    count
        .checked_mul(multiplier)
        .ok_or_else(|| anyhow!("size {:?} overflows", input))
}

/// Parses a time expression into a UTC instant.
///
/// Relative ages are resolved against the current time, so `7d` means
/// seven days ago.
///
/// # Errors
///
/// Returns an error if the expression is neither a relative age nor a
/// recognized date or datetime.
pub fn parse_time(input: &str) -> Result<DateTime<Utc>> {
    let s = input.trim();
    if s.is_empty() {
        bail!("empty time");
    }

    if let Some(instant) = parse_relative(s)? {
        return Ok(instant);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        let midnight = date
            .and_hms_opt(0, 0, 0)
            .ok_or_else(|| anyhow!("invalid date {:?}", input))?;
        return Ok(midnight.and_utc());
    }

    bail!(
        "invalid time {:?}: expected RFC 3339, YYYY-MM-DD, or an age like 7d",
        input
    )
}

fn parse_relative(s: &str) -> Result<Option<DateTime<Utc>>> {
    let Some(unit) = s.chars().last() else {
        return Ok(None);
    };
    if !matches!(unit, 's' | 'm' | 'h' | 'd' | 'w') {
        return Ok(None);
    }
    let digits = &s[..s.len() - 1];
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Ok(None);
    }

    let count: i64 = digits
        .parse()
        .map_err(|_| anyhow!("invalid age {:?}", s))?;
    let age = match unit {
        's' => Duration::seconds(count),
        'm' => Duration::minutes(count),
        'h' => Duration::hours(count),
        'd' => Duration::days(count),
        'w' => Duration::weeks(count),
        _ => unreachable!(),
    };
    Ok(Some(Utc::now() - age))
}

/// Resolves a list of type codes into file kinds.
///
/// # Errors
///
/// Returns an error if a code is not a single recognized character.
pub fn parse_kinds(codes: &[String]) -> Result<Vec<FileKind>> {
    let mut kinds = Vec::with_capacity(codes.len());
    for code in codes {
        let mut chars = code.chars();
        let (Some(c), None) = (chars.next(), chars.next()) else {
            bail!("invalid type code {:?}: expected a single character", code);
        };
        let kind = FileKind::from_code(c)
            .ok_or_else(|| anyhow!("unknown type code {:?}: expected one of d f l x e s p", code))?;
        kinds.push(kind);
    }
    Ok(kinds)
}
