use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Literal stored in `end_date` for ongoing positions.
pub const PRESENT: &str = "Present";

/// Parses the date shapes the portfolio backend emits.
///
/// Accepts `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM[:SS[.f]]`, RFC 3339 (converted to
/// UTC), `YYYY-MM` and `YYYY`. Date-only values are midnight UTC. Anything
/// else, `"Present"` included, is `None`.
pub fn parse_record_date(input: &str) -> Option<NaiveDateTime> {
    let s = input.trim();
    if s.is_empty() || s == PRESENT {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_utc());
    }
    for fmt in [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M",
    ] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    let (year, month) = match s.split_once('-') {
        Some((y, m)) => (y, Some(m)),
        None => (s, None),
    };
    if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let year: i32 = year.parse().ok()?;
    let month: u32 = match month {
        Some(m) if m.len() == 2 && m.bytes().all(|b| b.is_ascii_digit()) => m.parse().ok()?,
        Some(_) => return None,
        None => 1,
    };
    NaiveDate::from_ymd_opt(year, month, 1).and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Milliseconds since the Unix epoch, the unit the ordering compares.
pub fn record_timestamp(input: Option<&str>) -> Option<i64> {
    input
        .and_then(parse_record_date)
        .map(|dt| dt.and_utc().timestamp_millis())
}

pub fn is_present(value: Option<&str>) -> bool {
    value.map(str::trim) == Some(PRESENT)
}
