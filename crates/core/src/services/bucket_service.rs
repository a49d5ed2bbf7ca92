use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Utc};

use crate::models::granularity::Granularity;
use crate::models::range::RangeKey;

/// Bucket key shared by every sample whose timestamp cannot be parsed.
pub const INVALID_BUCKET: &str = "Invalid";

/// Offset-carrying forms that RFC 3339 parsing rejects: no seconds, a basic
/// `+0000` offset, or a space separator. `%#z` also takes `Z`.
const OFFSET_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f%#z",
    "%Y-%m-%dT%H:%M%#z",
    "%Y-%m-%d %H:%M:%S%.f%#z",
    "%Y-%m-%d %H:%M%#z",
];

/// Date-time forms without an offset. These are read as UTC.
const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parse an ISO-8601-like timestamp into a UTC instant.
///
/// Accepts RFC 3339, offset-less date-times (taken as UTC), `YYYY-MM-DD`,
/// `YYYY-MM` and `YYYY`. Every bucket key produced by [`BucketService`] parses
/// back into its own bucket, so aggregating twice is stable. Anything else
/// yields `None`.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(s, fmt) {
            return Some(dt.with_timezone(&Utc));
        }
    }
    for fmt in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(naive.and_utc());
        }
    }
    // Hour bucket keys (`YYYY-MM-DDTHH`) parse back to the top of that hour
    if s.split_once('T').is_some_and(|(_, hour)| is_digits(hour, 2)) {
        if let Ok(naive) = NaiveDateTime::parse_from_str(&format!("{s}:00"), "%Y-%m-%dT%H:%M") {
            return Some(naive.and_utc());
        }
    }

    parse_calendar_prefix(s).and_then(|d| d.and_hms_opt(0, 0, 0)).map(|n| n.and_utc())
}

/// `YYYY-MM-DD`, `YYYY-MM`, a bare `YYYY` or a decade label such as `2020s`,
/// each starting at its first instant. Years follow the width [`year_label`]
/// writes, so `0990s` and `+12345` parse too.
fn parse_calendar_prefix(s: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date);
    }

    let (year, rest) = split_year(s)?;
    let month: u32 = match rest {
        "" | "s" => 1,
        _ => rest
            .strip_prefix('-')
            .filter(|m| is_digits(m, 2))?
            .parse()
            .ok()?,
    };
    NaiveDate::from_ymd_opt(year, month, 1)
}

/// Leading year with an optional sign and at least four digits.
fn split_year(s: &str) -> Option<(i32, &str)> {
    let sign = usize::from(s.starts_with(['+', '-']));
    let digits = s[sign..].bytes().take_while(u8::is_ascii_digit).count();
    if digits < 4 {
        return None;
    }
    let (year, rest) = s.split_at(sign + digits);
    Some((year.parse().ok()?, rest))
}

fn is_digits(s: &str, len: usize) -> bool {
    s.len() == len && s.bytes().all(|b| b.is_ascii_digit())
}

/// Zero-padded four-digit year, signed outside `0..=9999`.
fn year_label(year: i32) -> String {
    if (0..=9999).contains(&year) {
        format!("{year:04}")
    } else {
        format!("{year:+05}")
    }
}

/// Derives bucket keys and comparable range keys from timestamps.
///
/// Everything works on the UTC instant, so `2024-01-01T23:30:00-02:00` lands
/// in the `2024-01-02` day bucket and is filtered as that day as well.
pub struct BucketService;

impl BucketService {
    pub fn new() -> Self {
        Self
    }

    /// Deterministic key: two timestamps share a key iff they fall in the same
    /// bucket at `granularity`. Unparseable timestamps map to [`INVALID_BUCKET`].
    pub fn bucket_key(&self, timestamp: &str, granularity: Granularity) -> String {
        match parse_timestamp(timestamp) {
            Some(dt) => Self::key_for_instant(&dt, granularity),
            None => INVALID_BUCKET.to_string(),
        }
    }

    /// Bucket key of an already-parsed instant.
    pub fn key_for_instant(dt: &DateTime<Utc>, granularity: Granularity) -> String {
        match granularity {
            Granularity::Minute => dt.format("%Y-%m-%dT%H:%M").to_string(),
            Granularity::Hour => dt.format("%Y-%m-%dT%H").to_string(),
            Granularity::Date => dt.format("%Y-%m-%d").to_string(),
            Granularity::Month => format!("{}-{:02}", year_label(dt.year()), dt.month()),
            Granularity::Year => year_label(dt.year()),
            Granularity::Decade => format!("{}s", year_label(dt.year().div_euclid(10) * 10)),
        }
    }

    /// Structured comparison key used by the range filter.
    pub fn range_key(&self, timestamp: &str, granularity: Granularity) -> Option<RangeKey> {
        parse_timestamp(timestamp).map(|dt| Self::range_key_for_instant(&dt, granularity))
    }

    pub fn range_key_for_instant(dt: &DateTime<Utc>, granularity: Granularity) -> RangeKey {
        match granularity {
            Granularity::Year | Granularity::Decade => RangeKey::Year(dt.year()),
            Granularity::Month => RangeKey::Month(dt.year(), dt.month()),
            Granularity::Date => RangeKey::Day(dt.date_naive()),
            Granularity::Minute | Granularity::Hour => RangeKey::Instant(*dt),
        }
    }
}

impl Default for BucketService {
    fn default() -> Self {
        Self::new()
    }
}
