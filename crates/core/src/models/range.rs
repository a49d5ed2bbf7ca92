use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::granularity::InputKind;

/// User-chosen `[start, end]` bound, exactly as typed into the pickers.
///
/// The text is only meaningful together with a granularity: a year for
/// year/decade views, `YYYY-MM` for months, `YYYY-MM-DD` for days and a
/// date-time for minute/hour views. Blank strings count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeBound {
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub end: Option<String>,
}

impl RangeBound {
    pub fn new(start: Option<&str>, end: Option<&str>) -> Self {
        Self {
            start: start.map(str::to_string),
            end: end.map(str::to_string),
        }
    }

    /// The start text, or `None` when absent or blank.
    #[must_use]
    pub fn start(&self) -> Option<&str> {
        non_blank(self.start.as_deref())
    }

    /// The end text, or `None` when absent or blank.
    #[must_use]
    pub fn end(&self) -> Option<&str> {
        non_blank(self.end.as_deref())
    }

    /// `true` when neither bound is set; filtering is then a no-op.
    #[must_use]
    pub fn is_unbounded(&self) -> bool {
        self.start().is_none() && self.end().is_none()
    }
}

fn non_blank(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}

/// Comparable key extracted from a timestamp or a bound at one granularity.
///
/// Both sides of a comparison are always built for the same granularity, so
/// only same-variant comparisons happen in practice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RangeKey {
    /// Calendar year (year and decade views)
    Year(i32),
    /// `(year, month)` (month view)
    Month(i32, u32),
    /// Calendar day (day view)
    Day(NaiveDate),
    /// Full UTC instant (minute and hour views)
    Instant(DateTime<Utc>),
}

/// A [`RangeBound`] after parsing against a granularity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolvedRange {
    pub start: Option<RangeKey>,
    pub end: Option<RangeKey>,
}

impl ResolvedRange {
    /// Inclusive at both ends; an absent bound is always satisfied.
    #[must_use]
    pub fn contains(&self, key: &RangeKey) -> bool {
        self.start.is_none_or(|start| *key >= start) && self.end.is_none_or(|end| *key <= end)
    }
}

/// Earliest and latest data points, formatted for the range pickers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickerBounds {
    pub min: String,
    pub max: String,
    pub input: InputKind,
}
