use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::CoreError;

/// Time resolution at which samples are grouped and ranges are interpreted.
///
/// Variants are declared finest to coarsest, so the derived `Ord` is the
/// natural "coarser than" order.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Minute,
    Hour,
    /// Calendar day. The wire value is `date`, the display label is `Day`.
    #[default]
    Date,
    Month,
    Year,
    Decade,
}

/// Which picker widget a front end should show for range bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InputKind {
    /// `YYYY-MM-DDTHH:MM`
    DatetimeLocal,
    /// `YYYY-MM-DD`
    Date,
    /// `YYYY-MM`
    Month,
    /// A plain calendar year
    Number,
}

impl Granularity {
    /// All levels, finest first. This is the order a selector should list them in.
    pub const ALL: [Granularity; 6] = [
        Granularity::Minute,
        Granularity::Hour,
        Granularity::Date,
        Granularity::Month,
        Granularity::Year,
        Granularity::Decade,
    ];

    /// Stable wire value (`minute`, `hour`, `date`, ...).
    #[must_use]
    pub const fn value(&self) -> &'static str {
        match self {
            Granularity::Minute => "minute",
            Granularity::Hour => "hour",
            Granularity::Date => "date",
            Granularity::Month => "month",
            Granularity::Year => "year",
            Granularity::Decade => "decade",
        }
    }

    /// Human-readable label for selectors.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Granularity::Minute => "Minute",
            Granularity::Hour => "Hour",
            Granularity::Date => "Day",
            Granularity::Month => "Month",
            Granularity::Year => "Year",
            Granularity::Decade => "Decade",
        }
    }

    /// Year and decade views filter on whole calendar years.
    #[must_use]
    pub const fn is_yearly(&self) -> bool {
        matches!(self, Granularity::Year | Granularity::Decade)
    }

    #[must_use]
    pub const fn input_kind(&self) -> InputKind {
        match self {
            Granularity::Minute | Granularity::Hour => InputKind::DatetimeLocal,
            Granularity::Date => InputKind::Date,
            Granularity::Month => InputKind::Month,
            Granularity::Year | Granularity::Decade => InputKind::Number,
        }
    }
}

impl std::fmt::Display for Granularity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl FromStr for Granularity {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Granularity::ALL
            .into_iter()
            .find(|g| g.value() == wanted)
            .ok_or_else(|| CoreError::UnknownGranularity(s.to_string()))
    }
}
