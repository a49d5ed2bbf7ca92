use serde::{Deserialize, Serialize};

/// Summary statistics for one company's finalized price sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanySummary {
    /// Company name
    pub name: String,

    /// Company display color, for the table row
    pub color: Option<String>,

    pub summary: PriceSummary,
}

/// Statistics over a price sequence, or an explicit "no data" marker.
///
/// An empty sequence never produces NaN or infinite values; it becomes
/// [`PriceSummary::NoData`] instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PriceSummary {
    NoData,
    Available(PriceStats),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceStats {
    /// Lowest price
    pub min: f64,

    /// Highest price
    pub max: f64,

    /// Mean price, rounded to 2 decimal places
    pub avg: f64,

    /// `(last - first) / first * 100`, rounded to 2 decimal places.
    /// `None` with fewer than two points or when the first price is zero.
    pub percent_change: Option<f64>,
}

impl PriceStats {
    /// Average as shown in the statistics table, e.g. `15.00`.
    #[must_use]
    pub fn avg_display(&self) -> String {
        format!("{:.2}", self.avg)
    }

    /// Percent change as shown in the statistics table, e.g. `50.00%` or `n/a`.
    #[must_use]
    pub fn percent_change_display(&self) -> String {
        match self.percent_change {
            Some(pct) => format!("{pct:.2}%"),
            None => "n/a".to_string(),
        }
    }
}

impl PriceSummary {
    #[must_use]
    pub fn stats(&self) -> Option<&PriceStats> {
        match self {
            PriceSummary::NoData => None,
            PriceSummary::Available(stats) => Some(stats),
        }
    }

    #[must_use]
    pub fn has_data(&self) -> bool {
        matches!(self, PriceSummary::Available(_))
    }
}
