use crate::models::analytics::{CompanySummary, PriceStats, PriceSummary};
use crate::models::series::CompanySeries;

/// Computes the summary statistics shown next to the chart.
///
/// Degenerate input is reported explicitly: an empty sequence is
/// [`PriceSummary::NoData`] and an undefined percent change is `None`, so the
/// display layer never receives NaN or infinity.
pub struct AnalyticsService;

impl AnalyticsService {
    pub fn new() -> Self {
        Self
    }

    /// Min, max, rounded mean and rounded first-to-last percent change.
    pub fn summarize(&self, prices: &[f64]) -> PriceSummary {
        let (Some(&first), Some(&last)) = (prices.first(), prices.last()) else {
            return PriceSummary::NoData;
        };

        let min = prices.iter().copied().fold(f64::INFINITY, f64::min);
        let max = prices.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let avg = prices
            .iter()
            .enumerate()
            .fold(0.0, |mean, (i, &price)| mean_step(mean, price, i + 1));

        let percent_change = if prices.len() >= 2 && first != 0.0 {
            Some(round2((last - first) / first * 100.0)).filter(|pct| pct.is_finite())
        } else {
            None
        };

        PriceSummary::Available(PriceStats {
            min,
            max,
            avg: round2(avg),
            percent_change,
        })
    }

    /// Summary row for one company.
    pub fn summarize_company(&self, company: &CompanySeries) -> CompanySummary {
        CompanySummary {
            name: company.name.clone(),
            color: company.color.clone(),
            summary: self.summarize(&company.prices),
        }
    }
}

impl Default for AnalyticsService {
    fn default() -> Self {
        Self::new()
    }
}

/// Fold `value` into a running mean that now covers `count` values.
///
/// Never forms the full sum, so prices near `f64::MAX` stay finite.
pub(crate) fn mean_step(mean: f64, value: f64, count: usize) -> f64 {
    let n = count as f64;
    mean + (value / n - mean / n)
}

/// Round half away from zero to 2 decimal places. Values too large to scale
/// have no fractional part and come back unchanged.
fn round2(value: f64) -> f64 {
    let scaled = value * 100.0;
    if scaled.is_finite() {
        scaled.round() / 100.0
    } else {
        value
    }
}
