use chrono::{DateTime, Datelike, Utc};

use crate::models::chart::{ChartKind, Dataset, RenderPlan, ScatterPoint, NO_CHART_DATA_MESSAGE};
use crate::models::granularity::Granularity;
use crate::models::range::PickerBounds;
use crate::models::series::CompanySeries;
use crate::services::bucket_service::parse_timestamp;

/// Turns finalized (filtered + aggregated) series into chart-ready data sets.
///
/// The core computes all the numbers; the renderer only draws. Line, bar and
/// scatter views show the selected company. The pie view needs one value per
/// company, so it uses each company's latest price.
pub struct ChartService;

impl ChartService {
    pub fn new() -> Self {
        Self
    }

    /// Build the plan for `kind`. An out-of-range `selected` index falls back
    /// to the first company.
    pub fn render_plan(
        &self,
        companies: &[CompanySeries],
        kind: ChartKind,
        selected: usize,
    ) -> RenderPlan {
        let Some(company) = companies.get(selected).or_else(|| companies.first()) else {
            return unavailable();
        };

        match kind {
            ChartKind::Line | ChartKind::Bar => RenderPlan::SeriesChart {
                kind,
                labels: self.labels(company),
                dataset: Dataset {
                    label: company.name.clone(),
                    data: company.prices.clone(),
                    border_color: company.color.clone(),
                    background_color: translucent(company.color.as_deref()),
                },
            },
            ChartKind::Scatter => RenderPlan::Scatter {
                label: company.name.clone(),
                points: company
                    .prices
                    .iter()
                    .enumerate()
                    .map(|(i, &y)| ScatterPoint { x: i + 1, y })
                    .collect(),
                border_color: company.color.clone(),
                background_color: translucent(company.color.as_deref()),
                show_line: true,
            },
            ChartKind::Pie => self.latest_values(companies),
        }
    }

    /// X axis labels for the selected company. Its own timestamps when they
    /// line up with the prices, otherwise `Point 1..n`.
    pub fn labels(&self, company: &CompanySeries) -> Vec<String> {
        if company.is_aligned() && !company.timestamps.is_empty() {
            return company.timestamps.clone();
        }
        (1..=company.prices.len())
            .map(|i| format!("Point {i}"))
            .collect()
    }

    fn latest_values(&self, companies: &[CompanySeries]) -> RenderPlan {
        let values: Vec<Option<f64>> = companies.iter().map(CompanySeries::latest_price).collect();
        if values.iter().all(Option::is_none) {
            return unavailable();
        }

        RenderPlan::LatestValues {
            labels: companies.iter().map(|c| c.name.clone()).collect(),
            values,
            border_colors: companies.iter().map(|c| c.color.clone()).collect(),
            background_colors: companies
                .iter()
                .map(|c| translucent(c.color.as_deref()))
                .collect(),
        }
    }

    /// Earliest and latest parseable timestamps across all companies,
    /// formatted for the picker that `granularity` uses.
    pub fn picker_bounds(
        &self,
        companies: &[CompanySeries],
        granularity: Granularity,
    ) -> Option<PickerBounds> {
        let mut instants = companies
            .iter()
            .flat_map(|c| c.timestamps.iter())
            .filter_map(|ts| parse_timestamp(ts));

        let first = instants.next()?;
        let (min, max) = instants.fold((first, first), |(lo, hi), dt| (lo.min(dt), hi.max(dt)));

        Some(PickerBounds {
            min: picker_value(&min, granularity),
            max: picker_value(&max, granularity),
            input: granularity.input_kind(),
        })
    }
}

impl Default for ChartService {
    fn default() -> Self {
        Self::new()
    }
}

fn unavailable() -> RenderPlan {
    RenderPlan::Unavailable {
        message: NO_CHART_DATA_MESSAGE.to_string(),
    }
}

/// Half-opacity fill for an `rgba(..., 1)` color: the first `1)` becomes
/// `0.5)`. Other notations come back unchanged.
pub fn translucent(color: Option<&str>) -> Option<String> {
    color.map(|c| c.replacen("1)", "0.5)", 1))
}

fn picker_value(dt: &DateTime<Utc>, granularity: Granularity) -> String {
    match granularity {
        Granularity::Year | Granularity::Decade => dt.year().to_string(),
        Granularity::Month => dt.format("%Y-%m").to_string(),
        Granularity::Date => dt.format("%Y-%m-%d").to_string(),
        Granularity::Minute | Granularity::Hour => dt.format("%Y-%m-%dT%H:%M").to_string(),
    }
}
