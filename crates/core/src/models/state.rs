use serde::{Deserialize, Serialize};

use super::chart::ChartKind;
use super::granularity::Granularity;
use super::range::RangeBound;
use super::settings::Settings;

/// Filters that currently shape the chart. Only "Apply Filters" changes them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedFilters {
    pub granularity: Granularity,
    pub range: RangeBound,
}

/// Complete UI state of the dashboard as one immutable value.
///
/// Every user action is a method that consumes the state and returns the
/// next one; nothing is updated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardState {
    /// Granularity chosen in the selector but not yet applied
    pub pending_granularity: Granularity,

    /// Range picker contents, not yet applied
    pub raw_range: RangeBound,

    /// What the chart is actually showing
    pub applied: AppliedFilters,

    /// Company-name search text (applied live)
    pub search: String,

    pub chart_kind: ChartKind,

    /// Index into the chart data of the company shown in single-series views
    pub selected_company: usize,
}

impl DashboardState {
    pub fn new(settings: &Settings) -> Self {
        Self {
            pending_granularity: settings.default_granularity,
            raw_range: RangeBound::default(),
            applied: AppliedFilters {
                granularity: settings.default_granularity,
                range: RangeBound::default(),
            },
            search: String::new(),
            chart_kind: settings.default_chart_kind,
            selected_company: 0,
        }
    }

    /// Pick a new granularity. The picker contents no longer fit the new
    /// input widget, so the raw range is cleared.
    #[must_use]
    pub fn with_granularity(self, granularity: Granularity) -> Self {
        Self {
            pending_granularity: granularity,
            raw_range: RangeBound::default(),
            ..self
        }
    }

    #[must_use]
    pub fn with_range_start(self, start: Option<String>) -> Self {
        Self {
            raw_range: RangeBound {
                start,
                end: self.raw_range.end.clone(),
            },
            ..self
        }
    }

    #[must_use]
    pub fn with_range_end(self, end: Option<String>) -> Self {
        Self {
            raw_range: RangeBound {
                start: self.raw_range.start.clone(),
                end,
            },
            ..self
        }
    }

    #[must_use]
    pub fn with_search(self, search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            ..self
        }
    }

    #[must_use]
    pub fn with_chart_kind(self, chart_kind: ChartKind) -> Self {
        Self { chart_kind, ..self }
    }

    #[must_use]
    pub fn with_selected_company(self, selected_company: usize) -> Self {
        Self {
            selected_company,
            ..self
        }
    }

    /// Commit the pending granularity and picker range.
    #[must_use]
    pub fn apply_filters(self) -> Self {
        Self {
            applied: AppliedFilters {
                granularity: self.pending_granularity,
                range: self.raw_range.clone(),
            },
            ..self
        }
    }

    /// Back to the defaults. The chart kind is a display preference and survives.
    #[must_use]
    pub fn reset(self, settings: &Settings) -> Self {
        Self {
            chart_kind: self.chart_kind,
            ..Self::new(settings)
        }
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new(&Settings::default())
    }
}
