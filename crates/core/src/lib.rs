pub mod errors;
pub mod models;
pub mod services;
pub mod sources;

use models::{
    analytics::CompanySummary,
    chart::{ChartKind, RenderPlan},
    granularity::Granularity,
    range::PickerBounds,
    series::CompanySeries,
    settings::Settings,
    state::DashboardState,
};
use services::{
    aggregation_service::AggregationService, analytics_service::AnalyticsService,
    chart_service::ChartService, loader_service::LoaderService,
    range_service::RangeFilterService, search_service::SearchService,
};
use sources::traits::SeriesSource;
use tracing::{debug, warn};

use errors::CoreError;

/// Main entry point for the stock dashboard core library.
///
/// Holds the loaded companies, the current UI state and the last
/// user-visible error. State changes replace the whole [`DashboardState`]
/// value; the loaded companies are never modified after a load.
#[must_use]
pub struct StockDashboard {
    companies: Option<Vec<CompanySeries>>,
    state: DashboardState,
    settings: Settings,
    last_error: Option<String>,
    loader_service: LoaderService,
    search_service: SearchService,
    range_service: RangeFilterService,
    aggregation_service: AggregationService,
    analytics_service: AnalyticsService,
    chart_service: ChartService,
}

impl std::fmt::Debug for StockDashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StockDashboard")
            .field("companies", &self.companies.as_ref().map(Vec::len))
            .field("state", &self.state)
            .field("last_error", &self.last_error)
            .finish()
    }
}

impl StockDashboard {
    /// Create an empty dashboard with default settings.
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    /// Create an empty dashboard with custom defaults.
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            companies: None,
            state: DashboardState::new(&settings),
            settings,
            last_error: None,
            loader_service: LoaderService::new(),
            search_service: SearchService::new(),
            range_service: RangeFilterService::new(),
            aggregation_service: AggregationService::new(),
            analytics_service: AnalyticsService::new(),
            chart_service: ChartService::new(),
        }
    }

    // ── Loading ─────────────────────────────────────────────────────

    /// Load companies from JSON text. Returns the number of companies loaded.
    ///
    /// On success the data is replaced and filters, range and search are
    /// reset (the chart kind is kept). On failure the previous data and state
    /// stay in place and the message is kept for [`last_error`](Self::last_error).
    pub fn load_from_str(&mut self, text: &str) -> Result<usize, CoreError> {
        match self.loader_service.parse(text) {
            Ok(companies) => {
                let count = companies.len();
                self.companies = Some(companies);
                self.state = self.state.clone().reset(&self.settings);
                self.last_error = None;
                Ok(count)
            }
            Err(e) => Err(self.record(e)),
        }
    }

    /// Read a source and load it. Reading is the only async step.
    pub async fn load_from_source(&mut self, source: &dyn SeriesSource) -> Result<usize, CoreError> {
        debug!(source = source.name(), "loading company file");
        match source.read_text().await {
            Ok(text) => self.load_from_str(&text),
            Err(e) => Err(self.record(e)),
        }
    }

    /// `true` once a file has been loaded successfully.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.companies.is_some()
    }

    /// The companies exactly as loaded.
    #[must_use]
    pub fn companies(&self) -> Option<&[CompanySeries]> {
        self.companies.as_deref()
    }

    /// Message of the last failed load or apply, cleared by the next success.
    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    // ── State Transitions ───────────────────────────────────────────

    #[must_use]
    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Choose a granularity in the selector. Clears the picker range;
    /// nothing changes on the chart until [`apply_filters`](Self::apply_filters).
    pub fn select_granularity(&mut self, granularity: Granularity) {
        self.state = self.state.clone().with_granularity(granularity);
    }

    pub fn set_range_start(&mut self, start: Option<String>) {
        self.state = self.state.clone().with_range_start(start);
    }

    pub fn set_range_end(&mut self, end: Option<String>) {
        self.state = self.state.clone().with_range_end(end);
    }

    /// Search applies immediately, without "Apply Filters".
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.state = self.state.clone().with_search(search);
    }

    pub fn set_chart_kind(&mut self, kind: ChartKind) {
        self.state = self.state.clone().with_chart_kind(kind);
    }

    /// Choose which company the single-series views show.
    /// `index` refers to the current chart data (after search and filters).
    pub fn select_company(&mut self, index: usize) -> Result<(), CoreError> {
        let count = self.chart_data()?.len();
        if index >= count {
            return Err(CoreError::CompanyNotFound { index, count });
        }
        self.state = self.state.clone().with_selected_company(index);
        Ok(())
    }

    /// Commit the pending granularity and range.
    ///
    /// The range is checked first; an unparseable bound leaves the applied
    /// filters as they were and is reported like a load error.
    pub fn apply_filters(&mut self) -> Result<(), CoreError> {
        if let Err(e) = self
            .range_service
            .resolve(&self.state.raw_range, self.state.pending_granularity)
        {
            return Err(self.record(e));
        }
        self.state = self.state.clone().apply_filters();
        self.last_error = None;
        Ok(())
    }

    /// Back to the default granularity with no range and no search.
    pub fn reset_filters(&mut self) {
        self.state = self.state.clone().reset(&self.settings);
    }

    // ── Chart Data ──────────────────────────────────────────────────

    /// Search, then range filter, then aggregate, using the applied filters.
    /// Empty when nothing is loaded.
    pub fn chart_data(&self) -> Result<Vec<CompanySeries>, CoreError> {
        let Some(companies) = self.companies.as_deref() else {
            return Ok(Vec::new());
        };

        let applied = &self.state.applied;
        let searched = self.search_service.search(companies, &self.state.search);
        let filtered = self
            .range_service
            .filter(&searched, &applied.range, applied.granularity)?;
        Ok(self
            .aggregation_service
            .aggregate(&filtered, applied.granularity))
    }

    /// `true` when at least one company still has prices after filtering.
    /// When `false` the front end shows "No data matches the selected filters."
    pub fn has_matches(&self) -> Result<bool, CoreError> {
        Ok(self.chart_data()?.iter().any(|c| !c.is_empty()))
    }

    /// Renderer-ready data for the current chart kind and selection.
    pub fn render_plan(&self) -> Result<RenderPlan, CoreError> {
        let data = self.chart_data()?;
        Ok(self
            .chart_service
            .render_plan(&data, self.state.chart_kind, self.state.selected_company))
    }

    /// [`render_plan`](Self::render_plan) as pretty-printed JSON for a web renderer.
    pub fn render_plan_json(&self) -> Result<String, CoreError> {
        let plan = self.render_plan()?;
        serde_json::to_string_pretty(&plan).map_err(|e| CoreError::Serialization(e.to_string()))
    }

    /// Statistics row for the selected company (first company when the
    /// selection is out of range). `None` when no company is shown.
    pub fn summary(&self) -> Result<Option<CompanySummary>, CoreError> {
        let data = self.chart_data()?;
        Ok(data
            .get(self.state.selected_company)
            .or_else(|| data.first())
            .map(|company| self.analytics_service.summarize_company(company)))
    }

    /// Statistics rows for every company in the chart data.
    pub fn summaries(&self) -> Result<Vec<CompanySummary>, CoreError> {
        Ok(self
            .chart_data()?
            .iter()
            .map(|company| self.analytics_service.summarize_company(company))
            .collect())
    }

    /// Min/max for the range pickers at the pending granularity.
    #[must_use]
    pub fn picker_bounds(&self) -> Option<PickerBounds> {
        let companies = self.companies.as_deref()?;
        self.chart_service
            .picker_bounds(companies, self.state.pending_granularity)
    }

    // ── Internal ────────────────────────────────────────────────────

    fn record(&mut self, e: CoreError) -> CoreError {
        warn!(error = %e, "dashboard action rejected");
        self.last_error = Some(e.to_string());
        e
    }
}

impl Default for StockDashboard {
    fn default() -> Self {
        Self::new()
    }
}
