use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::CoreError;

/// Chart title shown above every visualization.
pub const CHART_TITLE: &str = "Company Stock Prices Over Time";
/// X axis caption.
pub const X_AXIS_TITLE: &str = "Time Period";
/// Y axis caption.
pub const Y_AXIS_TITLE: &str = "Stock Price ($)";
/// Shown instead of a chart when the chosen kind has nothing to draw.
pub const NO_CHART_DATA_MESSAGE: &str = "No data available for this chart type.";

/// Visualization selected by the user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    #[default]
    Line,
    Bar,
    Pie,
    Scatter,
}

impl ChartKind {
    pub const ALL: [ChartKind; 4] = [
        ChartKind::Line,
        ChartKind::Bar,
        ChartKind::Pie,
        ChartKind::Scatter,
    ];

    #[must_use]
    pub const fn value(&self) -> &'static str {
        match self {
            ChartKind::Line => "line",
            ChartKind::Bar => "bar",
            ChartKind::Pie => "pie",
            ChartKind::Scatter => "scatter",
        }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            ChartKind::Line => "Line",
            ChartKind::Bar => "Bar",
            ChartKind::Pie => "Pie",
            ChartKind::Scatter => "Scatter",
        }
    }
}

impl std::fmt::Display for ChartKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl FromStr for ChartKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        ChartKind::ALL
            .into_iter()
            .find(|k| k.value() == wanted)
            .ok_or_else(|| CoreError::UnknownChartKind(s.to_string()))
    }
}

/// One plotted series with its styling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// Legend label (the company name)
    pub label: String,

    pub data: Vec<f64>,

    /// Line/edge color: the company color as given
    pub border_color: Option<String>,

    /// Fill color: the company color at half opacity
    pub background_color: Option<String>,
}

/// A point on the scatter view: `x` is the 1-based sample position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    pub x: usize,
    pub y: f64,
}

/// Everything a chart widget needs to draw one chart kind.
///
/// The core computes all the numbers; the renderer only draws. Label and
/// data arrays are always the same length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RenderPlan {
    /// Line and bar charts of the selected company.
    SeriesChart {
        kind: ChartKind,
        labels: Vec<String>,
        dataset: Dataset,
    },

    /// Price against sample position for the selected company, joined by a line.
    Scatter {
        label: String,
        points: Vec<ScatterPoint>,
        border_color: Option<String>,
        background_color: Option<String>,
        show_line: bool,
    },

    /// One slice per company sized by its latest price (`None` when the
    /// company has no prices left after filtering).
    LatestValues {
        labels: Vec<String>,
        values: Vec<Option<f64>>,
        border_colors: Vec<Option<String>>,
        background_colors: Vec<Option<String>>,
    },

    /// Nothing to draw; show the message instead.
    Unavailable { message: String },
}
