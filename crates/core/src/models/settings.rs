use serde::{Deserialize, Serialize};

use super::chart::ChartKind;
use super::granularity::Granularity;

/// Dashboard defaults. A fresh load and "Reset Filters" return to these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Granularity selected on start-up and after a reset.
    pub default_granularity: Granularity,

    /// Chart kind selected on start-up.
    pub default_chart_kind: ChartKind,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_granularity: Granularity::Date,
            default_chart_kind: ChartKind::Line,
        }
    }
}
