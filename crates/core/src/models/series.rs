use serde::{Deserialize, Serialize};

/// One company's price history plus display metadata.
///
/// `timestamps` and `prices` are parallel arrays. A series whose lengths
/// disagree is not *aligned* and is passed through every pipeline stage
/// untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanySeries {
    /// Display name (not guaranteed unique)
    pub name: String,

    /// Display color, e.g. `rgba(54, 162, 235, 1)`. Opaque to the pipeline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// ISO-8601-like date strings, one per price
    #[serde(default)]
    pub timestamps: Vec<String>,

    pub prices: Vec<f64>,
}

impl CompanySeries {
    pub fn new(name: impl Into<String>, timestamps: Vec<String>, prices: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            color: None,
            timestamps,
            prices,
        }
    }

    /// Builder-style color setter.
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// `true` when every price has a matching timestamp.
    #[must_use]
    pub fn is_aligned(&self) -> bool {
        self.timestamps.len() == self.prices.len()
    }

    /// Copy of this series with the samples replaced; name and color carry over.
    #[must_use]
    pub fn with_samples(&self, timestamps: Vec<String>, prices: Vec<f64>) -> Self {
        Self {
            name: self.name.clone(),
            color: self.color.clone(),
            timestamps,
            prices,
        }
    }

    /// Last price, used by "latest value per company" views.
    #[must_use]
    pub fn latest_price(&self) -> Option<f64> {
        self.prices.last().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}
