pub mod analytics;
pub mod chart;
pub mod granularity;
pub mod range;
pub mod series;
pub mod settings;
pub mod state;
