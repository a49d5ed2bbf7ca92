use crate::models::series::CompanySeries;

/// Narrows the loaded companies by name.
pub struct SearchService;

impl SearchService {
    pub fn new() -> Self {
        Self
    }

    /// Keep companies whose name contains `query` (trimmed, case-insensitive).
    /// A blank query keeps everything. Order is preserved.
    pub fn search(&self, series: &[CompanySeries], query: &str) -> Vec<CompanySeries> {
        let q = query.trim().to_lowercase();
        if q.is_empty() {
            return series.to_vec();
        }
        series
            .iter()
            .filter(|c| c.name.to_lowercase().contains(&q))
            .cloned()
            .collect()
    }
}

impl Default for SearchService {
    fn default() -> Self {
        Self::new()
    }
}
