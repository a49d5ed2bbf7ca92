use thiserror::Error;

/// Unified error type for the entire stock-dashboard-core library.
/// Every fallible public function returns `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Loading ─────────────────────────────────────────────────────
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    // ── File I/O (native only) ──────────────────────────────────────
    #[error("File I/O error: {0}")]
    FileIO(String),

    // ── Filters & Selection ─────────────────────────────────────────
    #[error("Invalid range bound '{value}' for {granularity} view: {reason}")]
    InvalidRange {
        value: String,
        granularity: String,
        reason: String,
    },

    #[error("Unknown granularity: {0}")]
    UnknownGranularity(String),

    #[error("Unknown chart kind: {0}")]
    UnknownChartKind(String),

    #[error("Company index {index} out of range ({count} companies loaded)")]
    CompanyNotFound { index: usize, count: usize },

    // ── Output ──────────────────────────────────────────────────────
    #[error("Serialization error: {0}")]
    Serialization(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        CoreError::FileIO(e.to_string())
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::InvalidJson(e.to_string())
    }
}
