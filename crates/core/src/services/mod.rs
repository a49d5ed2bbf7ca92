pub mod aggregation_service;
pub mod analytics_service;
pub mod bucket_service;
pub mod chart_service;
pub mod loader_service;
pub mod range_service;
pub mod search_service;
