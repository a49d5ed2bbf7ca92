use std::collections::HashMap;

use tracing::debug;

use crate::models::granularity::Granularity;
use crate::models::series::CompanySeries;
use crate::services::analytics_service::mean_step;
use crate::services::bucket_service::BucketService;

/// Reduces each company's samples to one mean price per time bucket.
pub struct AggregationService {
    bucket_service: BucketService,
}

impl AggregationService {
    pub fn new() -> Self {
        Self {
            bucket_service: BucketService::new(),
        }
    }

    /// Aggregate every company at `granularity`.
    ///
    /// Buckets appear in the order their key was first seen, not sorted. A
    /// later sample with a known key extends that bucket. Misaligned series
    /// pass through untouched.
    pub fn aggregate(
        &self,
        series: &[CompanySeries],
        granularity: Granularity,
    ) -> Vec<CompanySeries> {
        let aggregated: Vec<CompanySeries> = series
            .iter()
            .map(|company| self.aggregate_company(company, granularity))
            .collect();

        debug!(
            granularity = %granularity,
            companies = aggregated.len(),
            buckets = aggregated.iter().map(CompanySeries::len).sum::<usize>(),
            "aggregation applied"
        );

        aggregated
    }

    fn aggregate_company(&self, company: &CompanySeries, granularity: Granularity) -> CompanySeries {
        if !company.is_aligned() {
            return company.clone();
        }

        // (key, mean, count) in first-seen order, with an index for lookups
        let mut buckets: Vec<(String, f64, usize)> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for (ts, price) in company.timestamps.iter().zip(&company.prices) {
            let key = self.bucket_service.bucket_key(ts, granularity);
            match index.get(&key) {
                Some(&slot) => {
                    let bucket = &mut buckets[slot];
                    bucket.2 += 1;
                    bucket.1 = mean_step(bucket.1, *price, bucket.2);
                }
                None => {
                    index.insert(key.clone(), buckets.len());
                    buckets.push((key, *price, 1));
                }
            }
        }

        let (timestamps, prices) = buckets
            .into_iter()
            .map(|(key, mean, _)| (key, mean))
            .unzip();

        company.with_samples(timestamps, prices)
    }
}

impl Default for AggregationService {
    fn default() -> Self {
        Self::new()
    }
}
