use tracing::debug;

use crate::errors::CoreError;
use crate::models::granularity::Granularity;
use crate::models::range::{RangeBound, RangeKey, ResolvedRange};
use crate::models::series::CompanySeries;
use crate::services::bucket_service::{parse_timestamp, BucketService};

/// Keeps only the samples whose timestamp falls inside a user-chosen range.
///
/// The range is read at the chosen granularity: whole years for year/decade
/// views, months, days, or exact instants for minute/hour views. Both ends
/// are inclusive.
pub struct RangeFilterService {
    bucket_service: BucketService,
}

impl RangeFilterService {
    pub fn new() -> Self {
        Self {
            bucket_service: BucketService::new(),
        }
    }

    /// Parse the picker text into comparable keys for `granularity`.
    pub fn resolve(
        &self,
        bound: &RangeBound,
        granularity: Granularity,
    ) -> Result<ResolvedRange, CoreError> {
        Ok(ResolvedRange {
            start: bound
                .start()
                .map(|s| Self::resolve_one(s, granularity))
                .transpose()?,
            end: bound
                .end()
                .map(|s| Self::resolve_one(s, granularity))
                .transpose()?,
        })
    }

    fn resolve_one(raw: &str, granularity: Granularity) -> Result<RangeKey, CoreError> {
        if granularity.is_yearly() {
            if let Ok(year) = raw.parse::<i32>() {
                return Ok(RangeKey::Year(year));
            }
        }

        parse_timestamp(raw)
            .map(|dt| BucketService::range_key_for_instant(&dt, granularity))
            .ok_or_else(|| CoreError::InvalidRange {
                value: raw.to_string(),
                granularity: granularity.label().to_string(),
                reason: expected_format(granularity).to_string(),
            })
    }

    /// Filter every company independently.
    ///
    /// With no bounds set the input comes back unchanged. Misaligned series
    /// pass through untouched; samples with unparseable timestamps are
    /// dropped because they cannot satisfy any bound.
    pub fn filter(
        &self,
        series: &[CompanySeries],
        bound: &RangeBound,
        granularity: Granularity,
    ) -> Result<Vec<CompanySeries>, CoreError> {
        if bound.is_unbounded() {
            return Ok(series.to_vec());
        }

        let range = self.resolve(bound, granularity)?;

        let filtered: Vec<CompanySeries> = series
            .iter()
            .map(|company| self.filter_company(company, &range, granularity))
            .collect();

        debug!(
            granularity = %granularity,
            before = series.iter().map(CompanySeries::len).sum::<usize>(),
            after = filtered.iter().map(CompanySeries::len).sum::<usize>(),
            "range filter applied"
        );

        Ok(filtered)
    }

    fn filter_company(
        &self,
        company: &CompanySeries,
        range: &ResolvedRange,
        granularity: Granularity,
    ) -> CompanySeries {
        if !company.is_aligned() {
            return company.clone();
        }

        let (timestamps, prices): (Vec<String>, Vec<f64>) = company
            .timestamps
            .iter()
            .zip(&company.prices)
            .filter(|(ts, _)| {
                self.bucket_service
                    .range_key(ts, granularity)
                    .is_some_and(|key| range.contains(&key))
            })
            .map(|(ts, price)| (ts.clone(), *price))
            .unzip();

        company.with_samples(timestamps, prices)
    }
}

impl Default for RangeFilterService {
    fn default() -> Self {
        Self::new()
    }
}

fn expected_format(granularity: Granularity) -> &'static str {
    match granularity {
        Granularity::Year | Granularity::Decade => "expected a calendar year such as 2024",
        Granularity::Month => "expected YYYY-MM",
        Granularity::Date => "expected YYYY-MM-DD",
        Granularity::Minute | Granularity::Hour => "expected YYYY-MM-DDTHH:MM",
    }
}
