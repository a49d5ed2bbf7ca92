use serde_json::{Map, Value};
use tracing::{info, warn};

use crate::errors::CoreError;
use crate::models::series::CompanySeries;

/// Parses and validates an uploaded company file.
///
/// Expected shape: a JSON array of objects, each with a non-empty `name`
/// string and a `prices` array of numbers. `timestamps` (array of strings)
/// and `color` (string) are optional. Downstream code never has to guess
/// whether a field exists.
pub struct LoaderService;

impl LoaderService {
    pub fn new() -> Self {
        Self
    }

    /// Parse `text` into companies, or explain why it was rejected.
    pub fn parse(&self, text: &str) -> Result<Vec<CompanySeries>, CoreError> {
        let result = serde_json::from_str::<Value>(text)
            .map_err(CoreError::from)
            .and_then(|value| self.validate(value));

        match &result {
            Ok(companies) => info!(companies = companies.len(), "company file loaded"),
            Err(e) => warn!(error = %e, "company file rejected"),
        }
        result
    }

    /// Schema check over an already-parsed JSON value.
    pub fn validate(&self, value: Value) -> Result<Vec<CompanySeries>, CoreError> {
        let Value::Array(items) = value else {
            return Err(invalid("JSON must be an array of companies"));
        };

        items
            .into_iter()
            .enumerate()
            .map(|(index, item)| Self::company_from_value(index, item))
            .collect()
    }

    fn company_from_value(index: usize, item: Value) -> Result<CompanySeries, CoreError> {
        let Value::Object(mut fields) = item else {
            return Err(missing_fields(index));
        };

        let name = match fields.remove("name") {
            Some(Value::String(name)) if !name.is_empty() => name,
            _ => return Err(missing_fields(index)),
        };
        let prices = match fields.remove("prices") {
            Some(Value::Array(prices)) => prices,
            _ => return Err(missing_fields(index)),
        };

        let prices = prices
            .iter()
            .map(Value::as_f64)
            .collect::<Option<Vec<f64>>>()
            .ok_or_else(|| {
                invalid(format!(
                    "Company {index} (\"{name}\"): prices must all be numbers"
                ))
            })?;

        let timestamps = Self::optional_timestamps(index, &name, &mut fields)?;

        let color = match fields.remove("color") {
            None | Some(Value::Null) => None,
            Some(Value::String(color)) => Some(color),
            Some(_) => {
                return Err(invalid(format!(
                    "Company {index} (\"{name}\"): color must be a string"
                )))
            }
        };

        Ok(CompanySeries {
            name,
            color,
            timestamps,
            prices,
        })
    }

    fn optional_timestamps(
        index: usize,
        name: &str,
        fields: &mut Map<String, Value>,
    ) -> Result<Vec<String>, CoreError> {
        let bad = || {
            invalid(format!(
                "Company {index} (\"{name}\"): timestamps must be an array of strings"
            ))
        };

        match fields.remove("timestamps") {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(Value::Array(items)) => items
                .into_iter()
                .map(|v| match v {
                    Value::String(s) => Ok(s),
                    _ => Err(bad()),
                })
                .collect(),
            Some(_) => Err(bad()),
        }
    }
}

impl Default for LoaderService {
    fn default() -> Self {
        Self::new()
    }
}

fn invalid(message: impl Into<String>) -> CoreError {
    CoreError::InvalidJson(message.into())
}

fn missing_fields(index: usize) -> CoreError {
    invalid(format!(
        "Each company must have a name and a prices array (company {index})"
    ))
}
