//! Date checks for parameters such as `start_date` or `ConversionDate`.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::types::ParamMap;

/// Date shapes accepted by the API.
pub static DATE_REGEXES: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"^\d{4}-\d{2}-\d{2}$",
        r"^\d{4}/\d{2}/\d{2}$",
        r"^\d{2}/\d{2}/\d{4}$",
        r"^\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}$",
        r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}(\.\d+)?(Z|[+-]\d{2}:\d{2})?$",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).unwrap())
    .collect()
});

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];
const DATE_TIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"];

/// Returns true if `input` matches one of `regexes` and names a real calendar date.
///
/// A pattern match alone is not enough: `2022-13-40` has the right shape but
/// fails the calendar parse.
pub fn is_valid_date_format(input: &str, regexes: &[Regex]) -> bool {
    if !regexes.iter().any(|regex| regex.is_match(input)) {
        return false;
    }
    parses_as_date(input)
}

fn parses_as_date(input: &str) -> bool {
    DateTime::parse_from_rfc3339(input).is_ok()
        || DATE_FORMATS
            .iter()
            .any(|format| NaiveDate::parse_from_str(input, format).is_ok())
        || DATE_TIME_FORMATS
            .iter()
            .any(|format| NaiveDateTime::parse_from_str(input, format).is_ok())
}

/// Checks every key of `params` listed in `keys_to_test` against [`DATE_REGEXES`].
///
/// Absent keys pass, so optional date fields never fail validation on their own.
pub fn validate_dates(params: Option<&ParamMap>, keys_to_test: &[&str]) -> bool {
    let Some(params) = params else {
        return true;
    };
    params
        .iter()
        .filter(|(key, _)| keys_to_test.contains(&key.as_str()))
        .all(|(_, value)| match value {
            Value::String(date) => is_valid_date_format(date, &DATE_REGEXES),
            _ => false,
        })
}
