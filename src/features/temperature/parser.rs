use crate::shared::error::CollectionError;
use crate::shared::metrics::capture;
use regex::Regex;
use std::sync::LazyLock;

const CATEGORY: &str = "temperature";

static TEMPERATURE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^temp=(-?[0-9]+\.[0-9]+)'C\n$").expect("temperature pattern is valid")
});

/// Parses `temp=<float>'C\n`.
pub fn parse_temperature(out: &str) -> Result<f64, CollectionError> {
    capture(&TEMPERATURE_PATTERN, CATEGORY, out)?
        .parse::<f64>()
        .map_err(|_| CollectionError::parse(CATEGORY, out))
}
