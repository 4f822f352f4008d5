use crate::shared::error::CollectionError;
use crate::shared::metrics::capture;
use regex::Regex;
use std::sync::LazyLock;

const CATEGORY: &str = "voltage";

static VOLTAGE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^volt=([0-9]+\.[0-9]+)V\n$").expect("voltage pattern is valid")
});

/// Parses `volt=<float>V\n`.
pub fn parse_voltage(out: &str) -> Result<f64, CollectionError> {
    capture(&VOLTAGE_PATTERN, CATEGORY, out)?
        .parse::<f64>()
        .map_err(|_| CollectionError::parse(CATEGORY, out))
}
