use crate::features::throttled::models::THROTTLED_FLAGS;
use crate::shared::error::CollectionError;
use crate::shared::metrics::{capture, MetricMap};
use regex::Regex;
use std::sync::LazyLock;

const CATEGORY: &str = "throttled";

static THROTTLED_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^throttled=0x([0-9a-fA-F]+)\n$").expect("throttled pattern is valid")
});

/// Parses `throttled=0x<hex>\n` and decodes every flag in `THROTTLED_FLAGS`.
pub fn parse_throttled(out: &str) -> Result<MetricMap, CollectionError> {
    let payload = capture(&THROTTLED_PATTERN, CATEGORY, out)?;
    let word = u32::from_str_radix(payload, 16).map_err(|_| CollectionError::parse(CATEGORY, out))?;
    Ok(decode_throttled(word))
}

pub fn decode_throttled(word: u32) -> MetricMap {
    THROTTLED_FLAGS
        .iter()
        .map(|flag| (flag.metric, flag.value(word)))
        .collect()
}
