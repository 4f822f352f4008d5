use crate::shared::error::CollectionError;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;

/// Values of one collection cycle keyed by metric name.
pub type MetricMap = BTreeMap<&'static str, f64>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Float,
    Integer,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MetricDefinition {
    pub name: &'static str,
    pub label: &'static str,
    /// Multiplier applied when the value is reported.
    pub scale: Option<f64>,
}

impl MetricDefinition {
    pub const fn new(name: &'static str, label: &'static str) -> Self {
        Self { name, label, scale: None }
    }

    pub const fn scaled(name: &'static str, label: &'static str, scale: f64) -> Self {
        Self { name, label, scale: Some(scale) }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GraphDefinition {
    pub key: &'static str,
    pub label: &'static str,
    pub unit: Unit,
    pub metrics: Vec<MetricDefinition>,
}

impl GraphDefinition {
    pub fn contains(&self, name: &str) -> bool {
        self.metrics.iter().any(|metric| metric.name == name)
    }
}

/// Returns the single capture group of `pattern` when it matches the whole of `out`.
pub fn capture<'a>(
    pattern: &Regex,
    category: &'static str,
    out: &'a str,
) -> Result<&'a str, CollectionError> {
    pattern
        .captures(out)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .ok_or_else(|| CollectionError::parse(category, out))
}
