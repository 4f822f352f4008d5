use chrono::{DateTime, Utc};
use std::collections::HashSet;
use crate::features::raspberrypi::graphs::declared_metrics;
use crate::features::throttled::THROTTLED_FLAGS;
use crate::shared::metrics::MetricMap;
use crate::shared::traits::Validatable;

/// Outcome of one complete collection cycle.
#[derive(Debug, Clone)]
pub struct MetricSnapshot {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub source: String,
    pub category: String,
    pub metrics: MetricMap,
}

impl Validatable for MetricSnapshot {
    fn validate(&self) -> Result<(), String> {
        let declared: HashSet<&str> = declared_metrics().into_iter().collect();
        for name in self.metrics.keys() {
            if !declared.contains(*name) {
                return Err(format!("Undeclared metric {}", name));
            }
        }
        for name in &declared {
            if !self.metrics.contains_key(*name) {
                return Err(format!("Missing metric {}", name));
            }
        }
        for flag in &THROTTLED_FLAGS {
            if let Some(&value) = self.metrics.get(flag.metric) {
                if value != 0.0 && value != 1.0 {
                    return Err(format!("Flag {} must be 0 or 1, got {}", flag.metric, value));
                }
            }
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct MetricSnapshotBuilder {
    id: Option<String>,
    timestamp: Option<DateTime<Utc>>,
    source: Option<String>,
    category: Option<String>,
    metrics: Option<MetricMap>,
}

impl MetricSnapshotBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: String) -> Self {
        self.id = Some(id);
        self
    }

    pub fn timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    pub fn source(mut self, source: String) -> Self {
        self.source = Some(source);
        self
    }

    pub fn category(mut self, category: String) -> Self {
        self.category = Some(category);
        self
    }

    pub fn metrics(mut self, metrics: MetricMap) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn build(self) -> Result<MetricSnapshot, String> {
        let snapshot = MetricSnapshot {
            id: self.id.ok_or("id is required")?,
            timestamp: self.timestamp.ok_or("timestamp is required")?,
            source: self.source.ok_or("source is required")?,
            category: self.category.ok_or("category is required")?,
            metrics: self.metrics.ok_or("metrics is required")?,
        };

        snapshot.validate()?;
        Ok(snapshot)
    }
}
