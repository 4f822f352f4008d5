use crate::features::clock::collect_clock;
use crate::features::raspberrypi::models::{MetricSnapshot, MetricSnapshotBuilder};
use crate::features::temperature::collect_temperature;
use crate::features::throttled::collect_throttled;
use crate::features::voltage::collect_voltage;
use crate::shared::command::CommandRunner;
use crate::shared::error::CollectionError;
use crate::shared::metrics::MetricMap;
use crate::shared::traits::{AsyncDataCollector, DataCollector};
use chrono::Utc;
use log::{debug, info};
use uuid::Uuid;

type Stage = fn(&dyn CommandRunner) -> Result<MetricMap, CollectionError>;

/// Collection order. Metric names never overlap between stages.
const STAGES: [(&str, Stage); 4] = [
    ("temperature", collect_temperature),
    ("clock", collect_clock),
    ("voltage", collect_voltage),
    ("throttled", collect_throttled),
];

pub struct RaspberrypiCollector<R> {
    runner: R,
}

impl<R: CommandRunner> RaspberrypiCollector<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    /// Runs every stage in order. The first error aborts the cycle and no
    /// partial map is returned.
    pub fn fetch_metrics(&self) -> Result<MetricMap, CollectionError> {
        let mut metrics = MetricMap::new();
        for (name, stage) in STAGES {
            let stage_metrics = stage(&self.runner)?;
            debug!("Collected {} {} metrics", stage_metrics.len(), name);
            metrics.extend(stage_metrics);
        }
        Ok(metrics)
    }
}

impl<R: CommandRunner> DataCollector<MetricSnapshot> for RaspberrypiCollector<R> {
    fn collect(&mut self) -> Result<MetricSnapshot, CollectionError> {
        let metrics = self.fetch_metrics()?;
        let hostname = whoami::fallible::hostname().map_err(CollectionError::Hostname)?;

        let snapshot = MetricSnapshotBuilder::new()
            .id(Uuid::new_v4().to_string())
            .timestamp(Utc::now())
            .source(hostname)
            .category(String::from("raspberrypi"))
            .metrics(metrics)
            .build()
            .map_err(CollectionError::Validation)?;

        info!("Collected {} Raspberry Pi metrics", snapshot.metrics.len());
        Ok(snapshot)
    }

    fn validate(&self) -> Result<(), CollectionError> {
        self.runner.validate()
    }
}

#[async_trait::async_trait]
impl<R: CommandRunner + Send + Sync> AsyncDataCollector<MetricSnapshot> for RaspberrypiCollector<R> {
    async fn collect(&mut self) -> Result<MetricSnapshot, CollectionError> {
        DataCollector::collect(self)
    }

    async fn validate(&self) -> Result<(), CollectionError> {
        self.runner.validate()
    }
}
