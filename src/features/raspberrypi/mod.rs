mod collector;
mod graphs;
mod models;

pub use collector::RaspberrypiCollector;
pub use graphs::{declared_metrics, graph_definitions};
pub use models::{MetricSnapshot, MetricSnapshotBuilder};
