use crate::features::{clock, temperature, throttled, voltage};
use crate::shared::metrics::GraphDefinition;

/// Graphs published to the agent, in reporting order.
pub fn graph_definitions() -> Vec<GraphDefinition> {
    vec![
        temperature::graph(),
        clock::graph(),
        voltage::graph(),
        throttled::graph(),
    ]
}

pub fn declared_metrics() -> Vec<&'static str> {
    graph_definitions()
        .into_iter()
        .flat_map(|graph| graph.metrics.into_iter().map(|metric| metric.name))
        .collect()
}
