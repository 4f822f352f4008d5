use crate::shared::metrics::{GraphDefinition, MetricDefinition, Unit};

pub const SOC_TEMP: &str = "soc_temp";

pub fn graph() -> GraphDefinition {
    GraphDefinition {
        key: "temperature",
        label: "Temperature ['C]",
        unit: Unit::Float,
        metrics: vec![MetricDefinition::new(SOC_TEMP, "SoC Temperature")],
    }
}
