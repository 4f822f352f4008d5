use crate::shared::metrics::{GraphDefinition, MetricDefinition, Unit};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoltageRail {
    /// Argument to `measure_volts`.
    pub rail: &'static str,
    pub metric: &'static str,
    pub label: &'static str,
}

// `core` is also a clock device, hence `core_volts`.
pub const VOLTAGE_RAILS: [VoltageRail; 4] = [
    VoltageRail { rail: "core", metric: "core_volts", label: "VC4 core voltage" },
    VoltageRail { rail: "sdram_c", metric: "sdram_c", label: "SDRAM Core Voltage" },
    VoltageRail { rail: "sdram_i", metric: "sdram_i", label: "SDRAM I/O voltage" },
    VoltageRail { rail: "sdram_p", metric: "sdram_p", label: "SDRAM Phy Voltage" },
];

pub fn graph() -> GraphDefinition {
    GraphDefinition {
        key: "voltage",
        label: "Voltage [V]",
        unit: Unit::Float,
        metrics: VOLTAGE_RAILS
            .iter()
            .map(|rail| MetricDefinition::new(rail.metric, rail.label))
            .collect(),
    }
}
