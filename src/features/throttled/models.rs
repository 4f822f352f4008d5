use crate::shared::metrics::{GraphDefinition, MetricDefinition, Unit};

/// One bit of the `get_throttled` status word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThrottledFlag {
    pub bit: u32,
    pub metric: &'static str,
    pub label: &'static str,
}

impl ThrottledFlag {
    pub fn value(&self, word: u32) -> f64 {
        f64::from((word >> self.bit) & 1)
    }
}

// Bits 16..=19 latch the live bits 0..=3 since boot.
pub const THROTTLED_FLAGS: [ThrottledFlag; 8] = [
    ThrottledFlag { bit: 0, metric: "under_voltage", label: "Under-voltage detected" },
    ThrottledFlag { bit: 1, metric: "frequency_capped", label: "Arm frequency capped" },
    ThrottledFlag { bit: 2, metric: "throttled", label: "Throttled" },
    ThrottledFlag { bit: 3, metric: "temperature_limit", label: "Soft temperature limit active" },
    ThrottledFlag { bit: 16, metric: "under_voltage_occurred", label: "Under-voltage has occurred" },
    ThrottledFlag { bit: 17, metric: "frequency_capped_occurred", label: "Arm frequency capping has occurred" },
    ThrottledFlag { bit: 18, metric: "throttled_occurred", label: "Throttling has occurred" },
    ThrottledFlag { bit: 19, metric: "temperature_limit_occurred", label: "Soft temperature limit has occurred" },
];

pub fn graph() -> GraphDefinition {
    GraphDefinition {
        key: "state",
        label: "Throttled state",
        unit: Unit::Integer,
        metrics: THROTTLED_FLAGS
            .iter()
            .map(|flag| MetricDefinition::new(flag.metric, flag.label))
            .collect(),
    }
}
