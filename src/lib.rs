pub mod features;
pub mod shared;

// Re-export commonly used items from features
pub use features::clock::{parse_clock, CLOCK_DEVICES};
pub use features::temperature::parse_temperature;
pub use features::throttled::{parse_throttled, THROTTLED_FLAGS};
pub use features::voltage::{parse_voltage, VOLTAGE_RAILS};
pub use features::raspberrypi::{
    graph_definitions,
    MetricSnapshot,
    RaspberrypiCollector,
};

// Re-export shared functionality
pub use shared::command::{CommandRunner, Request, Vcgencmd};
pub use shared::config::PluginConfig;
pub use shared::error::{
    CollectionError,
    ConfigError,
    PluginError,
    ReportError,
};
pub use shared::metrics::MetricMap;
pub use shared::report::MackerelReporter;
pub use shared::traits::{AsyncDataCollector, DataCollector, Validatable};
