mod collector;
mod models;
mod parser;

pub use collector::collect_voltage;
pub use models::{graph, VoltageRail, VOLTAGE_RAILS};
pub use parser::parse_voltage;
