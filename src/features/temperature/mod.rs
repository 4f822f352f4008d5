mod collector;
mod models;
mod parser;

pub use collector::collect_temperature;
pub use models::{graph, SOC_TEMP};
pub use parser::parse_temperature;
