mod collector;
mod models;
mod parser;

pub use collector::collect_clock;
pub use models::{graph, ClockDevice, CLOCK_DEVICES, HZ_TO_MHZ};
pub use parser::parse_clock;
