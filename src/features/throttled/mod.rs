mod collector;
mod models;
mod parser;

pub use collector::collect_throttled;
pub use models::{graph, ThrottledFlag, THROTTLED_FLAGS};
pub use parser::{decode_throttled, parse_throttled};
