pub mod command;
pub mod config;
pub mod error;
pub mod metrics;
pub mod report;
pub mod traits;

pub use error::*;
pub use traits::*;
