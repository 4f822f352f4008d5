mod mackerel;

pub use mackerel::{meta_requested, MackerelReporter, META_ENV};
