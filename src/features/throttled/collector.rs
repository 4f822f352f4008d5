use crate::features::throttled::parser::parse_throttled;
use crate::shared::command::{CommandRunner, Request};
use crate::shared::error::CollectionError;
use crate::shared::metrics::MetricMap;

pub fn collect_throttled(runner: &dyn CommandRunner) -> Result<MetricMap, CollectionError> {
    let out = runner.run(Request::GetThrottled)?;
    parse_throttled(&out)
}
