use crate::features::clock::models::CLOCK_DEVICES;
use crate::features::clock::parser::parse_clock;
use crate::shared::command::{CommandRunner, Request};
use crate::shared::error::CollectionError;
use crate::shared::metrics::MetricMap;

/// Measures every device in `CLOCK_DEVICES`, stopping at the first failure.
pub fn collect_clock(runner: &dyn CommandRunner) -> Result<MetricMap, CollectionError> {
    let mut metrics = MetricMap::new();
    for clock in &CLOCK_DEVICES {
        let out = runner.run(Request::MeasureClock(clock.device))?;
        metrics.insert(clock.device, parse_clock(&out)?);
    }
    Ok(metrics)
}
