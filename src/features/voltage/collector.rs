use crate::features::voltage::models::VOLTAGE_RAILS;
use crate::features::voltage::parser::parse_voltage;
use crate::shared::command::{CommandRunner, Request};
use crate::shared::error::CollectionError;
use crate::shared::metrics::MetricMap;

pub fn collect_voltage(runner: &dyn CommandRunner) -> Result<MetricMap, CollectionError> {
    let mut metrics = MetricMap::new();
    for rail in &VOLTAGE_RAILS {
        let out = runner.run(Request::MeasureVolts(rail.rail))?;
        metrics.insert(rail.metric, parse_voltage(&out)?);
    }
    Ok(metrics)
}
