use crate::features::temperature::models::SOC_TEMP;
use crate::features::temperature::parser::parse_temperature;
use crate::shared::command::{CommandRunner, Request};
use crate::shared::error::CollectionError;
use crate::shared::metrics::MetricMap;

pub fn collect_temperature(runner: &dyn CommandRunner) -> Result<MetricMap, CollectionError> {
    let out = runner.run(Request::MeasureTemp)?;
    let mut metrics = MetricMap::new();
    metrics.insert(SOC_TEMP, parse_temperature(&out)?);
    Ok(metrics)
}
