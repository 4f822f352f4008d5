use crate::shared::error::ReportError;
use crate::shared::metrics::{GraphDefinition, MetricMap, Unit};
use chrono::{DateTime, Utc};
use log::{debug, info};
use serde::Serialize;
use std::collections::BTreeMap;
use std::env;
use std::ffi::OsStr;
use std::io::Write;

/// Set by mackerel-agent when it asks a plugin for its graph definitions.
pub const META_ENV: &str = "MACKEREL_AGENT_PLUGIN_META";

const META_HEADER: &str = "# mackerel-agent-plugin";

pub fn meta_requested() -> bool {
    meta_enabled(env::var_os(META_ENV).as_deref())
}

fn meta_enabled(value: Option<&OsStr>) -> bool {
    value.map_or(false, |value| !value.is_empty())
}

#[derive(Serialize)]
struct GraphDef<'a> {
    graphs: BTreeMap<String, MetaGraph<'a>>,
}

#[derive(Serialize)]
struct MetaGraph<'a> {
    label: &'a str,
    unit: Unit,
    metrics: Vec<MetaMetric<'a>>,
}

#[derive(Serialize)]
struct MetaMetric<'a> {
    name: &'a str,
    label: &'a str,
    stacked: bool,
}

/// Renders graphs and values in the mackerel-agent plugin format.
pub struct MackerelReporter {
    prefix: String,
    graphs: Vec<GraphDefinition>,
}

impl MackerelReporter {
    pub fn new(prefix: impl Into<String>, graphs: Vec<GraphDefinition>) -> Self {
        Self {
            prefix: prefix.into(),
            graphs,
        }
    }

    fn graph_key(&self, graph: &GraphDefinition) -> String {
        format!("{}.{}", self.prefix, graph.key)
    }

    pub fn write_meta<W: Write>(&self, w: &mut W) -> Result<(), ReportError> {
        let graphs = self
            .graphs
            .iter()
            .map(|graph| {
                let meta = MetaGraph {
                    label: graph.label,
                    unit: graph.unit,
                    metrics: graph
                        .metrics
                        .iter()
                        .map(|metric| MetaMetric {
                            name: metric.name,
                            label: metric.label,
                            stacked: false,
                        })
                        .collect(),
                };
                (self.graph_key(graph), meta)
            })
            .collect();

        writeln!(w, "{}", META_HEADER)?;
        serde_json::to_writer(&mut *w, &GraphDef { graphs })?;
        writeln!(w)?;
        Ok(())
    }

    /// Writes `<prefix>.<graph>.<metric>\t<value>\t<epoch>` for every declared
    /// metric present in `metrics`, applying the metric's scale.
    pub fn write_values<W: Write>(
        &self,
        w: &mut W,
        metrics: &MetricMap,
        at: DateTime<Utc>,
    ) -> Result<(), ReportError> {
        let epoch = at.timestamp();
        let mut written = 0;
        for graph in &self.graphs {
            let graph_key = self.graph_key(graph);
            for metric in &graph.metrics {
                let Some(&value) = metrics.get(metric.name) else {
                    debug!("No value for {}.{}", graph_key, metric.name);
                    continue;
                };
                let value = metric.scale.map_or(value, |scale| value * scale);
                writeln!(w, "{}.{}\t{:.6}\t{}", graph_key, metric.name, value, epoch)?;
                written += 1;
            }
        }
        info!("Reported {} metrics under {}", written, self.prefix);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::metrics::MetricDefinition;
    use chrono::TimeZone;
    use serde_json::Value;

    fn graphs() -> Vec<GraphDefinition> {
        vec![
            GraphDefinition {
                key: "temperature",
                label: "Temperature ['C]",
                unit: Unit::Float,
                metrics: vec![MetricDefinition::new("soc_temp", "SoC Temperature")],
            },
            GraphDefinition {
                key: "clock",
                label: "Clock frequency [MHz]",
                unit: Unit::Float,
                metrics: vec![
                    MetricDefinition::scaled("arm", "ARM cores", 0.000001),
                    MetricDefinition::scaled("core", "VC4 scaler cores", 0.000001),
                ],
            },
            GraphDefinition {
                key: "state",
                label: "Throttled state",
                unit: Unit::Integer,
                metrics: vec![MetricDefinition::new("throttled", "Throttled")],
            },
        ]
    }

    #[test]
    fn writes_scaled_values() {
        let reporter = MackerelReporter::new("raspberrypi", graphs());
        let metrics: MetricMap = [
            ("soc_temp", 48.0),
            ("arm", 1500000000.0),
            ("core", 200000000.0),
            ("throttled", 1.0),
        ]
        .into_iter()
        .collect();
        let at = Utc.timestamp_opt(1700000000, 0).unwrap();

        let mut out = Vec::new();
        reporter.write_values(&mut out, &metrics, at).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "raspberrypi.temperature.soc_temp\t48.000000\t1700000000\n\
             raspberrypi.clock.arm\t1500.000000\t1700000000\n\
             raspberrypi.clock.core\t200.000000\t1700000000\n\
             raspberrypi.state.throttled\t1.000000\t1700000000\n"
        );
    }

    #[test]
    fn skips_absent_values() {
        let reporter = MackerelReporter::new("pi", graphs());
        let metrics: MetricMap = [("soc_temp", 50.5)].into_iter().collect();
        let mut out = Vec::new();
        reporter
            .write_values(&mut out, &metrics, Utc.timestamp_opt(0, 0).unwrap())
            .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "pi.temperature.soc_temp\t50.500000\t0\n");
    }

    #[test]
    fn writes_graph_definitions() {
        let reporter = MackerelReporter::new("raspberrypi", graphs());
        let mut out = Vec::new();
        reporter.write_meta(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        let (header, body) = text.split_once('\n').unwrap();
        assert_eq!(header, "# mackerel-agent-plugin");
        let json: Value = serde_json::from_str(body.trim_end()).unwrap();

        let clock = &json["graphs"]["raspberrypi.clock"];
        assert_eq!(clock["label"], "Clock frequency [MHz]");
        assert_eq!(json["graphs"]["raspberrypi.temperature"]["label"], "Temperature ['C]");
        assert_eq!(clock["unit"], "float");
        assert_eq!(clock["metrics"][0]["name"], "arm");
        assert_eq!(clock["metrics"][0]["label"], "ARM cores");
        assert_eq!(clock["metrics"][0]["stacked"], false);
        assert!(clock["metrics"][0].get("scale").is_none());
        assert_eq!(json["graphs"]["raspberrypi.state"]["unit"], "integer");
        assert_eq!(json["graphs"].as_object().unwrap().len(), 3);
    }

    #[test]
    fn meta_mode_needs_a_non_empty_value() {
        assert!(!meta_enabled(None));
        assert!(!meta_enabled(Some(OsStr::new(""))));
        assert!(meta_enabled(Some(OsStr::new("1"))));
    }
}
