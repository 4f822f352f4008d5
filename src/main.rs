use clap::Parser;
use log::{debug, error};
use rpimetrics::{
    features::raspberrypi::{graph_definitions, RaspberrypiCollector},
    shared::{
        command::Vcgencmd,
        config::PluginConfig,
        error::{PluginError, ReportError},
        report::{meta_requested, MackerelReporter},
        traits::AsyncDataCollector,
    },
};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "rpimetrics", version, about = "Raspberry Pi vcgencmd metrics for mackerel-agent")]
struct Args {
    /// Metric key prefix
    #[arg(long)]
    metric_key_prefix: Option<String>,

    /// Temp file name
    #[arg(long)]
    tempfile: Option<PathBuf>,

    /// YAML config file; flags take precedence over its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Path to vcgencmd (looked up on PATH by default)
    #[arg(long)]
    vcgencmd: Option<PathBuf>,
}

fn load_config(args: Args) -> Result<PluginConfig, PluginError> {
    let config = match &args.config {
        Some(path) => PluginConfig::load(path)?,
        None => PluginConfig::default(),
    };
    Ok(config.with_overrides(args.metric_key_prefix, args.tempfile, args.vcgencmd))
}

async fn run(config: PluginConfig) -> Result<(), PluginError> {
    let reporter = MackerelReporter::new(config.metric_key_prefix(), graph_definitions());

    if meta_requested() {
        let mut out = io::stdout().lock();
        reporter.write_meta(&mut out)?;
        out.flush().map_err(ReportError::from)?;
        return Ok(());
    }

    if let Some(tempfile) = &config.tempfile {
        debug!("Tempfile {} is passed through, no differential metrics", tempfile.display());
    }

    let runner = match &config.vcgencmd {
        Some(path) => Vcgencmd::with_path(path.clone()),
        None => Vcgencmd::locate()?,
    };
    let mut collector = RaspberrypiCollector::new(runner);
    AsyncDataCollector::validate(&collector).await?;
    let snapshot = AsyncDataCollector::collect(&mut collector).await?;

    let mut out = io::stdout().lock();
    reporter.write_values(&mut out, &snapshot.metrics, snapshot.timestamp)?;
    out.flush().map_err(ReportError::from)?;
    Ok(())
}

async fn execute(args: Args) -> ExitCode {
    let config = match load_config(args) {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    execute(Args::parse()).await
}
