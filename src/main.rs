#![forbid(unsafe_code)]
use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{Level, event};
use vitals_sampler::config::{self, load_configuration};
use vitals_sampler::datamodel::{Measurement, VitalsDateTime, vitals_datetime::parse_datetime};
use vitals_sampler::demo::{example_measurements, example_origin};
use vitals_sampler::exporters::OutputFormat;
use vitals_sampler::importers::read_measurements_file;
use vitals_sampler::sampling::{IntervalWidth, sample_with_interval};

/// Reduce vital sign measurements to the latest reading of each interval
#[derive(Debug, Parser)]
#[command(name = "vitals-sampler", version)]
struct Cli {
    /// CSV file with datetime,type,value columns. Uses the example data set when omitted
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Start of sampling (RFC 3339). Defaults to the earliest measurement
    #[arg(short, long)]
    origin: Option<String>,

    /// Output format: text, csv or jsonl
    #[arg(short, long)]
    format: Option<OutputFormat>,

    /// Interval width in minutes
    #[arg(long)]
    interval_minutes: Option<u32>,
}

fn main() -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to create Tokio runtime")?;

    runtime.block_on(async_main())
}

async fn async_main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    load_configuration().context("Failed to load configuration")?;
    let config = config::get().context("Failed to get configuration")?;

    let width = match cli.interval_minutes {
        Some(minutes) => IntervalWidth::from_minutes(minutes)?,
        None => config.interval().context("Invalid interval in configuration")?,
    };
    let format = match cli.format {
        Some(format) => format,
        None => config
            .parse_output_format()
            .context("Invalid output format in configuration")?,
    };

    let (measurements, default_origin) = match &cli.input {
        Some(path) => {
            let measurements = read_measurements_file(path).await?;
            let earliest = earliest_time(&measurements);
            (measurements, earliest)
        }
        None => {
            event!(Level::INFO, "No input file given, using the example data set");
            let origin = example_origin();
            (example_measurements(origin)?, Some(origin))
        }
    };

    let Some(origin) = resolve_origin(cli.origin.as_deref(), default_origin)? else {
        event!(Level::INFO, "No measurements to sample");
        print!("{}", format.render_empty()?);
        return Ok(());
    };

    event!(
        Level::INFO,
        "Sampling {} measurements from {} in {} intervals",
        measurements.len(),
        origin,
        width.as_duration()
    );
    let result = sample_with_interval(origin, &measurements, width)
        .context("Failed to sample measurements")?;

    print!("{}", format.render(&result, origin, width)?);
    Ok(())
}

fn earliest_time(measurements: &[Measurement]) -> Option<VitalsDateTime> {
    measurements
        .iter()
        .map(Measurement::time)
        .reduce(|earliest, time| if time < earliest { time } else { earliest })
}

/// An explicit origin wins. `None` means there is nothing to sample from.
fn resolve_origin(
    cli_origin: Option<&str>,
    default_origin: Option<VitalsDateTime>,
) -> Result<Option<VitalsDateTime>> {
    match cli_origin {
        Some(origin) => Ok(Some(parse_datetime(origin).context("Invalid --origin")?)),
        None => Ok(default_origin),
    }
}
