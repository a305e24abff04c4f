use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use slawatch::{AvailabilityPolicy, AvailabilityReport, FileSource, SeriesSource, Settings};

#[derive(Parser, Debug)]
#[command(name = "slawatch")]
#[command(about = "Compute SLA availability from cumulative uptime counter samples")]
struct Args {
    /// Path to a series document (JSON); overrides the configured input
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the window start from the document
    #[arg(long)]
    start: Option<i64>,

    /// Override the window end from the document
    #[arg(long)]
    end: Option<i64>,

    /// Digits printed after the decimal point
    #[arg(short, long)]
    precision: Option<usize>,

    /// Only print this policy (connectivity, uptime, device-aware, exception-aware)
    #[arg(long)]
    policy: Option<AvailabilityPolicy>,

    /// Also print the up/down/open state of every sample
    #[arg(short, long)]
    states: bool,

    /// Export the report to a JSON file and exit
    #[arg(short, long)]
    export: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let settings = Settings::load(args.config.as_deref())?;
    init_tracing(&settings.log_level);

    let input = args.file.clone().unwrap_or_else(|| settings.input.clone());
    let mut source = FileSource::new(&input);
    info!(source = source.description(), "loading series");
    let document = source
        .load()?
        .with_window_overrides(args.start, args.end);

    let include_states = args.states || settings.include_states;
    let report = if include_states {
        AvailabilityReport::compute_with_states(&document.window, &document.samples)
    } else {
        AvailabilityReport::compute(&document.window, &document.samples)
    }
    .with_context(|| format!("Cannot compute availability for {}", input.display()))?;
    debug!(?report, "report ready");

    // Handle export mode (non-interactive)
    if let Some(export_path) = args.export {
        return export_to_file(&report, &export_path);
    }

    let precision = args.precision.unwrap_or(settings.precision);
    print_report(&report, args.policy, precision)
}

/// Install the fmt subscriber; `RUST_LOG` wins over the configured level.
fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Print the figures, one policy per line.
fn print_report(
    report: &AvailabilityReport,
    only: Option<AvailabilityPolicy>,
    precision: usize,
) -> Result<()> {
    let stdout = std::io::stdout();
    write_report(&mut stdout.lock(), report, only, precision)
}

fn write_report(
    out: &mut impl Write,
    report: &AvailabilityReport,
    only: Option<AvailabilityPolicy>,
    precision: usize,
) -> Result<()> {
    for (policy, ratio) in report.iter() {
        if only.is_some_and(|p| p != policy) {
            continue;
        }
        writeln!(out, "{}: {:.*}", policy.label(), precision, ratio)?;
    }

    if let Some(states) = &report.states {
        let labels: Vec<&str> = states.iter().map(|s| s.as_str()).collect();
        writeln!(out, "States: {}", labels.join(" "))?;
    }
    Ok(())
}

/// Write the report as pretty JSON.
fn export_to_file(report: &AvailabilityReport, export_path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    let mut file = std::fs::File::create(export_path)
        .with_context(|| format!("Cannot create {}", export_path.display()))?;
    file.write_all(json.as_bytes())?;

    println!("Exported availability report to: {}", export_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use slawatch::{UptimeSeries, Window};

    fn report(states: bool) -> AvailabilityReport {
        let series = UptimeSeries::builder()
            .sample(10, 10)
            .sample(20, 20)
            .exception(30, 0)
            .sample(40, 0)
            .build();
        let window = Window::new(0, 40);
        if states {
            AvailabilityReport::compute_with_states(&window, &series).unwrap()
        } else {
            AvailabilityReport::compute(&window, &series).unwrap()
        }
    }

    fn render(report: &AvailabilityReport, only: Option<AvailabilityPolicy>) -> String {
        let mut out = Vec::new();
        write_report(&mut out, report, only, 2).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_prints_every_policy() {
        assert_eq!(
            render(&report(false), None),
            "Connectivity SLA: 0.50\nUptime SLA: 0.50\nSLA 1: 0.50\nSLA 2: 0.75\n"
        );
    }

    #[test]
    fn test_policy_filter() {
        let only = Some(AvailabilityPolicy::ExceptionAware);
        assert_eq!(render(&report(false), only), "SLA 2: 0.75\n");
    }

    #[test]
    fn test_states_line() {
        let only = Some(AvailabilityPolicy::DeviceAware);
        assert_eq!(render(&report(true), only), "SLA 1: 0.50\nStates: up up open open\n");
    }

    #[test]
    fn test_parse_args() {
        let args =
            Args::try_parse_from(["slawatch", "--policy", "sla2", "--states", "--end", "500"])
                .unwrap();
        assert_eq!(args.policy, Some(AvailabilityPolicy::ExceptionAware));
        assert!(args.states);
        assert_eq!(args.end, Some(500));
        assert!(args.file.is_none());
    }
}
