use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use chrono_tz::Tz;
use clap::{Parser, Subcommand};
use stock_report::config::{load_configs, select_reports};
use stock_report::{ReportClient, ReportConfig, ReportError, presets, run_report};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the reports that can be run
    List {
        /// JSON file with report definitions (defaults to the built-in reports)
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Build reports and overwrite their snapshot files
    Run {
        /// Report names to run
        names: Vec<String>,
        /// Run every defined report
        #[arg(long)]
        all: bool,
        /// Directory relative output paths are resolved against
        #[arg(long, default_value = "data")]
        out_dir: PathBuf,
        /// Display timezone override (IANA name, e.g. Asia/Taipei)
        #[arg(long)]
        timezone: Option<String>,
        /// JSON file with report definitions (defaults to the built-in reports)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Per-request timeout in seconds
        #[arg(long, default_value_t = 20)]
        timeout: u64,
    },
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn definitions(config: Option<&PathBuf>) -> Result<Vec<ReportConfig>, ReportError> {
    match config {
        Some(path) => load_configs(path),
        None => Ok(presets::all()),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Command::List { config } => match definitions(config.as_ref()) {
            Ok(defs) => {
                for d in defs {
                    println!("{}\t{}", d.name, d.output.display());
                }
                ExitCode::SUCCESS
            }
            Err(e) => {
                tracing::error!("{e}");
                ExitCode::FAILURE
            }
        },
        Command::Run {
            names,
            all,
            out_dir,
            timezone,
            config,
            timeout,
        } => {
            let prepared = (|| {
                let tz = timezone
                    .as_deref()
                    .map(|s| {
                        s.parse::<Tz>()
                            .map_err(|e| ReportError::Config(format!("timezone '{s}': {e}")))
                    })
                    .transpose()?;
                let selected = select_reports(definitions(config.as_ref())?, &names, all)?;
                let client = ReportClient::builder()
                    .timeout(Duration::from_secs(timeout))
                    .build()?;
                Ok::<_, ReportError>((tz, selected, client))
            })();

            let (tz, selected, client) = match prepared {
                Ok(p) => p,
                Err(e) => {
                    tracing::error!("{e}");
                    return ExitCode::FAILURE;
                }
            };

            let mut failed = false;
            for mut report_cfg in selected {
                if let Some(tz) = tz {
                    report_cfg = report_cfg.with_timezone(tz);
                }
                match run_report(&client, &report_cfg, &out_dir).await {
                    Ok(report) => {
                        tracing::info!(report = %report_cfg.name, ok = report.ok, "snapshot written");
                        println!("Updated {}", report_cfg.output_path(&out_dir).display());
                    }
                    Err(e) => {
                        tracing::error!(report = %report_cfg.name, "{e}");
                        failed = true;
                    }
                }
            }

            if failed {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
    }
}
