//! u-reliability CLI

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use u_reliability::analysis::{analyze, AnalysisConfig, AnalysisInput};
use u_reliability::input::parse_failure_times;
use u_reliability::report::{render_summary, EquipmentInfo};

#[derive(Parser)]
#[command(name = "u-reliability")]
#[command(about = "Weibull reliability analysis and maintenance thresholds from failure times")]
#[command(version)]
struct Cli {
    /// Log verbosity level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    log_level: tracing::Level,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fit a Weibull model and print reliability and maintenance thresholds
    Analyze {
        /// Times to failure in hours, comma separated (e.g. "100,200,300,400")
        #[arg(short, long, conflicts_with = "input")]
        times: Option<String>,

        /// Analysis horizon in hours
        #[arg(long, default_value = "0")]
        horizon: f64,

        /// Current operating hours of the equipment
        #[arg(long, default_value = "0")]
        current_hours: f64,

        /// JSON file holding {"times": [...], "horizon": h, "currentHours": c}
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// JSON file holding analysis settings (e.g. {"curvePoints": 100})
        #[arg(long)]
        config: Option<PathBuf>,

        /// Print the full report as pretty JSON instead of the text summary
        #[arg(long)]
        json: bool,

        /// Equipment name for the summary header
        #[arg(long, default_value = "Motor")]
        equipment: String,

        /// Equipment make for the summary header
        #[arg(long, default_value = "Siemens")]
        make: String,

        /// Equipment model for the summary header
        #[arg(long, default_value = "X2000")]
        model: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt().with_max_level(cli.log_level).with_target(false).init();

    match cli.command {
        Commands::Analyze {
            times,
            horizon,
            current_hours,
            input,
            config,
            json,
            equipment,
            make,
            model,
        } => {
            let analysis_input = match (input, times) {
                (Some(path), _) => read_json::<AnalysisInput>(&path)?,
                (None, Some(text)) => {
                    AnalysisInput::new(parse_failure_times(&text)?, horizon, current_hours)
                }
                (None, None) => bail!("either --times or --input is required"),
            };
            let analysis_config = match config {
                Some(path) => read_json::<AnalysisConfig>(&path)?,
                None => AnalysisConfig::default(),
            };
            let info = EquipmentInfo { name: equipment, make, model };
            cmd_analyze(&analysis_input, &analysis_config, &info, json)
        }
    }
}

fn cmd_analyze(
    input: &AnalysisInput,
    config: &AnalysisConfig,
    info: &EquipmentInfo,
    json: bool,
) -> Result<()> {
    tracing::info!(n = input.times.len(), horizon = input.horizon, "running weibull analysis");
    let report = analyze(input, config).context("weibull analysis failed")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_summary(info, &report));
    }
    Ok(())
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("failed to parse {}", path.display()))
}
