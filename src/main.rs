//! CLI entry point for the district report tool.
//!
//! Loads the school and student CSV files, computes every summary view and
//! either prints them as tables or exports them as JSON.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use district_report::analyzers::report::analyze;
use district_report::output::{Section, render_report, write_json};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "district_report")]
#[command(about = "Summarize school district performance from school and student CSVs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct Inputs {
    /// CSV with one row per school
    #[arg(long, env = "SCHOOLS_CSV", default_value = "Resources/schools_complete.csv")]
    schools: PathBuf,

    /// CSV with one row per student
    #[arg(long, env = "STUDENTS_CSV", default_value = "Resources/students_complete.csv")]
    students: PathBuf,

    /// Number of schools in the top and bottom performer views
    #[arg(long, default_value_t = 5)]
    top: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Print summary tables to stdout
    Report {
        #[command(flatten)]
        inputs: Inputs,

        /// Only print these sections (repeatable); all sections by default
        #[arg(short, long, value_enum)]
        section: Vec<Section>,
    },
    /// Write every summary as JSON
    Export {
        #[command(flatten)]
        inputs: Inputs,

        /// JSON file to write
        #[arg(short, long, default_value = "district_report.json")]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/district_report.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("district_report.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Report { inputs, section } => {
            let report = analyze(&inputs.schools, &inputs.students, inputs.top)?;
            println!("{}", render_report(&report, &section));
        }
        Commands::Export { inputs, output } => {
            let report = analyze(&inputs.schools, &inputs.students, inputs.top)?;
            write_json(&output, &report)?;
            info!(
                path = %output.display(),
                schools = report.schools.len(),
                "Export complete"
            );
        }
    }

    Ok(())
}
