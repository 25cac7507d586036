//! Command-line front end for the triangulation service
//!
//! Reads a JSON array of observation records from a file and prints the
//! triangulation report. This is the stand-in for the interactive UI the
//! core normally serves; parsing and presentation live here, geometry
//! stays in the library.

use std::env;
use std::fs;
use std::process;

use triangulation::{Observation, TriangulationConfig, TriangulationService};

enum ReportFormat {
    Text,
    Json,
    Csv,
}

struct CliArgs {
    input_path: String,
    format: ReportFormat,
    config_path: Option<String>,
}

fn parse_args() -> Result<CliArgs, String> {
    let mut input_path = None;
    let mut format = ReportFormat::Text;
    let mut config_path = None;

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--format" => {
                let value = args.next().ok_or("--format requires a value")?;
                format = match value.as_str() {
                    "text" => ReportFormat::Text,
                    "json" => ReportFormat::Json,
                    "csv" => ReportFormat::Csv,
                    other => return Err(format!("unknown format '{}'", other)),
                };
            }
            "--config" => {
                config_path = Some(args.next().ok_or("--config requires a path")?);
            }
            "--help" | "-h" => {
                return Err(usage());
            }
            other if input_path.is_none() => input_path = Some(other.to_string()),
            other => return Err(format!("unexpected argument '{}'", other)),
        }
    }

    Ok(CliArgs {
        input_path: input_path.ok_or_else(usage)?,
        format,
        config_path,
    })
}

fn usage() -> String {
    "usage: triangulation <observations.json> [--format text|json|csv] [--config <config.json>]"
        .to_string()
}

fn run(args: &CliArgs) -> Result<String, String> {
    let content = fs::read_to_string(&args.input_path)
        .map_err(|e| format!("failed to read '{}': {}", args.input_path, e))?;
    let observations: Vec<Observation> = serde_json::from_str(&content)
        .map_err(|e| format!("failed to parse observations: {}", e))?;

    let config = match &args.config_path {
        Some(path) => TriangulationConfig::from_file(path).map_err(|e| e.to_string())?,
        None => TriangulationConfig::default(),
    };
    let service = TriangulationService::with_config(config);

    let report = match args.format {
        ReportFormat::Text => service.report_text(&observations, false),
        ReportFormat::Json => service.report_json(&observations, true),
        ReportFormat::Csv => service.report_csv(&observations, true),
    };
    report.map_err(|e| e.to_string())
}

fn main() {
    let args = match parse_args() {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{}", message);
            process::exit(1);
        }
    };

    match run(&args) {
        Ok(report) => print!("{}", report),
        Err(message) => {
            eprintln!("{}", message);
            process::exit(1);
        }
    }
}
