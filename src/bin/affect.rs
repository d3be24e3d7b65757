//! Affect CLI - Command-line interface for the NeuroTune affect engine
//!
//! Commands:
//! - analyze: Run the signal-to-affect pipeline over session exports
//! - bands: Print the canonical EEG frequency band table
//! - doctor: Diagnose engine health and configuration

use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use neurotune_affect::bands::CANONICAL_BANDS;
use neurotune_affect::{analyze, AnalysisError, EnvelopeEncoder, ENGINE_VERSION, PRODUCER_NAME};

/// Affect - EEG signal-to-affect scoring engine
#[derive(Parser)]
#[command(name = "affect")]
#[command(version = ENGINE_VERSION)]
#[command(about = "Score affect and listening contexts from EEG session exports", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the signal-to-affect pipeline over session exports
    Analyze {
        /// Raw EEG/PPG time-series export (use - for stdin)
        #[arg(long)]
        raw: Option<PathBuf>,

        /// Fp1-channel FFT power table (use - for stdin)
        #[arg(long)]
        fp1_fft: Option<PathBuf>,

        /// Fp2-channel FFT power table (use - for stdin)
        #[arg(long)]
        fp2_fft: Option<PathBuf>,

        /// Biomarker table export (use - for stdin)
        #[arg(long)]
        biomarkers: Option<PathBuf>,

        /// Output file path (use - for stdout)
        #[arg(short, long, default_value = "-")]
        output: PathBuf,

        /// Output format
        #[arg(long, default_value = "json-pretty")]
        output_format: OutputFormat,
    },

    /// Print the canonical EEG frequency band table
    Bands {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Diagnose engine health and configuration
    Doctor {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    /// Compact JSON envelope
    Json,
    /// Pretty-printed JSON envelope
    JsonPretty,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!(
                "{}",
                serde_json::to_string(&CliError::from(e))
                    .unwrap_or_else(|_| "Unknown error".to_string())
            );
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), AffectCliError> {
    match cli.command {
        Commands::Analyze {
            raw,
            fp1_fft,
            fp2_fft,
            biomarkers,
            output,
            output_format,
        } => cmd_analyze(
            raw.as_deref(),
            fp1_fft.as_deref(),
            fp2_fft.as_deref(),
            biomarkers.as_deref(),
            &output,
            output_format,
        ),

        Commands::Bands { json } => cmd_bands(json),

        Commands::Doctor { json } => cmd_doctor(json),
    }
}

fn cmd_analyze(
    raw: Option<&Path>,
    fp1_fft: Option<&Path>,
    fp2_fft: Option<&Path>,
    biomarkers: Option<&Path>,
    output: &Path,
    output_format: OutputFormat,
) -> Result<(), AffectCliError> {
    if raw.is_none() && fp1_fft.is_none() && fp2_fft.is_none() && biomarkers.is_none() {
        return Err(AffectCliError::Analysis(AnalysisError::NoInput));
    }

    let raw_text = read_input(raw)?;
    let fp1_text = read_input(fp1_fft)?;
    let fp2_text = read_input(fp2_fft)?;
    let biomarkers_text = read_input(biomarkers)?;

    let result = analyze(
        raw_text.as_deref(),
        fp1_text.as_deref(),
        fp2_text.as_deref(),
        biomarkers_text.as_deref(),
    );

    let output_data = match output_format {
        OutputFormat::Json => EnvelopeEncoder::encode_to_json(&result)?,
        OutputFormat::JsonPretty => EnvelopeEncoder::encode_to_json_pretty(&result)?,
    };

    if output.to_string_lossy() == "-" {
        println!("{}", output_data);
    } else {
        fs::write(output, output_data)?;
    }

    Ok(())
}

fn cmd_bands(json: bool) -> Result<(), AffectCliError> {
    if json {
        let table: Vec<serde_json::Value> = CANONICAL_BANDS
            .iter()
            .map(|(name, band)| {
                serde_json::json!({
                    "name": name,
                    "minHz": band.min_hz,
                    "maxHz": band.max_hz,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&table)?);
    } else {
        println!("EEG Frequency Bands");
        println!("===================");
        for (name, band) in CANONICAL_BANDS {
            println!("  {:<6} {:>5.1} - {:>5.1} Hz", name, band.min_hz, band.max_hz);
        }
    }

    Ok(())
}

fn cmd_doctor(json: bool) -> Result<(), AffectCliError> {
    let mut checks: Vec<DoctorCheck> = Vec::new();

    checks.push(DoctorCheck {
        name: "engine_version".to_string(),
        status: CheckStatus::Ok,
        message: format!("Affect engine version {}", ENGINE_VERSION),
    });

    // Band table must be contiguous and ascending
    let bands_ordered = CANONICAL_BANDS
        .windows(2)
        .all(|pair| pair[0].1.max_hz <= pair[1].1.min_hz);
    checks.push(DoctorCheck {
        name: "band_table".to_string(),
        status: if bands_ordered { CheckStatus::Ok } else { CheckStatus::Error },
        message: if bands_ordered {
            format!("{} canonical bands, ascending", CANONICAL_BANDS.len())
        } else {
            "Band table is not in ascending frequency order".to_string()
        },
    });

    let stdin_check = if atty::is(atty::Stream::Stdin) {
        DoctorCheck {
            name: "stdin".to_string(),
            status: CheckStatus::Ok,
            message: "stdin is a TTY (interactive mode)".to_string(),
        }
    } else {
        DoctorCheck {
            name: "stdin".to_string(),
            status: CheckStatus::Ok,
            message: "stdin is a pipe (export streaming ready)".to_string(),
        }
    };
    checks.push(stdin_check);

    let report = DoctorReport {
        producer: PRODUCER_NAME.to_string(),
        version: ENGINE_VERSION.to_string(),
        checks,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Affect Doctor Report");
        println!("====================");
        println!("Producer: {}", report.producer);
        println!("Version:  {}", report.version);
        println!("\nChecks:");

        for check in &report.checks {
            let status_icon = match check.status {
                CheckStatus::Ok => "[OK]",
                CheckStatus::Error => "[ERR]",
            };
            println!("  {} {}: {}", status_icon, check.name, check.message);
        }
    }

    let has_errors = report
        .checks
        .iter()
        .any(|c| matches!(c.status, CheckStatus::Error));
    if has_errors {
        Err(AffectCliError::DoctorFailed)
    } else {
        Ok(())
    }
}

// Helper functions

fn read_input(path: Option<&Path>) -> Result<Option<String>, AffectCliError> {
    let Some(path) = path else {
        return Ok(None);
    };

    let content = if path.to_string_lossy() == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        fs::read_to_string(path)?
    };

    Ok(Some(content))
}

// Error types

#[derive(Debug)]
enum AffectCliError {
    Io(io::Error),
    Analysis(AnalysisError),
    Json(serde_json::Error),
    DoctorFailed,
}

impl From<io::Error> for AffectCliError {
    fn from(e: io::Error) -> Self {
        AffectCliError::Io(e)
    }
}

impl From<AnalysisError> for AffectCliError {
    fn from(e: AnalysisError) -> Self {
        AffectCliError::Analysis(e)
    }
}

impl From<serde_json::Error> for AffectCliError {
    fn from(e: serde_json::Error) -> Self {
        AffectCliError::Json(e)
    }
}

#[derive(serde::Serialize)]
struct CliError {
    code: String,
    message: String,
    hint: Option<String>,
}

impl From<AffectCliError> for CliError {
    fn from(e: AffectCliError) -> Self {
        match e {
            AffectCliError::Io(e) => CliError {
                code: "IO_ERROR".to_string(),
                message: e.to_string(),
                hint: Some("Check file paths and permissions".to_string()),
            },
            AffectCliError::Analysis(AnalysisError::NoInput) => CliError {
                code: "NO_INPUT".to_string(),
                message: AnalysisError::NoInput.to_string(),
                hint: Some(
                    "Provide at least one of --raw, --fp1-fft, --fp2-fft, --biomarkers".to_string(),
                ),
            },
            AffectCliError::Analysis(e) => CliError {
                code: "ANALYSIS_ERROR".to_string(),
                message: e.to_string(),
                hint: None,
            },
            AffectCliError::Json(e) => CliError {
                code: "JSON_ERROR".to_string(),
                message: e.to_string(),
                hint: Some("Check JSON syntax".to_string()),
            },
            AffectCliError::DoctorFailed => CliError {
                code: "DOCTOR_FAILED".to_string(),
                message: "One or more health checks failed".to_string(),
                hint: Some("Review the doctor report for details".to_string()),
            },
        }
    }
}

#[derive(serde::Serialize)]
struct DoctorReport {
    producer: String,
    version: String,
    checks: Vec<DoctorCheck>,
}

#[derive(serde::Serialize)]
struct DoctorCheck {
    name: String,
    status: CheckStatus,
    message: String,
}

#[derive(serde::Serialize)]
enum CheckStatus {
    Ok,
    Error,
}
