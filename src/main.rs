//! tonegen: writes a sine tone WAV fixture for audio pipeline testing.
//!
//! Run with no arguments to produce `debug-audio/test-static.wav`, a one second
//! 440Hz tone at 48kHz. See `tonegen --help` for overrides.

use tracing_subscriber::EnvFilter;

use tonegen::cli::Cli;
use tonegen::error::{ErrorCode, Result, ToneError};
use tonegen::generation::render_from_config;
use tonegen::types::WavReport;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse_args();
    init_logging(cli.log_level());

    let config = cli.resolve_config()?;
    let report = render_from_config(&config)?;

    if cli.json {
        let json = serde_json::to_string_pretty(&report).map_err(|e| {
            ToneError::with_source(
                ErrorCode::Io,
                "Internal error: failed to serialize the report as JSON (the WAV file was written)",
                e,
            )
        })?;
        println!("{}", json);
    } else {
        print_summary(&report);
    }

    Ok(())
}

/// Initializes stderr logging, honoring `RUST_LOG` when set.
fn init_logging(default_level: &str) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()),
        )
        .init();
}

/// Prints the human-readable summary of a written fixture.
fn print_summary(report: &WavReport) {
    println!(
        "Created {}Hz test audio file: {}",
        report.sample_rate,
        report.path.display()
    );
    println!("  Sample rate: {} Hz", report.sample_rate);
    println!("  Duration: {:?} seconds", report.duration_sec);
    println!("  Frequency: {} Hz", report.frequency_hz);
    println!("  Samples: {} ({})", report.sample_count, report.quantization);
    println!("  File size: {} bytes", report.file_size_bytes);
    println!("  PCM digest: {}", report.pcm_digest);
}
