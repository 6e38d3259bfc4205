//! CLI argument parser.
//!
//! Every flag is optional. With no arguments the program writes the stock
//! 48kHz / 440Hz fixture; flags override the config file and environment.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::ToneConfig;
use crate::error::Result;
use crate::types::Quantization;

/// Quantization policy as accepted on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum QuantizationArg {
    /// Round to the nearest integer
    #[default]
    Round,
    /// Truncate toward zero (plain integer cast)
    Truncate,
}

impl From<QuantizationArg> for Quantization {
    fn from(arg: QuantizationArg) -> Self {
        match arg {
            QuantizationArg::Round => Quantization::Round,
            QuantizationArg::Truncate => Quantization::Truncate,
        }
    }
}

/// tonegen: sine tone WAV fixtures for audio pipeline testing
#[derive(Parser, Debug)]
#[command(name = "tonegen")]
#[command(about = "Writes a mono 16-bit PCM sine tone WAV file for audio pipeline testing")]
#[command(version)]
pub struct Cli {
    /// Sample rate in Hz [default: 48000]
    #[arg(short = 'r', long)]
    pub sample_rate: Option<u32>,

    /// Duration in seconds [default: 1.0]
    #[arg(short, long, allow_negative_numbers = true)]
    pub duration: Option<f64>,

    /// Tone frequency in Hz [default: 440]
    #[arg(short, long, allow_negative_numbers = true)]
    pub frequency: Option<f64>,

    /// Amplitude as a fraction of full scale, in (0, 1] [default: 0.3]
    #[arg(short, long, allow_negative_numbers = true)]
    pub amplitude: Option<f64>,

    /// Output WAV file path [default: debug-audio/test-static.wav]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// How samples are mapped to 16-bit integers [default: round]
    #[arg(short, long, value_enum)]
    pub quantization: Option<QuantizationArg>,

    /// JSON config file (defaults to the platform config directory if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print the write report as JSON instead of a text summary
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Parses command-line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// Resolves the effective configuration.
    ///
    /// Precedence, lowest first: defaults, config file, environment, flags.
    pub fn resolve_config(&self) -> Result<ToneConfig> {
        let mut config = match self.config {
            Some(ref path) => ToneConfig::load(path)?,
            None => ToneConfig::load_default()?,
        };
        config.apply_env(|key| std::env::var(key).ok());
        self.apply_overrides(&mut config);
        Ok(config)
    }

    /// Applies flags that were given on the command line.
    pub fn apply_overrides(&self, config: &mut ToneConfig) {
        if let Some(sample_rate) = self.sample_rate {
            config.sample_rate = sample_rate;
        }
        if let Some(duration) = self.duration {
            config.duration_sec = duration;
        }
        if let Some(frequency) = self.frequency {
            config.frequency_hz = frequency;
        }
        if let Some(amplitude) = self.amplitude {
            config.amplitude = amplitude;
        }
        if let Some(ref output) = self.output {
            config.output_path = output.clone();
        }
        if let Some(quantization) = self.quantization {
            config.quantization = quantization.into();
        }
    }

    /// Returns the default log filter directive.
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_arguments_keeps_config() {
        let cli = Cli::try_parse_from(["tonegen"]).unwrap();
        let mut config = ToneConfig::default();
        cli.apply_overrides(&mut config);
        assert_eq!(config, ToneConfig::default());
        assert!(!cli.json);
        assert_eq!(cli.log_level(), "warn");
    }

    #[test]
    fn flags_override_config() {
        let cli = Cli::try_parse_from([
            "tonegen",
            "--sample-rate",
            "44100",
            "-d",
            "0.5",
            "--frequency",
            "1000",
            "--amplitude",
            "0.9",
            "-o",
            "out/tone.wav",
            "--quantization",
            "truncate",
            "--verbose",
        ])
        .unwrap();

        let mut config = ToneConfig::default();
        cli.apply_overrides(&mut config);

        assert_eq!(config.sample_rate, 44100);
        assert_eq!(config.duration_sec, 0.5);
        assert_eq!(config.frequency_hz, 1000.0);
        assert_eq!(config.amplitude, 0.9);
        assert_eq!(config.output_path, PathBuf::from("out/tone.wav"));
        assert_eq!(config.quantization, Quantization::Truncate);
        assert_eq!(cli.log_level(), "debug");
    }

    #[test]
    fn negative_duration_reaches_validation() {
        let cli = Cli::try_parse_from(["tonegen", "--duration", "-1"]).unwrap();
        let mut config = ToneConfig::default();
        cli.apply_overrides(&mut config);
        assert!(config.validate().is_some());
    }

    #[test]
    fn rejects_unknown_quantization() {
        assert!(Cli::try_parse_from(["tonegen", "--quantization", "dither"]).is_err());
    }

    #[test]
    fn quantization_arg_default() {
        assert_eq!(QuantizationArg::default(), QuantizationArg::Round);
        assert_eq!(Quantization::from(QuantizationArg::Round), Quantization::Round);
    }
}
