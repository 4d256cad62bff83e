// validation.rs - Argument parsing and validation

use argh::{EarlyExit, FromArgs};
use std::path::{Path, PathBuf};

use crate::cli::args::Args;
use crate::cli::config::FileNames;
use crate::data::InputFiles;

/// Fully resolved loader settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    /// Accepted for downstream consumers; the loader never reads it
    pub overwrite: bool,
    pub files: InputFiles,
}

impl Settings {
    /// Settings with the default file names and no overwrite
    pub fn new(input_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
            overwrite: false,
            files: InputFiles::default(),
        }
    }
}

/// Parse raw argument strings (program name first) into `Args`.
///
/// No process-wide state is touched: `--help` and parse errors come back as
/// an `EarlyExit` for the caller to print.
pub fn parse_args(raw: &[&str]) -> Result<Args, EarlyExit> {
    let (command, rest) = match raw.split_first() {
        Some((command, rest)) => (*command, rest),
        None => ("tournament-loader", &[][..]),
    };
    Args::from_args(&[command], rest)
}

/// Validate arguments and resolve defaults against `cwd`
pub fn validate_args(args: &Args, cwd: &Path) -> Result<Settings, String> {
    let input = args.input.as_ref().ok_or("--input is required")?;

    let output_dir = match &args.output {
        Some(output) => PathBuf::from(output),
        None => cwd.to_path_buf(),
    };

    let overwrite = match &args.overwrite {
        Some(value) => parse_flag(value)
            .ok_or_else(|| format!("Invalid --overwrite value '{}'. Use true or false", value))?,
        None => false,
    };

    Ok(Settings {
        input_dir: PathBuf::from(input),
        output_dir,
        overwrite,
        files: InputFiles::default(),
    })
}

/// Parse a boolean flag value, ignoring case
pub fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "t" | "yes" | "y" | "1" | "on" => Some(true),
        "false" | "f" | "no" | "n" | "0" | "off" => Some(false),
        _ => None,
    }
}

/// Apply `[files]` overrides from a configuration file
pub fn apply_file_names(settings: &mut Settings, names: &FileNames) -> Result<(), String> {
    let overrides = [
        (&names.countries, &mut settings.files.countries, "countries"),
        (
            &names.poule_phase_games,
            &mut settings.files.poule_phase_games,
            "poule_phase_games",
        ),
        (
            &names.final_phase_games,
            &mut settings.files.final_phase_games,
            "final_phase_games",
        ),
    ];

    for (name, slot, key) in overrides {
        if let Some(name) = name {
            if name.trim().is_empty() {
                return Err(format!("files.{} must not be empty", key));
            }
            *slot = name.clone();
        }
    }
    Ok(())
}

/// Pure path from raw argument strings to settings
pub fn parse_settings(raw: &[&str], cwd: &Path) -> Result<Settings, String> {
    let args = parse_args(raw).map_err(|early| early.output.trim_end().to_string())?;
    validate_args(&args, cwd)
}
