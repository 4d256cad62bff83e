// config.rs - Configuration file support

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Per-dataset file name overrides (`[files]` table)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct FileNames {
    pub countries: Option<String>,
    pub poule_phase_games: Option<String>,
    pub final_phase_games: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    // Input/Output
    pub input: Option<String>,
    pub output: Option<String>,

    // Flags
    pub overwrite: Option<bool>,

    // Input file names relative to `input`
    pub files: Option<FileNames>,
}

impl Config {
    /// Create a new empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| format!("Failed to parse config: {}", e))
    }

    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file '{}': {}", path.display(), e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| format!("Failed to parse config file '{}': {}", path.display(), e))?;

        tracing::debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// Generate a sample configuration file with comments
    pub fn generate_sample() -> String {
        r#"# tournament-loader.toml - Configuration file for tournament-loader
# Command line arguments will override these settings

# =============================================================================
# INPUT/OUTPUT
# =============================================================================

# Directory containing the three input CSV files
input = "/path/to/input"

# Output directory (created with parents if missing)
# Omit to use the current working directory
output = "/path/to/output"

# =============================================================================
# FLAGS
# =============================================================================

# Passed through to downstream consumers; not used while loading
overwrite = false

# =============================================================================
# INPUT FILE NAMES (relative to `input`)
# =============================================================================

[files]
countries = "countries.csv"
poule_phase_games = "poule_phase_games.csv"
final_phase_games = "final_phase_games.csv"
"#
        .to_string()
    }
}
