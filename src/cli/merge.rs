// merge.rs - Merge configuration file with CLI arguments

use crate::cli::{Args, Config};

impl Args {
    /// Merge with configuration from file
    /// CLI arguments take precedence over config file values
    pub fn merge_with_config(mut self, config: &Config) -> Self {
        // Input/Output
        if self.input.is_none() {
            self.input = config.input.clone();
        }
        if self.output.is_none() {
            self.output = config.output.clone();
        }

        // Flags
        if self.overwrite.is_none() {
            self.overwrite = config.overwrite.map(|flag| flag.to_string());
        }

        self
    }

    /// Load configuration and merge with CLI args
    pub fn with_config_file(self, config_path: &str) -> Result<(Self, Config), String> {
        let config = Config::from_file(config_path)?;
        Ok((self.merge_with_config(&config), config))
    }
}
