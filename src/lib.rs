// lib.rs - tournament-loader library root

//! # tournament-loader - Input loader for tournament data
//!
//! Loads the three CSV inputs of a tournament (country list, poule phase games
//! and final phase games) from an input directory and checks two assumptions
//! about them:
//!
//! 1. all three files are present in the input directory;
//! 2. the files are `.csv`, can be parsed, and carry at least one of their
//!    expected columns.
//!
//! Violations never abort a run. They are printed as they are found and
//! collected in an [`AssumptionReport`] that is returned with the tables.
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use tournament_loader::prelude::*;
//!
//! let settings = parse_settings(
//!     &["tournament-loader", "--input", "data", "--output", "out"],
//!     &std::env::current_dir().map_err(|e| e.to_string())?,
//! )?;
//! let inputs = load_inputs(&settings).map_err(|e| e.to_string())?;
//!
//! for message in inputs.report.messages() {
//!     println!("{}", message);
//! }
//! println!("{} countries loaded", inputs.countries.len());
//! # Ok::<(), String>(())
//! ```

pub mod cli;
pub mod core;
pub mod data;
pub mod error;
pub mod logging;
pub mod output;

// Convenience prelude for common imports
pub mod prelude {
    pub use crate::cli::{parse_args, parse_settings, validate_args, Args, Config, Settings};
    pub use crate::core::{load_inputs, Assumption, AssumptionReport, LoadFailure, LoadedInputs};
    pub use crate::data::{Dataset, InputFiles, Table};
    pub use crate::error::{LoadError, TableError};
    pub use crate::output::print_summary;
}

// Re-export main types at the root level for convenience
pub use crate::cli::{Args, Settings};
pub use crate::core::{load_inputs, Assumption, AssumptionReport, LoadedInputs};
pub use crate::data::{Dataset, InputFiles, Table};
pub use crate::error::{LoadError, TableError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get library information
pub fn get_info() -> String {
    format!("tournament-loader v{} - Tournament input loader", VERSION)
}
