// mod.rs - CLI module

pub mod args;
pub mod config;
pub mod merge;
pub mod validation;

// Re-export main types for convenience
pub use args::Args;
pub use config::{Config, FileNames};
pub use validation::{
    apply_file_names, parse_args, parse_flag, parse_settings, validate_args, Settings,
};
