// mod.rs - Core logic module

pub mod loader;
pub mod report;

// Re-export main types for convenience
pub use loader::{ensure_output_dir, has_csv_extension, load_inputs, LoadFailure, LoadedInputs};
pub use report::{Assumption, AssumptionReport};
