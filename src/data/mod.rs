// mod.rs - Data structures module

pub mod dataset;
pub mod loaders;
pub mod table;

// Re-export main types for convenience
pub use dataset::{Dataset, InputFiles};
pub use table::Table;
