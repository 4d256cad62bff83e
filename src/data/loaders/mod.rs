// mod.rs - File loaders for input tables

pub mod csv;
