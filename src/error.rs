// error.rs - Library error types

use std::error::Error as StdError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal loader errors; everything else ends up in the assumption report
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to create output directory {}", .path.display())]
    CreateOutputDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Errors while reading a single CSV table
#[derive(Error, Debug)]
pub enum TableError {
    #[error("failed to open {}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("failed to read header of {}", .path.display())]
    Header {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("{} has no header row", .path.display())]
    NoHeader { path: PathBuf },

    #[error("failed to read record {} of {}", .record, .path.display())]
    Record {
        path: PathBuf,
        record: usize,
        #[source]
        source: csv::Error,
    },

    #[error(
        "record {} of {} has {} fields, expected at most {}",
        .record,
        .path.display(),
        .found,
        .expected
    )]
    TooManyFields {
        path: PathBuf,
        record: usize,
        found: usize,
        expected: usize,
    },
}

/// Render an error with its sources, outermost first
pub fn error_chain(err: &dyn StdError) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
