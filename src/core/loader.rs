// loader.rs - Load the three input tables and check the input assumptions

use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::Settings;
use crate::core::report::{Assumption, AssumptionReport};
use crate::data::{Dataset, Table};
use crate::error::{error_chain, LoadError};

/// A table that could not be loaded and was replaced by an empty one
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadFailure {
    pub dataset: Dataset,
    pub path: PathBuf,
    pub reason: String,
}

/// Everything the loader hands to downstream consumers
#[derive(Debug, Clone)]
pub struct LoadedInputs {
    pub countries: Table,
    pub poule_phase: Table,
    pub final_phase: Table,
    pub output_dir: PathBuf,
    pub report: AssumptionReport,
    pub load_failures: Vec<LoadFailure>,
}

impl LoadedInputs {
    pub fn table(&self, dataset: Dataset) -> &Table {
        match dataset {
            Dataset::Countries => &self.countries,
            Dataset::PoulePhaseGames => &self.poule_phase,
            Dataset::FinalPhaseGames => &self.final_phase,
        }
    }
}

/// Create `path` and any missing parents. Existing directories are fine.
pub fn ensure_output_dir(path: &Path) -> Result<PathBuf, LoadError> {
    fs::create_dir_all(path).map_err(|source| LoadError::CreateOutputDir {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(path.to_path_buf())
}

/// Exact, case-sensitive `.csv` suffix
pub fn has_csv_extension(path: &Path) -> bool {
    path.extension().and_then(|ext| ext.to_str()) == Some("csv")
}

/// Load the countries, poule phase and final phase tables.
///
/// Violations are printed one per line and collected in the report; they
/// never abort the run. A missing file is not read and yields an empty
/// table. A present file that fails to parse also yields an empty table,
/// plus a `LoadFailure`, and counts as unreadable. Only failing to create
/// the output directory is fatal.
pub fn load_inputs(settings: &Settings) -> Result<LoadedInputs, LoadError> {
    let output_dir = ensure_output_dir(&settings.output_dir)?;
    tracing::debug!(output = %output_dir.display(), "output directory ready");

    let paths = Dataset::ALL.map(|dataset| settings.files.path(&settings.input_dir, dataset));
    let mut report = AssumptionReport::new();

    // Assumption 1: the files are present
    let present = paths.clone().map(|path| path.exists());
    let mut missing = 0;
    for ((dataset, path), exists) in Dataset::ALL.iter().zip(&paths).zip(present) {
        if !exists {
            missing += 1;
            println!("❌ {} exists: false", settings.files.file_name(*dataset));
            tracing::debug!(%dataset, path = %path.display(), "input file missing");
        }
    }
    if missing > 0 {
        report.record(Assumption::FilesPresent);
    }

    // Assumption 2: the files are readable and carry the right columns
    let mut unreadable = 0;
    for (dataset, path) in Dataset::ALL.iter().zip(&paths) {
        if !has_csv_extension(path) {
            unreadable += 1;
            println!("❌ {} is not a .csv", settings.files.file_name(*dataset));
        }
    }

    let mut load_failures = Vec::new();
    let mut load = |idx: usize| -> Table {
        let dataset = Dataset::ALL[idx];
        let path = &paths[idx];
        let file_name = settings.files.file_name(dataset);

        if !present[idx] {
            return Table::empty();
        }

        match Table::from_csv(path) {
            Ok(table) => {
                if !table.has_any_column(dataset.expected_columns()) {
                    unreadable += 1;
                    println!("❌ {} does not contain the right columns", file_name);
                }
                table
            }
            Err(err) => {
                let reason = error_chain(&err);
                unreadable += 1;
                println!("❌ {} is not readable: {}", file_name, reason);
                tracing::warn!(%dataset, error = %reason, "substituting empty table");
                load_failures.push(LoadFailure {
                    dataset,
                    path: path.clone(),
                    reason,
                });
                Table::empty()
            }
        }
    };

    let countries = load(0);
    let poule_phase = load(1);
    let final_phase = load(2);

    if unreadable > 0 {
        report.record(Assumption::FilesReadable);
    }

    tracing::debug!(
        missing,
        unreadable,
        violations = report.len(),
        "input checks finished"
    );

    Ok(LoadedInputs {
        countries,
        poule_phase,
        final_phase,
        output_dir,
        report,
        load_failures,
    })
}
