// dataset.rs - The three tournament input datasets

use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// One of the three input tables the loader expects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Dataset {
    Countries,
    PoulePhaseGames,
    FinalPhaseGames,
}

impl Dataset {
    /// All datasets in load order
    pub const ALL: [Dataset; 3] = [
        Dataset::Countries,
        Dataset::PoulePhaseGames,
        Dataset::FinalPhaseGames,
    ];

    /// Short name used in diagnostics
    pub fn label(self) -> &'static str {
        match self {
            Dataset::Countries => "countries",
            Dataset::PoulePhaseGames => "poule_phase_games",
            Dataset::FinalPhaseGames => "final_phase_games",
        }
    }

    pub fn default_file_name(self) -> &'static str {
        match self {
            Dataset::Countries => "countries.csv",
            Dataset::PoulePhaseGames => "poule_phase_games.csv",
            Dataset::FinalPhaseGames => "final_phase_games.csv",
        }
    }

    /// Columns of which at least one must appear in the header
    pub fn expected_columns(self) -> &'static [&'static str] {
        match self {
            Dataset::Countries => &["id", "countries", "ranking"],
            Dataset::PoulePhaseGames => &["country_a", "country_b", "scores"],
            Dataset::FinalPhaseGames => &["stage", "match", "score"],
        }
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// File names of the datasets inside the input directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputFiles {
    pub countries: String,
    pub poule_phase_games: String,
    pub final_phase_games: String,
}

impl Default for InputFiles {
    fn default() -> Self {
        Self {
            countries: Dataset::Countries.default_file_name().to_string(),
            poule_phase_games: Dataset::PoulePhaseGames.default_file_name().to_string(),
            final_phase_games: Dataset::FinalPhaseGames.default_file_name().to_string(),
        }
    }
}

impl InputFiles {
    pub fn file_name(&self, dataset: Dataset) -> &str {
        match dataset {
            Dataset::Countries => &self.countries,
            Dataset::PoulePhaseGames => &self.poule_phase_games,
            Dataset::FinalPhaseGames => &self.final_phase_games,
        }
    }

    /// Join the dataset's file name onto `input_dir`
    pub fn path(&self, input_dir: &Path, dataset: Dataset) -> PathBuf {
        input_dir.join(self.file_name(dataset))
    }
}
