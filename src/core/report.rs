// report.rs - Assumption report

use std::fmt;

/// Input assumptions checked by the loader
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Assumption {
    /// All three input files exist in the input directory
    FilesPresent,
    /// Files are `.csv`, parse, and carry at least one expected column
    FilesReadable,
}

impl Assumption {
    pub fn number(self) -> u8 {
        match self {
            Assumption::FilesPresent => 1,
            Assumption::FilesReadable => 2,
        }
    }

    /// Report line for a violated assumption
    pub fn message(self) -> &'static str {
        match self {
            Assumption::FilesPresent => {
                "Assumption 1: Not the right files are present in the input directory."
            }
            Assumption::FilesReadable => {
                "Assumption 2: Files are not readable and/or do not contain the right columns."
            }
        }
    }
}

impl fmt::Display for Assumption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Violated assumptions in the order they were found, one entry per category
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssumptionReport {
    violations: Vec<Assumption>,
}

impl AssumptionReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a violation; repeated categories are ignored
    pub fn record(&mut self, assumption: Assumption) {
        if !self.violations.contains(&assumption) {
            self.violations.push(assumption);
        }
    }

    pub fn contains(&self, assumption: Assumption) -> bool {
        self.violations.contains(&assumption)
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn violations(&self) -> &[Assumption] {
        &self.violations
    }

    pub fn messages(&self) -> Vec<&'static str> {
        self.violations.iter().map(|a| a.message()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_entry_per_category() {
        let mut report = AssumptionReport::new();
        report.record(Assumption::FilesPresent);
        report.record(Assumption::FilesPresent);
        report.record(Assumption::FilesReadable);
        report.record(Assumption::FilesPresent);

        assert_eq!(report.len(), 2);
        assert_eq!(
            report.messages(),
            vec![
                "Assumption 1: Not the right files are present in the input directory.",
                "Assumption 2: Files are not readable and/or do not contain the right columns.",
            ]
        );
    }

    #[test]
    fn test_keeps_first_seen_order() {
        let mut report = AssumptionReport::new();
        report.record(Assumption::FilesReadable);
        report.record(Assumption::FilesPresent);

        assert_eq!(
            report.violations(),
            &[Assumption::FilesReadable, Assumption::FilesPresent]
        );
    }

    #[test]
    fn test_numbers() {
        assert_eq!(Assumption::FilesPresent.number(), 1);
        assert_eq!(Assumption::FilesReadable.number(), 2);
        assert!(AssumptionReport::new().is_empty());
    }
}
