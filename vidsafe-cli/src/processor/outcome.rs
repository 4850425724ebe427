use std::fmt::Display;

/// Terminal state of one candidate file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameOutcome {
    /// The name is already safe, nothing was touched
    AlreadySafe { name: String },

    /// Something already exists at the sanitized name
    Skipped { original: String, target: String },

    Renamed { original: String, target: String },

    /// The rename call itself failed
    Failed {
        original: String,
        target: String,
        error: String,
    },
}

/// Outcome counts for a whole batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenameSummary {
    pub renamed: usize,
    pub already_safe: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl RenameSummary {
    pub fn record(&mut self, outcome: &RenameOutcome) {
        match outcome {
            RenameOutcome::AlreadySafe { .. } => self.already_safe += 1,
            RenameOutcome::Skipped { .. } => self.skipped += 1,
            RenameOutcome::Renamed { .. } => self.renamed += 1,
            RenameOutcome::Failed { .. } => self.failed += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.renamed + self.already_safe + self.skipped + self.failed
    }
}

impl Display for RenameSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} renamed, {} already safe, {} skipped, {} failed",
            self.renamed, self.already_safe, self.skipped, self.failed
        )
    }
}
