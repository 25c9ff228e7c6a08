//! Validation report types.

use serde::Serialize;

use crate::error::ValidationError;

/// Result of a validation run.
#[derive(Debug, Clone, Serialize)]
#[non_exhaustive]
pub struct AuditReport {
    /// Number of documents read and checked.
    pub checked_files: usize,
    /// Number of configured documents that were absent.
    pub skipped_files: usize,
    /// Whether the run produced no errors at all.
    pub ok: bool,
    /// Findings in configured document order.
    pub errors: Vec<ValidationError>,
}

impl AuditReport {
    /// Build a report; `ok` is derived from `errors`.
    #[must_use]
    pub fn new(
        checked_files: usize,
        skipped_files: usize,
        errors: Vec<ValidationError>,
    ) -> Self {
        Self {
            checked_files,
            skipped_files,
            ok: errors.is_empty(),
            errors,
        }
    }

    /// Total number of configured documents considered (checked + skipped).
    #[must_use]
    pub fn files_attempted(&self) -> usize {
        self.checked_files + self.skipped_files
    }

    /// Number of errors found.
    #[must_use]
    pub fn errors_count(&self) -> usize {
        self.errors.len()
    }
}
