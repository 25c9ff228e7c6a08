//! # audit-validator
//!
//! Structure validator for Skeleton/Full audit Markdown documents.
//!
//! Every configured document must open with a Skeleton header (the roadmap
//! document is exempt), and any `# ... Audit - End-to-End` heading must be
//! preceded by the `\u{2E3B}` separator. Findings are collected for all
//! documents; nothing stops the run early.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//! use audit_validator::{default_documents, validate_documents, ValidationConfig};
//!
//! let documents = default_documents(Path::new("docs/02-implementation-status"));
//! let report = validate_documents(&documents, &ValidationConfig::default());
//! println!("Files checked: {}", report.checked_files);
//! println!("Errors: {}", report.errors_count());
//! println!("OK: {}", report.ok);
//! ```

mod config;
mod error;
mod format;
pub mod output;
mod report;
mod strategy;

pub use config::{
    DEFAULT_DOCS_DIR, DEFAULT_DOCUMENTS, DEFAULT_MAX_FILE_SIZE, DocumentSpec, MissingFilePolicy,
    ValidationConfig, default_documents,
};
pub use error::{SEPARATOR, ValidationError, ViolationKind};
pub use report::AuditReport;

use strategy::fs::{ReadResult, read_document};

/// Validate the structure of each document, in the given order.
///
/// This is the primary public API. Missing documents are skipped or reported
/// according to `config.missing_file_policy`; unreadable documents and rule
/// violations are always reported. Every document is checked.
#[must_use]
pub fn validate_documents(documents: &[DocumentSpec], config: &ValidationConfig) -> AuditReport {
    let mut errors = Vec::new();
    let mut checked_files: usize = 0;
    let mut skipped_files: usize = 0;

    for doc in documents {
        let content = match read_document(&doc.path, config.max_file_size) {
            ReadResult::Ok(c) => c,
            ReadResult::Missing => {
                skipped_files += 1;
                match config.missing_file_policy {
                    MissingFilePolicy::Skip => {
                        tracing::debug!(path = %doc.path.display(), "document not found, skipping");
                    }
                    MissingFilePolicy::Error => {
                        tracing::debug!(path = %doc.path.display(), "document not found");
                        errors.push(ValidationError::missing(doc.path.clone(), doc.file_name()));
                    }
                }
                continue;
            }
            ReadResult::Err(cause) => {
                tracing::debug!(path = %doc.path.display(), %cause, "cannot read document");
                errors.push(ValidationError::unreadable(
                    doc.path.clone(),
                    doc.file_name(),
                ));
                continue;
            }
        };

        checked_files += 1;
        let file_errors = format::markdown::scan_markdown_content(&content, doc);
        tracing::debug!(
            path = %doc.path.display(),
            errors = file_errors.len(),
            "document checked"
        );
        errors.extend(file_errors);
    }

    let report = AuditReport::new(checked_files, skipped_files, errors);
    tracing::info!(
        checked = report.checked_files,
        skipped = report.skipped_files,
        errors = report.errors_count(),
        "audit structure validation finished"
    );
    report
}

/// Validate the fixed audit document set under `docs_dir`.
#[must_use]
pub fn validate_default(docs_dir: &std::path::Path, config: &ValidationConfig) -> AuditReport {
    validate_documents(&default_documents(docs_dir), config)
}
