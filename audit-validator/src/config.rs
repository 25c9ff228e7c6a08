//! Configuration types for audit structure validation.
//!
//! Split into core validation config (how findings are produced) and the
//! document set (which files are checked). The document list is data passed
//! into the validator, never discovered from the filesystem.

use std::path::{Path, PathBuf};

/// Directory the default document set resolves against, relative to the
/// working directory.
pub const DEFAULT_DOCS_DIR: &str = "docs/02-implementation-status";

/// Default maximum file size in bytes (10 MB).
pub const DEFAULT_MAX_FILE_SIZE: u64 = 10_485_760;

/// The fixed audit document set, in reporting order: `(file name, skeleton_exempt)`.
pub const DEFAULT_DOCUMENTS: &[(&str, bool)] = &[
    ("FULL_NODETYPE_POLICY_AUDIT.md", false),
    ("FLOW_STATUS_TRANSITION_AUDIT.md", false),
    ("HATTHASILPA_ASSIGNMENT_INTEGRATION_AUDIT.md", false),
    ("DAG_IMPLEMENTATION_ROADMAP.md", true),
];

/// What to do when a configured document does not exist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[non_exhaustive]
pub enum MissingFilePolicy {
    /// Skip the document without reporting anything (default).
    #[default]
    Skip,
    /// Report a `MissingFile` validation error for the document.
    Error,
}

/// Core validation config.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct ValidationConfig {
    /// Handling of configured documents that are absent on disk.
    pub missing_file_policy: MissingFilePolicy,
    /// Maximum file size in bytes (default: 10 MB). Larger files are unreadable.
    pub max_file_size: u64,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            missing_file_policy: MissingFilePolicy::Skip,
            max_file_size: DEFAULT_MAX_FILE_SIZE,
        }
    }
}

/// One audit document to check.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct DocumentSpec {
    /// Path to the Markdown document.
    pub path: PathBuf,
    /// Exempt from the Skeleton-header rule (the roadmap document).
    pub skeleton_exempt: bool,
}

impl DocumentSpec {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, skeleton_exempt: bool) -> Self {
        Self {
            path: path.into(),
            skeleton_exempt,
        }
    }

    /// Base file name used as the prefix of rule violation messages.
    #[must_use]
    pub fn file_name(&self) -> String {
        self.path.file_name().map_or_else(
            || self.path.to_string_lossy().into_owned(),
            |name| name.to_string_lossy().into_owned(),
        )
    }
}

/// Resolve [`DEFAULT_DOCUMENTS`] against `docs_dir`, preserving order.
#[must_use]
pub fn default_documents(docs_dir: &Path) -> Vec<DocumentSpec> {
    DEFAULT_DOCUMENTS
        .iter()
        .map(|&(name, exempt)| DocumentSpec::new(docs_dir.join(name), exempt))
        .collect()
}
