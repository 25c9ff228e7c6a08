//! Error types for audit structure validation.

use std::path::PathBuf;

use serde::Serialize;

/// The structural separator glyph (U+2E3B, "three-em dash").
pub const SEPARATOR: &str = "\u{2E3B}";

/// Which check produced a [`ValidationError`].
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum ViolationKind {
    /// The document is configured but absent (only with `MissingFilePolicy::Error`).
    MissingFile,
    /// The document exists but could not be read (I/O error, too large, not UTF-8).
    Unreadable,
    /// The first non-empty line is not a Skeleton header.
    SkeletonHeader,
    /// A Full Audit heading exists without a preceding separator.
    MissingSeparator,
}

/// A single finding for one audit document.
///
/// `message` is the complete line reported to the user, already prefixed with
/// the document name (or path, for read failures).
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[non_exhaustive]
pub struct ValidationError {
    /// Path of the document as configured.
    pub file: PathBuf,
    /// Base file name of the document.
    pub document: String,
    /// The check that failed.
    pub kind: ViolationKind,
    /// Human-readable error description
    pub message: String,
}

impl ValidationError {
    /// The document exists but its content could not be loaded.
    #[must_use]
    pub fn unreadable(file: PathBuf, document: String) -> Self {
        let message = format!("Cannot read file: {}", file.display());
        Self {
            file,
            document,
            kind: ViolationKind::Unreadable,
            message,
        }
    }

    /// The configured document is absent.
    #[must_use]
    pub fn missing(file: PathBuf, document: String) -> Self {
        let message = format!("Missing file: {}", file.display());
        Self {
            file,
            document,
            kind: ViolationKind::MissingFile,
            message,
        }
    }

    /// The first section is not the Skeleton header.
    #[must_use]
    pub fn skeleton_header(file: PathBuf, document: String) -> Self {
        let message = format!("{document}: First section must be the Skeleton header.");
        Self {
            file,
            document,
            kind: ViolationKind::SkeletonHeader,
            message,
        }
    }

    /// The Full Audit section is not preceded by the separator.
    #[must_use]
    pub fn missing_separator(file: PathBuf, document: String) -> Self {
        let message =
            format!("{document}: Missing separator \"{SEPARATOR}\" before Full Audit section.");
        Self {
            file,
            document,
            kind: ViolationKind::MissingSeparator,
            message,
        }
    }

    /// Format the error for human-readable output.
    #[must_use]
    pub fn format_human_readable(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_skeleton_header_message() {
        let err = ValidationError::skeleton_header(
            PathBuf::from("docs/FLOW_STATUS_TRANSITION_AUDIT.md"),
            "FLOW_STATUS_TRANSITION_AUDIT.md".to_owned(),
        );
        assert_eq!(err.kind, ViolationKind::SkeletonHeader);
        assert_eq!(
            err.format_human_readable(),
            "FLOW_STATUS_TRANSITION_AUDIT.md: First section must be the Skeleton header."
        );
    }

    #[test]
    fn test_missing_separator_message() {
        let err = ValidationError::missing_separator(
            PathBuf::from("docs/FULL_NODETYPE_POLICY_AUDIT.md"),
            "FULL_NODETYPE_POLICY_AUDIT.md".to_owned(),
        );
        assert_eq!(err.kind, ViolationKind::MissingSeparator);
        assert_eq!(
            err.format_human_readable(),
            "FULL_NODETYPE_POLICY_AUDIT.md: Missing separator \"\u{2E3B}\" before Full Audit section."
        );
    }

    #[test]
    fn test_unreadable_message_uses_full_path() {
        let err = ValidationError::unreadable(
            PathBuf::from("docs/status/REPORT.md"),
            "REPORT.md".to_owned(),
        );
        assert_eq!(err.kind, ViolationKind::Unreadable);
        assert_eq!(err.message, "Cannot read file: docs/status/REPORT.md");
    }

    #[test]
    fn test_kind_serializes_snake_case() {
        let err = ValidationError::missing(PathBuf::from("x/A.md"), "A.md".to_owned());
        let json = serde_json::to_value(&err).unwrap_or_default();
        assert_eq!(json["kind"], "missing_file");
        assert_eq!(json["document"], "A.md");
        assert_eq!(json["message"], "Missing file: x/A.md");
    }
}
