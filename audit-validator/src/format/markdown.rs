//! Structural rules for audit Markdown documents.
//!
//! Two rules are checked, in order:
//! 1. The first non-empty line must be the Skeleton header (roadmap documents are exempt).
//! 2. If a `# ... Audit - End-to-End` heading exists, the separator must appear
//!    no later than the first top-level heading after the start of the document.
//!
//! A Skeleton-header failure stops evaluation for that document.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::DocumentSpec;
use crate::error::{SEPARATOR, ValidationError};

/// Text the first heading candidate must contain.
const SKELETON_MARKER: &str = "Skeleton";

/// Start of a top-level heading that follows at least one line.
const TOP_LEVEL_HEADING: &str = "\n# ";

/// Characters stripped when deciding whether a line is blank. Unicode spaces
/// such as U+00A0 are content, not padding.
const BLANK_CHARS: [char; 6] = [' ', '\t', '\n', '\r', '\0', '\x0B'];

/// Any line-break sequence: CRLF first, then the single-character breaks
/// (LF, VT, FF, CR, NEL, LINE SEPARATOR, PARAGRAPH SEPARATOR).
static LINE_BREAK: LazyLock<Regex> = LazyLock::new(|| {
    match Regex::new(r"\r\n|[\n\x0B\x0C\r\x{85}\x{2028}\x{2029}]") {
        Ok(regex) => regex,
        Err(err) => panic!("Invalid line-break regex: {err}"),
    }
});

/// A top-level heading introducing the full end-to-end audit section.
static FULL_AUDIT_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    match Regex::new(r"(?m)^# .+Audit - End-to-End") {
        Ok(regex) => regex,
        Err(err) => panic!("Invalid full audit heading regex: {err}"),
    }
});

/// File names that mark the roadmap document.
static ROADMAP_NAME: LazyLock<Regex> = LazyLock::new(|| match Regex::new(r"(?i)roadmap") {
    Ok(regex) => regex,
    Err(err) => panic!("Invalid roadmap regex: {err}"),
});

/// Split content on every recognized line-break sequence.
pub fn split_lines(content: &str) -> impl Iterator<Item = &str> {
    LINE_BREAK.split(content)
}

/// First line whose text, trimmed of [`BLANK_CHARS`], is non-empty, untrimmed.
pub fn first_non_empty_line(content: &str) -> Option<&str> {
    split_lines(content).find(|line| !line.trim_matches(BLANK_CHARS).is_empty())
}

/// Whether the document is exempt from the Skeleton-header rule.
pub fn is_skeleton_exempt(doc: &DocumentSpec) -> bool {
    doc.skeleton_exempt || ROADMAP_NAME.is_match(&doc.file_name())
}

/// Rule 1: the first heading candidate mentions the Skeleton section.
pub fn has_skeleton_header(content: &str) -> bool {
    first_non_empty_line(content).is_some_and(|line| line.contains(SKELETON_MARKER))
}

/// Whether the content contains a `# <title>Audit - End-to-End` heading.
pub fn has_full_audit_heading(content: &str) -> bool {
    FULL_AUDIT_HEADING.is_match(content)
}

/// Rule 2: the separator precedes the first top-level heading after line one.
///
/// Vacuously satisfied when there is no Full Audit heading, or when no
/// top-level heading follows a line break.
pub fn separator_precedes_full_audit(content: &str) -> bool {
    if !has_full_audit_heading(content) {
        return true;
    }
    let Some(heading_pos) = content.find(TOP_LEVEL_HEADING) else {
        return true;
    };
    content
        .find(SEPARATOR)
        .is_some_and(|separator_pos| separator_pos <= heading_pos)
}

/// Check one document's content against both rules.
pub fn scan_markdown_content(content: &str, doc: &DocumentSpec) -> Vec<ValidationError> {
    let document = doc.file_name();

    if !is_skeleton_exempt(doc) && !has_skeleton_header(content) {
        return vec![ValidationError::skeleton_header(doc.path.clone(), document)];
    }

    if !separator_precedes_full_audit(content) {
        return vec![ValidationError::missing_separator(
            doc.path.clone(),
            document,
        )];
    }

    Vec::new()
}
