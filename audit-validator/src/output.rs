//! Shared output formatting for audit reports.
//!
//! Provides JSON and plain-text formatters for `AuditReport`. Choosing
//! stdout or stderr is left to the caller.

use std::io::Write;

use crate::report::AuditReport;

/// Success line of the human-readable report.
pub const OK_MESSAGE: &str = "Audit structure validation OK";

/// Header line of a failed human-readable report.
pub const FAILED_HEADER: &str = "Audit structure validation FAILED:";

/// Format an `AuditReport` as JSON to a writer.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_json(report: &AuditReport, writer: &mut dyn Write) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    writeln!(writer, "{json}")?;
    Ok(())
}

/// Format an `AuditReport` as human-readable plain text to a writer.
///
/// A passing report is the single line [`OK_MESSAGE`]. A failing report is
/// [`FAILED_HEADER`] followed by one `- <message>` line per error.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_human(report: &AuditReport, writer: &mut dyn Write) -> anyhow::Result<()> {
    if report.ok {
        writeln!(writer, "{OK_MESSAGE}")?;
        return Ok(());
    }

    writeln!(writer, "{FAILED_HEADER}")?;
    for error in &report.errors {
        writeln!(writer, "- {}", error.format_human_readable())?;
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use std::path::PathBuf;

    fn failing_report() -> AuditReport {
        AuditReport::new(
            2,
            0,
            vec![
                ValidationError::skeleton_header(PathBuf::from("d/A.md"), "A.md".to_owned()),
                ValidationError::missing_separator(PathBuf::from("d/B.md"), "B.md".to_owned()),
            ],
        )
    }

    #[test]
    fn test_write_human_ok() {
        let report = AuditReport::new(4, 0, vec![]);
        let mut buf = Vec::new();
        write_human(&report, &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "Audit structure validation OK\n");
    }

    #[test]
    fn test_write_human_failed() {
        let mut buf = Vec::new();
        write_human(&failing_report(), &mut buf).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            concat!(
                "Audit structure validation FAILED:\n",
                "- A.md: First section must be the Skeleton header.\n",
                "- B.md: Missing separator \"\u{2E3B}\" before Full Audit section.\n",
            )
        );
    }

    #[test]
    fn test_write_json_contract() {
        let mut buf = Vec::new();
        write_json(&failing_report(), &mut buf).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(json["ok"], false);
        assert_eq!(json["checked_files"], 2);
        assert_eq!(json["skipped_files"], 0);
        assert_eq!(json["errors"].as_array().unwrap().len(), 2);
        assert_eq!(json["errors"][0]["kind"], "skeleton_header");
        assert_eq!(json["errors"][1]["document"], "B.md");
    }
}
