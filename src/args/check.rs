//! `--check-content`: completeness and parity report.

use std::io::{self, Write};

use crate::content::{ContentStore, ValidationReport, resources, validate};
use crate::i18n::LanguageCode;

/// What: Run the content check and write the report to `out`.
///
/// Output:
/// - Exit code: `0` when the store has no errors (warnings allowed), `1` otherwise.
pub fn handle_check_content(out: &mut impl Write) -> i32 {
    let report = match ContentStore::embedded() {
        Ok(store) => validate(&store, resources()),
        Err(e) => {
            tracing::error!(error = %e, "content failed to parse");
            ValidationReport {
                errors: vec![e.to_string()],
                warnings: Vec::new(),
            }
        }
    };
    match write_report(out, &report) {
        Ok(()) => i32::from(report.has_errors()),
        Err(e) => {
            tracing::error!(error = %e, "failed to write content report");
            1
        }
    }
}

/// What: Write the findings followed by a one-line summary.
///
/// # Errors
/// - Propagates write failures.
pub fn write_report(out: &mut impl Write, report: &ValidationReport) -> io::Result<()> {
    write!(out, "{report}")?;
    if report.has_errors() {
        writeln!(
            out,
            "content check failed: {} error(s), {} warning(s)",
            report.errors.len(),
            report.warnings.len()
        )
    } else {
        writeln!(
            out,
            "content OK: {} languages, {} links, {} warning(s)",
            LanguageCode::ALL.len(),
            resources().len(),
            report.warnings.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_content_passes() {
        let mut buf = Vec::new();
        assert_eq!(handle_check_content(&mut buf), 0);
        let text = String::from_utf8(buf).expect("utf8");
        assert!(text.contains("content OK: 3 languages, 4 links"));
        assert!(!text.contains("error:"));
    }

    #[test]
    fn failing_report_lists_errors() {
        let report = ValidationReport {
            errors: vec!["[es] tools_section.tools is empty".into()],
            warnings: vec!["[en] something odd".into()],
        };
        let mut buf = Vec::new();
        write_report(&mut buf, &report).expect("write");
        let text = String::from_utf8(buf).expect("utf8");
        assert_eq!(
            text,
            "error: [es] tools_section.tools is empty\n\
             warning: [en] something odd\n\
             content check failed: 1 error(s), 1 warning(s)\n"
        );
    }
}
