//! `check`: validate every line of a file.

use std::io;

use tik_lexer::Parser;

use crate::diagnostic::render_lex_error;

/// Outcome of checking a file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CheckSummary {
    /// Non-blank lines parsed.
    pub checked: usize,
    /// Lines that failed to parse.
    pub failed: usize,
}

impl CheckSummary {
    pub fn is_ok(&self) -> bool {
        self.failed == 0
    }
}

/// Parse each non-blank line of `source` as a TIK, rendering a diagnostic
/// into `out` for every failure.
pub fn check_source(
    parser: &mut Parser,
    source: &str,
    out: &mut impl io::Write,
) -> io::Result<CheckSummary> {
    let mut summary = CheckSummary::default();
    let mut line_start = 0;
    for line in source.split_inclusive('\n') {
        let base = line_start;
        line_start += line.len();

        let line = line.trim_end_matches(['\n', '\r']);
        if line.trim().is_empty() {
            continue;
        }
        summary.checked += 1;
        if let Err(err) = parser.parse_fn(line, |_| ()) {
            summary.failed += 1;
            render_lex_error(&err, source, base, out)?;
        }
    }
    tracing::debug!(
        checked = summary.checked,
        failed = summary.failed,
        "check finished"
    );
    Ok(summary)
}
