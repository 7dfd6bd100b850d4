//! Rendering of tokenizer errors as annotated source snippets.

use std::io;
use std::ops::Range;

use ariadne::{Config, Label, Report, ReportKind, Source};
use tik_lexer::LexError;

/// Render `err` against `source` into `out`.
///
/// `base` is the byte offset at which the tokenized input starts inside
/// `source`, so errors from one line of a file point into the whole file.
pub fn render_lex_error(
    err: &LexError,
    source: &str,
    base: usize,
    out: &mut impl io::Write,
) -> io::Result<()> {
    let input = source.get(base..).unwrap_or_default();
    let span = err.span(input);
    let range = char_range(source, base + span.start as usize..base + span.end as usize);

    let mut report = Report::build(ReportKind::Error, (), range.start)
        .with_config(Config::default().with_color(false))
        .with_message(err.kind.to_string())
        .with_label(Label::new(range).with_message(format!("at index {}", err.offset)));
    if let Some(hint) = err.kind.hint() {
        report = report.with_help(hint);
    }
    report.finish().write(Source::from(source), out)
}

/// Convert a byte range of `source` to the char range ariadne expects.
///
/// Zero-width ranges are widened to one char when one is available.
fn char_range(source: &str, bytes: Range<usize>) -> Range<usize> {
    let to_chars = |byte: usize| {
        source
            .get(..byte)
            .map_or_else(|| source.chars().count(), |prefix| prefix.chars().count())
    };
    let start = to_chars(bytes.start);
    let end = to_chars(bytes.end).max(start);
    if end == start && start < source.chars().count() {
        start..start + 1
    } else {
        start..end
    }
}

#[cfg(test)]
mod tests;
