//! Backslash escape resolution for literal text.
//!
//! A backslash escapes the character after it. Each `\\` pair yields one
//! backslash, and a run of `n` backslashes followed by a brace yields
//! `n / 2` backslashes, with the brace belonging to the literal iff `n` is
//! odd. A lone backslash before any other character is kept as is.

use std::borrow::Cow;

use crate::Span;

/// Resolve escapes in the literal covered by `span`.
///
/// `raw` is the full input the span was produced from. A backslash run at
/// the very end of the span is halved when the byte right after the span is
/// a brace: the tokenizer only ends a literal there when that brace is live.
///
/// Fast path: returns the borrowed slice when nothing needs resolving.
pub fn unescape_literal(raw: &str, span: Span) -> Cow<'_, str> {
    let Some(content) = raw.get(span.to_range()) else {
        return Cow::Borrowed("");
    };
    if !content.contains('\\') {
        return Cow::Borrowed(content);
    }

    let bytes = content.as_bytes();
    let before_live_brace = matches!(raw.as_bytes().get(span.end as usize), Some(b'{' | b'}'));

    let mut result: Option<String> = None;
    // Start of the next chunk still to be copied into `result`.
    let mut copied = 0;
    let mut i = 0;

    while let Some(offset) = content[i..].find('\\') {
        let run_start = i + offset;
        let mut run_end = run_start;
        while run_end < bytes.len() && bytes[run_end] == b'\\' {
            run_end += 1;
        }
        let count = run_end - run_start;

        let escapes_brace = matches!(bytes.get(run_end), Some(b'{' | b'}'));
        let kept = if escapes_brace || (run_end == bytes.len() && before_live_brace) {
            count / 2
        } else {
            count / 2 + count % 2
        };
        let brace = escapes_brace && count % 2 == 1;

        if kept != count || brace {
            let out = result.get_or_insert_with(|| String::with_capacity(content.len()));
            out.push_str(&content[copied..run_start]);
            for _ in 0..kept {
                out.push('\\');
            }
            if brace {
                out.push(char::from(bytes[run_end]));
                run_end += 1;
            }
            copied = run_end;
        }
        i = run_end;
    }

    match result {
        Some(mut out) => {
            out.push_str(&content[copied..]);
            Cow::Owned(out)
        }
        None => Cow::Borrowed(content),
    }
}
