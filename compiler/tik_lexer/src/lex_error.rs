//! Tokenizer error types.
//!
//! Every failure is a byte offset into the original input plus a symbolic
//! kind. Tokenizing is fail-fast: the first error aborts the call and no
//! partial token stream is returned.

use tik_ir::Span;

/// A located tokenizer error.
///
/// `offset` is relative to the raw input passed to the tokenizer, never to
/// an internal buffer, so it can be used to underline the offending char.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("at index {offset}: {kind}")]
pub struct LexError {
    /// WHERE the error occurred.
    pub offset: u32,
    /// WHAT went wrong.
    pub kind: LexErrorKind,
}

/// What kind of tokenizer error occurred.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum LexErrorKind {
    // === Structural ===
    /// Input is empty or whitespace only (after an optional context).
    #[error("text is empty")]
    TextEmpty,
    /// Input does not fit 32-bit offsets.
    #[error("text is too long")]
    TextTooLong,
    /// `[` without a closing `]`.
    #[error("unclosed context")]
    ContextUnclosed,
    /// `[]` or a context containing only whitespace.
    #[error("context is empty")]
    ContextEmpty,
    /// Context contains `{`, `}`, `[`, `]` or `\`.
    #[error("context contains illegal characters")]
    ContextInvalid,
    /// `{` without a closing `}`, or a plural block left open.
    #[error("unclosed placeholder")]
    UnclosedPlaceholder,
    /// `{"` without a closing `"}`.
    #[error("unclosed string placeholder")]
    UnclosedStringPlaceholder,
    /// Unescaped `}` outside of a plural block.
    #[error("unexpected closure")]
    UnexpectedClosure,

    // === Placeholder content ===
    /// Directive body matches no magic constant.
    #[error("unknown placeholder")]
    UnknownPlaceholder,
    /// `{""}`
    #[error("string placeholder text body is empty")]
    StringPlaceholderEmpty,
    /// `{" text "}`
    #[error("string placeholder starts or ends with a whitespace character")]
    StringPlaceholderInvalidSpace,
    /// String placeholder body contains `\`, `{`, `}` or `"`.
    #[error("string placeholder contains illegal characters")]
    StringPlaceholderIllegalChars,

    // === Plural scope ===
    /// A plural block opened inside another one.
    #[error("nested pluralization")]
    NestedPluralization,
    /// A plural block without content.
    #[error("empty cardinal pluralization block")]
    CardinalPluralEmpty,
    /// A plural block whose first content is a directive.
    #[error("cardinal pluralization block starts with a directive")]
    DirectiveStartsCardinalPlural,
}

impl LexErrorKind {
    /// Actionable suggestion for fixing this error, if one applies.
    pub fn hint(self) -> Option<&'static str> {
        match self {
            LexErrorKind::TextEmpty => Some("add some text"),
            LexErrorKind::ContextUnclosed => Some("close the context with `]`"),
            LexErrorKind::ContextInvalid => {
                Some("contexts must not contain `{`, `}`, `[`, `]` or `\\`")
            }
            LexErrorKind::UnclosedPlaceholder => Some("add a closing `}`"),
            LexErrorKind::UnclosedStringPlaceholder => Some("close the placeholder with `\"}`"),
            LexErrorKind::UnexpectedClosure => Some("escape a literal brace as `\\}`"),
            LexErrorKind::StringPlaceholderInvalidSpace => {
                Some("remove the surrounding whitespace")
            }
            LexErrorKind::StringPlaceholderIllegalChars => {
                Some("string placeholders must not contain `\\`, `{`, `}` or `\"`")
            }
            LexErrorKind::NestedPluralization => {
                Some("close the outer plural block before opening another")
            }
            LexErrorKind::DirectiveStartsCardinalPlural => {
                Some("start the plural block with text, e.g. `{# messages from {name}}`")
            }
            LexErrorKind::TextTooLong
            | LexErrorKind::ContextEmpty
            | LexErrorKind::UnknownPlaceholder
            | LexErrorKind::StringPlaceholderEmpty
            | LexErrorKind::CardinalPluralEmpty => None,
        }
    }
}

impl LexError {
    /// Create an error at a byte offset.
    ///
    /// The tokenizer rejects inputs longer than `u32::MAX` up front, so
    /// every offset it reports fits.
    #[cold]
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offsets bounded by u32 -- longer inputs are rejected with TextTooLong"
    )]
    pub(crate) fn new(offset: usize, kind: LexErrorKind) -> Self {
        LexError {
            offset: offset as u32,
            kind,
        }
    }

    /// Span of the offending character in `input`.
    ///
    /// Zero-length at the end of input.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "char length is at most 4"
    )]
    pub fn span(&self, input: &str) -> Span {
        let len = input
            .get(self.offset as usize..)
            .and_then(|rest| rest.chars().next())
            .map_or(0, |c| c.len_utf8() as u32);
        Span::new(self.offset, self.offset + len)
    }
}

#[cfg(test)]
mod tests;
