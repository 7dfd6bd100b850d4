//! Single-pass TIK tokenizer.
//!
//! # Pipeline
//!
//! 1. Trim leading/trailing Unicode whitespace (never part of any token).
//! 2. Recognize an optional `[context]` at the very front.
//! 3. Fast path: a body without braces is one `Literal`.
//! 4. Otherwise jump from brace to brace with a combined memchr search,
//!    deciding escape parity for each candidate, and classify directives
//!    against the [`Config`] vocabulary.
//!
//! Literal runs are never copied: tokens only record spans, and escapes are
//! resolved on demand by [`Token::value`](tik_ir::Token::value).

use tik_ir::{Config, Span, Token, TokenType};

use crate::lex_error::{LexError, LexErrorKind};
use crate::scan;

/// Append the tokens of `input` to `buffer`.
///
/// On error `buffer` is truncated back to its length at entry, so callers
/// never observe a partial token stream. `config` is assumed to be
/// validated.
#[tracing::instrument(level = "trace", skip_all, fields(len = input.len()))]
pub fn tokenize(buffer: &mut Vec<Token>, input: &str, config: &Config) -> Result<(), LexError> {
    let initial_len = buffer.len();
    let result = Lexer::new(input, config, buffer).run();
    if let Err(err) = &result {
        buffer.truncate(initial_len);
        tracing::debug!(offset = err.offset, kind = %err.kind, "tokenize failed");
    }
    result
}

/// An open cardinal plural block.
#[derive(Clone, Copy, Debug)]
struct PluralBlock {
    /// Offset of the block's `{`.
    open: usize,
    /// Token count right after `CardinalPluralStart` was pushed.
    first_token: usize,
}

struct Lexer<'a, 'b> {
    src: &'a str,
    bytes: &'a [u8],
    config: &'a Config,
    out: &'b mut Vec<Token>,
    /// End of the trimmed text body (exclusive).
    end: usize,
    /// Start of the pending literal run.
    literal_start: usize,
    plural: Option<PluralBlock>,
}

impl<'a, 'b> Lexer<'a, 'b> {
    fn new(src: &'a str, config: &'a Config, out: &'b mut Vec<Token>) -> Self {
        Lexer {
            src,
            bytes: src.as_bytes(),
            config,
            out,
            end: src.trim_end().len(),
            literal_start: 0,
            plural: None,
        }
    }

    fn run(mut self) -> Result<(), LexError> {
        if u32::try_from(self.src.len()).is_err() {
            return Err(LexError::new(0, LexErrorKind::TextTooLong));
        }

        let mut pos = scan::leading_whitespace(self.src);
        if pos >= self.end {
            return Err(LexError::new(0, LexErrorKind::TextEmpty));
        }

        if self.bytes[pos] == b'[' {
            pos = self.context(pos)?;
        }
        self.literal_start = pos;

        // Fast path: no directives at all.
        if scan::find_brace(&self.bytes[..self.end], pos).is_none() {
            self.push(TokenType::Literal, pos, self.end);
            return Ok(());
        }

        let body = &self.bytes[..self.end];
        while let Some(brace) = scan::find_brace(body, pos) {
            if scan::is_escaped(body, brace) {
                pos = brace + 1;
                continue;
            }
            pos = if body[brace] == b'}' {
                self.close_plural(brace)?
            } else {
                self.directive(brace)?
            };
        }

        if let Some(block) = self.plural {
            return Err(LexError::new(block.open, LexErrorKind::UnclosedPlaceholder));
        }
        self.flush_literal(self.end);
        Ok(())
    }

    /// Scan `[...]` starting at `open`, returning the offset where the text
    /// body begins.
    fn context(&mut self, open: usize) -> Result<usize, LexError> {
        let Some(close) = scan::find_byte(b']', &self.bytes[..self.end], open + 1) else {
            return Err(LexError::new(open, LexErrorKind::ContextUnclosed));
        };
        let inner = &self.src[open + 1..close];
        if let Some(off) = inner.find(['{', '}', '[', '\\']) {
            return Err(LexError::new(open + 1 + off, LexErrorKind::ContextInvalid));
        }
        if inner.trim().is_empty() {
            return Err(LexError::new(open, LexErrorKind::ContextEmpty));
        }
        self.push(TokenType::Context, open, close + 1);

        let after = close + 1;
        let body_start = after + scan::leading_whitespace(&self.src[after..self.end]);
        if body_start >= self.end {
            return Err(LexError::new(after, LexErrorKind::TextEmpty));
        }
        Ok(body_start)
    }

    /// Handle a live `}` at `brace`.
    fn close_plural(&mut self, brace: usize) -> Result<usize, LexError> {
        let Some(block) = self.plural.take() else {
            return Err(LexError::new(brace, LexErrorKind::UnexpectedClosure));
        };
        self.flush_literal(brace);
        if self.out.len() == block.first_token {
            return Err(LexError::new(brace, LexErrorKind::CardinalPluralEmpty));
        }
        self.push(TokenType::CardinalPluralEnd, brace, brace + 1);
        self.literal_start = brace + 1;
        Ok(brace + 1)
    }

    /// Handle a live `{` at `brace`, returning the offset to resume at.
    fn directive(&mut self, brace: usize) -> Result<usize, LexError> {
        self.flush_literal(brace);
        let rest = &self.src[brace + 1..self.end];

        if let Some(after_opener) = self.config.strip_plural_opener(rest) {
            let ws = scan::leading_whitespace(after_opener);
            if ws > 0 {
                return self.open_plural(brace, rest.len() - after_opener.len() + ws);
            }
        }

        if let Some(block) = self.plural {
            if self.out.len() == block.first_token {
                return Err(LexError::new(
                    brace,
                    LexErrorKind::DirectiveStartsCardinalPlural,
                ));
            }
        }

        let next = if rest.starts_with('"') {
            self.string_placeholder(brace)?
        } else {
            self.magic_placeholder(brace)?
        };
        self.literal_start = next;
        Ok(next)
    }

    /// `{<opener><whitespace>`: `head_len` covers opener plus whitespace.
    fn open_plural(&mut self, brace: usize, head_len: usize) -> Result<usize, LexError> {
        if self.plural.is_some() {
            return Err(LexError::new(brace, LexErrorKind::NestedPluralization));
        }
        let next = brace + 1 + head_len;
        self.push(TokenType::CardinalPluralStart, brace, next);
        self.plural = Some(PluralBlock {
            open: brace,
            first_token: self.out.len(),
        });
        self.literal_start = next;
        Ok(next)
    }

    /// `{"..."}`
    fn string_placeholder(&mut self, brace: usize) -> Result<usize, LexError> {
        let body = &self.bytes[..self.end];
        let text_start = brace + 2;

        let Some(quote) = scan::find_string_delim(body, text_start) else {
            return Err(LexError::new(brace, LexErrorKind::UnclosedStringPlaceholder));
        };
        // Only `"}` terminates; any other delimiter, or a quote in the
        // middle of the body, is illegal.
        match (body[quote], body.get(quote + 1)) {
            (b'"', Some(b'}')) => {}
            (b'"', None) => {
                return Err(LexError::new(brace, LexErrorKind::UnclosedStringPlaceholder));
            }
            _ => {
                return Err(LexError::new(quote, LexErrorKind::StringPlaceholderIllegalChars));
            }
        }

        let text = &self.src[text_start..quote];
        if text.is_empty() {
            return Err(LexError::new(brace, LexErrorKind::StringPlaceholderEmpty));
        }
        if scan::leading_whitespace(text) > 0 {
            return Err(LexError::new(text_start, LexErrorKind::StringPlaceholderInvalidSpace));
        }
        let trimmed = text.trim_end();
        if trimmed.len() < text.len() {
            return Err(LexError::new(
                text_start + trimmed.len(),
                LexErrorKind::StringPlaceholderInvalidSpace,
            ));
        }

        let next = quote + 2;
        self.push(TokenType::Text, brace, next);
        Ok(next)
    }

    /// `{<magic constant>}`
    fn magic_placeholder(&mut self, brace: usize) -> Result<usize, LexError> {
        let Some(close) = scan::find_byte(b'}', &self.bytes[..self.end], brace + 1) else {
            return Err(LexError::new(brace, LexErrorKind::UnclosedPlaceholder));
        };
        let Some(token_type) = self.config.match_directive(&self.src[brace + 1..close]) else {
            return Err(LexError::new(brace, LexErrorKind::UnknownPlaceholder));
        };
        self.push(token_type, brace, close + 1);
        Ok(close + 1)
    }

    /// Emit the pending literal run up to `upto`, if non-empty.
    fn flush_literal(&mut self, upto: usize) {
        if upto > self.literal_start {
            self.push(TokenType::Literal, self.literal_start, upto);
        }
        self.literal_start = upto;
    }

    #[allow(
        clippy::cast_possible_truncation,
        reason = "input length checked against u32::MAX in run()"
    )]
    fn push(&mut self, token_type: TokenType, start: usize, end: usize) {
        self.out
            .push(Token::new(token_type, Span::new(start as u32, end as u32)));
    }
}
