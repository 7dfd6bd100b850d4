//! Lexical tokens of a TIK.

use std::borrow::Cow;
use std::fmt;

use crate::escape::unescape_literal;
use crate::Span;

/// Ordered token sequence. Order encodes positional argument order.
pub type Tokens = Vec<Token>;

/// Discriminant of a TIK token.
///
/// Exactly one type applies per token; the vocabulary that produces each
/// directive type lives in [`Config`](crate::Config).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TokenType {
    /// `[...]` namespace prefix at the very front of the text.
    Context,
    /// Plain text run.
    Literal,

    // === Strings ===
    /// `{text}` or a quoted `{"..."}` placeholder.
    Text,
    /// `{name}`: free-form text that is grammatically gendered.
    TextWithGender,
    /// `{they}`, `{them}`, `{their}`, `{theirs}`, `{themself}`.
    GenderPronoun,

    // === Numbers ===
    /// `{number}`
    Number,
    /// `{integer}`
    Integer,

    // === Pluralization ===
    /// `{# ` opening a cardinal plural block.
    CardinalPluralStart,
    /// `}` closing a cardinal plural block.
    CardinalPluralEnd,
    /// `{ordinal}`
    OrdinalPlural,

    // === Date ===
    DateFull,
    DateLong,
    DateMedium,
    DateShort,

    // === Time ===
    TimeFull,
    TimeLong,
    TimeMedium,
    TimeShort,

    /// `{currency}`
    Currency,
}

impl TokenType {
    /// Human-readable name, as printed by tooling.
    pub const fn name(self) -> &'static str {
        match self {
            TokenType::Context => "context",
            TokenType::Literal => "literal",
            TokenType::Text => "text",
            TokenType::TextWithGender => "text with gender",
            TokenType::GenderPronoun => "gender pronoun",
            TokenType::Number => "number",
            TokenType::Integer => "integer",
            TokenType::CardinalPluralStart => "pluralization",
            TokenType::CardinalPluralEnd => "pluralization block end",
            TokenType::OrdinalPlural => "ordinal plural",
            TokenType::DateFull => "date full",
            TokenType::DateLong => "date long",
            TokenType::DateMedium => "date medium",
            TokenType::DateShort => "date short",
            TokenType::TimeFull => "time full",
            TokenType::TimeLong => "time long",
            TokenType::TimeMedium => "time medium",
            TokenType::TimeShort => "time short",
            TokenType::Currency => "currency",
        }
    }

    /// Whether tokens of this type consume a positional argument.
    ///
    /// Everything except `Context`, `Literal` and `CardinalPluralEnd` does.
    pub const fn is_placeholder(self) -> bool {
        !matches!(
            self,
            TokenType::Context | TokenType::Literal | TokenType::CardinalPluralEnd
        )
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A lexical TIK token: a type and the span it covers in the raw input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    pub span: Span,
    pub token_type: TokenType,
}

impl Token {
    #[inline]
    pub const fn new(token_type: TokenType, span: Span) -> Self {
        Token { span, token_type }
    }

    /// The raw source text of this token.
    ///
    /// `raw` must be the string the token was produced from; an out-of-range
    /// span yields an empty string.
    #[inline]
    pub fn as_str<'s>(&self, raw: &'s str) -> &'s str {
        raw.get(self.span.to_range()).unwrap_or_default()
    }

    /// The textual value of this token.
    ///
    /// For literals this is the raw text with backslash-escaped braces
    /// resolved; every other token's value is its raw text.
    pub fn value<'s>(&self, raw: &'s str) -> Cow<'s, str> {
        match self.token_type {
            TokenType::Literal => unescape_literal(raw, self.span),
            _ => Cow::Borrowed(self.as_str(raw)),
        }
    }
}

#[cfg(test)]
mod tests;
