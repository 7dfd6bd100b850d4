//! Parsed TIK values.

use std::borrow::Cow;
use std::iter::FusedIterator;

use crate::{Token, TokenType};

/// A parsed and validated TIK: the raw input and its token sequence.
///
/// Token spans are only meaningful relative to [`raw()`](Self::raw). Both
/// halves are copy-on-write so the parser can hand out a TIK that borrows
/// its scratch buffer, or one that owns its tokens.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Tik<'a> {
    raw: Cow<'a, str>,
    tokens: Cow<'a, [Token]>,
}

impl<'a> Tik<'a> {
    /// Assemble a TIK from a raw string and the tokens produced for it.
    ///
    /// Intended for the parser; the tokens must come from tokenizing `raw`.
    pub fn from_parts(raw: impl Into<Cow<'a, str>>, tokens: impl Into<Cow<'a, [Token]>>) -> Self {
        Tik {
            raw: raw.into(),
            tokens: tokens.into(),
        }
    }

    /// The original input, including any surrounding whitespace.
    #[inline]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    #[inline]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Iterate placeholder tokens together with their positional index.
    ///
    /// Skips `Context`, `Literal` and `CardinalPluralEnd` tokens; the index
    /// counts only yielded tokens, so it is the `N` of `argN`.
    pub fn placeholders(&self) -> Placeholders<'_> {
        Placeholders {
            tokens: self.tokens.iter(),
            index: 0,
        }
    }

    /// The context body with surrounding whitespace trimmed, if present.
    pub fn context(&self) -> Option<&str> {
        let token = self.tokens.first()?;
        if token.token_type != TokenType::Context {
            return None;
        }
        let bracketed = token.as_str(&self.raw);
        let inner = bracketed
            .strip_prefix('[')
            .and_then(|s| s.strip_suffix(']'))
            .unwrap_or(bracketed);
        Some(inner.trim())
    }

    /// Raw text of `token` in this TIK.
    #[inline]
    pub fn token_str(&self, token: &Token) -> &str {
        token.as_str(&self.raw)
    }

    /// Textual value of `token` in this TIK (escapes resolved for literals).
    #[inline]
    pub fn token_value(&self, token: &Token) -> Cow<'_, str> {
        token.value(&self.raw)
    }

    /// Detach from any borrowed input or parser buffer.
    #[must_use]
    pub fn into_owned(self) -> Tik<'static> {
        Tik {
            raw: Cow::Owned(self.raw.into_owned()),
            tokens: Cow::Owned(self.tokens.into_owned()),
        }
    }
}

/// Iterator over the placeholder tokens of a [`Tik`].
///
/// Created by [`Tik::placeholders`].
#[derive(Clone, Debug)]
pub struct Placeholders<'t> {
    tokens: std::slice::Iter<'t, Token>,
    index: usize,
}

impl Iterator for Placeholders<'_> {
    type Item = (usize, Token);

    fn next(&mut self) -> Option<Self::Item> {
        let token = self
            .tokens
            .by_ref()
            .find(|token| token.token_type.is_placeholder())?;
        let index = self.index;
        self.index += 1;
        Some((index, *token))
    }
}

impl FusedIterator for Placeholders<'_> {}

#[cfg(test)]
mod tests;
