//! TIK to ICU skeleton emission.

use std::fmt::Write;

use tik_ir::{Config, Tik, Token, TokenType};

use crate::modifier::{IcuModifier, Modifiers};

/// Reusable TIK to ICU message translator.
///
/// Holds an output buffer that is reset, not reallocated, between calls.
#[derive(Clone, Debug)]
pub struct IcuTranslator {
    buf: String,
    /// Ordinal `other` suffix, already quoted for ICU.
    ordinal_suffix: String,
}

impl IcuTranslator {
    /// Create a translator for an already validated `config`.
    pub fn new(config: &Config) -> Self {
        let mut ordinal_suffix = String::new();
        push_icu_text(
            &mut ordinal_suffix,
            &config.magic_constants.ordinal_plural.default_icu_suffix,
            true,
        );
        IcuTranslator {
            buf: String::new(),
            ordinal_suffix,
        }
    }

    /// Translate `tik` into an ICU message skeleton.
    pub fn translate(&mut self, tik: &Tik<'_>, modifiers: Option<&Modifiers>) -> String {
        self.translate_buf(tik, modifiers, str::to_owned)
    }

    /// Like [`translate`](Self::translate), but lends the internal buffer
    /// to `f` instead of allocating a new string.
    #[tracing::instrument(level = "trace", skip_all, fields(tokens = tik.tokens().len()))]
    pub fn translate_buf<R>(
        &mut self,
        tik: &Tik<'_>,
        modifiers: Option<&Modifiers>,
        f: impl FnOnce(&str) -> R,
    ) -> R {
        self.buf.clear();
        Emission {
            out: &mut self.buf,
            ordinal_suffix: &self.ordinal_suffix,
            modifiers,
            index: 0,
            in_plural: false,
            plural_wrappers: 0,
        }
        .emit(tik);
        f(&self.buf)
    }
}

/// State of one translation pass.
struct Emission<'t> {
    out: &'t mut String,
    ordinal_suffix: &'t str,
    modifiers: Option<&'t Modifiers>,
    /// Next positional argument index.
    index: usize,
    in_plural: bool,
    /// Modifier blocks around the open plural block, closed after its end.
    plural_wrappers: usize,
}

impl Emission<'_> {
    fn emit(mut self, tik: &Tik<'_>) {
        for token in tik.tokens() {
            match token.token_type {
                TokenType::Context => {}
                TokenType::Literal => {
                    push_icu_text(self.out, &tik.token_value(token), self.in_plural);
                }
                TokenType::CardinalPluralEnd => {
                    self.out.push_str("}}");
                    self.close_wrappers(self.plural_wrappers);
                    self.plural_wrappers = 0;
                    self.in_plural = false;
                }
                _ => self.placeholder(tik, token),
            }
        }
    }

    /// Emit a token that takes a positional argument, with its overlay.
    fn placeholder(&mut self, tik: &Tik<'_>, token: &Token) {
        debug_assert!(token.token_type.is_placeholder());
        let index = self.index;
        self.index += 1;

        let modifier = self
            .modifiers
            .map_or(IcuModifier::NONE, |modifiers| modifiers.get(index));
        if modifier.gender {
            self.open_arg(index, "_gender");
            self.out.push_str(", select, other {");
        }
        if modifier.plural {
            self.open_arg(index, "_plural");
            self.out.push_str(", plural, other {");
        }

        self.open_arg(index, "");
        match token.token_type {
            TokenType::Text | TokenType::TextWithGender => self.out.push('}'),
            TokenType::Number => self.out.push_str(", number}"),
            TokenType::Integer => self.out.push_str(", number, integer}"),
            TokenType::Currency => self.out.push_str(", number, ::currency/auto}"),
            TokenType::DateFull => self.out.push_str(", date, full}"),
            TokenType::DateLong => self.out.push_str(", date, long}"),
            TokenType::DateMedium => self.out.push_str(", date, medium}"),
            TokenType::DateShort => self.out.push_str(", date, short}"),
            TokenType::TimeFull => self.out.push_str(", time, full}"),
            TokenType::TimeLong => self.out.push_str(", time, long}"),
            TokenType::TimeMedium => self.out.push_str(", time, medium}"),
            TokenType::TimeShort => self.out.push_str(", time, short}"),
            TokenType::GenderPronoun => {
                self.out.push_str(", select, other {");
                let pronoun = directive_body(tik.token_str(token));
                push_icu_text(self.out, pronoun, false);
                self.out.push_str("}}");
            }
            TokenType::OrdinalPlural => {
                self.out.push_str(", selectordinal, other {#");
                self.out.push_str(self.ordinal_suffix);
                self.out.push_str("}}");
            }
            TokenType::CardinalPluralStart => {
                self.out.push_str(", plural, other {# ");
                self.in_plural = true;
                self.plural_wrappers = modifier.depth();
                return;
            }
            // Handled by `emit`.
            TokenType::Context | TokenType::Literal | TokenType::CardinalPluralEnd => {}
        }
        self.close_wrappers(modifier.depth());
    }

    fn open_arg(&mut self, index: usize, suffix: &str) {
        let _ = write!(self.out, "{{arg{index}{suffix}");
    }

    fn close_wrappers(&mut self, depth: usize) {
        for _ in 0..depth {
            self.out.push_str("}}");
        }
    }
}

/// The text between a directive's braces.
fn directive_body(raw: &str) -> &str {
    raw.strip_prefix('{')
        .and_then(|s| s.strip_suffix('}'))
        .unwrap_or(raw)
}

/// Append `text` as ICU message text.
///
/// Apostrophes are doubled. Braces, and `#` inside plural blocks, are
/// syntax characters: consecutive runs of them are wrapped in one
/// apostrophe-quoted section.
fn push_icu_text(out: &mut String, text: &str, in_plural: bool) {
    let mut quoted = false;
    for c in text.chars() {
        let syntax = matches!(c, '{' | '}') || (in_plural && c == '#');
        if c == '\'' {
            out.push_str("''");
            continue;
        }
        if syntax != quoted {
            out.push('\'');
            quoted = syntax;
        }
        out.push(c);
    }
    if quoted {
        out.push('\'');
    }
}
