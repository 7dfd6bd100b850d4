//! `tokens` and `icu`: inspect a single TIK.

use std::fmt::Write;

use tik_icu::{IcuTranslator, Modifiers};
use tik_lexer::{LexError, Parser};

/// One line per token: `start-end: "raw" (type)`.
pub fn tokens(parser: &mut Parser, input: &str) -> Result<String, LexError> {
    parser.parse_fn(input, |tik| {
        let mut out = String::new();
        for token in tik.tokens() {
            let _ = writeln!(
                out,
                "{}: {:?} ({})",
                token.span,
                tik.token_str(token),
                token.token_type
            );
        }
        out
    })
}

/// The ICU skeleton of `input`.
pub fn icu(
    parser: &mut Parser,
    translator: &mut IcuTranslator,
    input: &str,
    modifiers: &Modifiers,
) -> Result<String, LexError> {
    let modifiers = (!modifiers.is_empty()).then_some(modifiers);
    parser.parse_fn(input, |tik| translator.translate(&tik, modifiers))
}
