use pretty_assertions::assert_eq;

use super::*;
use crate::Span;

fn tok(token_type: TokenType, start: u32, end: u32) -> Token {
    Token::new(token_type, Span::new(start, end))
}

/// `[ctx] {name} has {# items}`
fn sample() -> Tik<'static> {
    Tik::from_parts(
        "[ctx] {name} has {# items}",
        vec![
            tok(TokenType::Context, 0, 5),
            tok(TokenType::TextWithGender, 6, 12),
            tok(TokenType::Literal, 12, 17),
            tok(TokenType::CardinalPluralStart, 17, 20),
            tok(TokenType::Literal, 20, 25),
            tok(TokenType::CardinalPluralEnd, 25, 26),
        ],
    )
}

#[test]
fn placeholders_skip_non_arguments() {
    let tik = sample();
    let got: Vec<(usize, TokenType)> = tik
        .placeholders()
        .map(|(i, token)| (i, token.token_type))
        .collect();
    assert_eq!(
        got,
        vec![
            (0, TokenType::TextWithGender),
            (1, TokenType::CardinalPluralStart),
        ]
    );
}

#[test]
fn placeholders_stop_early() {
    let tik = sample();
    assert_eq!(tik.placeholders().take(1).count(), 1);
}

#[test]
fn context_is_trimmed_inner_text() {
    let tik = Tik::from_parts(
        "[  menu bar ] Open",
        vec![tok(TokenType::Context, 0, 13), tok(TokenType::Literal, 14, 18)],
    );
    assert_eq!(tik.context(), Some("menu bar"));
    assert_eq!(sample().context(), Some("ctx"));
}

#[test]
fn no_context() {
    let tik = Tik::from_parts("hello", vec![tok(TokenType::Literal, 0, 5)]);
    assert_eq!(tik.context(), None);
}

#[test]
fn token_accessors() {
    let tik = sample();
    let tokens = tik.tokens();
    assert_eq!(tik.token_str(&tokens[1]), "{name}");
    assert_eq!(tik.token_str(&tokens[3]), "{# ");
    assert_eq!(tik.token_value(&tokens[2]), " has ");
}

#[test]
fn borrowed_tokens_into_owned() {
    let tokens = vec![tok(TokenType::Literal, 0, 2)];
    let input = String::from("hi");
    let owned = {
        let borrowed = Tik::from_parts(input.as_str(), tokens.as_slice());
        borrowed.into_owned()
    };
    drop(tokens);
    drop(input);
    assert_eq!(owned.raw(), "hi");
    assert_eq!(owned.tokens().len(), 1);
}
