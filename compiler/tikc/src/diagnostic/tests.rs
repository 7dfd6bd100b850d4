use pretty_assertions::assert_eq;
use tik_lexer::{LexErrorKind, Parser};

use super::*;

fn render(source: &str, base: usize) -> String {
    let mut parser = Parser::default();
    let Err(err) = parser.parse(&source[base..]) else {
        panic!("expected an error for {source:?}");
    };
    let mut out = Vec::new();
    if let Err(io) = render_lex_error(&err, source, base, &mut out) {
        panic!("render failed: {io}");
    }
    String::from_utf8_lossy(&out).into_owned()
}

#[test]
fn char_range_counts_chars() {
    let source = "caf\u{e9} }";
    assert_eq!(char_range(source, 6..7), 5..6);
    assert_eq!(char_range(source, 0..0), 0..1);
    assert_eq!(char_range(source, 7..7), 6..6);
}

#[test]
fn report_names_the_error() {
    let out = render("hello world {", 0);
    assert!(out.contains("unclosed placeholder"), "{out}");
    assert!(out.contains("at index 12"), "{out}");
    assert!(out.contains("add a closing `}`"), "{out}");
}

#[test]
fn report_without_hint() {
    let out = render("{nope}", 0);
    assert!(out.contains("unknown placeholder"), "{out}");
    assert!(!out.contains("Help"), "{out}");
}

#[test]
fn base_offset_points_into_later_line() {
    let source = "fine\n{# {text}}\n";
    let out = render(source, 5);
    assert!(
        out.contains(&LexErrorKind::DirectiveStartsCardinalPlural.to_string()),
        "{out}"
    );
    assert!(out.contains("{# {text}}"), "{out}");
}
