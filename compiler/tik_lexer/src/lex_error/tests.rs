use super::*;

/// Test-only shim: `Span::is_empty` was removed from the public API.
trait SpanIsEmpty {
    fn is_empty(&self) -> bool;
}

impl SpanIsEmpty for Span {
    fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

#[test]
fn display_includes_offset() {
    let err = LexError::new(12, LexErrorKind::UnclosedPlaceholder);
    assert_eq!(err.to_string(), "at index 12: unclosed placeholder");

    let err = LexError::new(15, LexErrorKind::NestedPluralization);
    assert_eq!(err.to_string(), "at index 15: nested pluralization");
}

#[test]
fn span_covers_offending_char() {
    let input = "caf\u{e9} }";
    let err = LexError::new(6, LexErrorKind::UnexpectedClosure);
    assert_eq!(err.span(input), Span::new(6, 7));

    let err = LexError::new(3, LexErrorKind::UnexpectedClosure);
    assert_eq!(err.span(input), Span::new(3, 5));
}

#[test]
fn span_at_end_of_input_is_empty() {
    let err = LexError::new(5, LexErrorKind::TextEmpty);
    assert!(err.span("hello").is_empty());
}

#[test]
fn hints() {
    assert!(LexErrorKind::UnexpectedClosure.hint().is_some());
    assert!(LexErrorKind::DirectiveStartsCardinalPlural.hint().is_some());
    assert_eq!(LexErrorKind::UnknownPlaceholder.hint(), None);
}
