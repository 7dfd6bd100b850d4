use super::*;

#[test]
fn token_type_names() {
    let cases = [
        (TokenType::Context, "context"),
        (TokenType::Literal, "literal"),
        (TokenType::Text, "text"),
        (TokenType::TextWithGender, "text with gender"),
        (TokenType::GenderPronoun, "gender pronoun"),
        (TokenType::Number, "number"),
        (TokenType::Integer, "integer"),
        (TokenType::CardinalPluralStart, "pluralization"),
        (TokenType::CardinalPluralEnd, "pluralization block end"),
        (TokenType::OrdinalPlural, "ordinal plural"),
        (TokenType::DateFull, "date full"),
        (TokenType::DateLong, "date long"),
        (TokenType::DateMedium, "date medium"),
        (TokenType::DateShort, "date short"),
        (TokenType::TimeFull, "time full"),
        (TokenType::TimeLong, "time long"),
        (TokenType::TimeMedium, "time medium"),
        (TokenType::TimeShort, "time short"),
        (TokenType::Currency, "currency"),
    ];
    for (token_type, name) in cases {
        assert_eq!(token_type.to_string(), name);
    }
}

#[test]
fn placeholder_classification() {
    assert!(!TokenType::Context.is_placeholder());
    assert!(!TokenType::Literal.is_placeholder());
    assert!(!TokenType::CardinalPluralEnd.is_placeholder());

    assert!(TokenType::Text.is_placeholder());
    assert!(TokenType::CardinalPluralStart.is_placeholder());
    assert!(TokenType::OrdinalPlural.is_placeholder());
    assert!(TokenType::Currency.is_placeholder());
}

#[test]
fn as_str_slices_raw() {
    let raw = "{name} did it";
    let token = Token::new(TokenType::TextWithGender, Span::new(0, 6));
    assert_eq!(token.as_str(raw), "{name}");
    assert_eq!(token.value(raw), "{name}");
}

#[test]
fn as_str_out_of_range_is_empty() {
    let token = Token::new(TokenType::Literal, Span::new(4, 40));
    assert_eq!(token.as_str("short"), "");
}

#[test]
fn literal_value_is_unescaped() {
    let raw = r"\{not a placeholder\}";
    let token = Token::new(TokenType::Literal, Span::new(0, 21));
    assert_eq!(token.as_str(raw), raw);
    assert_eq!(token.value(raw), "{not a placeholder}");
}
