//! Translation scenarios and properties through the public API.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "tests can panic")]

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use tik_icu::{IcuModifier, IcuTranslator, Modifiers};
use tik_lexer::{Config, Parser};

fn translate(input: &str, modifiers: Option<&Modifiers>) -> String {
    let config = Config::default();
    let mut parser = Parser::new(config.clone());
    let mut icu = IcuTranslator::new(&config);
    parser
        .parse_fn(input, |tik| icu.translate(&tik, modifiers))
        .unwrap()
}

#[test]
fn scenarios() {
    assert_eq!(translate("hello world", None), "hello world");
    assert_eq!(translate("{text} suffix", None), "{arg0} suffix");
    assert_eq!(
        translate("You have {# messages}", None),
        "You have {arg0, plural, other {# messages}}"
    );
    assert_eq!(
        translate("{name} did it", Some(&Modifiers::new().with_gender(0))),
        "{arg0_gender, select, other {{arg0}}} did it"
    );
}

#[test]
fn translator_is_reusable_across_parsers() {
    let config = Config::default();
    let mut icu = IcuTranslator::new(&config);
    let mut parser = Parser::new(config);
    let inputs = ["{number} apples", "plain", "{# x from {they}}"];
    let outputs: Vec<String> = inputs
        .iter()
        .map(|input| parser.parse(input).map(|tik| icu.translate(&tik, None)).unwrap())
        .collect();
    assert_eq!(
        outputs,
        vec![
            "{arg0, number} apples".to_owned(),
            "plain".to_owned(),
            "{arg0, plural, other {# x from {arg1, select, other {they}}}}".to_owned(),
        ]
    );
}

/// One segment of a generated TIK: a word or a placeholder.
fn segment() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z]{1,6}".prop_map(|w| format!("{w} ")),
        prop::sample::select(vec![
            "{text} ",
            "{name} ",
            "{number} ",
            "{integer} ",
            "{currency} ",
            "{ordinal} ",
            "{they} ",
            "{date-short} ",
            "{time-long} ",
            "{# items} ",
            "{# items of {text}} ",
            "{\"Acme\"} ",
        ])
        .prop_map(str::to_owned),
    ]
}

fn tik_source() -> impl Strategy<Value = String> {
    prop::collection::vec(segment(), 1..12).prop_map(|segments| segments.concat())
}

/// Positional indices in emission order.
fn arg_indices(icu: &str) -> Vec<usize> {
    icu.split("{arg")
        .skip(1)
        .map(|rest| {
            let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
            digits.parse().expect("index digits")
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn positional_indices_are_sequential(input in tik_source()) {
        let mut parser = Parser::default();
        let placeholders = parser
            .parse_fn(&input, |tik| tik.placeholders().count())
            .unwrap();
        let out = translate(&input, None);
        let expected: Vec<usize> = (0..placeholders).collect();
        prop_assert_eq!(arg_indices(&out), expected);
    }

    #[test]
    fn unset_modifiers_change_nothing(input in tik_source(), indices in prop::collection::vec(0usize..16, 0..8)) {
        let plain = translate(&input, None);
        let empty = translate(&input, Some(&Modifiers::new()));
        let unset: Modifiers = indices.into_iter().map(|i| (i, IcuModifier::NONE)).collect();
        let all_false = translate(&input, Some(&unset));
        prop_assert_eq!(&plain, &empty);
        prop_assert_eq!(&plain, &all_false);
    }

    #[test]
    fn overlays_keep_braces_balanced(input in tik_source(), gender in 0usize..8, plural in 0usize..8) {
        let modifiers = Modifiers::new().with_gender(gender).with_plural(plural);
        let out = translate(&input, Some(&modifiers));
        let opens = out.matches('{').count();
        let closes = out.matches('}').count();
        prop_assert_eq!(opens, closes);
    }
}
