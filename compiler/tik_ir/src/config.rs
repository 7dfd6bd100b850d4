//! TIK vocabulary configuration.
//!
//! The set of recognized directives is data, not code: every directive kind
//! is triggered by a configurable "magic constant" compared
//! case-insensitively against the directive body. A [`Config`] is validated
//! once and then shared read-only by any number of parsers and translators.

use rustc_hash::FxHashSet;

use crate::TokenType;

/// TIK environment configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Config {
    pub magic_constants: MagicConstants,
}

/// The magic constants of the configured environment.
///
/// Comments show the default surface syntax.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct MagicConstants {
    pub text: String,                  // {text}
    pub text_with_gender: String,      // {name}
    pub number: String,                // {number}
    pub integer: String,               // {integer}
    pub cardinal_plural_start: String, // {# ...}
    pub ordinal_plural: OrdinalPlural, // {ordinal}

    pub gender_pronouns: Vec<String>, // {they}, {them}, {their}, {theirs}, {themself}

    pub date_full: String,   // {date-full}
    pub date_long: String,   // {date-long}
    pub date_medium: String, // {date-medium}
    pub date_short: String,  // {date-short}

    pub time_full: String,   // {time-full}
    pub time_long: String,   // {time-long}
    pub time_medium: String, // {time-medium}
    pub time_short: String,  // {time-short}

    pub currency: String, // {currency}
}

/// Ordinal plural constant plus the suffix used in generated ICU messages.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct OrdinalPlural {
    /// The magic TIK constant.
    pub constant: String,
    /// Written after `#` in the `other` arm of `selectordinal`.
    pub default_icu_suffix: String,
}

impl Default for OrdinalPlural {
    fn default() -> Self {
        OrdinalPlural {
            constant: "ordinal".to_owned(),
            default_icu_suffix: "th".to_owned(),
        }
    }
}

impl Default for MagicConstants {
    fn default() -> Self {
        MagicConstants {
            text: "text".to_owned(),
            text_with_gender: "name".to_owned(),
            number: "number".to_owned(),
            integer: "integer".to_owned(),
            cardinal_plural_start: "#".to_owned(),
            ordinal_plural: OrdinalPlural::default(),
            gender_pronouns: ["they", "them", "their", "theirs", "themself"]
                .into_iter()
                .map(str::to_owned)
                .collect(),
            date_full: "date-full".to_owned(),
            date_long: "date-long".to_owned(),
            date_medium: "date-medium".to_owned(),
            date_short: "date-short".to_owned(),
            time_full: "time-full".to_owned(),
            time_long: "time-long".to_owned(),
            time_medium: "time-medium".to_owned(),
            time_short: "time-short".to_owned(),
            currency: "currency".to_owned(),
        }
    }
}

/// Number of single-valued magic constants (everything but the pronouns).
const SCALAR_CONSTANTS: usize = 15;

impl MagicConstants {
    /// Single-valued constants as `(field, constant, token type)`.
    fn scalars(&self) -> [(&'static str, &str, TokenType); SCALAR_CONSTANTS] {
        [
            ("text", &self.text, TokenType::Text),
            ("text_with_gender", &self.text_with_gender, TokenType::TextWithGender),
            ("number", &self.number, TokenType::Number),
            ("integer", &self.integer, TokenType::Integer),
            (
                "cardinal_plural_start",
                &self.cardinal_plural_start,
                TokenType::CardinalPluralStart,
            ),
            (
                "ordinal_plural.constant",
                &self.ordinal_plural.constant,
                TokenType::OrdinalPlural,
            ),
            ("date_full", &self.date_full, TokenType::DateFull),
            ("date_long", &self.date_long, TokenType::DateLong),
            ("date_medium", &self.date_medium, TokenType::DateMedium),
            ("date_short", &self.date_short, TokenType::DateShort),
            ("time_full", &self.time_full, TokenType::TimeFull),
            ("time_long", &self.time_long, TokenType::TimeLong),
            ("time_medium", &self.time_medium, TokenType::TimeMedium),
            ("time_short", &self.time_short, TokenType::TimeShort),
            ("currency", &self.currency, TokenType::Currency),
        ]
    }
}

/// Configuration validation failure.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Two magic constants share the same surface string.
    #[error("magic constant {constant:?} of {field} is not unique")]
    MagicConstantNonUnique { field: &'static str, constant: String },
    /// A magic constant is empty, contains `{`, `}` or `"`, is surrounded
    /// by whitespace, or starts with the plural opener followed by
    /// whitespace (the opener would always win). Also reported for an empty
    /// pronoun set.
    #[error("invalid magic constant {constant:?} for {field}")]
    MagicConstantInvalid { field: &'static str, constant: String },
    /// A required default value is missing.
    #[error("missing default value for {field}")]
    MissingDefault { field: &'static str },
}

impl Config {
    /// Check uniqueness and shape of every magic constant.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let m = &self.magic_constants;
        // Directives match case-insensitively, so uniqueness is checked on
        // folded keys.
        let mut seen: FxHashSet<String> = FxHashSet::default();

        for (field, constant, token_type) in m.scalars() {
            validate_constant(field, constant)?;
            insert_unique(&mut seen, field, constant)?;
            if token_type != TokenType::CardinalPluralStart {
                self.reject_opener_prefix(field, constant)?;
            }
        }

        if m.ordinal_plural.default_icu_suffix.is_empty() {
            return Err(ConfigError::MissingDefault {
                field: "ordinal_plural.default_icu_suffix",
            });
        }

        if m.gender_pronouns.is_empty() {
            return Err(ConfigError::MagicConstantInvalid {
                field: "gender_pronouns",
                constant: String::new(),
            });
        }
        for pronoun in &m.gender_pronouns {
            validate_constant("gender_pronouns", pronoun)?;
            insert_unique(&mut seen, "gender_pronouns", pronoun)?;
            self.reject_opener_prefix("gender_pronouns", pronoun)?;
        }
        Ok(())
    }

    /// `{<opener> ...}` always opens a plural block, so a constant of that
    /// shape could never be matched.
    fn reject_opener_prefix(
        &self,
        field: &'static str,
        constant: &str,
    ) -> Result<(), ConfigError> {
        let shadowed = self
            .strip_plural_opener(constant)
            .is_some_and(|rest| rest.starts_with(char::is_whitespace));
        if shadowed {
            return Err(ConfigError::MagicConstantInvalid {
                field,
                constant: constant.to_owned(),
            });
        }
        Ok(())
    }

    /// Consuming form of [`validate`](Self::validate).
    pub fn validated(self) -> Result<Self, ConfigError> {
        self.validate()?;
        Ok(self)
    }

    /// Resolve a directive body (the text between `{` and `}`) to its type.
    ///
    /// The plural opener is not a standalone directive and never matches.
    pub fn match_directive(&self, body: &str) -> Option<TokenType> {
        let m = &self.magic_constants;
        m.scalars()
            .into_iter()
            .filter(|&(_, _, token_type)| token_type != TokenType::CardinalPluralStart)
            .find(|&(_, constant, _)| eq_fold(body, constant))
            .map(|(_, _, token_type)| token_type)
            .or_else(|| {
                m.gender_pronouns
                    .iter()
                    .any(|pronoun| eq_fold(body, pronoun))
                    .then_some(TokenType::GenderPronoun)
            })
    }

    /// Strip the cardinal plural opener from the start of `s`,
    /// case-insensitively, returning the remainder.
    pub fn strip_plural_opener<'s>(&self, s: &'s str) -> Option<&'s str> {
        strip_prefix_fold(s, &self.magic_constants.cardinal_plural_start)
    }
}

fn validate_constant(field: &'static str, constant: &str) -> Result<(), ConfigError> {
    let invalid = constant.is_empty()
        || constant.contains(['{', '}', '"'])
        || constant.starts_with(char::is_whitespace)
        || constant.ends_with(char::is_whitespace);
    if invalid {
        return Err(ConfigError::MagicConstantInvalid {
            field,
            constant: constant.to_owned(),
        });
    }
    Ok(())
}

fn insert_unique(
    seen: &mut FxHashSet<String>,
    field: &'static str,
    constant: &str,
) -> Result<(), ConfigError> {
    if !seen.insert(fold(constant)) {
        return Err(ConfigError::MagicConstantNonUnique {
            field,
            constant: constant.to_owned(),
        });
    }
    Ok(())
}

fn fold(s: &str) -> String {
    s.chars().flat_map(char::to_lowercase).collect()
}

/// Case-insensitive equality using simple lowercase folding.
fn eq_fold(a: &str, b: &str) -> bool {
    if a.is_ascii() && b.is_ascii() {
        return a.eq_ignore_ascii_case(b);
    }
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

fn strip_prefix_fold<'s>(s: &'s str, prefix: &str) -> Option<&'s str> {
    let chars = prefix.chars().count();
    let end = s.char_indices().nth(chars).map_or(s.len(), |(i, _)| i);
    eq_fold(&s[..end], prefix).then_some(&s[end..])
}
