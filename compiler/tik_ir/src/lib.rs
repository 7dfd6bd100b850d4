//! Core types for the TIK toolchain.
//!
//! A TIK (textual internationalization key) is a piece of literal text with
//! bracketed directives such as `{name}`, `{date-medium}` or `{# messages}`.
//! This crate holds everything the lexer and the ICU translator share:
//!
//! - [`Span`]: byte range into the raw input
//! - [`Token`] / [`TokenType`]: the lexical units of a TIK
//! - [`Tik`]: a raw string together with its validated token sequence
//! - [`Config`]: the vocabulary of magic constants and its validation

mod config;
mod escape;
mod span;
mod tik;
mod token;

pub use config::{Config, ConfigError, MagicConstants, OrdinalPlural};
pub use escape::unescape_literal;
pub use span::Span;
pub use tik::{Placeholders, Tik};
pub use token::{Token, TokenType, Tokens};
