//! Tokenizer and parser for TIK strings.
//!
//! [`tokenize`] is a single-pass, escape-aware scanner that turns a raw TIK
//! into [`Token`]s or fails at the first offending byte. [`Parser`] wraps it
//! with a reusable token buffer and hands out [`Tik`] values.
//!
//! # Example
//!
//! ```
//! use tik_lexer::Parser;
//! use tik_ir::TokenType;
//!
//! let mut parser = Parser::default();
//! let tik = parser.parse("You have {# messages}").unwrap();
//! let types: Vec<_> = tik.tokens().iter().map(|t| t.token_type).collect();
//! assert_eq!(
//!     types,
//!     [
//!         TokenType::Literal,
//!         TokenType::CardinalPluralStart,
//!         TokenType::Literal,
//!         TokenType::CardinalPluralEnd,
//!     ]
//! );
//! ```

mod lex_error;
mod parser;
mod scan;
mod tokenizer;

pub use lex_error::{LexError, LexErrorKind};
pub use parser::Parser;
pub use tokenizer::tokenize;

pub use tik_ir::{Config, ConfigError, Tik, Token, TokenType, Tokens};
