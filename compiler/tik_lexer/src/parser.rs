//! Reusable TIK parser.

use tik_ir::{Config, ConfigError, Tik, Token};

use crate::lex_error::LexError;
use crate::tokenizer::tokenize;

/// Parses TIK strings against one vocabulary, reusing a token buffer
/// across calls.
///
/// Not thread-safe by itself (`parse*` take `&mut self`); use one parser
/// per worker and share the [`Config`] by cloning.
#[derive(Clone, Debug, Default)]
pub struct Parser {
    config: Config,
    buffer: Vec<Token>,
}

impl Parser {
    /// Create a parser for an already validated `config`.
    pub fn new(config: Config) -> Self {
        Parser {
            config,
            buffer: Vec::new(),
        }
    }

    /// Validate `config` and create a parser for it.
    pub fn try_new(config: Config) -> Result<Self, ConfigError> {
        Ok(Self::new(config.validated()?))
    }

    /// The vocabulary this parser matches directives against.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Parse `input` and pass the result to `f`.
    ///
    /// The [`Tik`] borrows the parser's internal buffer, so no token vector
    /// is allocated per call once the buffer has grown. It cannot outlive
    /// `f`.
    pub fn parse_fn<R>(
        &mut self,
        input: &str,
        f: impl FnOnce(Tik<'_>) -> R,
    ) -> Result<R, LexError> {
        self.buffer.clear();
        tokenize(&mut self.buffer, input, &self.config)?;
        Ok(f(Tik::from_parts(input, self.buffer.as_slice())))
    }

    /// Parse `input` into a [`Tik`] that owns its tokens.
    pub fn parse<'a>(&mut self, input: &'a str) -> Result<Tik<'a>, LexError> {
        self.parse_fn(input, |tik| Tik::from_parts(input, tik.tokens().to_vec()))
    }
}
