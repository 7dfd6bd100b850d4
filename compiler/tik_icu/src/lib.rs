//! TIK to ICU MessageFormat translation.
//!
//! The output is a *skeleton*: placeholders become positional arguments
//! (`arg0`, `arg1`, ...) and plural/select blocks carry only the `other`
//! branch. Translators fill in the remaining locale-specific branches.
//!
//! # Example
//!
//! ```
//! use tik_icu::{IcuTranslator, Modifiers};
//! use tik_lexer::{Config, Parser};
//!
//! let config = Config::default();
//! let mut parser = Parser::new(config.clone());
//! let mut icu = IcuTranslator::new(&config);
//!
//! let tik = parser.parse("{name} did it").unwrap();
//! let modifiers = Modifiers::new().with_gender(0);
//! assert_eq!(
//!     icu.translate(&tik, Some(&modifiers)),
//!     "{arg0_gender, select, other {{arg0}}} did it",
//! );
//! ```

mod modifier;
mod translator;

pub use modifier::{IcuModifier, Modifiers};
pub use translator::IcuTranslator;
