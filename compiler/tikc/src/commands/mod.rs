//! Command handlers for the `tikc` CLI.
//!
//! Handlers return their output instead of printing it; `main.rs` decides
//! where it goes and which exit code to use. Shared plumbing (option
//! parsing, file and vocabulary loading) lives in the module root.

use std::io;

use tik_icu::Modifiers;
use tik_lexer::{Config, ConfigError};

mod check;
mod show;

pub use check::{check_source, CheckSummary};
pub use show::{icu, tokens};

/// Errors from the CLI plumbing around the tokenizer.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{}", describe_io(path, source))]
    Io { path: String, source: io::Error },
    #[error("invalid vocabulary file '{path}': {source}")]
    ConfigSyntax {
        path: String,
        source: serde_json::Error,
    },
    #[error("invalid vocabulary: {0}")]
    Config(#[from] ConfigError),
    #[error("invalid index '{value}' for {flag}")]
    InvalidIndex { flag: &'static str, value: String },
    #[error("unknown option '{0}'")]
    UnknownOption(String),
}

fn describe_io(path: &str, err: &io::Error) -> String {
    match err.kind() {
        io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
        io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
        io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
        _ => format!("error reading '{path}': {err}"),
    }
}

/// Options shared by all commands.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Options {
    /// `--config=<file.json>`
    pub config: Option<String>,
    /// `--gender=<i>` and `--plural=<i>`, in any number.
    pub modifiers: Modifiers,
    /// Non-option arguments, in order.
    pub positional: Vec<String>,
}

/// Parse command arguments (everything after the command name).
pub fn parse_options(args: &[String]) -> Result<Options, CliError> {
    let mut options = Options::default();
    for arg in args {
        if let Some(path) = arg.strip_prefix("--config=") {
            options.config = Some(path.to_owned());
        } else if let Some(value) = arg.strip_prefix("--gender=") {
            let index = parse_index("--gender", value)?;
            options.modifiers = options.modifiers.with_gender(index);
        } else if let Some(value) = arg.strip_prefix("--plural=") {
            let index = parse_index("--plural", value)?;
            options.modifiers = options.modifiers.with_plural(index);
        } else if arg.starts_with("--") {
            return Err(CliError::UnknownOption(arg.clone()));
        } else {
            options.positional.push(arg.clone());
        }
    }
    Ok(options)
}

fn parse_index(flag: &'static str, value: &str) -> Result<usize, CliError> {
    value.parse().map_err(|_| CliError::InvalidIndex {
        flag,
        value: value.to_owned(),
    })
}

/// Read a UTF-8 file.
pub fn read_file(path: &str) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_owned(),
        source,
    })
}

/// Load and validate the vocabulary: the JSON file at `path`, or the
/// defaults. Fields missing from the file keep their default value.
pub fn load_config(path: Option<&str>) -> Result<Config, CliError> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    let text = read_file(path)?;
    let config = parse_config(path, &text)?;
    tracing::debug!(path, "loaded vocabulary");
    Ok(config)
}

/// Parse and validate a JSON vocabulary. `path` is only used in errors.
pub fn parse_config(path: &str, json: &str) -> Result<Config, CliError> {
    let config: Config = serde_json::from_str(json).map_err(|source| CliError::ConfigSyntax {
        path: path.to_owned(),
        source,
    })?;
    Ok(config.validated()?)
}
