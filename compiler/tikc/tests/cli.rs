//! End-to-end tests of the `tikc` binary.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "tests can panic")]

use std::path::PathBuf;
use std::process::{Command, Output};

use pretty_assertions::assert_eq;

fn tikc(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tikc"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("run tikc")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn temp_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("tikc-{}-{name}", std::process::id()));
    std::fs::write(&path, contents).expect("write temp file");
    path
}

#[test]
fn tokens_command() {
    let output = tikc(&["tokens", "You have {# messages}"]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "0-9: \"You have \" (literal)\n\
         9-12: \"{# \" (pluralization)\n\
         12-20: \"messages\" (literal)\n\
         20-21: \"}\" (pluralization block end)\n"
    );
}

#[test]
fn icu_command_with_modifiers() {
    let output = tikc(&["icu", "{name} did it", "--gender=0"]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "{arg0_gender, select, other {{arg0}}} did it\n"
    );
}

#[test]
fn lex_error_is_rendered() {
    let output = tikc(&["icu", "hello world {"]);
    assert!(!output.status.success());
    let err = stderr(&output);
    assert!(err.contains("unclosed placeholder"), "{err}");
}

#[test]
fn custom_vocabulary() {
    let vocab = temp_file(
        "vocab.json",
        r#"{"magic_constants": {"text": "str", "cardinal_plural_start": "n"}}"#,
    );
    let config = format!("--config={}", vocab.display());
    let output = tikc(&["icu", "{str} has {n items}", &config]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "{arg0} has {arg1, plural, other {# items}}\n"
    );
    let _ = std::fs::remove_file(vocab);
}

#[test]
fn check_command() {
    let good = temp_file("good.tik", "one\n{text} two\n\n[ctx] {# three}\n");
    let output = tikc(&["check", good.to_str().unwrap()]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output), "3 lines ok\n");

    let bad = temp_file("bad.tik", "fine\nstray }\n");
    let output = tikc(&["check", bad.to_str().unwrap()]);
    assert!(!output.status.success());
    let err = stderr(&output);
    assert!(err.contains("unexpected closure"), "{err}");
    assert!(err.contains("1 of 2 lines failed"), "{err}");

    let _ = std::fs::remove_file(good);
    let _ = std::fs::remove_file(bad);
}

#[test]
fn usage_errors() {
    let output = tikc(&["tokens"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Usage: tikc tokens"));

    let output = tikc(&["icu", "x", "--gender=first"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("invalid index 'first' for --gender"));

    let output = tikc(&["frobnicate"]);
    assert!(!output.status.success());
}
