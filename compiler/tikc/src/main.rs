//! TIK command line tool.

use tik_icu::IcuTranslator;
use tik_lexer::{Config, LexError, Parser};
use tikc::commands::{self, CliError, Options};
use tikc::diagnostic::render_lex_error;

fn main() {
    tikc::init_tracing();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        return;
    }

    let options = match commands::parse_options(&args[2..]) {
        Ok(options) => options,
        Err(err) => fail(&err),
    };

    match args[1].as_str() {
        "tokens" => {
            let (mut parser, input) = setup(&options, "tokens <tik>");
            match commands::tokens(&mut parser, &input) {
                Ok(out) => print!("{out}"),
                Err(err) => fail_lex(&err, &input),
            }
        }
        "icu" => {
            let (mut parser, input) = setup(&options, "icu <tik> [--gender=<i>] [--plural=<i>]");
            let mut translator = IcuTranslator::new(parser.config());
            match commands::icu(&mut parser, &mut translator, &input, &options.modifiers) {
                Ok(out) => println!("{out}"),
                Err(err) => fail_lex(&err, &input),
            }
        }
        "check" => {
            let (mut parser, path) = setup(&options, "check <file>");
            let source = commands::read_file(&path).unwrap_or_else(|err| fail(&err));
            let summary = commands::check_source(&mut parser, &source, &mut std::io::stderr())
                .unwrap_or_else(|err| {
                    eprintln!("error: {err}");
                    std::process::exit(1);
                });
            if !summary.is_ok() {
                eprintln!(
                    "{} of {} lines failed in '{path}'",
                    summary.failed, summary.checked
                );
                std::process::exit(1);
            }
            println!("{} lines ok", summary.checked);
        }
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("Unknown command: {other}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

/// Build the parser and take the single positional argument, or exit with
/// `usage`.
fn setup(options: &Options, usage: &str) -> (Parser, String) {
    let [arg] = options.positional.as_slice() else {
        eprintln!("Usage: tikc {usage} [--config=<file.json>]");
        std::process::exit(1);
    };
    let config: Config =
        commands::load_config(options.config.as_deref()).unwrap_or_else(|err| fail(&err));
    (Parser::new(config), arg.clone())
}

fn fail(err: &CliError) -> ! {
    eprintln!("error: {err}");
    std::process::exit(1);
}

fn fail_lex(err: &LexError, input: &str) -> ! {
    if render_lex_error(err, input, 0, &mut std::io::stderr()).is_err() {
        eprintln!("error: {err}");
    }
    std::process::exit(1);
}

fn print_usage() {
    println!("tikc - TIK toolchain");
    println!();
    println!("Usage: tikc <command> [options]");
    println!();
    println!("Commands:");
    println!("  tokens <tik>    Print the tokens of a TIK");
    println!("  icu <tik>       Print the ICU message skeleton of a TIK");
    println!("  check <file>    Validate every non-blank line of a file");
    println!("  help            Show this message");
    println!();
    println!("Options:");
    println!("  --config=<file.json>  Custom vocabulary (missing fields keep defaults)");
    println!("  --gender=<i>          icu: wrap argument i in a gender select");
    println!("  --plural=<i>          icu: wrap argument i in a plural block");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=debug) to enable logging.");
}
