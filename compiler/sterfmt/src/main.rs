//! sterfmt CLI
//!
//! Inspect how formatting markup tokenizes.

use std::io::{self, Write};
use std::process::ExitCode;

use sterfmt::commands::{
    check_source, input_name, lex_source, list_keywords, parse_options, read_input, run_demo,
    CliOptions,
};

fn main() -> ExitCode {
    sterfmt::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        return finish(print_usage());
    }

    let command = args[1].as_str();
    let (options, positional) = match parse_options(&args[2..]) {
        Ok(parsed) => parsed,
        Err(msg) => {
            eprintln!("error: {msg}");
            return ExitCode::FAILURE;
        }
    };

    match command {
        "lex" => lex_command(&positional, &options),
        "check" => {
            let [path] = positional.as_slice() else {
                eprintln!("Usage: sterfmt check <file|-> [options]");
                return ExitCode::FAILURE;
            };
            let Some(source) = read_or_report(path) else {
                return ExitCode::FAILURE;
            };
            let mut stdout = io::stdout().lock();
            match check_source(
                &mut stdout,
                input_name(path),
                &source,
                &options.session.lexer,
                options.render,
            ) {
                Ok(true) => ExitCode::SUCCESS,
                Ok(false) => ExitCode::FAILURE,
                Err(e) => report_io(&e),
            }
        }
        "keywords" => finish(list_keywords(&mut io::stdout().lock())),
        "demo" => match run_demo(&mut io::stdout().lock(), options.session) {
            Ok(_) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("error: {e}");
                ExitCode::FAILURE
            }
        },
        "help" | "--help" | "-h" => finish(print_usage()),
        "version" | "--version" | "-V" => {
            println!("sterfmt {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            match print_usage() {
                Ok(()) => ExitCode::FAILURE,
                Err(e) => report_io(&e),
            }
        }
    }
}

/// `lex <file|->` or `lex -e <text>`.
fn lex_command(positional: &[String], options: &CliOptions) -> ExitCode {
    let (name, source) = match positional {
        [flag, text] if flag == "-e" => ("<arg>".to_string(), text.clone()),
        [path] => match read_or_report(path) {
            Some(source) => (input_name(path).to_string(), source),
            None => return ExitCode::FAILURE,
        },
        _ => {
            eprintln!("Usage: sterfmt lex <file|-> [options]");
            eprintln!("       sterfmt lex -e <text> [options]");
            return ExitCode::FAILURE;
        }
    };
    let mut stdout = io::stdout().lock();
    finish(lex_source(&mut stdout, &name, &source, &options.session.lexer))
}

fn read_or_report(path: &str) -> Option<String> {
    match read_input(path) {
        Ok(source) => Some(source),
        Err(msg) => {
            eprintln!("error: {msg}");
            None
        }
    }
}

fn finish(result: io::Result<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report_io(&e),
    }
}

fn report_io(e: &io::Error) -> ExitCode {
    // A closed pipe (e.g. `| head`) is not an error worth reporting.
    if e.kind() != io::ErrorKind::BrokenPipe {
        eprintln!("error: {e}");
    }
    ExitCode::FAILURE
}

fn print_usage() -> io::Result<()> {
    let mut out = io::stdout().lock();
    let usage = "\
sterfmt - terminal formatting markup

Usage: sterfmt <command> [options]

Commands:
  lex <file|->        Print the token stream of a file (or stdin)
  lex -e <text>       Print the token stream of <text>
  check <file|->      Report diagnostics; exits 1 if there are any
  keywords            List the directive keywords in lookup order
  demo                Tokenize the sample `<bold, red></>`
  help                Show this message
  version             Show the version

Options:
  --max-ident=<n>     Longest directive name accepted (default: 31)
  --truncate          Resolve over-long names by their first <n> letters
  --strict            Refuse input with any diagnostic (demo)
  --no-color          Plain diagnostic output (check)

Environment:
  RUST_LOG            Enable tracing output (e.g. RUST_LOG=sterfmt_lexer=trace)
  STERFMT_LOG_TREE    With RUST_LOG, print spans as an indented tree
";
    out.write_all(usage.as_bytes())
}
