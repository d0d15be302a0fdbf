//! Lox front end CLI.

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use lox_diagnostic::emitter::ColorMode;
use loxc::commands::{
    explain_error, lex_source, parse_source, read_source, run_prompt, scan_source, CommandError,
    Io,
};

/// A parsed command line.
enum Command {
    Prompt,
    Scan(String),
    Lex(String),
    Parse(String),
    Explain(String),
    Help,
    Version,
}

fn main() -> ExitCode {
    loxc::init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (command, color) = match parse_args(&args) {
        Ok(parsed) => parsed,
        Err(message) => {
            eprintln!("error: {message}");
            eprintln!();
            print_usage();
            return ExitCode::from(loxc::commands::EXIT_USAGE);
        }
    };

    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr();
    let is_tty = stderr.is_terminal();
    let mut io = Io::new(&mut stdout, &mut stderr).with_color(color, is_tty);

    match run(command, &mut io) {
        Ok(()) => ExitCode::SUCCESS,
        Err(CommandError::Reported) => ExitCode::from(loxc::commands::EXIT_DATA_ERROR),
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}

fn run(command: Command, io: &mut Io<'_>) -> Result<(), CommandError> {
    match command {
        Command::Prompt => run_prompt(std::io::stdin().lock(), io),
        Command::Scan(path) => scan_source(&path, &read_source(&path)?, io),
        Command::Lex(path) => lex_source(&path, &read_source(&path)?, io),
        Command::Parse(path) => parse_source(&path, &read_source(&path)?, io),
        Command::Explain(code) => explain_error(&code, io),
        Command::Help => {
            print_usage();
            Ok(())
        }
        Command::Version => {
            writeln!(io.out, "lox {}", env!("CARGO_PKG_VERSION"))?;
            Ok(())
        }
    }
}

fn parse_args(args: &[String]) -> Result<(Command, ColorMode), String> {
    let mut color = ColorMode::Auto;
    let mut positional = Vec::new();

    for arg in args {
        if let Some(value) = arg.strip_prefix("--color=") {
            color = ColorMode::parse(value)
                .ok_or_else(|| format!("invalid --color value '{value}' (auto, always, never)"))?;
        } else {
            positional.push(arg.as_str());
        }
    }

    let command = match positional.as_slice() {
        [] => Command::Prompt,
        ["help" | "--help" | "-h"] => Command::Help,
        ["version" | "--version" | "-V"] => Command::Version,
        ["scan", path] => Command::Scan((*path).to_string()),
        ["lex", path] => Command::Lex((*path).to_string()),
        ["parse", path] => Command::Parse((*path).to_string()),
        ["explain" | "--explain", code] => Command::Explain((*code).to_string()),
        [cmd @ ("scan" | "lex" | "parse"), ..] => {
            return Err(format!("usage: lox {cmd} <file>"));
        }
        [flag] if flag.starts_with('-') => return Err(format!("unknown option '{flag}'")),
        [path] => Command::Parse((*path).to_string()),
        _ => return Err("too many arguments".to_string()),
    };
    Ok((command, color))
}

fn print_usage() {
    println!("Lox front end");
    println!();
    println!("Usage: lox [options] [command]");
    println!();
    println!("Commands:");
    println!("  (none)               Start the interactive prompt");
    println!("  <file>               Same as `parse <file>`");
    println!("  parse <file>         Print the syntax tree of each statement");
    println!("  lex <file>           Print the token stream");
    println!("  scan <file>          Print the raw lexemes");
    println!("  explain <code>       Explain an error code (e.g., E1001)");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Options:");
    println!("  --color=<when>       Color diagnostics: auto, always, never");
    println!();
    println!("Environment:");
    println!("  RUST_LOG             Enable tracing output (e.g., RUST_LOG=lox_parse=debug)");
}
