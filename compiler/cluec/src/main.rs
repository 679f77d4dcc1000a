//! Clue interpreter CLI
//!
//! Runs line-oriented `.cla` scripts and inspects them.

use cluec::commands::{
    check_file, explain_error, lex_file, parse_run_args, run_file, usage_error, RunOptions,
};
use cluec::init_tracing;

use clue_diagnostic::ColorMode;

fn main() {
    init_tracing();
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        std::process::exit(usage_error("missing command"));
    }

    let command = &args[1];

    let status = match command.as_str() {
        "run" => match parse_run_args(&args[2..]) {
            Ok((path, options)) => run_file(&path, &options),
            Err(message) => usage_error(message),
        },
        "check" => {
            let mut color = ColorMode::Auto;
            let mut path = None;
            let mut bad_arg = None;
            for arg in args.iter().skip(2) {
                if let Some(mode) = arg.strip_prefix("--color=") {
                    match mode.parse() {
                        Ok(mode) => color = mode,
                        Err(message) => bad_arg = Some(message),
                    }
                } else if !arg.starts_with('-') && path.is_none() {
                    path = Some(arg.as_str());
                } else {
                    bad_arg = Some(format!("unexpected argument `{arg}`"));
                }
            }
            match (bad_arg, path) {
                (Some(message), _) => usage_error(message),
                (None, None) => usage_error("missing script path"),
                (None, Some(path)) => check_file(path, color),
            }
        }
        "lex" => match args.get(2) {
            Some(path) => lex_file(path),
            None => usage_error("missing script path"),
        },
        "explain" | "--explain" => match args.get(2) {
            Some(code) => explain_error(code),
            None => usage_error("missing error code"),
        },
        "help" | "--help" | "-h" => {
            print_usage();
            0
        }
        "version" | "--version" | "-V" => {
            println!("clue {}", env!("CARGO_PKG_VERSION"));
            0
        }
        path if path.ends_with(".cla") => {
            // `clue script.cla [options]` is shorthand for `clue run`.
            match parse_run_args(&args[1..]) {
                Ok((path, options)) => run_file(&path, &options),
                Err(message) => usage_error(message),
            }
        }
        other => usage_error(format!("unknown command `{other}`")),
    };

    std::process::exit(status);
}

fn print_usage() {
    println!("Clue interpreter");
    println!();
    println!("Usage: clue <command> [options]");
    println!();
    println!("Commands:");
    println!("  run <file.cla>       Run a script");
    println!("  check <file.cla>     Report syntax errors without running");
    println!("  lex <file.cla>       Show the tokens of each line");
    println!("  explain <code>       Describe an error code (e.g. E2001)");
    println!("  help                 Show this message");
    println!("  version              Show the version");
    println!();
    println!("Run options:");
    println!("  --output=raw|eval    How `output(...)` treats its argument (default: raw)");
    println!("  --no-index           Do not bind the loop counter inside loops");
    println!("  --index-name=<name>  Name of the loop counter (default: index)");
    println!(
        "  --max-depth=<n>      Maximum nested call depth (default: {})",
        RunOptions::default().config.max_call_depth
    );
    println!("  --color=auto|always|never");
    println!();
    println!("`clue <file.cla>` is shorthand for `clue run <file.cla>`.");
    println!("Set RUST_LOG=debug to trace execution on stderr.");
}
