//! Mica command-line driver.

use mica_diagnostic::emitter::ColorMode;
use micac::commands::{check_file, lex_file, parse_file, run_file};

fn main() {
    micac::init_tracing();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = args[1].as_str();
    match command {
        "help" | "--help" | "-h" => print_usage(),
        "version" | "--version" | "-V" => println!("mica {}", env!("CARGO_PKG_VERSION")),
        "run" | "check" | "parse" | "lex" => {
            let mut color = ColorMode::Auto;
            let mut file_path = None;
            for arg in args.iter().skip(2) {
                if let Some(value) = arg.strip_prefix("--color=") {
                    let Some(mode) = ColorMode::parse(value) else {
                        eprintln!("error: invalid color mode '{value}' (expected auto, always, never)");
                        std::process::exit(1);
                    };
                    color = mode;
                } else if !arg.starts_with('-') && file_path.is_none() {
                    file_path = Some(arg.as_str());
                } else {
                    eprintln!("error: unexpected argument '{arg}'");
                    std::process::exit(1);
                }
            }

            let Some(path) = file_path else {
                eprintln!("error: missing file path");
                eprintln!("Usage: mica {command} <file> [--color=auto|always|never]");
                std::process::exit(1);
            };

            let code = match command {
                "run" => run_file(path, color),
                "check" => check_file(path, color),
                "parse" => parse_file(path, color),
                _ => lex_file(path, color),
            };
            std::process::exit(code);
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Mica");
    println!();
    println!("Usage: mica <command> <file> [options]");
    println!();
    println!("Commands:");
    println!("  run <file>      Analyze and run a program; exits with main's result");
    println!("  check <file>    Analyze a program without running it");
    println!("  parse <file>    Print the parsed tree");
    println!("  lex <file>      Print the token stream");
    println!("  help            Show this help message");
    println!("  version         Show version information");
    println!();
    println!("Options:");
    println!("  --color=<when>  Diagnostic colors: auto, always, never");
    println!();
    println!("Environment:");
    println!("  RUST_LOG        Enable tracing output (e.g. RUST_LOG=debug)");
    println!("  MICA_LOG_TREE   Render tracing spans as a tree");
}
