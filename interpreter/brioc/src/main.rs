//! Brio interpreter CLI.

use brioc::commands::{lex_file, parse_file, run_file, run_prompt};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    let code = match args.get(1).map(String::as_str) {
        // No arguments: interactive prompt.
        None => run_prompt(),
        Some("run") => match args.get(2) {
            Some(path) => run_file(path),
            None => {
                eprintln!("Usage: brio run <file.brio>");
                1
            }
        },
        Some("repl") => run_prompt(),
        Some("lex") => match args.get(2) {
            Some(path) => lex_file(path),
            None => {
                eprintln!("Usage: brio lex <file.brio>");
                1
            }
        },
        Some("parse") => match args.get(2) {
            Some(path) => parse_file(path),
            None => {
                eprintln!("Usage: brio parse <file.brio>");
                1
            }
        },
        Some("help" | "--help" | "-h") => {
            print_usage();
            0
        }
        Some("version" | "--version" | "-v") => {
            println!("Brio {}", env!("CARGO_PKG_VERSION"));
            0
        }
        Some(other) => {
            // A bare file path runs it.
            if std::path::Path::new(other)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("brio"))
            {
                run_file(other)
            } else {
                eprintln!("Unknown command: {other}");
                eprintln!();
                print_usage();
                1
            }
        }
    };

    std::process::exit(code);
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_env("BRIO_LOG"))
        .with_writer(std::io::stderr)
        .try_init();
}

fn print_usage() {
    println!("Brio interpreter");
    println!();
    println!("Usage: brio [command] [options]");
    println!();
    println!("Commands:");
    println!("  run <file.brio>      Run a Brio source file");
    println!("  repl                 Start the interactive prompt (default)");
    println!("  lex <file.brio>      Tokenize and display tokens");
    println!("  parse <file.brio>    Parse and display the AST");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Exit codes:");
    println!("  0   success");
    println!("  65  lexical or syntax error");
    println!("  70  runtime error");
    println!();
    println!("Examples:");
    println!("  brio run main.brio");
    println!("  brio main.brio       # same as `brio run main.brio`");
    println!("  brio parse main.brio");
    println!();
    println!("Set BRIO_LOG (e.g. BRIO_LOG=trace) for tracing output.");
}
