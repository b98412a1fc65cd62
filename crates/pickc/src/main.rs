//! pickc CLI
//!
//! Replays the destructuring walkthrough.

use pickc::{demos, init_tracing, Command, DemoConfig};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    match Command::parse(&args) {
        Command::Run(config) => {
            init_tracing();
            run(&config);
        }
        Command::List => {
            for demo in demos() {
                println!("{:<14} {}", demo.name, demo.summary);
            }
        }
        Command::Help => print_usage(),
        Command::Unknown(arg) => {
            eprintln!("error: unknown command or option '{arg}'");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn run(config: &DemoConfig) {
    for demo in demos().iter().filter(|d| config.matches(d.name)) {
        println!("== {}: {}", demo.name, demo.summary);
        match demo.run(config.verbose) {
            Ok(transcript) => {
                for line in transcript.lines() {
                    println!("   {line}");
                }
            }
            Err(e) => {
                eprintln!("error: {}: {e}", demo.name);
                std::process::exit(1);
            }
        }
    }
}

fn print_usage() {
    eprintln!("Usage: pickc [command] [options]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  run       Run the destructuring walkthrough (default)");
    eprintln!("  list      List the demos");
    eprintln!("  help      Show this message");
    eprintln!();
    eprintln!("Options for run:");
    eprintln!("  --filter=<name>   Only run demos whose name contains <name>");
    eprintln!("  -v, --verbose     Also show the names each pattern binds");
    eprintln!();
    eprintln!("Set RUST_LOG=pick_extract=trace to trace every binding.");
}
