use clap::Parser;
use polyfill_kit::{functions::Registry, serialize::serialize};
use serde_json::Value;
use tracing::Level;

/// Simple runner: call a helper by name with JSON arguments.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Helper to invoke (e.g. white, black, template, money)
    function: Option<String>,
    /// Arguments, each parsed as JSON; anything that is not JSON is taken as a string
    args: Vec<String>,
    /// Pretty-print the result with four-space indentation
    #[arg(long)]
    pretty: bool,
    /// Log dispatch details to stderr
    #[arg(long)]
    verbose: bool,
    /// List the available helpers and exit
    #[arg(long)]
    list: bool,
}

fn main() {
    // Parse CLI arguments.
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::WARN })
        .init();

    let registry = Registry::with_builtins();
    if args.list {
        for name in registry.names() {
            println!("{name}");
        }
        return;
    }

    let Some(function) = args.function.as_deref() else {
        eprintln!("No function given (try --list)");
        std::process::exit(1);
    };

    // Parse arguments, falling back to plain strings.
    let values: Vec<Value> = args
        .args
        .iter()
        .map(|a| serde_json::from_str(a).unwrap_or_else(|_| Value::String(a.clone())))
        .collect();

    let out = match registry.call(function, &values) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    // Output result.
    match serialize(&out, args.pretty) {
        Ok(s) => println!("{s}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
