use std::{fs, process::ExitCode};

use clap::Parser;
use parsetree::Context;
use tracing_subscriber::EnvFilter;

/// parsetree parses expressions into trees and evaluates them against a small
/// table of variables (`t`, `T`, `e`, `pi`).
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treats each argument as a file and evaluates every non-blank line of it.
    #[arg(short, long)]
    file: bool,

    /// Sets a variable before evaluating, as NAME=VALUE. May be repeated.
    #[arg(short, long, value_parser = parse_assignment)]
    set: Vec<(String, f64)>,

    /// Stores each result in `t` before evaluating the next expression.
    #[arg(short, long)]
    chain: bool,

    /// Log level used when RUST_LOG is not set.
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Expressions to evaluate, in order, or file paths with `--file`.
    #[arg(required = true, allow_hyphen_values = true)]
    expressions: Vec<String>,
}

fn parse_assignment(s: &str) -> Result<(String, f64), String> {
    let (name, value) = s.split_once('=')
                         .ok_or_else(|| format!("expected NAME=VALUE, got '{s}'"))?;
    let value = value.trim()
                     .parse::<f64>()
                     .map_err(|e| format!("invalid value for '{}': {e}", name.trim()))?;
    Ok((name.trim().to_string(), value))
}

fn init_tracing(log_level: &str) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_target(true)
                             .with_writer(std::io::stderr)
                             .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(&args.log_level);

    let mut context = Context::new();
    for (name, value) in &args.set {
        if context.set_variable(name, *value).is_none() {
            eprintln!("Unknown variable '{name}'. Known variables: {}",
                      known_variables(&context));
            return ExitCode::FAILURE;
        }
    }

    let sources = if args.file {
        match read_sources(&args.expressions) {
            Ok(sources) => sources,
            Err(e) => {
                eprintln!("{e}");
                return ExitCode::FAILURE;
            },
        }
    } else {
        args.expressions
    };

    let mut failed = false;
    for source in &sources {
        let tree = match context.parse(source) {
            Ok(tree) => tree,
            Err(e) => {
                eprintln!("{e}");
                failed = true;
                continue;
            },
        };

        match context.evaluate(&tree) {
            Ok(value) => {
                println!("{tree} = {value}");
                if args.chain {
                    context.set_variable("t", value);
                }
            },
            Err(e) => {
                eprintln!("{source}: {e}");
                failed = true;
            },
        }
    }

    if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}

fn read_sources(paths: &[String]) -> Result<Vec<String>, String> {
    let mut sources = Vec::new();
    for path in paths {
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read the input file '{path}': {e}"))?;
        sources.extend(content.lines()
                              .filter(|line| !line.trim().is_empty())
                              .map(str::to_string));
    }
    Ok(sources)
}

fn known_variables(context: &Context) -> String {
    context.variables()
           .iter()
           .map(|var| var.name.trim())
           .filter(|name| !name.is_empty())
           .collect::<Vec<_>>()
           .join(", ")
}
