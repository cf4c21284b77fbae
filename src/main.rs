use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
    process,
    time::Instant,
};

use clap::Parser as ClapParser;
use curly::{
    errors::errors::{Error, ErrorTip},
    lexer::lexer::tokenize,
    parser::parser::{Parser, NESTING_DEPTH_LIMIT},
};
use tracing_subscriber::EnvFilter;

/// Parse a curly program and print its syntax tree as JSON.
#[derive(ClapParser)]
#[command(name = "curly")]
struct Cli {
    /// Path to the program
    #[arg(required_unless_present_any = ["stdin", "eval"])]
    file: Option<PathBuf>,

    /// Read the program from stdin
    #[arg(long, conflicts_with = "file")]
    stdin: bool,

    /// Parse the given source text instead of a file
    #[arg(short, long, conflicts_with_all = ["file", "stdin"])]
    eval: Option<String>,

    /// Print the token stream instead of the tree
    #[arg(long)]
    tokens: bool,

    /// Print the tree on a single line
    #[arg(long)]
    compact: bool,

    /// Maximum nesting depth of statements and expressions
    #[arg(long, default_value_t = NESTING_DEPTH_LIMIT)]
    max_depth: usize,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let source = match read_source(&cli) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Error: failed to read program: {}", error);
            process::exit(1);
        }
    };

    let start = Instant::now();

    if cli.tokens {
        match tokenize(&source) {
            Ok(tokens) => {
                for token in tokens {
                    println!("{}", token);
                }
            }
            Err(error) => exit_with(error),
        }
        tracing::info!("Tokenized in {:?}", start.elapsed());
        return;
    }

    let program = match Parser::with_max_depth(cli.max_depth).parse(&source) {
        Ok(program) => program,
        Err(error) => exit_with(error),
    };

    tracing::info!("Parsed in {:?}", start.elapsed());

    let output = if cli.compact {
        serde_json::to_string(&program)
    } else {
        serde_json::to_string_pretty(&program)
    };

    match output {
        Ok(json) => println!("{}", json),
        Err(error) => {
            eprintln!("Error: failed to serialize tree: {}", error);
            process::exit(1);
        }
    }
}

fn read_source(cli: &Cli) -> io::Result<String> {
    if let Some(source) = &cli.eval {
        return Ok(source.clone());
    }

    if let Some(path) = &cli.file {
        return fs::read_to_string(path);
    }

    let mut source = String::new();
    io::stdin().read_to_string(&mut source)?;
    Ok(source)
}

fn exit_with(error: Error) -> ! {
    if let ErrorTip::None = error.get_tip() {
        eprintln!("Error: {}", error.get_error_name());
    } else {
        eprintln!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    eprintln!("-> {}", error);

    process::exit(1);
}
