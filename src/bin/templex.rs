use clap::Parser;
use std::{
    io::{self, Read},
    path::{Path, PathBuf},
};
use templex::{Error, GrammarConfig, InternalResult};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Tokenize text with a template grammar", long_about = None)]
struct Cli {
    /// Path to a JSON grammar file (built-in BNF grammar when omitted)
    #[arg(short, long)]
    grammar: Option<PathBuf>,

    /// File to tokenize (reads stdin when omitted)
    input: Option<PathBuf>,

    /// Extra categories to drop from the output
    #[arg(short, long)]
    filter: Vec<String>,

    /// Print tokens as JSON
    #[arg(long)]
    json: bool,

    /// Enable debug mode
    #[arg(short, long)]
    verbose: bool,
}

fn read_input(path: Option<&Path>) -> io::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

fn run(cli: &Cli) -> InternalResult<()> {
    let mut config = GrammarConfig::load(cli.grammar.as_deref())?;
    config.filter.extend(cli.filter.iter().cloned());

    info!("grammar loaded.");
    debug!("grammar: {:?}", config);

    let lexer = config.build_lexer()?;
    let text = read_input(cli.input.as_deref())?;

    let tokens = match lexer.tokenize_filtered(&text, &config.filter) {
        Ok(tokens) => tokens,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("\tFound: {:?}", e.found(&text));
            return Err(e.into());
        }
    };

    if cli.json {
        let rendered = serde_json::to_string_pretty(&tokens)
            .map_err(|e| Error::internal(format!("Failed to render tokens: {}", e)))?;
        println!("{}", rendered);
    } else {
        for token in &tokens {
            println!("{}", token);
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "off" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run(&cli) {
        // unmatched input is already reported by run, next to the text
        if !matches!(e, Error::Tokenize(_)) {
            eprintln!("Error: {}", e);
        }
        std::process::exit(1);
    }
}
