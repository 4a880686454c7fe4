use std::{
    fs::read_to_string,
    path::{Path, PathBuf},
    process,
};

use clap::Parser;
use simple_lexer::{
    errors::errors::{Error, ErrorImpl, ErrorTip},
    lexer::{lexer::tokenize, stream::TokenStream},
    Position,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEMO_SCRIPTS: [&str; 4] = ["int age = 45;", "inta age = 45;", "age >= 45;", "age > 45;"];

#[derive(Parser)]
#[command(name = "simple_lexer", about = "Tokenize mini-language scripts and dump the tokens", version)]
struct Cli {
    /// Script files to tokenize
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Inline script to tokenize, may be repeated
    #[arg(short, long = "script", value_name = "SOURCE")]
    scripts: Vec<String>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, value_name = "FILTER", default_value = "warn")]
    log: String,
}

fn main() {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(true).init();

    let mut scripts = cli.scripts;

    for file in &cli.files {
        match read_script(file) {
            Ok(source) => scripts.push(source),
            Err(error) => {
                display_load_error(&error);
                process::exit(1);
            }
        }
    }

    if scripts.is_empty() {
        info!(target: "simple_lexer", "No input given, running demo scripts");
        scripts = DEMO_SCRIPTS.iter().map(|script| script.to_string()).collect();
    }

    for (i, script) in scripts.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("parse:\t{}", script);
        dump(tokenize(script));
    }
}

fn read_script(path: &Path) -> Result<String, Error> {
    read_to_string(path).map_err(|error| {
        Error::new(
            ErrorImpl::SourceUnreadable {
                path: path.to_string_lossy().to_string(),
                message: error.to_string(),
            },
            Position::null(),
        )
    })
}

fn dump(mut tokens: TokenStream) {
    println!("text\ttype");

    while let Some(token) = tokens.read() {
        println!("{}", token);
    }
}

fn display_load_error(error: &Error) {
    if let ErrorTip::None = error.get_tip() {
        eprintln!("Error: {}", error.get_error_name());
    } else {
        eprintln!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
}
