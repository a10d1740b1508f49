use std::{fs, path::PathBuf, process::ExitCode};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use treelox::{
    error::Error,
    evaluate,
    interpreter::printer::AstPrinter,
    parse,
    run,
    tokenize,
};

/// Exit status for lexical and parse errors.
const EXIT_DATA_ERROR: u8 = 65;
/// Exit status for runtime errors.
const EXIT_SOFTWARE_ERROR: u8 = 70;

/// treelox is a tree-walking interpreter for a small dynamically typed
/// scripting language.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every token of the file, one per line.
    Tokenize {
        /// Source file.
        file: PathBuf,
    },
    /// Parse the file as one expression and print its syntax tree.
    Parse {
        /// Source file.
        file: PathBuf,
    },
    /// Evaluate the file as one expression and print the result.
    Evaluate {
        /// Source file.
        file: PathBuf,
    },
    /// Run the file as a program.
    Run {
        /// Source file.
        file: PathBuf,
    },
}

impl Command {
    fn file(&self) -> &PathBuf {
        match self {
            Self::Tokenize { file }
            | Self::Parse { file }
            | Self::Evaluate { file }
            | Self::Run { file } => file,
        }
    }
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    let path = args.command.file();
    let source = fs::read_to_string(path).with_context(|| {
                                               format!("Failed to read the input file '{}'",
                                                       path.display())
                                           })?;

    let outcome = match args.command {
        Command::Tokenize { .. } => return Ok(tokenize_command(&source)),
        Command::Parse { .. } => parse(&source).map(|expr| println!("{}", AstPrinter.print(&expr))),
        Command::Evaluate { .. } => evaluate(&source).map(|value| println!("{value}")),
        Command::Run { .. } => run(&source, &mut std::io::stdout().lock()),
    };

    Ok(match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report(&e),
    })
}

/// Prints all tokens to stdout, then all lexical errors to stderr.
fn tokenize_command(source: &str) -> ExitCode {
    let (tokens, errors) = tokenize(source);
    for token in &tokens {
        println!("{token}");
    }
    for error in &errors {
        eprintln!("{error}");
    }

    if errors.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(EXIT_DATA_ERROR)
    }
}

fn report(error: &Error) -> ExitCode {
    eprintln!("{error}");
    match error {
        Error::Lexical(_) | Error::Parse(_) => ExitCode::from(EXIT_DATA_ERROR),
        Error::Runtime(_) => ExitCode::from(EXIT_SOFTWARE_ERROR),
    }
}
