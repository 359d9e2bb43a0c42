//! CLI Adapter.

use std::io::{self, BufRead, ErrorKind, IsTerminal, Write};

use clap::Parser;
use dialoguer::{Error as DialoguerError, Input};

use crate::app::api;
use crate::domain::AppError;

const FOLDER_PROMPT: &str =
    "Please enter the name of the folder you want to search within the 'library' directory";

#[derive(Parser)]
#[command(name = "library-index")]
#[command(version)]
#[command(
    about = "Index media assets under library/<folder> into library-<folder>.json",
    long_about = None
)]
struct Cli {}

pub fn run() {
    let _cli = Cli::parse();

    if let Err(e) = run_index() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_index() -> Result<(), AppError> {
    let folder = prompt_folder_name()?;
    let outcome = api::index(&folder)?;
    println!("✅ JSON file created: {}", outcome.output_path.display());
    Ok(())
}

fn prompt_folder_name() -> Result<String, AppError> {
    if io::stdin().is_terminal() {
        return match Input::<String>::new().with_prompt(FOLDER_PROMPT).interact_text() {
            Ok(value) => Ok(value),
            Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => {
                Err(AppError::PromptCancelled)
            }
            Err(err) => Err(AppError::config_error(format!("Failed to read folder name: {}", err))),
        };
    }

    eprint!("{}: ", FOLDER_PROMPT);
    io::stderr().flush()?;
    read_folder_name(io::stdin().lock())
}

/// Read one line of piped input as the folder name.
fn read_folder_name<R: BufRead>(mut reader: R) -> Result<String, AppError> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(AppError::EmptyFolderName);
    }
    Ok(line)
}
