//! replace-between CLI
//!
//! Replaces the text between `<comment> TOKEN BEGIN <comment>` and
//! `<comment> TOKEN END <comment>` markers in a target file with content
//! from a source file or stdin.

mod cli;
mod config;
mod error;
mod logging;

use colored::Colorize;

use between_core::{Outcome, replace_between};
use cli::Cli;
use error::{CliError, Result};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse_args();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("{}: failed to initialize logging: {}", "warning".yellow().bold(), e);
    }

    if let Err(e) = run(cli).await {
        eprintln!("{}: {}", "error".red().bold(), render_error(&e));
        eprintln!("Run {} for usage.", "replace-between --help".cyan());
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = cli.into_config()?;
    let outcome = replace_between(&config).await?;
    print_outcome(&outcome);
    Ok(())
}

/// Highlight the expected markers when they are missing from the target.
fn render_error(error: &CliError) -> String {
    match error {
        CliError::Core(between_core::Error::MissingTokens { begin, end }) => format!(
            "Target file content does not have necessary tokens {} and {}.",
            begin.yellow(),
            end.yellow()
        ),
        other => other.to_string(),
    }
}

/// Only dry runs produce output.
fn print_outcome(outcome: &Outcome) {
    let Some(diff) = &outcome.diff else {
        return;
    };

    if !outcome.changed {
        println!(
            "{} No changes needed for {}.",
            "OK".green().bold(),
            outcome.target.as_str().yellow()
        );
        return;
    }

    for line in diff.lines() {
        if line.starts_with("+++") || line.starts_with("---") {
            println!("{}", line.bold());
        } else if line.starts_with('+') {
            println!("{}", line.green());
        } else if line.starts_with('-') {
            println!("{}", line.red());
        } else if line.starts_with("@@") {
            println!("{}", line.cyan());
        } else {
            println!("{line}");
        }
    }
}
