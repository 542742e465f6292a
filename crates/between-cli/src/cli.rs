//! CLI argument parsing using clap derive

use std::ffi::OsString;
use std::path::PathBuf;

use between_core::CommentType;
use clap::builder::{PossibleValuesParser, TypedValueParser};
use clap::parser::ValueSource;
use clap::{CommandFactory, FromArgMatches, Parser};

const AFTER_HELP: &str = "\
Examples:
  replace-between --target README.md --token 'API DOC'
      Replaces text between <!--- API DOC BEGIN ---> and <!--- API DOC END --->
      in README.md with input read from stdin.

  replace-between -s api.md -t docs/index.html -n 'API DOC' -c html
  replace-between -s banner.txt -t lib.rs -n BANNER -b '//' -e '//'";

/// Replaces text between markers with text from a file or stdin.
#[derive(Parser, Debug)]
#[command(name = "replace-between")]
#[command(author, version, long_about = None)]
#[command(after_help = AFTER_HELP)]
pub struct Cli {
    /// Token text to look for between start and end comment. BEGIN and END
    /// words are added automatically.
    #[arg(short = 'n', long)]
    pub token: String,

    /// Target file to replace text in
    #[arg(short, long)]
    pub target: PathBuf,

    /// Source file to get replacement text from. Reads stdin if omitted.
    #[arg(short, long)]
    pub source: Option<PathBuf>,

    /// Predefined comment type for the markers. Inferred from the target
    /// file extension if neither this nor --begin is given.
    #[arg(
        short,
        long,
        env = "REPLACE_BETWEEN_COMMENT",
        value_parser = PossibleValuesParser::new(CommentType::NAMES)
            .try_map(|name| name.parse::<CommentType>()),
    )]
    pub comment: Option<CommentType>,

    /// Beginning of the comment syntax, e.g. <!--- for markdown
    #[arg(short, long, requires = "end", allow_hyphen_values = true)]
    pub begin: Option<String>,

    /// End of the comment syntax, e.g. ---> for markdown
    #[arg(short, long, requires = "begin", allow_hyphen_values = true)]
    pub end: Option<String>,

    /// Treat --begin and --end as regular expressions instead of literal text
    #[arg(long, requires = "begin")]
    pub raw: bool,

    /// Print the resulting diff instead of writing the target
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Set when `comment` was read from REPLACE_BETWEEN_COMMENT
    #[arg(skip)]
    pub comment_from_env: bool,
}

impl Cli {
    /// Parse the process arguments, exiting with usage on error.
    pub fn parse_args() -> Self {
        Self::try_parse_args_from(std::env::args_os()).unwrap_or_else(|e| e.exit())
    }

    /// Parse `args`, recording where the comment type came from.
    pub fn try_parse_args_from<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let mut command = Self::command();
        let matches = command.try_get_matches_from_mut(args)?;
        let mut cli = Self::from_arg_matches(&matches).map_err(|e| e.format(&mut command))?;
        cli.comment_from_env = matches.value_source("comment") == Some(ValueSource::EnvVariable);
        Ok(cli)
    }
}
