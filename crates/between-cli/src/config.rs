//! Turn parsed arguments into a core [`ReplaceConfig`].

use between_core::{CommentSyntax, CommentType, ContentSource, ReplaceConfig, SyntaxMode};
use between_fs::NormalizedPath;

use crate::cli::Cli;
use crate::error::{CliError, Result};

const UNRESOLVED_COMMENT_TYPE: &str = "I cannot get comment type from file extension. \
     Either --comment or --begin options should be provided.";

impl Cli {
    /// Resolve the comment syntax and content source for this invocation.
    ///
    /// A comment type taken from the environment yields to `--begin`/`--end`
    /// given on the command line.
    pub fn into_config(self) -> Result<ReplaceConfig> {
        let target = NormalizedPath::new(&self.target);
        let comment = self
            .comment
            .filter(|_| !(self.comment_from_env && self.begin.is_some()));
        let (syntax, mode) = resolve_syntax(comment, self.begin, self.end, self.raw, &target)?;

        let mut config = ReplaceConfig::new(
            self.token,
            target,
            ContentSource::from_path(self.source),
            syntax,
        );
        config.mode = mode;
        config.dry_run = self.dry_run;
        Ok(config)
    }
}

/// Pick the comment syntax: `comment` first, then `--begin`/`--end`, then
/// the target's file extension.
pub fn resolve_syntax(
    comment: Option<CommentType>,
    begin: Option<String>,
    end: Option<String>,
    raw: bool,
    target: &NormalizedPath,
) -> Result<(CommentSyntax, SyntaxMode)> {
    if let Some(kind) = comment {
        tracing::debug!(comment = %kind, "using predefined comment type");
        return Ok((kind.syntax(), SyntaxMode::Literal));
    }

    if let (Some(begin), Some(end)) = (begin, end) {
        let mode = if raw { SyntaxMode::Raw } else { SyntaxMode::Literal };
        return Ok((CommentSyntax::new(begin, end), mode));
    }

    let kind = target
        .extension()
        .and_then(CommentType::from_extension)
        .ok_or_else(|| CliError::user(UNRESOLVED_COMMENT_TYPE))?;
    tracing::debug!(comment = %kind, target = %target, "inferred comment type from extension");

    Ok((kind.syntax(), SyntaxMode::Literal))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_wins_over_begin() {
        let (syntax, mode) = resolve_syntax(
            Some(CommentType::Html),
            Some("/*".into()),
            Some("*/".into()),
            true,
            &NormalizedPath::new("README.md"),
        )
        .unwrap();
        assert_eq!(syntax, CommentType::Html.syntax());
        assert_eq!(mode, SyntaxMode::Literal);
    }

    #[test]
    fn test_explicit_begin_end() {
        let (syntax, mode) = resolve_syntax(
            None,
            Some("#".into()),
            Some("#".into()),
            false,
            &NormalizedPath::new("Makefile"),
        )
        .unwrap();
        assert_eq!(syntax, CommentSyntax::new("#", "#"));
        assert_eq!(mode, SyntaxMode::Literal);
    }

    #[test]
    fn test_raw_applies_to_explicit_syntax() {
        let (_, mode) = resolve_syntax(
            None,
            Some(r"/\*+".into()),
            Some(r"\*+/".into()),
            true,
            &NormalizedPath::new("lib.js"),
        )
        .unwrap();
        assert_eq!(mode, SyntaxMode::Raw);
    }

    #[test]
    fn test_infers_from_md_extension() {
        let (syntax, _) =
            resolve_syntax(None, None, None, false, &NormalizedPath::new("docs/README.md"))
                .unwrap();
        assert_eq!(syntax, CommentType::Markdown.syntax());
    }

    #[test]
    fn test_unknown_extension_is_rejected() {
        let err = resolve_syntax(
            None,
            None,
            None,
            false,
            &NormalizedPath::new("unknown-extension.ext"),
        )
        .unwrap_err();
        assert!(err.to_string().contains("I cannot get comment type from file extension"));
    }

    fn cli(comment: Option<CommentType>, syntax: Option<(&str, &str)>) -> Cli {
        Cli {
            token: "API DOC".into(),
            target: "README.md".into(),
            source: Some("api.md".into()),
            comment,
            begin: syntax.map(|(begin, _)| begin.to_string()),
            end: syntax.map(|(_, end)| end.to_string()),
            raw: false,
            dry_run: true,
            verbose: false,
            comment_from_env: false,
        }
    }

    #[test]
    fn test_explicit_begin_overrides_env_comment() {
        let mut cli = cli(Some(CommentType::Html), Some(("<!---", "--->")));
        cli.comment_from_env = true;

        let config = cli.into_config().unwrap();
        assert_eq!(config.syntax, CommentSyntax::new("<!---", "--->"));
    }

    #[test]
    fn test_env_comment_applies_without_begin() {
        let mut cli = cli(Some(CommentType::Html), None);
        cli.comment_from_env = true;

        let config = cli.into_config().unwrap();
        assert_eq!(config.syntax, CommentType::Html.syntax());
    }

    #[test]
    fn test_comment_flag_still_wins_over_begin() {
        let config = cli(Some(CommentType::Html), Some(("<!---", "--->")))
            .into_config()
            .unwrap();
        assert_eq!(config.syntax, CommentType::Html.syntax());
    }

    #[test]
    fn test_into_config() {
        let config = cli(None, None).into_config().unwrap();

        assert_eq!(config.token, "API DOC");
        assert_eq!(config.target, NormalizedPath::new("README.md"));
        assert_eq!(config.source, ContentSource::from_path(Some("api.md")));
        assert_eq!(config.syntax, CommentType::Markdown.syntax());
        assert!(config.dry_run);
    }
}
