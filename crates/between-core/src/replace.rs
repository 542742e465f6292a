//! The single replace operation: read, substitute, write back.

use between_fs::NormalizedPath;

use crate::comment::CommentSyntax;
use crate::diff::unified_diff;
use crate::error::Result;
use crate::pattern::{MarkerPatterns, SyntaxMode};
use crate::source::{ContentSource, read_file};
use crate::substitute::substitute;

/// Fully resolved settings for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplaceConfig {
    /// Marker label; ` BEGIN` and ` END` are appended.
    pub token: String,
    /// Document that is read and rewritten.
    pub target: NormalizedPath,
    pub source: ContentSource,
    pub syntax: CommentSyntax,
    pub mode: SyntaxMode,
    /// Compute the result without writing it.
    pub dry_run: bool,
}

impl ReplaceConfig {
    pub fn new(
        token: impl Into<String>,
        target: impl Into<NormalizedPath>,
        source: ContentSource,
        syntax: CommentSyntax,
    ) -> Self {
        Self {
            token: token.into(),
            target: target.into(),
            source,
            syntax,
            mode: SyntaxMode::default(),
            dry_run: false,
        }
    }
}

/// What a successful invocation did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub target: NormalizedPath,
    /// The new content differs from the old.
    pub changed: bool,
    /// Unified diff of the rewrite, only for dry runs.
    pub diff: Option<String>,
}

/// Replace the marker region of `config.target` with the source content.
///
/// Source and target are read concurrently. The target is written only after
/// the substitution succeeded, so any error leaves it untouched.
pub async fn replace_between(config: &ReplaceConfig) -> Result<Outcome> {
    let patterns = MarkerPatterns::build(&config.syntax, &config.token, config.mode)?;

    let (source, current) =
        tokio::try_join!(config.source.read(), read_file(&config.target))?;
    tracing::debug!(source = %config.source, target = %config.target, "read inputs");

    let updated = substitute(&source, &current, &patterns)?;
    let changed = updated != current;

    if config.dry_run {
        return Ok(Outcome {
            target: config.target.clone(),
            changed,
            diff: Some(unified_diff(config.target.as_str(), &current, &updated)),
        });
    }

    if changed {
        let target = config.target.clone();
        tokio::task::spawn_blocking(move || between_fs::write_text(&target, &updated)).await??;
        tracing::info!(target = %config.target, token = %config.token, "replaced marker region");
    } else {
        tracing::debug!(target = %config.target, "content unchanged, skipping write");
    }

    Ok(Outcome {
        target: config.target.clone(),
        changed,
        diff: None,
    })
}
