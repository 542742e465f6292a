//! The substitution engine: swap the interior of the first marker region.

use std::ops::Range;

use crate::error::{Error, Result};
use crate::pattern::{BEGIN_GROUP, END_GROUP, MarkerPatterns};

/// Byte ranges of the first marker region found in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerRegion {
    /// BEGIN marker line including its trailing line break(s).
    pub begin: Range<usize>,
    /// Text strictly between the markers.
    pub interior: Range<usize>,
    /// END marker text.
    pub end: Range<usize>,
}

impl MarkerRegion {
    /// The whole region, markers included.
    pub fn span(&self) -> Range<usize> {
        self.begin.start..self.end.end
    }
}

/// Locate the first region delimited by `patterns` in `target`.
pub fn find_region(target: &str, patterns: &MarkerPatterns) -> Option<MarkerRegion> {
    let caps = patterns.regex().captures(target)?;
    let begin = caps.name(BEGIN_GROUP)?.range();
    let end = caps.name(END_GROUP)?.range();

    Some(MarkerRegion {
        interior: begin.end..end.start,
        begin,
        end,
    })
}

/// Replace the interior of the first marker region in `target` with `source`.
///
/// The markers and everything outside the region are kept byte for byte, and
/// `source` is inserted verbatim.
///
/// # Errors
/// - [`Error::EmptySource`] if `source` is empty; checked before matching.
/// - [`Error::MissingTokens`] if `target` has no BEGIN/END pair.
pub fn substitute(source: &str, target: &str, patterns: &MarkerPatterns) -> Result<String> {
    if source.is_empty() {
        return Err(Error::EmptySource);
    }

    let region = find_region(target, patterns).ok_or_else(|| Error::MissingTokens {
        begin: patterns.rendered_begin().to_string(),
        end: patterns.rendered_end().to_string(),
    })?;

    tracing::debug!(
        start = region.begin.start,
        end = region.end.end,
        old_len = region.interior.len(),
        new_len = source.len(),
        "replacing marker interior"
    );

    let mut output =
        String::with_capacity(target.len() - region.interior.len() + source.len());
    output.push_str(&target[..region.interior.start]);
    output.push_str(source);
    output.push_str(&target[region.interior.end..]);

    Ok(output)
}
