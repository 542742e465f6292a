//! Marker pattern construction.
//!
//! For token `API DOC` and syntax (`<!---`, `--->`) the region looks like:
//! ```text
//! <!--- API DOC BEGIN --->
//! interior
//! <!--- API DOC END --->
//! ```
//! The BEGIN pattern swallows the rest of its line and the line break(s)
//! after it, so those survive a substitution untouched.

use regex::Regex;

use crate::comment::CommentSyntax;
use crate::error::Result;

/// Capture group holding the BEGIN marker and its trailing line break.
pub(crate) const BEGIN_GROUP: &str = "begin";
/// Capture group holding the END marker.
pub(crate) const END_GROUP: &str = "end";

/// Shortest run of any characters, line breaks included.
const INTERIOR_PATTERN: &str = r"(?s:.*?)";

/// How the comment delimiters are turned into pattern text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SyntaxMode {
    /// Delimiters are matched literally.
    #[default]
    Literal,
    /// Delimiters are regex fragments, e.g. `/\*` or `<!-{2,3}`.
    Raw,
}

/// The BEGIN, END and interior patterns for one token, plus the compiled
/// matcher for the whole region.
#[derive(Debug, Clone)]
pub struct MarkerPatterns {
    begin: String,
    end: String,
    regex: Regex,
    rendered_begin: String,
    rendered_end: String,
}

impl MarkerPatterns {
    /// Build the marker patterns for `token` delimited by `syntax`.
    ///
    /// The token is always matched literally. Compilation can only fail for
    /// [`SyntaxMode::Raw`] delimiters that are not valid regex fragments.
    pub fn build(syntax: &CommentSyntax, token: &str, mode: SyntaxMode) -> Result<Self> {
        let (open, close) = match mode {
            SyntaxMode::Literal => (regex::escape(&syntax.begin), regex::escape(&syntax.end)),
            SyntaxMode::Raw => {
                // Each fragment must compile alone; unbalanced groups could
                // otherwise pair up across the combined pattern.
                Regex::new(&syntax.begin)?;
                Regex::new(&syntax.end)?;
                (format!("(?:{})", syntax.begin), format!("(?:{})", syntax.end))
            }
        };
        let literal = regex::escape(token);

        let begin = format!(r"(?P<{BEGIN_GROUP}>{open}\s*?{literal} BEGIN\s*?{close}.*?[\r\n]+)");
        let end = format!(r"(?P<{END_GROUP}>{open}\s*?{literal} END\s*?{close})");
        let regex = Regex::new(&format!("(?m){begin}{INTERIOR_PATTERN}{end}"))?;

        tracing::debug!(pattern = %regex.as_str(), "built marker pattern");

        Ok(Self {
            begin,
            end,
            regex,
            rendered_begin: render(syntax, token, "BEGIN"),
            rendered_end: render(syntax, token, "END"),
        })
    }

    /// Pattern source for the BEGIN marker line.
    pub fn begin_pattern(&self) -> &str {
        &self.begin
    }

    /// Pattern source for the END marker.
    pub fn end_pattern(&self) -> &str {
        &self.end
    }

    /// Pattern source for the replaceable interior.
    pub fn interior_pattern(&self) -> &'static str {
        INTERIOR_PATTERN
    }

    /// The combined `(BEGIN)(interior)(END)` matcher.
    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    /// The BEGIN marker as it would be written in a document.
    pub fn rendered_begin(&self) -> &str {
        &self.rendered_begin
    }

    /// The END marker as it would be written in a document.
    pub fn rendered_end(&self) -> &str {
        &self.rendered_end
    }
}

fn render(syntax: &CommentSyntax, token: &str, word: &str) -> String {
    format!("{} {} {} {}", syntax.begin, token, word, syntax.end)
}
