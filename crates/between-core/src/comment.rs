//! Comment syntax table for marker lines

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// The literal strings that open and close a comment, e.g. `<!---` and `--->`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CommentSyntax {
    pub begin: String,
    pub end: String,
}

impl CommentSyntax {
    pub fn new(begin: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            begin: begin.into(),
            end: end.into(),
        }
    }
}

/// Predefined comment types, keyed by a short identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommentType {
    /// `md`: `<!---` ... `--->`
    Markdown,
    /// `js`: `/*` ... `*/`
    JavaScript,
    /// `html`: `<!--` ... `-->`
    Html,
}

impl CommentType {
    pub const ALL: [CommentType; 3] = [Self::Markdown, Self::JavaScript, Self::Html];

    /// Identifiers accepted by [`FromStr`], in table order.
    pub const NAMES: [&'static str; 3] = ["md", "js", "html"];

    /// Short identifier, also the file extension it is inferred from.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Markdown => "md",
            Self::JavaScript => "js",
            Self::Html => "html",
        }
    }

    pub fn syntax(&self) -> CommentSyntax {
        match self {
            Self::Markdown => CommentSyntax::new("<!---", "--->"),
            Self::JavaScript => CommentSyntax::new("/*", "*/"),
            Self::Html => CommentSyntax::new("<!--", "-->"),
        }
    }

    /// Look up a comment type by file extension (without the dot).
    pub fn from_extension(ext: &str) -> Option<Self> {
        let ext = ext.to_lowercase();
        Self::ALL.into_iter().find(|kind| kind.name() == ext)
    }
}

impl FromStr for CommentType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| Error::UnknownCommentType(s.to_string()))
    }
}

impl fmt::Display for CommentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
