//! Marker matching and substitution for replace-between.
//!
//! A target document carries a pair of comment markers around a region:
//!
//! ```text
//! <!--- API DOC BEGIN --->
//! anything here is replaced
//! <!--- API DOC END --->
//! ```
//!
//! [`MarkerPatterns`] builds the matcher for one token and comment syntax,
//! [`substitute`] swaps the interior of the first matching region, and
//! [`replace_between`] wires both to the filesystem: it reads the source and
//! target concurrently, substitutes, and writes the target back atomically.
//!
//! # Example
//! ```
//! use between_core::{CommentType, MarkerPatterns, SyntaxMode, substitute};
//!
//! let target = "# Title\n<!--- API DOC BEGIN --->\nold\n<!--- API DOC END --->\n";
//! let patterns =
//!     MarkerPatterns::build(&CommentType::Markdown.syntax(), "API DOC", SyntaxMode::Literal)
//!         .unwrap();
//!
//! let updated = substitute("new\n", target, &patterns).unwrap();
//! assert_eq!(
//!     updated,
//!     "# Title\n<!--- API DOC BEGIN --->\nnew\n<!--- API DOC END --->\n"
//! );
//! ```

pub mod comment;
pub mod diff;
pub mod error;
pub mod pattern;
pub mod replace;
pub mod source;
pub mod substitute;

pub use comment::{CommentSyntax, CommentType};
pub use error::{Error, Result};
pub use pattern::{MarkerPatterns, SyntaxMode};
pub use replace::{Outcome, ReplaceConfig, replace_between};
pub use source::ContentSource;
pub use substitute::{MarkerRegion, find_region, substitute};
