//! Filesystem helpers for replace-between
//!
//! Provides normalized path handling and the safe read/write pair used to
//! rewrite a target document in place.

pub mod error;
pub mod io;
pub mod path;

pub use error::{Error, Result};
pub use io::{read_text, write_atomic, write_text};
pub use path::NormalizedPath;
