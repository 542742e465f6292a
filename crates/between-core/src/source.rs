//! Where replacement content comes from.

use std::fmt;
use std::io::{IsTerminal, Read};

use between_fs::NormalizedPath;

use crate::error::{Error, Result};

/// Replacement content provider: a file, or standard input read to the end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    Path(NormalizedPath),
    Stdin,
}

impl ContentSource {
    /// A file source when a path is given, standard input otherwise.
    pub fn from_path(path: Option<impl Into<NormalizedPath>>) -> Self {
        match path {
            Some(path) => Self::Path(path.into()),
            None => Self::Stdin,
        }
    }

    /// Read the whole content.
    ///
    /// Reads run on the blocking pool so a source and a target can be
    /// fetched at the same time. An interactive terminal on stdin reads as
    /// empty instead of waiting for input.
    pub async fn read(&self) -> Result<String> {
        match self {
            Self::Path(path) => read_file(path).await,
            Self::Stdin => tokio::task::spawn_blocking(read_stdin)
                .await?
                .map_err(Error::Stdin),
        }
    }
}

impl fmt::Display for ContentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path(path) => write!(f, "{path}"),
            Self::Stdin => f.write_str("<stdin>"),
        }
    }
}

pub(crate) async fn read_file(path: &NormalizedPath) -> Result<String> {
    let path = path.clone();
    let text = tokio::task::spawn_blocking(move || between_fs::read_text(&path)).await??;
    Ok(text)
}

fn read_stdin() -> std::io::Result<String> {
    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        return Ok(String::new());
    }

    let mut buf = String::new();
    stdin.lock().read_to_string(&mut buf)?;
    Ok(buf)
}
