//! Error types for the portfolio library

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building the portfolio from its inputs
#[derive(Error, Debug)]
pub enum Error {
    /// A typing animation needs at least one phrase to cycle through
    #[error("word list must contain at least one phrase")]
    EmptyWordList,

    /// Profile files must be YAML or JSON
    #[error("unsupported profile format: {}", .0.display())]
    UnsupportedProfileFormat(PathBuf),
}

/// Result type alias for library operations
pub type Result<T> = std::result::Result<T, Error>;
