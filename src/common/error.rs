//! Error types shared by the gameplay core and the config loader.

use std::path::PathBuf;

use thiserror::Error;

/// Which of the two stage lists an error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListKind {
    Fighters,
    Bullets,
}

impl std::fmt::Display for ListKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fighters => f.write_str("fighters"),
            Self::Bullets => f.write_str("bullets"),
        }
    }
}

/// Fatal gameplay errors.
///
/// None of these are recovered from: systems propagate them with `?` and the
/// Bevy error handler reports them.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum StageError {
    /// A list reached its node limit; the new actor could not be allocated.
    #[error("{list} list is full ({capacity} actors)")]
    ListFull { list: ListKind, capacity: usize },

    /// The player handle no longer resolves to a live actor.
    #[error("player actor is missing from the fighter list")]
    MissingPlayer,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
}
