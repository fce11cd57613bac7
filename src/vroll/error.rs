use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RollError {
    #[error("Root directory not found: {0}")]
    RootNotFound(PathBuf),

    #[error("Version {version} is ambiguous: both {first:?} and {second:?} name it")]
    DuplicateVersion {
        version: u64,
        first: String,
        second: String,
    },

    #[error("Refusing to roll: {0} already exists")]
    DestinationExists(PathBuf),

    #[error("Copy source is missing: {0}")]
    SourceMissing(PathBuf),

    #[error("Only one version ({0}) exists; refusing to retire it")]
    SingleVersion(String),

    #[error("Failed to archive {path}: {source}")]
    Archive {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to remove {path}: {source}")]
    Remove {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to copy {from} to {to}: {source}")]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("{source} (already done: {})", completed.join("; "))]
    Interrupted {
        completed: Vec<String>,
        #[source]
        source: Box<RollError>,
    },

    #[error("Version {0} has no successor")]
    NoSuccessor(u64),

    #[error("archive_dir must be a plain directory name, got {0:?}")]
    InvalidArchiveDir(String),
}

pub type Result<T> = std::result::Result<T, RollError>;
