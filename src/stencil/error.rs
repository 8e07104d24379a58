use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScaffoldError {
    #[error("Invalid project name: {0}")]
    Validation(String),

    #[error("Target already exists: {}", .0.display())]
    Conflict(PathBuf),

    #[error("Could not fetch template: {0}")]
    Fetch(String),

    #[error("Target directory is not writable: {}", .0.display())]
    Permission(PathBuf),

    #[error("Copy error: {0}")]
    Copy(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ScaffoldError>;
