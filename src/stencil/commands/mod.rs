//! # Pipeline Stages
//!
//! One module per scaffolding stage, in run order:
//!
//! - [`resolve`]: target-directory checks (creation, conflict, writability)
//! - [`copy`]: manifest-driven tree copy with optional pruning
//! - [`substitute`]: literal placeholder rewriting across copied text files
//! - [`readme`]: deterministic README generation
//!
//! Stages are pure with respect to the terminal: they take Rust values,
//! return `Result<CmdResult>`, and never write to stdout/stderr. Messages for
//! the user travel in the [`CmdResult`] and are printed by the CLI layer.

use std::path::PathBuf;

pub mod copy;
pub mod readme;
pub mod resolve;
pub mod substitute;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Outcome of one stage (or, merged, of a whole run).
#[derive(Debug, Default)]
pub struct CmdResult {
    /// Paths created in the output directory.
    pub created: Vec<PathBuf>,
    /// Files the substitution pass rewrote in place.
    pub rewritten: Vec<PathBuf>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    /// Fold a later stage's result into this one.
    pub fn merge(&mut self, other: CmdResult) {
        self.created.extend(other.created);
        self.rewritten.extend(other.rewritten);
        self.messages.extend(other.messages);
    }
}
