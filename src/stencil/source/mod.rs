//! # Template Sources
//!
//! This module defines the template-acquisition abstraction. The
//! [`TemplateSource`] trait lets the pipeline work against different origins:
//!
//! - [`git::GitSource`]: production source, shallow `git clone` of the
//!   template repository
//! - [`dir::DirSource`]: a local directory, for offline use and tests
//!
//! Both materialize the template into a [`FetchedTemplate`]: an ephemeral,
//! exclusively-owned checkout backed by a [`tempfile::TempDir`]. Dropping the
//! value removes the checkout, which is how the cleanup invariant holds on
//! every exit path — success, error, or unwind. The upstream template is
//! never mutated.

use crate::error::Result;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub mod dir;
pub mod git;

pub use dir::DirSource;
pub use git::GitSource;

/// Abstract interface for obtaining the template tree.
pub trait TemplateSource {
    /// Materialize the template into a fresh temporary checkout.
    fn fetch(&self) -> Result<FetchedTemplate>;
}

/// An ephemeral template checkout. Owns its backing temporary directory,
/// which is removed when this value is dropped.
#[derive(Debug)]
pub struct FetchedTemplate {
    root: PathBuf,
    _tmp: TempDir,
}

impl FetchedTemplate {
    pub(crate) fn new(tmp: TempDir, root: PathBuf) -> Self {
        Self { root, _tmp: tmp }
    }

    /// Root of the checked-out template tree.
    pub fn root(&self) -> &Path {
        &self.root
    }
}
