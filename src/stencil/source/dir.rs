use super::{FetchedTemplate, TemplateSource};
use crate::error::{Result, ScaffoldError};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use walkdir::WalkDir;

/// A template already present on the local filesystem.
///
/// The directory is copied into a temporary checkout so the pipeline never
/// reads (or risks touching) the original tree.
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl TemplateSource for DirSource {
    fn fetch(&self) -> Result<FetchedTemplate> {
        if !self.root.is_dir() {
            return Err(ScaffoldError::Fetch(format!(
                "template directory {} does not exist",
                self.root.display()
            )));
        }

        let tmp = TempDir::new()?;
        let checkout = tmp.path().join("template");
        copy_tree(&self.root, &checkout)?;

        Ok(FetchedTemplate::new(tmp, checkout))
    }
}

fn copy_tree(src: &Path, dest: &Path) -> Result<()> {
    for entry in WalkDir::new(src) {
        let entry = entry.map_err(|e| ScaffoldError::Fetch(e.to_string()))?;
        let rel = entry
            .path()
            .strip_prefix(src)
            .map_err(|e| ScaffoldError::Fetch(e.to_string()))?;
        let target = dest.join(rel);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}
