use super::{FetchedTemplate, TemplateSource};
use crate::error::{Result, ScaffoldError};
use std::process::Command;
use tempfile::TempDir;

/// Fetches the template with a shallow, read-only `git clone`.
pub struct GitSource {
    repo: String,
    reference: Option<String>,
}

impl GitSource {
    pub fn new(repo: impl Into<String>) -> Self {
        Self {
            repo: repo.into(),
            reference: None,
        }
    }

    /// Check out a specific branch or tag instead of the default branch.
    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }
}

impl TemplateSource for GitSource {
    fn fetch(&self) -> Result<FetchedTemplate> {
        let tmp = TempDir::new()?;
        let checkout = tmp.path().join("template");

        let mut cmd = Command::new("git");
        cmd.args(["clone", "--depth", "1", "--quiet"]);
        if let Some(reference) = &self.reference {
            cmd.args(["--branch", reference]);
        }
        cmd.arg(&self.repo).arg(&checkout);

        let output = cmd
            .output()
            .map_err(|e| ScaffoldError::Fetch(format!("could not run git: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ScaffoldError::Fetch(format!(
                "git clone of {} failed: {}",
                self.repo,
                stderr.trim()
            )));
        }

        Ok(FetchedTemplate::new(tmp, checkout))
    }
}
