use crate::error::{Result, ScaffoldError};
use std::fmt;
use std::path::PathBuf;

/// A validated project name.
///
/// The name doubles as the importable package identifier inside the generated
/// project, so it must match `^[a-z][a-z0-9_]*$`. Validation happens here,
/// before any filesystem mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectName(String);

impl ProjectName {
    pub fn new(name: &str) -> Result<Self> {
        let mut chars = name.chars();
        let valid_start = matches!(chars.next(), Some('a'..='z'));
        let valid_rest = chars.all(|c| matches!(c, 'a'..='z' | '0'..='9' | '_'));
        if !valid_start || !valid_rest {
            return Err(ScaffoldError::Validation(format!(
                "'{}' must start with a lowercase letter and contain only \
                 lowercase letters, digits and underscores",
                name
            )));
        }
        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Hyphenated form of the name, used wherever the template uses the
    /// hyphenated placeholder (image names, package metadata).
    pub fn hyphenated(&self) -> String {
        self.0.replace('_', "-")
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One scaffolding run, fully described.
///
/// Built by the CLI layer after argument parsing and (if needed) the
/// interactive confirmation for a missing target directory.
#[derive(Debug, Clone)]
pub struct ScaffoldRequest {
    pub name: ProjectName,
    pub target_dir: PathBuf,
    /// Skip container/build-manifest files at the project root.
    pub minimal: bool,
    /// Keep the sub-agent example subtree.
    pub with_subagent: bool,
    /// The user confirmed (prompt or `--yes`) that a missing target
    /// directory may be created.
    pub create_target: bool,
}

impl ScaffoldRequest {
    /// `target_dir/name` — the project root this run creates.
    pub fn project_dir(&self) -> PathBuf {
        self.target_dir.join(self.name.as_str())
    }

    /// `target_dir/name/name` — the inner package directory.
    pub fn package_dir(&self) -> PathBuf {
        self.project_dir().join(self.name.as_str())
    }
}
