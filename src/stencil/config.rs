use crate::error::Result;
use crate::templates;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for stencil, stored as `config.json` in the platform
/// config directory (e.g. `~/.config/stencil/` on Linux).
///
/// Every field has a default, so a missing or partial file is fine.
/// `--template` on the command line overrides the configured repository.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StencilConfig {
    /// Git URL (or local path) of the template repository.
    #[serde(default = "default_template_repo")]
    pub template_repo: String,

    /// Branch or tag to check out; the default branch when unset.
    #[serde(default)]
    pub template_ref: Option<String>,
}

fn default_template_repo() -> String {
    templates::DEFAULT_TEMPLATE_REPO.to_string()
}

impl Default for StencilConfig {
    fn default() -> Self {
        Self {
            template_repo: default_template_repo(),
            template_ref: None,
        }
    }
}

impl StencilConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: StencilConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Load from the user's config directory, falling back to defaults when
    /// the directory cannot be determined or the file is unreadable.
    pub fn load_default() -> Self {
        ProjectDirs::from("com", "stencil", "stencil")
            .and_then(|dirs| Self::load(dirs.config_dir()).ok())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let config = StencilConfig::load(dir.path()).unwrap();
        assert_eq!(config.template_repo, templates::DEFAULT_TEMPLATE_REPO);
        assert_eq!(config.template_ref, None);
    }

    #[test]
    fn full_file_overrides_both_fields() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            r#"{"template_repo": "https://example.com/template.git", "template_ref": "v2"}"#,
        )
        .unwrap();
        let config = StencilConfig::load(dir.path()).unwrap();
        assert_eq!(config.template_repo, "https://example.com/template.git");
        assert_eq!(config.template_ref.as_deref(), Some("v2"));
    }

    #[test]
    fn partial_file_gets_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            r#"{"template_ref": "main"}"#,
        )
        .unwrap();
        let config = StencilConfig::load(dir.path()).unwrap();
        assert_eq!(config.template_repo, templates::DEFAULT_TEMPLATE_REPO);
        assert_eq!(config.template_ref.as_deref(), Some("main"));
    }
}
