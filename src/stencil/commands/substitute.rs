use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::ProjectName;
use crate::templates::{self, PLACEHOLDER, PLACEHOLDER_HYPHENATED};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Rewrite the placeholder identifier across the generated tree.
///
/// This is a global literal replace per file, not a parser-aware rename: a
/// token that merely contains the placeholder as a substring gets rewritten
/// too. Files outside the allow-list and non-UTF-8 files are left untouched.
/// A file that cannot be rewritten is reported as a warning and skipped; the
/// rest of the run continues.
pub fn run(root: &Path, name: &ProjectName) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let hyphenated = name.hyphenated();

    for entry in WalkDir::new(root) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                result.add_message(CmdMessage::warning(format!(
                    "skipping unreadable entry: {}",
                    e
                )));
                continue;
            }
        };
        if !entry.file_type().is_file() || !is_substitutable(entry.path()) {
            continue;
        }
        match rewrite_file(entry.path(), name.as_str(), &hyphenated) {
            Ok(true) => result.rewritten.push(entry.path().to_path_buf()),
            Ok(false) => {}
            Err(e) => result.add_message(CmdMessage::warning(format!(
                "could not rewrite {}: {}",
                entry.path().display(),
                e
            ))),
        }
    }

    Ok(result)
}

fn is_substitutable(path: &Path) -> bool {
    if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
        if templates::TEXT_FILENAMES.contains(&name) {
            return true;
        }
    }
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| templates::TEXT_EXTENSIONS.contains(ext))
}

/// Returns `Ok(true)` if the file was rewritten, `Ok(false)` if it needed no
/// change or is not valid UTF-8.
fn rewrite_file(path: &Path, name: &str, hyphenated: &str) -> std::io::Result<bool> {
    let bytes = fs::read(path)?;
    let Ok(content) = String::from_utf8(bytes) else {
        return Ok(false);
    };
    if !content.contains(PLACEHOLDER) && !content.contains(PLACEHOLDER_HYPHENATED) {
        return Ok(false);
    }
    let rewritten = content
        .replace(PLACEHOLDER_HYPHENATED, hyphenated)
        .replace(PLACEHOLDER, name);
    fs::write(path, rewritten)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name() -> ProjectName {
        ProjectName::new("rag_agent").unwrap()
    }

    #[test]
    fn replaces_both_placeholder_forms() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("config.py");
        fs::write(&file, "AGENT_NAME = \"adk_agent\"\nIMAGE = \"adk-agent\"\n").unwrap();

        let result = run(dir.path(), &name()).unwrap();
        assert_eq!(result.rewritten, vec![file.clone()]);
        assert_eq!(
            fs::read_to_string(&file).unwrap(),
            "AGENT_NAME = \"rag_agent\"\nIMAGE = \"rag-agent\"\n"
        );
    }

    #[test]
    fn rewrites_exact_filenames_without_extension() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("Dockerfile");
        fs::write(&file, "COPY adk_agent /app/adk_agent\n").unwrap();

        run(dir.path(), &name()).unwrap();
        assert_eq!(
            fs::read_to_string(&file).unwrap(),
            "COPY rag_agent /app/rag_agent\n"
        );
    }

    #[test]
    fn leaves_files_outside_the_allow_list_alone() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("notes.rst");
        fs::write(&file, "adk_agent notes\n").unwrap();

        let result = run(dir.path(), &name()).unwrap();
        assert!(result.rewritten.is_empty());
        assert_eq!(fs::read_to_string(&file).unwrap(), "adk_agent notes\n");
    }

    #[test]
    fn leaves_binary_files_alone() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("blob.json");
        let bytes = [b"adk_agent" as &[u8], &[0xff, 0xfe, 0x00]].concat();
        fs::write(&file, &bytes).unwrap();

        let result = run(dir.path(), &name()).unwrap();
        assert!(result.rewritten.is_empty());
        assert_eq!(fs::read(&file).unwrap(), bytes);
    }

    #[test]
    fn substring_occurrences_are_rewritten_too() {
        // Literal replace by contract: tokens containing the placeholder as a
        // substring change as well.
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("helper.py");
        fs::write(&file, "import my_adk_agent_helper\n").unwrap();

        run(dir.path(), &name()).unwrap();
        assert_eq!(
            fs::read_to_string(&file).unwrap(),
            "import my_rag_agent_helper\n"
        );
    }

    #[cfg(unix)]
    #[test]
    fn per_file_failure_warns_and_continues() {
        use std::os::unix::fs::{MetadataExt, PermissionsExt};

        let dir = tempfile::tempdir().unwrap();
        let locked = dir.path().join("locked.py");
        let open = dir.path().join("open.py");
        fs::write(&locked, "import adk_agent\n").unwrap();
        fs::write(&open, "import adk_agent\n").unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o444)).unwrap();

        let result = run(dir.path(), &name()).unwrap();

        // the sibling is still rewritten; the failure does not abort the run
        assert_eq!(fs::read_to_string(&open).unwrap(), "import rag_agent\n");
        // mode bits don't apply when the suite runs as root
        if fs::metadata(&open).unwrap().uid() != 0 {
            assert_eq!(fs::read_to_string(&locked).unwrap(), "import adk_agent\n");
            assert!(
                result.messages.iter().any(|m| m.content.contains("could not rewrite")),
                "expected a warning for the read-only file"
            );
        }

        fs::set_permissions(&locked, fs::Permissions::from_mode(0o644)).unwrap();
    }

    #[test]
    fn untouched_files_are_not_reported_as_rewritten() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("clean.py"), "x = 1\n").unwrap();

        let result = run(dir.path(), &name()).unwrap();
        assert!(result.rewritten.is_empty());
        assert!(result.messages.is_empty());
    }
}
