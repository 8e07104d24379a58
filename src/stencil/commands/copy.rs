use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ScaffoldError};
use crate::model::ScaffoldRequest;
use crate::templates;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Copy the fetched template into the output directory.
///
/// The inner package subtree lands at `target/name/name/`; root support files
/// follow the [`templates::ROOT_FILES`] manifest. When the sub-agent example
/// is not requested, its subtree is pruned during the walk rather than copied
/// and deleted. Failures at this stage are fatal — a half-copied project is
/// not a useful one.
pub fn run(req: &ScaffoldRequest, template_root: &Path) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let src_pkg = template_root.join(templates::TEMPLATE_PACKAGE_DIR);
    if !src_pkg.is_dir() {
        return Err(ScaffoldError::Copy(format!(
            "template has no '{}' package directory",
            templates::TEMPLATE_PACKAGE_DIR
        )));
    }

    let project_dir = req.project_dir();
    fs::create_dir_all(&project_dir)?;
    result.created.push(project_dir.clone());

    let prune = (!req.with_subagent).then(|| src_pkg.join(templates::SUBAGENT_SUBTREE));
    copy_subtree(&src_pkg, &req.package_dir(), prune.as_deref(), &mut result)?;

    for rule in templates::ROOT_FILES {
        if !(rule.included)(req) {
            continue;
        }
        let src = template_root.join(rule.path);
        if !src.is_file() {
            result.add_message(CmdMessage::warning(format!(
                "template is missing {}, skipping",
                rule.path
            )));
            continue;
        }
        let dest = project_dir.join(rule.path);
        fs::copy(&src, &dest)?;
        result.created.push(dest);
    }

    Ok(result)
}

fn copy_subtree(
    src: &Path,
    dest: &Path,
    prune: Option<&Path>,
    result: &mut CmdResult,
) -> Result<()> {
    let walker = WalkDir::new(src)
        .into_iter()
        .filter_entry(|entry| prune != Some(entry.path()));

    for entry in walker {
        let entry = entry.map_err(|e| ScaffoldError::Copy(e.to_string()))?;
        let rel = entry
            .path()
            .strip_prefix(src)
            .map_err(|e| ScaffoldError::Copy(e.to_string()))?;
        let target = dest.join(rel);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            fs::copy(entry.path(), &target)?;
            result.created.push(target);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProjectName;
    use crate::testutil;
    use std::path::PathBuf;

    fn scaffold(minimal: bool, with_subagent: bool) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let template = dir.path().join("template");
        testutil::write_template(&template);

        let req = ScaffoldRequest {
            name: ProjectName::new("rag_agent").unwrap(),
            target_dir: dir.path().join("out"),
            minimal,
            with_subagent,
            create_target: false,
        };
        fs::create_dir_all(&req.target_dir).unwrap();
        run(&req, &template).unwrap();
        let project_dir = req.project_dir();
        (dir, project_dir)
    }

    #[test]
    fn default_flags_copy_root_files_without_subagent() {
        let (_dir, project) = scaffold(false, false);
        for file in ["pyproject.toml", "Dockerfile", ".dockerignore", "__init__.py"] {
            assert!(project.join(file).is_file(), "missing {}", file);
        }
        assert!(project.join("rag_agent/main.py").is_file());
        assert!(!project.join("rag_agent/agent/sub_agents").exists());
    }

    #[test]
    fn with_subagent_keeps_the_example_subtree() {
        let (_dir, project) = scaffold(false, true);
        assert!(project.join("rag_agent/agent/sub_agents/db_agent/agent.py").is_file());
    }

    #[test]
    fn minimal_drops_all_root_support_files() {
        let (_dir, project) = scaffold(true, false);
        let entries: Vec<String> = fs::read_dir(&project)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(entries, vec!["rag_agent".to_string()]);
    }

    #[test]
    fn minimal_and_subagent_are_independent() {
        let (_dir, project) = scaffold(true, true);
        assert!(!project.join("Dockerfile").exists());
        assert!(project.join("rag_agent/agent/sub_agents/db_agent/agent.py").is_file());
    }

    #[test]
    fn template_without_package_dir_is_a_copy_error() {
        let dir = tempfile::tempdir().unwrap();
        let template = dir.path().join("template");
        fs::create_dir_all(&template).unwrap();

        let req = ScaffoldRequest {
            name: ProjectName::new("rag_agent").unwrap(),
            target_dir: dir.path().join("out"),
            minimal: false,
            with_subagent: false,
            create_target: false,
        };
        fs::create_dir_all(&req.target_dir).unwrap();
        let err = run(&req, &template).unwrap_err();
        assert!(matches!(err, ScaffoldError::Copy(_)));
    }
}
