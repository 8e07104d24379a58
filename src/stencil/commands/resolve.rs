use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ScaffoldError};
use crate::model::ScaffoldRequest;
use std::fs;
use std::path::Path;

/// Resolve the target directory before anything touches the network or the
/// output tree.
///
/// Fails fast on a missing-and-unconfirmed target, an existing
/// `target_dir/name` (the one idempotence guard this tool has), or an
/// unwritable target. Two concurrent runs with the same name race between
/// the existence check and the create; that TOCTOU gap is accepted for a
/// single-user local tool.
pub fn run(req: &ScaffoldRequest) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if !req.target_dir.exists() {
        if !req.create_target {
            return Err(ScaffoldError::Validation(format!(
                "target directory {} does not exist (pass --yes to create it)",
                req.target_dir.display()
            )));
        }
        fs::create_dir_all(&req.target_dir)?;
        result.add_message(CmdMessage::info(format!(
            "Created target directory {}",
            req.target_dir.display()
        )));
    }

    let project_dir = req.project_dir();
    if project_dir.exists() {
        return Err(ScaffoldError::Conflict(project_dir));
    }

    check_writable(&req.target_dir)?;

    Ok(result)
}

fn check_writable(dir: &Path) -> Result<()> {
    match tempfile::NamedTempFile::new_in(dir) {
        Ok(_probe) => Ok(()),
        Err(_) => Err(ScaffoldError::Permission(dir.to_path_buf())),
    }
}
