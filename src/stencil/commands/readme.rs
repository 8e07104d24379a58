use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::{ProjectName, ScaffoldRequest};
use crate::templates;
use std::fs;

/// Generate the project README.
///
/// Pure function of `(name, minimal, with_subagent)`: fixed section blocks,
/// no timestamps, so repeated runs produce byte-identical output.
pub fn run(req: &ScaffoldRequest) -> Result<CmdResult> {
    let content = render(&req.name, req.minimal, req.with_subagent);
    let path = req.project_dir().join("README.md");
    fs::write(&path, content)?;

    let mut result = CmdResult::default();
    result.created.push(path);
    Ok(result)
}

pub fn render(name: &ProjectName, minimal: bool, with_subagent: bool) -> String {
    let mut out = String::new();
    out.push_str(&fill(templates::README_HEADER, name));
    out.push_str(&fill(templates::README_QUICKSTART, name));
    if with_subagent {
        out.push_str(&fill(templates::README_SUBAGENT, name));
    }
    if !minimal {
        out.push_str(&fill(templates::README_DOCKER, name));
    }
    out.push_str(&fill(templates::README_CONFIG, name));
    out
}

fn fill(section: &str, name: &ProjectName) -> String {
    section
        .replace("{name}", name.as_str())
        .replace("{name_hyphen}", &name.hyphenated())
}
