//! # Template Constants
//!
//! Everything stencil knows about the upstream template lives here: the
//! placeholder identifiers the substitution pass rewrites, the declarative
//! copy manifest for root-level support files, the allow-list of text files
//! eligible for rewriting, and the README section blocks.
//!
//! README sections use `{name}` and `{name_hyphen}` tokens, filled in by
//! [`crate::commands::readme`].

use crate::model::ScaffoldRequest;
use once_cell::sync::Lazy;
use std::collections::HashSet;

/// The identifier used throughout the upstream template.
pub const PLACEHOLDER: &str = "adk_agent";

/// Hyphenated variant of the placeholder (image names, package metadata).
pub const PLACEHOLDER_HYPHENATED: &str = "adk-agent";

/// Directory inside the template that holds the application package.
pub const TEMPLATE_PACKAGE_DIR: &str = "adk_agent";

/// Subtree (relative to the package dir) holding the optional sub-agent
/// example.
pub const SUBAGENT_SUBTREE: &str = "agent/sub_agents";

/// Template repository cloned when neither `--template` nor a config file
/// says otherwise.
pub const DEFAULT_TEMPLATE_REPO: &str = "https://github.com/adebert/adk-agent-template";

/// Extensions whose files the substitution pass rewrites.
pub static TEXT_EXTENSIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    ["py", "json", "toml", "md", "txt", "cfg", "yaml", "yml", "template"]
        .into_iter()
        .collect()
});

/// Files rewritten regardless of extension.
pub const TEXT_FILENAMES: &[&str] = &["Dockerfile", ".env.template", ".dockerignore"];

/// A root-level support file and the condition under which it is copied.
///
/// The manifest is evaluated once per run; there is no post-copy deletion.
pub struct RootFile {
    pub path: &'static str,
    pub included: fn(&ScaffoldRequest) -> bool,
}

fn not_minimal(req: &ScaffoldRequest) -> bool {
    !req.minimal
}

/// Root support files. Minimal mode drops all of them, leaving exactly the
/// generated README and the inner package.
pub static ROOT_FILES: &[RootFile] = &[
    RootFile { path: "pyproject.toml", included: not_minimal },
    RootFile { path: "Dockerfile", included: not_minimal },
    RootFile { path: ".dockerignore", included: not_minimal },
    RootFile { path: "__init__.py", included: not_minimal },
];

pub const README_HEADER: &str = "# {name}

An agent service scaffolded from the upstream service template.

The `{name}/` package exposes a FastAPI server with a `/health` endpoint and
authenticated agent endpoints. Configuration is read from environment
variables; see `{name}/.env.template` for the full list.

";

pub const README_QUICKSTART: &str = "## Quickstart

```sh
cd {name}
uv sync
uv run uvicorn {name}.main:app --reload
```

The server starts on `http://127.0.0.1:8000`; `GET /health` should answer
immediately.

";

pub const README_SUBAGENT: &str = "## Sub-agent example

The scaffold includes the sub-agent example under
`{name}/agent/sub_agents/`. It demonstrates a specialized secondary agent
(database lookups) wired into the root agent's toolset. Rename or remove the
`db_agent` package once you add your own sub-agents.

";

pub const README_DOCKER: &str = "## Deployment

Build and run the container image:

```sh
docker build -t {name_hyphen} .
docker run --rm -p 8000:8000 --env-file .env {name_hyphen}
```

`pyproject.toml` and `Dockerfile` live at the project root; `.dockerignore`
keeps local state out of the build context.

";

pub const README_CONFIG: &str = "## Configuration

Copy `{name}/.env.template` to `.env` and fill in the values. `AGENT_NAME`
defaults to `{name}`; the remaining variables gate optional features
(authentication, observability, web UI).
";
