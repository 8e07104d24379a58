//! Shared test fixture: a miniature copy of the upstream template tree,
//! placeholder identifiers included.

use std::fs;
use std::path::Path;

pub fn write_template(root: &Path) {
    let pkg = root.join("adk_agent");
    fs::create_dir_all(pkg.join("agent/sub_agents/db_agent")).unwrap();

    fs::write(
        root.join("pyproject.toml"),
        "[project]\nname = \"adk-agent\"\nversion = \"0.1.0\"\n",
    )
    .unwrap();
    fs::write(
        root.join("Dockerfile"),
        "FROM python:3.12-slim\nCOPY adk_agent /app/adk_agent\nCMD [\"uvicorn\", \"adk_agent.main:app\"]\n",
    )
    .unwrap();
    fs::write(root.join(".dockerignore"), ".venv\n__pycache__\n").unwrap();
    fs::write(root.join("__init__.py"), "").unwrap();

    fs::write(
        pkg.join("__init__.py"),
        "from adk_agent.agent import root_agent\n",
    )
    .unwrap();
    fs::write(pkg.join("main.py"), "app = make_app(\"adk_agent\")\n").unwrap();
    fs::write(pkg.join("config.py"), "AGENT_NAME = \"adk_agent\"\n").unwrap();
    fs::write(
        pkg.join(".env.template"),
        "AGENT_NAME=adk_agent\nIMAGE=adk-agent\n",
    )
    .unwrap();
    fs::write(pkg.join("agent/agent.py"), "import adk_agent.config\n").unwrap();
    fs::write(pkg.join("agent/sub_agents/__init__.py"), "").unwrap();
    fs::write(
        pkg.join("agent/sub_agents/db_agent/agent.py"),
        "from adk_agent.agent import root_agent\n",
    )
    .unwrap();

    // outside the substitution allow-list
    fs::write(pkg.join("notes.rst"), "adk_agent notes\n").unwrap();
    // binary payload containing the placeholder bytes
    let blob = [b"adk_agent" as &[u8], &[0xff, 0xfe, 0x00]].concat();
    fs::write(pkg.join("logo.png"), blob).unwrap();
}
