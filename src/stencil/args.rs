use clap::Parser;
use std::path::PathBuf;

const LONG_VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")");

#[derive(Parser, Debug)]
#[command(name = "stencil")]
#[command(version, long_version = LONG_VERSION)]
#[command(about = "Scaffold a new agent-service project from a template", long_about = None)]
pub struct Cli {
    /// Project name (lowercase letters, digits and underscores; must start
    /// with a letter)
    pub name: String,

    /// Directory to create the project in (defaults to the current directory)
    pub target_dir: Option<PathBuf>,

    /// Skip container/build-manifest files (Dockerfile, pyproject.toml, ...)
    #[arg(short, long)]
    pub minimal: bool,

    /// Include the sub-agent example in the generated project
    #[arg(short = 's', long)]
    pub with_subagent: bool,

    /// Create a missing target directory without prompting
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Template source: a git URL or a local directory (overrides config)
    #[arg(long, value_name = "URL_OR_DIR")]
    pub template: Option<String>,
}
