use clap::Parser;
use colored::*;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use stencil::api::ScaffoldApi;
use stencil::commands::{CmdMessage, CmdResult, MessageLevel};
use stencil::config::StencilConfig;
use stencil::error::Result;
use stencil::model::{ProjectName, ScaffoldRequest};
use stencil::source::{DirSource, GitSource};

mod args;
use args::Cli;

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let name = ProjectName::new(&cli.name)?;
    let target_dir = cli.target_dir.unwrap_or_else(|| PathBuf::from("."));

    let create_target = if target_dir.exists() {
        false
    } else if cli.yes {
        true
    } else {
        confirm_create(&target_dir)?
    };

    let request = ScaffoldRequest {
        name,
        target_dir,
        minimal: cli.minimal,
        with_subagent: cli.with_subagent,
        create_target,
    };

    let config = StencilConfig::load_default();
    let template = cli.template.unwrap_or_else(|| config.template_repo.clone());

    let result = if Path::new(&template).is_dir() {
        ScaffoldApi::new(DirSource::new(&template)).scaffold(&request)?
    } else {
        let mut source = GitSource::new(&template);
        if let Some(reference) = &config.template_ref {
            source = source.with_reference(reference);
        }
        ScaffoldApi::new(source).scaffold(&request)?
    };

    print_result(&result, &request);
    Ok(())
}

fn confirm_create(dir: &Path) -> Result<bool> {
    print!(
        "Target directory {} does not exist. Create it? [y/N] ",
        dir.display()
    );
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(matches!(line.trim(), "y" | "Y" | "yes"))
}

fn print_result(result: &CmdResult, request: &ScaffoldRequest) {
    print_messages(&result.messages);
    println!();
    println!("  cd {}", request.project_dir().display());
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}
